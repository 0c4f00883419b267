use std::io::Write;
use std::path::Path;
use color_eyre::eyre;
use serde::Serialize;
use crate::provision::Report;

#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
	name: &'a str,
	client_id: &'a str,
	client_secret: Option<&'a str>,
}

pub fn write<W: Write>(writer: W, report: &Report) -> eyre::Result<()> {
	let mut writer = csv::WriterBuilder::new().from_writer(writer);

	for client in report.created() {
		writer.serialize(ExportRecord {
			name: &client.name,
			client_id: &client.client_id,
			client_secret: client.client_secret.as_deref(),
		})?;
	}

	writer.flush()?;

	Ok(())
}

pub fn to_path(path: &Path, report: &Report) -> eyre::Result<()> {
	let file = std::fs::File::create(path)?;
	write(file, report)?;
	tracing::info!(path = %path.display(), "exported created clients");

	Ok(())
}
