use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;
use color_eyre::{eyre, Section};
use thiserror::Error;
use crate::client_spec::ClientSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedClient {
	pub name: String,
	pub client_id: String,
	pub client_secret: Option<String>,
}

pub trait OAuthClientCreator {
	fn create(&mut self, spec: &ClientSpec) -> eyre::Result<CreatedClient>;
}

#[derive(Debug)]
pub enum Outcome {
	Created(CreatedClient),
	Failed { name: String, error: String },
	Skipped { name: String },
}

impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Outcome::Created(client) => write!(f, "created {} ({})", client.name, client.client_id),
			Outcome::Failed { name, error } => write!(f, "failed {name}: {error}"),
			Outcome::Skipped { name } => write!(f, "skipped {name}"),
		}
	}
}

#[derive(Debug, Default)]
pub struct Report {
	pub outcomes: Vec<Outcome>,
}

impl Report {
	pub fn created(&self) -> impl Iterator<Item = &CreatedClient> {
		self.outcomes.iter()
			.filter_map(|outcome| match outcome {
				Outcome::Created(client) => Some(client),
				_ => None,
			})
	}

	pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
		let mut created = self.created().peekable();

		if created.peek().is_none() {
			return writeln!(out, "\nNo clients were created. Use Google Cloud Console instead.");
		}

		writeln!(out, "\nSuccessfully created OAuth clients:")?;
		for client in created {
			writeln!(out, "   - {}: {}", client.name, client.client_id)?;
		}

		Ok(())
	}
}

#[derive(Debug, Error)]
pub enum RunError {
	#[error("unable to authenticate against the Google Cloud API")]
	Authentication(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
	#[error("unable to write progress output")]
	Output(#[from] io::Error),
}

/// Creates every ready client in order. A failed creation is recorded and the batch
/// continues; only a failed `authenticate` ends the run, before any request is sent.
pub fn run<C, A, W>(console_url: &str, specs: &[ClientSpec], authenticate: A, out: &mut W) -> Result<Report, RunError>
	where C: OAuthClientCreator, A: FnOnce() -> eyre::Result<C>, W: Write
{
	writeln!(out, "\nNote: this requires Google Cloud API access.")?;
	writeln!(out, "   Alternative: use the Google Cloud Console (easier)")?;
	writeln!(out, "   {console_url}\n")?;

	let mut creator = authenticate()
		.map_err(|err| RunError::Authentication(err.into()))?;

	let mut report = Report::default();

	for spec in specs {
		if !spec.is_ready() {
			writeln!(out, "Skipping {}: no SHA-1 fingerprint", spec.name)?;
			report.outcomes.push(Outcome::Skipped { name: spec.name.clone() });
			continue;
		}

		writeln!(out, "\nCreating {}...", spec.name)?;

		match creator.create(spec) {
			Ok(client) => {
				writeln!(out, "Created: {}", client.client_id)?;
				report.outcomes.push(Outcome::Created(client));
			},
			Err(err) => {
				tracing::warn!(client = %spec, error = ?err, "client creation failed");
				writeln!(out, "Failed to create {}: {err:#}", spec.name)?;
				report.outcomes.push(Outcome::Failed { name: spec.name.clone(), error: format!("{err:#}") });
			},
		}
	}

	report.write_summary(out)?;

	Ok(report)
}

/// Turns an authentication failure into the final report. The Console offer is best effort:
/// if it cannot be shown, the failure and its guidance are still returned.
pub fn authentication_guidance<F>(err: RunError, console_url: &str, offer_console: F) -> eyre::Report
	where F: FnOnce(&str) -> eyre::Result<()>
{
	if let Err(prompt_err) = offer_console(console_url) {
		tracing::warn!(error = ?prompt_err, "unable to offer the Cloud Console");
	}

	eyre::Report::new(err)
		.suggestion("run `gcloud auth application-default login`")
		.suggestion("or set GOOGLE_APPLICATION_CREDENTIALS to a service account key file")
		.with_note(|| format!("clients can be created manually at {console_url}"))
}
