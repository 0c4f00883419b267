mod cli;
mod client_spec;
mod config;
mod export;
mod fingerprint;
mod google;
mod interactions;
mod provision;

use std::io::stdout;
use clap::Parser;
use color_eyre::eyre;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing_subscriber::prelude::*;
use crate::cli::Args;
use crate::config::Config;
use crate::google::IamClient;
use crate::provision::RunError;

pub static APP_NAME: &str = "oauth-provisioner";
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
	let mut default_headers = HeaderMap::new();
	default_headers.insert("Accept", HeaderValue::from_static("application/json"));

	Client::builder()
		.default_headers(default_headers)
		.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
		.build()
		.expect("unable to build HTTP client")
});

fn main() -> eyre::Result<()> {
	color_eyre::install()?;

	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(
			std::env::var("RUST_LOG").unwrap_or_else(|_| "oauth_provisioner=warn".into()),
		))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let args = Args::parse();

	let mut config = Config::load(args.config.as_deref())?;
	if let Some(project_id) = args.project_id {
		config.project_id = project_id;
	}
	if let Some(fingerprint) = &args.sha1_fingerprint {
		config.fill_missing_fingerprints(fingerprint);
	}

	println!("Creating OAuth client IDs");
	println!("Project: {}", config.project_id);

	if !args.no_prompt {
		for spec in config.clients.iter_mut().filter(|spec| spec.needs_fingerprint()) {
			let fingerprint = interactions::FingerprintInput::new(spec).prompt()?;
			spec.set_fingerprint(fingerprint);
		}
	}

	let console_url = config.console_url();
	let result = provision::run(&console_url, &config.clients, || IamClient::authenticate(&config), &mut stdout());

	let report = match result {
		Ok(report) => report,
		Err(err @ RunError::Authentication(_)) => {
			return Err(provision::authentication_guidance(err, &console_url, |url| {
				if args.no_prompt {
					return Ok(());
				}

				interactions::OpenConsoleConfirm::new(url).prompt()
			}));
		},
		Err(err) => return Err(err.into()),
	};

	for outcome in report.outcomes.iter() {
		tracing::info!(%outcome, "finished");
	}

	if let Some(path) = &args.export {
		if report.created().next().is_some() {
			export::to_path(path, &report)?;
			println!("\nCredentials written to {}", path.display());
		}
	}

	Ok(())
}
