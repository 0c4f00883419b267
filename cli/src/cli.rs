use std::path::PathBuf;
use clap::Parser;
use crate::fingerprint;

/// Creates the configured web, Android and iOS OAuth clients for a Google Cloud project.
///
/// Authentication uses application default credentials: run
/// `gcloud auth application-default login` or point GOOGLE_APPLICATION_CREDENTIALS
/// at a service account key.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
	/// Project to create the clients in, instead of the configured one
	#[arg(long)]
	pub project_id: Option<String>,

	/// SHA-1 signing certificate fingerprint for Android clients that have none configured
	#[arg(long, value_parser = fingerprint::parse)]
	pub sha1_fingerprint: Option<String>,

	/// Config file to use instead of the per-user default
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Write the created client IDs and secrets to this CSV file
	#[arg(long)]
	pub export: Option<PathBuf>,

	/// Never prompt; Android clients without a fingerprint are skipped
	#[arg(long)]
	pub no_prompt: bool,
}
