use std::path::Path;
use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};
use crate::APP_NAME;
use crate::client_spec::ClientSpec;

const CONFIG_NAME: &str = "config";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub project_id: String,
	pub api_base_url: String,
	pub clients: Vec<ClientSpec>,
}

impl Default for Config {
	fn default() -> Self {
		let hosts = vec![
			"http://localhost:5000",
			"https://wedecorenquries.web.app",
			"https://wedecorenquries.firebaseapp.com",
		];

		Config {
			project_id: "wedecorenquries".into(),
			api_base_url: "https://iam.googleapis.com/v1".into(),
			clients: vec![
				ClientSpec::web("We Decor Enquiries Web", hosts.clone(), hosts),
				ClientSpec::android("We Decor Enquiries Android", "com.example.we_decor_enquiries", None),
				ClientSpec::ios("We Decor Enquiries iOS", "com.example.weDecorEnquiries"),
			],
		}
	}
}

impl Config {
	/// Loads the config, writing the defaults out first if no file exists yet.
	/// Configured fingerprints are normalized, and blank ones treated as absent.
	pub fn load(path: Option<&Path>) -> eyre::Result<Config> {
		let mut config: Config = match path {
			Some(path) => confy::load_path(path)?,
			None => confy::load(APP_NAME, Some(CONFIG_NAME))?,
		};

		for spec in config.clients.iter_mut() {
			spec.normalize_fingerprint()
				.wrap_err_with(|| format!("invalid SHA-1 fingerprint configured for {}", spec.name))?;
		}

		Ok(config)
	}

	pub fn console_url(&self) -> String {
		format!("https://console.cloud.google.com/apis/credentials?project={}", self.project_id)
	}

	pub fn fill_missing_fingerprints(&mut self, fingerprint: &str) {
		for spec in self.clients.iter_mut().filter(|spec| spec.needs_fingerprint()) {
			spec.set_fingerprint(Some(fingerprint.to_string()));
		}
	}
}
