use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::fingerprint;
use crate::fingerprint::FingerprintError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSpec {
	pub name: String,
	pub kind: ClientKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientKind {
	Web {
		redirect_uris: Vec<String>,
		javascript_origins: Vec<String>,
	},
	Android {
		package_name: String,
		sha1_fingerprint: Option<String>,
	},
	Ios {
		bundle_id: String,
	},
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClientType {
	Web,
	Android,
	Ios,
}

impl Display for ClientType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ClientType::Web => write!(f, "WEB_APPLICATION"),
			ClientType::Android => write!(f, "ANDROID"),
			ClientType::Ios => write!(f, "IOS"),
		}
	}
}

impl ClientSpec {
	pub fn web<I, S>(name: &str, redirect_uris: I, javascript_origins: I) -> ClientSpec
		where I: IntoIterator<Item = S>, S: Into<String>
	{
		ClientSpec {
			name: name.to_string(),
			kind: ClientKind::Web {
				redirect_uris: redirect_uris.into_iter().map(Into::into).collect(),
				javascript_origins: javascript_origins.into_iter().map(Into::into).collect(),
			},
		}
	}

	pub fn android(name: &str, package_name: &str, sha1_fingerprint: Option<String>) -> ClientSpec {
		let mut spec = ClientSpec {
			name: name.to_string(),
			kind: ClientKind::Android {
				package_name: package_name.to_string(),
				sha1_fingerprint: None,
			},
		};
		spec.set_fingerprint(sha1_fingerprint);

		spec
	}

	pub fn ios(name: &str, bundle_id: &str) -> ClientSpec {
		ClientSpec {
			name: name.to_string(),
			kind: ClientKind::Ios { bundle_id: bundle_id.to_string() },
		}
	}

	pub fn client_type(&self) -> ClientType {
		match self.kind {
			ClientKind::Web { .. } => ClientType::Web,
			ClientKind::Android { .. } => ClientType::Android,
			ClientKind::Ios { .. } => ClientType::Ios,
		}
	}

	pub fn fingerprint(&self) -> Option<&str> {
		match &self.kind {
			ClientKind::Android { sha1_fingerprint: Some(fingerprint), .. } if !fingerprint.trim().is_empty() => Some(fingerprint.as_str()),
			_ => None,
		}
	}

	pub fn needs_fingerprint(&self) -> bool {
		self.client_type() == ClientType::Android && self.fingerprint().is_none()
	}

	/// No-op for anything but Android clients. Empty fingerprints are stored as absent.
	pub fn set_fingerprint(&mut self, fingerprint: Option<String>) {
		if let ClientKind::Android { sha1_fingerprint, .. } = &mut self.kind {
			*sha1_fingerprint = fingerprint.filter(|fingerprint| !fingerprint.trim().is_empty());
		}
	}

	/// Brings a fingerprint read from elsewhere, such as a hand-edited config, into canonical form.
	/// Blank fingerprints become absent.
	pub fn normalize_fingerprint(&mut self) -> Result<(), FingerprintError> {
		if let ClientKind::Android { sha1_fingerprint, .. } = &mut self.kind {
			*sha1_fingerprint = sha1_fingerprint.take()
				.filter(|fingerprint| !fingerprint.trim().is_empty())
				.map(|fingerprint| fingerprint::parse(&fingerprint))
				.transpose()?;
		}

		Ok(())
	}

	/// Whether a creation request can be built for this client.
	pub fn is_ready(&self) -> bool {
		!self.needs_fingerprint()
	}
}

impl Display for ClientSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} [{}]", self.name, self.client_type())
	}
}
