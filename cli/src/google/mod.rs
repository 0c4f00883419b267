use color_eyre::eyre;
use color_eyre::eyre::{eyre, WrapErr};
use crate::HTTP_CLIENT;
use crate::client_spec::ClientSpec;
use crate::config::Config;
use crate::google::credentials::Credentials;
use crate::google::http_interface::oauth_clients;
use crate::google::token::TokenSource;
use crate::provision::{CreatedClient, OAuthClientCreator};

pub mod credentials;
pub mod http_interface;
pub mod token;
#[cfg(test)]
mod test_server;

/// Creates OAuth clients through the IAM REST API.
pub struct IamClient {
	base_url: String,
	project_id: String,
	token_source: TokenSource,
}

impl IamClient {
	/// Looks up the application default credentials and fetches a first access token,
	/// so that every authentication problem surfaces before a client is created.
	pub fn authenticate(config: &Config) -> eyre::Result<IamClient> {
		let credentials = Credentials::from_environment()?;

		match &credentials {
			Credentials::AuthorizedUser(user) => {
				tracing::info!(quota_project = ?user.quota_project_id, "authenticating as user");
			},
			Credentials::ServiceAccount(account) => {
				tracing::info!(email = %account.client_email, key_project = ?account.project_id, "authenticating as service account");
			},
		}

		let mut token_source = TokenSource::new(credentials);
		token_source.get_access_token()?;

		Ok(IamClient {
			base_url: config.api_base_url.clone(),
			project_id: config.project_id.clone(),
			token_source,
		})
	}
}

impl OAuthClientCreator for IamClient {
	fn create(&mut self, spec: &ClientSpec) -> eyre::Result<CreatedClient> {
		let body = oauth_clients::create::PostRequestBody::for_spec(spec)
			.ok_or_else(|| eyre!("{spec} is missing its SHA-1 fingerprint"))?;

		let user_project = self.token_source.credentials()
			.quota_project_id()
			.map(str::to_string);
		let token = self.token_source.get_access_token()?;

		let res = oauth_clients::create::post(&HTTP_CLIENT, &self.base_url, token, user_project.as_deref(), &self.project_id, &body)
			.wrap_err_with(|| format!("creating {spec} in {}", oauth_clients::create::parent(&self.project_id)))?;

		tracing::debug!(resource = ?res.name, client_id = %res.client_id, "created OAuth client");

		Ok(CreatedClient {
			name: spec.name.clone(),
			client_id: res.client_id,
			client_secret: res.client_secret,
		})
	}
}
