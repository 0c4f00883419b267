use chrono::{serde::ts_seconds, DateTime, Duration, Utc};
use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use crate::HTTP_CLIENT;
use crate::google::credentials::{Credentials, ServiceAccount};
use crate::google::http_interface::token::{jwt_bearer, refresh};

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const REFRESH_MARGIN_SECONDS: i64 = 30;
const ASSERTION_LIFETIME_SECONDS: i64 = 60 * 60;

#[derive(Debug)]
pub struct AccessToken {
	secret: String,
	expires_at: DateTime<Utc>,
}

impl AccessToken {
	pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
		self.expires_at - now > Duration::seconds(REFRESH_MARGIN_SECONDS)
	}
}

pub struct TokenSource {
	credentials: Credentials,
	token: Option<AccessToken>,
}

impl TokenSource {
	pub fn new(credentials: Credentials) -> TokenSource {
		TokenSource { credentials, token: None }
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub fn get_access_token(&mut self) -> eyre::Result<&str> {
		let token = match self.token.take() {
			Some(token) if token.is_fresh(Utc::now()) => token,
			_ => self.fetch()?,
		};

		Ok(&self.token.insert(token).secret)
	}

	fn fetch(&self) -> eyre::Result<AccessToken> {
		let start = Utc::now();

		let res = match &self.credentials {
			Credentials::AuthorizedUser(user) => {
				let body = refresh::PostRequestBody::new(&user.client_id, &user.client_secret, &user.refresh_token);
				refresh::post(&HTTP_CLIENT, &user.token_uri, &body)
					.wrap_err("unable to refresh the user access token")?
			},
			Credentials::ServiceAccount(account) => {
				let assertion = assertion(account, start)?;
				let body = jwt_bearer::PostRequestBody::new(&assertion);
				jwt_bearer::post(&HTTP_CLIENT, &account.token_uri, &body)
					.wrap_err_with(|| format!("unable to get an access token for {}", account.client_email))?
			},
		};

		tracing::debug!(expires_in = res.expires_in, "fetched access token");

		Ok(AccessToken {
			secret: res.access_token,
			expires_at: start + Duration::seconds(res.expires_in),
		})
	}
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
	iss: &'a str,
	scope: &'a str,
	aud: &'a str,
	#[serde(with = "ts_seconds")]
	iat: DateTime<Utc>,
	#[serde(with = "ts_seconds")]
	exp: DateTime<Utc>,
}

fn assertion(account: &ServiceAccount, issued_at: DateTime<Utc>) -> eyre::Result<String> {
	let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
		.wrap_err("service account private key is not a valid RSA PEM")?;

	let mut header = Header::new(Algorithm::RS256);
	header.kid = account.private_key_id.clone();

	let claims = Claims {
		iss: &account.client_email,
		scope: CLOUD_PLATFORM_SCOPE,
		aud: &account.token_uri,
		iat: issued_at,
		exp: issued_at + Duration::seconds(ASSERTION_LIFETIME_SECONDS),
	};

	Ok(encode(&header, &claims, &key)?)
}
