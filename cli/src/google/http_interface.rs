use color_eyre::eyre;
use color_eyre::eyre::eyre;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderValue;
use reqwest::Url;
use serde::{Deserialize, Serialize};

const USER_PROJECT_HEADER: &str = "x-goog-user-project";

fn build_url(base_url: &str, endpoint: &str) -> eyre::Result<Url> {
	let mut url = Url::parse(base_url)?;

	{
		let mut path_segments = url.path_segments_mut()
			.map_err(|_| eyre!("url not base"))?;

		path_segments.pop_if_empty();
		for segment in endpoint.split('/') {
			path_segments.push(segment);
		}
	}

	Ok(url)
}

fn send<Res: for<'de> Deserialize<'de>>(client: &Client, builder: RequestBuilder) -> eyre::Result<Res> {
	let req = builder.build()?;
	tracing::debug!(method = %req.method(), url = %req.url(), "sending request");

	let res = client.execute(req)?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text()?;
		tracing::debug!(%status, %body, "request rejected");
		return Err(eyre!("[google] {status}: {}", body.trim()));
	}

	Ok(res.json()?)
}

fn post<Req: Serialize, Res: for<'de> Deserialize<'de>>(client: &Client, url: Url, body: &Req, token: &str, user_project: Option<&str>) -> eyre::Result<Res> {
	let mut builder = client.post(url)
		.header("Content-Type", HeaderValue::from_static("application/json"))
		.bearer_auth(token)
		.json(body);

	if let Some(user_project) = user_project {
		builder = builder.header(USER_PROJECT_HEADER, user_project);
	}

	send(client, builder)
}

fn post_form<Req: Serialize, Res: for<'de> Deserialize<'de>>(client: &Client, url: &str, body: &Req) -> eyre::Result<Res> {
	let builder = client.post(url).form(body);

	send(client, builder)
}

pub mod oauth_clients {
	pub mod create {
		use color_eyre::eyre;
		use reqwest::blocking::Client;
		use serde::{Deserialize, Serialize};
		use crate::client_spec::{ClientKind, ClientSpec};
		use crate::google::http_interface;

		#[derive(Debug, Serialize)]
		#[serde(rename_all = "camelCase")]
		pub struct PostRequestBody<'a> {
			pub display_name: &'a str,
			#[serde(skip_serializing_if = "Option::is_none")]
			pub web: Option<Web<'a>>,
			#[serde(skip_serializing_if = "Option::is_none")]
			pub android: Option<Android<'a>>,
			#[serde(skip_serializing_if = "Option::is_none")]
			pub ios: Option<Ios<'a>>,
		}

		#[derive(Debug, Serialize)]
		#[serde(rename_all = "camelCase")]
		pub struct Web<'a> {
			pub redirect_uris: &'a [String],
			pub javascript_origins: &'a [String],
		}

		#[derive(Debug, Serialize)]
		#[serde(rename_all = "camelCase")]
		pub struct Android<'a> {
			pub package_name: &'a str,
			pub sha1_fingerprints: Vec<&'a str>,
		}

		#[derive(Debug, Serialize)]
		#[serde(rename_all = "camelCase")]
		pub struct Ios<'a> {
			pub bundle_id: &'a str,
		}

		impl<'a> PostRequestBody<'a> {
			/// `None` for an Android client that has no fingerprint yet.
			pub fn for_spec(spec: &'a ClientSpec) -> Option<PostRequestBody<'a>> {
				let mut body = PostRequestBody {
					display_name: &spec.name,
					web: None,
					android: None,
					ios: None,
				};

				match &spec.kind {
					ClientKind::Web { redirect_uris, javascript_origins } => {
						body.web = Some(Web { redirect_uris, javascript_origins });
					},
					ClientKind::Android { package_name, .. } => {
						let fingerprint = spec.fingerprint()?;
						body.android = Some(Android { package_name, sha1_fingerprints: vec![fingerprint] });
					},
					ClientKind::Ios { bundle_id } => {
						body.ios = Some(Ios { bundle_id });
					},
				}

				Some(body)
			}
		}

		#[derive(Debug, Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct PostResponseBody {
			pub name: Option<String>,
			pub client_id: String,
			pub client_secret: Option<String>,
		}

		pub fn parent(project_id: &str) -> String {
			format!("projects/{project_id}/locations/global")
		}

		pub fn post(client: &Client, base_url: &str, token: &str, user_project: Option<&str>, project_id: &str, body: &PostRequestBody) -> eyre::Result<PostResponseBody> {
			let endpoint = format!("{}/oauthClients", parent(project_id));
			let url = http_interface::build_url(base_url, &endpoint)?;
			http_interface::post(client, url, body, token, user_project)
		}
	}
}

pub mod token {
	use color_eyre::eyre;
	use reqwest::blocking::Client;
	use serde::{Deserialize, Serialize};
	use crate::google::http_interface;

	#[derive(Debug, Deserialize)]
	pub struct PostResponseBody {
		pub access_token: String,
		pub expires_in: i64,
	}

	pub mod refresh {
		use super::*;

		#[derive(Debug, Serialize)]
		pub struct PostRequestBody<'a> {
			pub grant_type: &'static str,
			pub client_id: &'a str,
			pub client_secret: &'a str,
			pub refresh_token: &'a str,
		}

		impl<'a> PostRequestBody<'a> {
			pub fn new(client_id: &'a str, client_secret: &'a str, refresh_token: &'a str) -> Self {
				PostRequestBody { grant_type: "refresh_token", client_id, client_secret, refresh_token }
			}
		}

		pub fn post(client: &Client, token_uri: &str, body: &PostRequestBody) -> eyre::Result<PostResponseBody> {
			http_interface::post_form(client, token_uri, body)
		}
	}

	pub mod jwt_bearer {
		use super::*;

		#[derive(Debug, Serialize)]
		pub struct PostRequestBody<'a> {
			pub grant_type: &'static str,
			pub assertion: &'a str,
		}

		impl<'a> PostRequestBody<'a> {
			pub fn new(assertion: &'a str) -> Self {
				PostRequestBody { grant_type: "urn:ietf:params:oauth:grant-type:jwt-bearer", assertion }
			}
		}

		pub fn post(client: &Client, token_uri: &str, body: &PostRequestBody) -> eyre::Result<PostResponseBody> {
			http_interface::post_form(client, token_uri, body)
		}
	}
}
