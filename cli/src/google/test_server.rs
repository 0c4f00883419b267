use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

#[derive(Debug)]
pub struct CapturedRequest {
	pub request_line: String,
	pub headers: Vec<(String, String)>,
	pub body: String,
}

impl CapturedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Answers one connection per canned `(status, body)` response, in order.
pub struct TestServer {
	pub base_url: String,
	handle: JoinHandle<Vec<CapturedRequest>>,
}

impl TestServer {
	pub fn start(responses: Vec<(u16, &'static str)>) -> TestServer {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let base_url = format!("http://{}", listener.local_addr().unwrap());

		let handle = std::thread::spawn(move || {
			let mut captured = vec![];

			for (status, body) in responses {
				let (stream, _) = listener.accept().unwrap();
				let mut reader = BufReader::new(stream.try_clone().unwrap());

				let mut request_line = String::new();
				reader.read_line(&mut request_line).unwrap();

				let mut headers = vec![];
				loop {
					let mut line = String::new();
					reader.read_line(&mut line).unwrap();
					let line = line.trim_end();
					if line.is_empty() {
						break;
					}
					if let Some((key, value)) = line.split_once(':') {
						headers.push((key.trim().to_string(), value.trim().to_string()));
					}
				}

				let content_length = headers.iter()
					.find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
					.and_then(|(_, value)| value.parse::<usize>().ok())
					.unwrap_or(0);
				let mut request_body = vec![0; content_length];
				reader.read_exact(&mut request_body).unwrap();

				let mut stream = stream;
				write!(
					stream,
					"HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
					body.len(),
				).unwrap();
				stream.flush().unwrap();

				captured.push(CapturedRequest {
					request_line: request_line.trim_end().to_string(),
					headers,
					body: String::from_utf8(request_body).unwrap(),
				});
			}

			captured
		});

		TestServer { base_url, handle }
	}

	pub fn requests(self) -> Vec<CapturedRequest> {
		self.handle.join().unwrap()
	}
}
