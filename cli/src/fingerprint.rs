use thiserror::Error;

const SHA1_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FingerprintError {
	#[error("a SHA-1 fingerprint is {SHA1_LEN} bytes, got {0}")]
	WrongLength(usize),
	#[error("`{0}` is not a hexadecimal byte")]
	InvalidByte(String),
}

/// Parses a SHA-1 certificate fingerprint, either as printed by `keytool`
/// (`AB:CD:...`) or as forty bare hex digits, into upper-case colon form.
pub fn parse(input: &str) -> Result<String, FingerprintError> {
	let input = input.trim();

	let bytes = if input.contains(':') {
		input.split(':')
			.map(str::to_string)
			.collect::<Vec<_>>()
	} else {
		if !input.is_ascii() {
			return Err(FingerprintError::InvalidByte(input.to_string()));
		}
		if input.len() % 2 != 0 {
			return Err(FingerprintError::WrongLength(input.len() / 2 + 1));
		}
		input.as_bytes()
			.chunks(2)
			.map(|pair| String::from_utf8_lossy(pair).into_owned())
			.collect::<Vec<_>>()
	};

	if bytes.len() != SHA1_LEN {
		return Err(FingerprintError::WrongLength(bytes.len()));
	}

	for byte in bytes.iter() {
		let is_hex_byte = byte.len() == 2 && byte.chars().all(|c| c.is_ascii_hexdigit());
		if !is_hex_byte {
			return Err(FingerprintError::InvalidByte(byte.clone()));
		}
	}

	Ok(bytes.join(":").to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEYTOOL: &str = "5E:8F:16:06:2E:A3:CD:2C:4A:0D:54:78:76:BA:A6:F3:8C:AB:F6:25";

	#[test]
	fn accepts_keytool_output() {
		assert_eq!(parse(KEYTOOL), Ok(KEYTOOL.to_string()));
	}

	#[test]
	fn normalizes_case_and_whitespace() {
		let input = "  5e:8f:16:06:2e:a3:cd:2c:4a:0d:54:78:76:ba:a6:f3:8c:ab:f6:25\n";
		assert_eq!(parse(input), Ok(KEYTOOL.to_string()));
	}

	#[test]
	fn accepts_bare_hex() {
		assert_eq!(parse("5e8f16062ea3cd2c4a0d547876baa6f38cabf625"), Ok(KEYTOOL.to_string()));
	}

	#[test]
	fn rejects_sha256_fingerprint() {
		let sha256 = ["AB"; 32].join(":");
		assert_eq!(parse(&sha256), Err(FingerprintError::WrongLength(32)));
	}

	#[test]
	fn rejects_odd_length() {
		assert_eq!(parse("ABC"), Err(FingerprintError::WrongLength(2)));
	}

	#[test]
	fn rejects_non_hex() {
		let input = KEYTOOL.replacen("5E", "ZZ", 1);
		assert_eq!(parse(&input), Err(FingerprintError::InvalidByte("ZZ".to_string())));
	}

	#[test]
	fn rejects_empty() {
		assert_eq!(parse("   "), Err(FingerprintError::WrongLength(0)));
	}
}
