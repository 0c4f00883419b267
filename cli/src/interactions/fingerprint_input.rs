use color_eyre::eyre;
use inquire::{CustomUserError, Text};
use inquire::validator::Validation;
use crate::client_spec::ClientSpec;
use crate::fingerprint;

pub struct FingerprintInput<'a> {
	spec: &'a ClientSpec,
}

impl<'a> FingerprintInput<'a> {
	pub fn new(spec: &'a ClientSpec) -> FingerprintInput<'a> {
		FingerprintInput {
			spec
		}
	}

	/// `None` when the user skips the client by entering nothing.
	pub fn prompt(self) -> eyre::Result<Option<String>> {
		eprintln!("\nAndroid SHA-1 fingerprint for {}", self.spec.name);
		eprintln!("Run this command to get your debug SHA-1:");
		eprintln!("  keytool -list -v -keystore ~/.android/debug.keystore -alias androiddebugkey -storepass android -keypass android");
		eprintln!("Or for a release keystore:");
		eprintln!("  keytool -list -v -keystore /path/to/your/keystore.jks -alias your-alias\n");

		let input = Text::new("Enter SHA-1 fingerprint")
			.with_help_message("Press Enter to skip this Android client")
			.with_validator(|input: &str| -> Result<Validation, CustomUserError> {
				if input.trim().is_empty() {
					return Ok(Validation::Valid);
				}

				Ok(match fingerprint::parse(input) {
					Ok(_) => Validation::Valid,
					Err(err) => Validation::Invalid(err.to_string().into()),
				})
			})
			.prompt()?;

		if input.trim().is_empty() {
			return Ok(None);
		}

		Ok(Some(fingerprint::parse(&input)?))
	}
}
