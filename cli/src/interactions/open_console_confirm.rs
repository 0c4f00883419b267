use color_eyre::eyre;
use inquire::Confirm;

pub struct OpenConsoleConfirm<'a> {
	console_url: &'a str,
}

impl<'a> OpenConsoleConfirm<'a> {
	pub fn new(console_url: &'a str) -> OpenConsoleConfirm<'a> {
		OpenConsoleConfirm {
			console_url
		}
	}

	pub fn prompt(self) -> eyre::Result<()> {
		let open_console = Confirm::new("Open the Cloud Console to create the clients manually?")
			.with_default(false)
			.with_help_message(self.console_url)
			.prompt()?;

		if open_console {
			open::that(self.console_url)?;
		}

		Ok(())
	}
}
