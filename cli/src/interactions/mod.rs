pub use fingerprint_input::FingerprintInput;
pub use open_console_confirm::OpenConsoleConfirm;

mod fingerprint_input;
mod open_console_confirm;
