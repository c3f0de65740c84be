//! Console notifier for the CLI front-end.

use opshub_core::AppResult;
use opshub_core::traits::Notifier;

/// Notifier that prints acknowledgements to stdout.
///
/// Transfers are simulated: the hand-off succeeds without moving any
/// bytes, and the follow-up notification names the file and destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("✉ {}", message);
    }

    fn transfer(&self, _file_name: &str, _destination: &str) -> AppResult<()> {
        Ok(())
    }
}
