//! Side-effect capability trait for acknowledgements and transfers.
//!
//! The dashboard originally acknowledged downloads and shares inline with
//! no-op alerts. Routing them through [`Notifier`] keeps the state machines
//! testable without a display surface and lets a real delivery channel be
//! substituted later without touching them.

use crate::result::AppResult;

/// Collaborator interface for simulated I/O.
///
/// No implementation performs real I/O today: `transfer` is an
/// acknowledged hand-off, not an actual file movement.
pub trait Notifier: std::fmt::Debug {
    /// Deliver a user-facing acknowledgement message.
    fn notify(&self, message: &str);

    /// Hand a file off to a destination address.
    fn transfer(&self, file_name: &str, destination: &str) -> AppResult<()>;
}

/// Notifier that routes acknowledgements to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "notification");
    }

    fn transfer(&self, file_name: &str, destination: &str) -> AppResult<()> {
        tracing::info!(file_name, destination, "transfer acknowledged");
        Ok(())
    }
}
