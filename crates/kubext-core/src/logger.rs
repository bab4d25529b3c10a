//! Logging collaborator for user-facing advisories

/// Sink for advisories emitted while the configuration is consulted.
///
/// Fire-and-forget: nothing reported here changes a computed result.
pub trait KitLogger {
    fn warn(&self, message: &str);
}

/// Forwards advisories to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl KitLogger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
