use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `face_match` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "face_match", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "face_match", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "face_match", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "face_match", "{}", message);
    }
}
