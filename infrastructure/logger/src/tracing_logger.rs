use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Assistant -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Assistant -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Assistant -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Assistant -- ", "{}", message);
    }
}
