use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(message));
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else if cfg!(not(test)) {
        eprintln!("Logger not initialized! Call init_logger() first. Message: {}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_placed_after_timestamp() {
        let logger = Logger::new(Some("Snake".to_string()));
        let line = logger.format_line("candy eaten");
        assert!(line.starts_with('['));
        assert!(line.ends_with("][Snake] candy eaten"));
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format_line("paused");
        assert!(line.ends_with("] paused"));
        assert!(!line.contains("]["));
    }
}
