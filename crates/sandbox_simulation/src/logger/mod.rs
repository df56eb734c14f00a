use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Потокобезопасный глобальный logger: printer подменяется (console / тестовый буфер)
static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

// Паника в одном printer'е не должна глушить логи навсегда — берём данные из poisoned mutex
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *lock(&LOGGER) = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *lock(&LOGGER_LEVEL) = level;
}

pub fn log_level() -> LogLevel {
    *lock(&LOGGER_LEVEL)
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    let mut slot = lock(&LOGGER);
    if slot.is_none() {
        *slot = Some(logger);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// "debug" / "info" / "warning" / "error" (регистр не важен)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < log_level() {
        return;
    }

    // Timestamp добавляем здесь, printer получает готовую строку
    if let Some(logger) = lock(&LOGGER).as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

/// stdout для Debug/Info, stderr для Warning/Error
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug | LogLevel::Info => println!("[{}] {}", level.as_str(), message),
            LogLevel::Warning | LogLevel::Error => eprintln!("[{}] {}", level.as_str(), message),
        }
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    use std::sync::Arc;

    /// Printer который копит сообщения в общий буфер
    struct BufferLogger {
        lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
    }

    impl LogPrinter for BufferLogger {
        fn log(&self, level: LogLevel, message: &str) {
            lock(&self.lines).push((level, message.to_string()));
        }
    }

    #[test]
    fn test_level_filter_and_custom_printer() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        set_logger(Box::new(BufferLogger { lines: Arc::clone(&lines) }));
        set_log_level(LogLevel::Warning);

        log_info("level-filter: dropped");
        log_warning("level-filter: shown");

        set_log_level(LogLevel::Debug);
        // Уже установленный printer не заменяется
        set_logger_if_needed(Box::new(ConsoleLogger));
        log("level-filter: debug after reset");
        set_logger(Box::new(ConsoleLogger));

        // Другие тесты могут логировать параллельно — смотрим только свои строки
        let ours: Vec<_> = lock(&lines)
            .iter()
            .filter(|(_, message)| message.contains("level-filter:"))
            .cloned()
            .collect();

        assert_eq!(ours.len(), 2, "{:?}", ours);
        assert_eq!(ours[0].0, LogLevel::Warning);
        assert!(ours[0].1.ends_with("level-filter: shown"));
        assert_eq!(ours[1].0, LogLevel::Debug);
        assert!(ours[1].1.ends_with("level-filter: debug after reset"));
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse(" warn "), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse("verbose"), None);
    }
}
