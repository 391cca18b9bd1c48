// Mon Feb 9 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;
