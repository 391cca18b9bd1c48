// Mon Feb 9 2026 - Alex

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod utils;
pub mod walk;

pub use config::Config;
pub use error::ExtractError;
pub use model::TypeArena;
pub use output::{Emitter, OutputSink, RecordStyle};
pub use walk::Walker;
