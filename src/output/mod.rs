// Wed Feb 11 2026 - Alex

pub mod emitter;
pub mod sink;

pub use emitter::{Emitter, RecordStyle};
pub use sink::OutputSink;
