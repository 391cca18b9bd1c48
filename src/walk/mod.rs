// Mon Feb 9 2026 - Alex

pub mod attribute;
pub mod path;
pub mod registry;
pub mod walker;

pub use attribute::AttributeMatcher;
pub use path::{PathBuilder, PathMarker};
pub use registry::Registry;
pub use walker::Walker;
