// Wed Feb 11 2026 - Alex

pub mod json;

pub use json::{load_file, load_str};
