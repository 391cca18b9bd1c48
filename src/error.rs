// Mon Feb 9 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("The qualified name \"{contents}\" does not fit in the {limit}-byte path buffer. Raise the limit with max_length={suggested} and rerun.")]
    PathOverflow {
        contents: String,
        limit: usize,
        suggested: usize,
    },
    #[error("The offset of \"{path}\" is {bits} in bits ({bits} % 8 != 0), but offsets are being written in bytes. Pass output_bits to write raw bit offsets.")]
    MisalignedOffset { path: String, bits: u64 },
    #[error("A field under \"{path}\" is marked for export but has no declared name")]
    UnnamedExport { path: String },
    #[error("Macro records need a struct and a field segment, but \"{path}\" has {depth} segment(s)")]
    MacroDepth { path: String, depth: usize },
    #[error("Aggregate reference out of range: index {index}, but the type dump holds {len} aggregate(s)")]
    BadAggregateRef { index: usize, len: usize },
    #[error("Aggregate #{index} contains itself by value through nested aggregate references")]
    CyclicAggregateRef { index: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
