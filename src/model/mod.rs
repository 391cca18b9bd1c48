// Mon Feb 9 2026 - Alex

pub mod arena;
pub mod field;
pub mod offset;

pub use arena::{AggregateId, AggregateType, TypeArena};
pub use field::{Field, TypeRef};
pub use offset::BitOffset;
