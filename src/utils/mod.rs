//! Generic utility primitives with zero domain knowledge.
//!
//! - `arr` - Ordered mapping and nested container helpers
//! - `dir` - Directory listings
//! - `io` - File I/O with consistent error handling
//! - `num` - Integer parity
//! - `structured` - Loose JSON to structured record conversion
//! - `text` - Case conversion and pluralization
//! - `validation` - Input validation helpers

pub mod arr;
pub mod dir;
pub mod io;
pub mod num;
pub mod structured;
pub mod text;
pub mod validation;
