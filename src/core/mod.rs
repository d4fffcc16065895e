// Public modules
pub mod chance;
pub mod defaults;
pub mod error;
pub mod path;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use chance::{ProbabilityTable, Rand, RandomSource, Ratio};
pub use error::{Error, ErrorCode, Result};
pub use path::{Fragment, PathDiff, PathUtil};
