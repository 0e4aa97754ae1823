pub mod error;
pub mod types;

#[cfg(feature = "roi")]
pub mod roi;

pub use error::RoiCalcError;
pub use types::*;

/// Standard result type for all roi-calc operations
pub type RoiCalcResult<T> = Result<T, RoiCalcError>;
