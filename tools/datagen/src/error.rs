//! Error taxonomy for the generator tool
//!
//! The generation loop itself has no error states: every random draw is
//! range-bounded, and MODIFY/CANCEL are only selected while the registry
//! is non-empty. All failures are sink-side.

use thiserror::Error;

/// Sink-side failures surfaced to the CLI boundary
#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
