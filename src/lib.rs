//! Word frequency counting: read text, normalize words, count them and rank
//! by how often they occur.
//!
//! ```text
//! input::open -> Input::words -> normalize::tokens -> FrequencyTable -> report::rank
//! ```
pub mod error;
pub mod frequency;
pub mod input;
pub mod normalize;
pub mod report;
pub mod zipf;

pub use error::{Error, InputError, ReportError};
pub use frequency::FrequencyTable;
pub use report::{rank, Precision, RankedEntry, Ranking};
