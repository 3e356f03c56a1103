//! Wavebake - offline lookup-table baking for an audio module's DSP runtime.
//!
//! This library turns small sets of analytic or measured control data into
//! fixed-length, precision-quantized sample tables: a psychoacoustic
//! amplitude-weighting curve emitted as a Rust constant block, and
//! additive-synthesis wavetable banks emitted as single-cycle PCM files.

pub mod bank;
pub mod curve;
pub mod emit;
pub mod error;
pub mod mapping;
pub mod quantize;
pub mod synthesis;
pub mod weighting;

// Re-export commonly used types at the crate root
pub use bank::BankConfig;
pub use curve::{ControlPoint, ResponseCurve};
pub use error::Error;
pub use mapping::LogIndexMap;
pub use quantize::quantize;
pub use synthesis::{HarmonicFamily, MULTIPLIED_COUNTS, SUMMED_COUNTS, Wavetable, center, normalize};
pub use weighting::WeightingTable;
