//! Deterministic 3D gradient noise.
//!
//! The crate is split into the evaluation kernel ([`noise`]) and the lookup
//! tables it consumes ([`tables`]). The kernel never allocates, never mutates
//! its inputs and never fails; all validation happens once, when a
//! [`NoiseTables`] is constructed.
//!
//! ```
//! use gradnoise_core::NoiseTables;
//!
//! let tables = NoiseTables::builder().seed(7).build()?;
//! let value = tables.sample_octaves(0.25, 0.5, 0.0, 8);
//! assert!(value.is_finite());
//! # Ok::<(), gradnoise_core::TableError>(())
//! ```

pub mod math;
pub mod noise;
pub mod tables;

pub use noise::{
    FibonacciGradients, GradientSource, NoiseVector, TableGradients, evaluate_noise,
    evaluate_noise_octaves, noise_hash,
};
pub use tables::{GradientTable, NoiseTables, NoiseTablesBuilder, PermutationTable, TableError};
