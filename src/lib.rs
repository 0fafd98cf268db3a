//! Loguniform: reproducible samples from a log-uniform distribution
//!
//! The crate is made of two independent pieces:
//! - [`seed`] produces 32-bit seeds, either given by the caller or drawn from
//!   the OS with a weak fallback
//! - [`distribution`] turns a seed into log-uniform samples, through the
//!   [`mt::Mt19937`] engine
//!
//! # Example
//! ```
//! use loguniform::{generate_samples, seed::manual_seed};
//!
//! let samples: Vec<f64> = generate_samples(1.5, 20.06, 10, manual_seed(42)).unwrap();
//! for s in samples {
//!     assert!(1.5f64.exp() <= s && s <= 20.06f64.exp());
//! }
//! ```
pub mod distribution;
pub mod error;
pub mod mt;
pub mod seed;

pub use distribution::{generate_samples, LogUniform};
pub use error::LoguniformError;
