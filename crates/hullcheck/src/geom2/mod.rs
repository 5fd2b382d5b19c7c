//! 2D geometric kernel (points as `nalgebra::Vector2<f64>`).
//!
//! Purpose
//! - Provide the small set of predicates the hull check is built on: signed
//!   area, polar angle, centroid, and an epsilon-aware sign.
//! - Keep tolerances explicit: every orientation test goes through a
//!   `GeomCfg` passed in by the caller, never a literal at the call site.
//!
//! Code cross-refs: `GeomCfg`, `Sign`, `kernel::{signed_area, polar_angle}`

pub mod kernel;
pub mod rand;
mod types;

pub use kernel::{centroid, parallelogram_area, polar_angle, signed_area};
pub use types::{GeomCfg, Sign, DEFAULT_EPS};
