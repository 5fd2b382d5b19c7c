//! Convex-hull validation.
//!
//! Purpose
//! - Decide whether a claimed subset of a planar point set is a convex hull of
//!   it: the subset must be convex in angular order and enclose every other
//!   point (inside or on the boundary).
//!
//! Pipeline (O(N log C))
//! - `partition`: sort the hull indices once, split points into hull and interior.
//! - `order`: centroid of the hull, sort by polar angle around it.
//! - `convexity`: one cyclic scan for a consistent turn direction.
//! - `locate`: per interior point, binary search for its wedge, one orientation test.
//! - `validate`: wires the stages together; any failure answers "No".
//!
//! Preconditions on the indices are checked at the boundary with
//! `check_hull_indices`; the pipeline itself assumes they hold.

pub mod convexity;
mod error;
pub mod locate;
pub mod order;
pub mod partition;
mod validate;

pub use convexity::{is_convex, main_orientation};
pub use error::{check_hull_indices, UsageError};
pub use locate::{point_in_poly, points_in_poly, AngleTable, PointLocator, Wedge};
pub use order::{order_by_polar_angle, OrderedHull};
pub use partition::{partition, Partition};
pub use validate::{check, validate, validate_with, Verdict};

#[cfg(test)]
mod tests;
