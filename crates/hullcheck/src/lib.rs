//! Convex-hull validation for planar point sets.
//!
//! Given points and a claimed subset of hull indices, decide whether the subset
//! is convex (in angular order around its centroid) and encloses every other
//! point. The check runs in O(N log C) on top of a small epsilon-aware
//! geometric kernel.
//!
//! ```
//! use hullcheck::prelude::*;
//!
//! let points = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(4.0, 0.0),
//!     Vec2::new(0.0, 4.0),
//!     Vec2::new(1.0, 1.0),
//! ];
//! assert!(validate(&points, &[2, 0, 1]));
//! assert_eq!(
//!     check(&points, &[0, 1, 3], GeomCfg::default()),
//!     Verdict::PointOutside { index: 2 },
//! );
//! ```
//!
//! API Policy
//! - The core assumes distinct, in-range indices. Callers run
//!   `check_hull_indices` at the boundary and report `UsageError`s themselves.
//! - No state survives a call; independent calls can run on any thread.

pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Sign};
pub use hull::{check, check_hull_indices, validate, validate_with, UsageError, Verdict};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_instance, draw_polygon_elliptic, EllipseCfg, Instance, InstanceCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{polar_angle, signed_area, GeomCfg, Sign};
    pub use crate::hull::{
        check, check_hull_indices, validate, validate_with, PointLocator, UsageError, Verdict,
    };
    pub use nalgebra::Vector2 as Vec2;
}
