//! 2D vector primitive for separating-axis (SAT) collision code.
//!
//! Modules
//! - `vector`: the mutable, chainable `Vector` and its value-returning forms.
//! - `cfg`: shared tolerances.
//! - `sample`: seeded, replayable random vectors for tests and experiments.
//!
//! Shapes, polygon projection and overlap tests are not part of this crate;
//! they are expected to build on `Vector::dot`, `project`/`project_n` and `len2`.

pub mod cfg;
pub mod sample;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::VecCfg;
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::VecCfg;
    pub use crate::sample::{draw_in_box, draw_many, draw_unit, Bounds2, ReplayToken};
    pub use crate::vector::Vector;
}
