//! Seeded random vectors (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for tests, benches and the CLI `sample` command.
//! - A draw is fully determined by `(seed, index)`, so any single sample can be
//!   regenerated without replaying the ones before it.
//!
//! Code cross-refs: `Vector::from_angle`

use crate::vector::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the `k`-th draw after this one.
    #[inline]
    pub fn offset(self, k: u64) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(k),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector,
    pub max: Vector,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Vector, max: Vector) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }

    #[inline]
    pub fn contains(&self, p: &Vector) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// Uniform direction on the unit circle.
pub fn draw_unit(tok: ReplayToken) -> Vector {
    let mut rng = tok.to_std_rng();
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    Vector::from_angle(theta)
}

/// Uniform point in `bounds`; `None` if the box is inverted or non-finite.
pub fn draw_in_box(tok: ReplayToken, bounds: Bounds2) -> Option<Vector> {
    if !bounds.is_valid() {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let (u, v): (f64, f64) = (rng.gen(), rng.gen());
    Some(Vector::new(
        lerp_in(bounds.min.x, bounds.max.x, u),
        lerp_in(bounds.min.y, bounds.max.y, v),
    ))
}

/// `lo + t (hi − lo)` without forming `hi − lo`, which overflows for wide boxes.
/// Clamped so rounding never leaves `[lo, hi]`.
#[inline]
fn lerp_in(lo: f64, hi: f64, t: f64) -> f64 {
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}

/// `count` consecutive draws starting at `tok.index`.
pub fn draw_many<T, F>(tok: ReplayToken, count: usize, mut draw: F) -> Vec<T>
where
    F: FnMut(ReplayToken) -> T,
{
    (0..count as u64).map(|k| draw(tok.offset(k))).collect()
}
