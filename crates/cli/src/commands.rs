//! Command bodies for `sat-cli`, separated from argument parsing for tests.

use anyhow::{bail, Context, Result};
use sat::sample::{draw_in_box, draw_many, draw_unit, Bounds2, ReplayToken};
use sat::{VecCfg, Vector};
use serde::{Serialize, Serializer};

use crate::op::{parse_numbers, Op};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl From<Vector> for Xy {
    fn from(v: Vector) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Debug, Serialize)]
pub struct EvalReport {
    #[serde(serialize_with = "number_or_label")]
    pub x: f64,
    #[serde(serialize_with = "number_or_label")]
    pub y: f64,
    #[serde(serialize_with = "number_or_label")]
    pub len: f64,
    #[serde(serialize_with = "number_or_label")]
    pub len2: f64,
    pub unit: bool,
    pub finite: bool,
    /// Result equals the start within `VecCfg::eps_eq`.
    pub unchanged: bool,
    pub ops: Vec<String>,
}

/// JSON has no NaN/∞; emit them as `"NaN"`, `"inf"`, `"-inf"` instead of `null`.
fn number_or_label<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        s.serialize_f64(*v)
    } else if v.is_nan() {
        s.serialize_str("NaN")
    } else if *v > 0.0 {
        s.serialize_str("inf")
    } else {
        s.serialize_str("-inf")
    }
}

/// Apply `ops` to `(x, y)` in order.
///
/// Unchecked `project`/`reflect` on a zero axis leave non-finite components;
/// those serialize as the strings `"NaN"`, `"inf"` or `"-inf"`.
pub fn eval(start: Vector, ops: &[String], checked: bool, cfg: VecCfg) -> Result<EvalReport> {
    let mut v = start;
    for (i, raw) in ops.iter().enumerate() {
        let op: Op = raw.parse().with_context(|| format!("op #{i}"))?;
        op.apply(&mut v, checked)
            .with_context(|| format!("applying op #{i} `{raw}`"))?;
        tracing::debug!(i, op = ?op, x = v.x, y = v.y, "applied");
        if !v.is_finite() {
            tracing::warn!(i, op = ?op, "non-finite result");
        }
    }
    Ok(EvalReport {
        x: v.x,
        y: v.y,
        len: v.len(),
        len2: v.len2(),
        unit: v.is_unit_eps(cfg.eps_unit),
        finite: v.is_finite(),
        unchanged: v.approx_eq_eps(&start, cfg.eps_eq),
        ops: ops.to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct DotReport {
    pub a: Xy,
    pub b: Xy,
    pub dot: f64,
}

pub fn dot(a: Vector, b: Vector) -> DotReport {
    DotReport {
        a: a.into(),
        b: b.into(),
        dot: a.dot(&b),
    }
}

#[derive(Debug, Serialize)]
pub struct SampleReport {
    pub seed: u64,
    pub index: u64,
    pub vectors: Vec<Xy>,
}

/// `count` replayable draws: unit directions, or points in `bounds` if given.
pub fn sample(tok: ReplayToken, count: usize, bounds: Option<Bounds2>) -> Result<SampleReport> {
    let vectors: Vec<Vector> = match bounds {
        Some(b) => {
            if !b.is_valid() {
                bail!("invalid box: min {} max {}", b.min, b.max);
            }
            draw_many(tok, count, |t| draw_in_box(t, b))
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .context("box draw failed")?
        }
        None => draw_many(tok, count, draw_unit),
    };
    Ok(SampleReport {
        seed: tok.seed,
        index: tok.index,
        vectors: vectors.into_iter().map(Xy::from).collect(),
    })
}

/// `x0,y0,x1,y1` into a sampling box.
pub fn parse_box(s: &str) -> Result<Bounds2> {
    match parse_numbers(s)?.as_slice() {
        [x0, y0, x1, y1] => Ok(Bounds2::new(Vector::new(*x0, *y0), Vector::new(*x1, *y1))),
        other => bail!("expected `x0,y0,x1,y1`, got {} numbers", other.len()),
    }
}
