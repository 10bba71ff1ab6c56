//! Textual vector operations for `sat-cli eval`.
//!
//! Grammar: `name[:args]`, name case-insensitive, args comma separated.
//! `perp`, `reverse`, `normalize`, `rotate:<rad>`, `add:<x>,<y>`,
//! `sub:<x>,<y>`, `scale:<sx>[,<sy>]`, `project:<x>,<y>`, `projectn:<x>,<y>`,
//! `reflect:<x>,<y>`, `reflectn:<x>,<y>`.

use anyhow::{anyhow, bail, Context, Result};
use sat::Vector;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Perp,
    Reverse,
    Normalize,
    Rotate(f64),
    Add(Vector),
    Sub(Vector),
    Scale(f64, Option<f64>),
    Project(Vector),
    ProjectN(Vector),
    Reflect(Vector),
    ReflectN(Vector),
}

impl Op {
    /// Apply to `v` in place. With `checked`, a degenerate `project`/`reflect`
    /// axis is an error and `v` is left unchanged.
    pub fn apply(&self, v: &mut Vector, checked: bool) -> Result<()> {
        match *self {
            Op::Perp => {
                v.perp();
            }
            Op::Reverse => {
                v.reverse();
            }
            Op::Normalize => {
                v.normalize();
            }
            Op::Rotate(angle) => {
                v.rotate(angle);
            }
            Op::Add(other) => {
                v.add(&other);
            }
            Op::Sub(other) => {
                v.sub(&other);
            }
            Op::Scale(sx, sy) => {
                v.scale(sx, sy);
            }
            Op::Project(axis) if checked => {
                v.try_project(&axis)
                    .ok_or_else(|| anyhow!("project: degenerate axis {axis}"))?;
            }
            Op::Project(axis) => {
                v.project(&axis);
            }
            Op::ProjectN(axis) => {
                v.project_n(&axis);
            }
            Op::Reflect(axis) if checked => {
                v.try_reflect(&axis)
                    .ok_or_else(|| anyhow!("reflect: degenerate axis {axis}"))?;
            }
            Op::Reflect(axis) => {
                v.reflect(&axis);
            }
            Op::ReflectN(axis) => {
                v.reflect_n(&axis);
            }
        }
        Ok(())
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, args) = match s.split_once(':') {
            Some((n, a)) => (n.trim(), Some(a)),
            None => (s.trim(), None),
        };
        let name = name.to_ascii_lowercase();
        let nums = match args {
            Some(a) => parse_numbers(a).with_context(|| format!("arguments of `{s}`"))?,
            None => Vec::new(),
        };
        let pair = || -> Result<Vector> {
            match nums.as_slice() {
                [x, y] => Ok(Vector::new(*x, *y)),
                _ => bail!("`{name}` takes two numbers `x,y`, got {}", nums.len()),
            }
        };
        let op = match name.as_str() {
            "perp" | "reverse" | "normalize" if !nums.is_empty() => {
                bail!("`{name}` takes no arguments")
            }
            "perp" => Op::Perp,
            "reverse" => Op::Reverse,
            "normalize" => Op::Normalize,
            "rotate" => match nums.as_slice() {
                [a] => Op::Rotate(*a),
                _ => bail!("`rotate` takes one angle in radians"),
            },
            "scale" => match nums.as_slice() {
                [sx] => Op::Scale(*sx, None),
                [sx, sy] => Op::Scale(*sx, Some(*sy)),
                _ => bail!("`scale` takes `sx` or `sx,sy`"),
            },
            "add" => Op::Add(pair()?),
            "sub" => Op::Sub(pair()?),
            "project" => Op::Project(pair()?),
            "projectn" => Op::ProjectN(pair()?),
            "reflect" => Op::Reflect(pair()?),
            "reflectn" => Op::ReflectN(pair()?),
            _ => bail!("unknown op `{name}`"),
        };
        Ok(op)
    }
}

/// Comma-separated floats; whitespace around items is ignored.
pub fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            let t = t.trim();
            t.parse::<f64>()
                .with_context(|| format!("not a number: `{t}`"))
        })
        .collect()
}

/// `x,y` into a vector.
pub fn parse_pair(s: &str) -> Result<Vector> {
    match parse_numbers(s)?.as_slice() {
        [x, y] => Ok(Vector::new(*x, *y)),
        other => bail!("expected `x,y`, got {} numbers", other.len()),
    }
}
