//! Text format shared by `check` (reader) and `sample` (writer).
//!
//! Whitespace-separated tokens: `N`, then `N` coordinate pairs `x y`, then `C`,
//! then `C` hull indices. Line breaks carry no meaning.

use anyhow::{bail, Context, Result};
use hullcheck::{UsageError, Vec2};
use std::fmt::Write as _;
use std::str::{FromStr, SplitWhitespace};

/// Parsed input: points plus the claimed hull indices (unvalidated).
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub points: Vec<Vec2<f64>>,
    pub hull_indices: Vec<usize>,
}

struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            pos: 0,
        }
    }

    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some(tok) = self.iter.next() else {
            bail!("unexpected end of input while reading {what} (token #{})", self.pos);
        };
        self.pos += 1;
        tok.parse::<T>()
            .with_context(|| format!("invalid {what} {tok:?} at token #{}", self.pos))
    }
}

/// Parse the token stream. Rejects `C > N` as soon as `C` is read, before any
/// index is consumed; index range and distinctness are left to
/// `check_hull_indices`.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut toks = Tokens::new(text);
    let n: usize = toks.next("point count N")?;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x: f64 = toks.next(&format!("x of point {i}"))?;
        let y: f64 = toks.next(&format!("y of point {i}"))?;
        if !(x.is_finite() && y.is_finite()) {
            bail!("point {i} has a non-finite coordinate ({x}, {y})");
        }
        points.push(Vec2::new(x, y));
    }
    let c: usize = toks.next("hull size C")?;
    if c > n {
        return Err(UsageError::TooManyHullIndices { hull: c, points: n }.into());
    }
    let mut hull_indices = Vec::with_capacity(c);
    for k in 0..c {
        hull_indices.push(toks.next(&format!("hull index #{k}"))?);
    }
    let rest = toks.iter.count();
    if rest > 0 {
        tracing::warn!(ignored = rest, "trailing tokens after hull indices");
    }
    Ok(Problem {
        points,
        hull_indices,
    })
}

/// Render points and hull indices in the input format.
pub fn write_problem(points: &[Vec2<f64>], hull_indices: &[usize]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    let _ = writeln!(out, "{}", hull_indices.len());
    let idx: Vec<String> = hull_indices.iter().map(|i| i.to_string()).collect();
    let _ = writeln!(out, "{}", idx.join(" "));
    out
}
