//! Random convex polygons and hull-check instances (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull-validation inputs used by
//!   property tests, benchmarks and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, place the vertices on the unit circle and push them through a
//!   random linear map (rotation × axis scaling) plus translation. The image of
//!   a circle under an invertible affine map is an ellipse, so the vertices are
//!   in strictly convex position without building a hull.
//! - Interior points are strict convex combinations of all vertices; edge
//!   points are interpolated on a random edge.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `hull::validate`, `hull::check`

use nalgebra::{Matrix2, Vector2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Elliptic polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct EllipseCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Semi-axis ratio lower bound in (0, 1]; the minor axis is drawn from
    /// `[aspect_min, 1] * base_radius`.
    pub aspect_min: f64,
    /// Major semi-axis length.
    pub base_radius: f64,
    /// Translation magnitude bound; the center is drawn from `[-offset, offset]²`.
    pub offset: f64,
}
impl Default for EllipseCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            aspect_min: 0.3,
            base_radius: 10.0,
            offset: 5.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw the vertices of a random strictly convex polygon, counterclockwise.
pub fn draw_polygon_elliptic(cfg: EllipseCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    draw_vertices(&cfg, &mut rng)
}

fn draw_vertices<R: Rng>(cfg: &EllipseCfg, rng: &mut R) -> Vec<Vector2<f64>> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r0 = cfg.base_radius.max(1e-9);
    let aspect = cfg.aspect_min.clamp(1e-3, 1.0);
    let delta = std::f64::consts::TAU / (n as f64);

    let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let rot = Matrix2::new(theta.cos(), -theta.sin(), theta.sin(), theta.cos());
    let minor = rng.gen_range(aspect..=1.0);
    let lin = rot * Matrix2::new(r0, 0.0, 0.0, r0 * minor);
    let off = cfg.offset.abs();
    let center = if off > 0.0 {
        Vector2::new(rng.gen_range(-off..=off), rng.gen_range(-off..=off))
    } else {
        Vector2::zeros()
    };

    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            lin * Vector2::new(th.cos(), th.sin()) + center
        })
        .collect()
}

/// Hull-check instance configuration.
#[derive(Clone, Copy, Debug)]
pub struct InstanceCfg {
    pub polygon: EllipseCfg,
    /// Points strictly inside the polygon.
    pub interior: usize,
    /// Points on hull edges (between two adjacent vertices).
    pub on_edge: usize,
}
impl Default for InstanceCfg {
    fn default() -> Self {
        Self {
            polygon: EllipseCfg::default(),
            interior: 20,
            on_edge: 0,
        }
    }
}

/// A point set plus the indices claimed to form its convex hull.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub points: Vec<Vector2<f64>>,
    pub hull_indices: Vec<usize>,
}

/// Draw a valid instance: vertices of a strictly convex polygon, interior and
/// edge points, all shuffled. Hull indices come out in random order.
pub fn draw_instance(cfg: InstanceCfg, tok: ReplayToken) -> Instance {
    let mut rng = tok.to_std_rng();
    let verts = draw_vertices(&cfg.polygon, &mut rng);
    let n = verts.len();

    let mut tagged: Vec<(Vector2<f64>, bool)> = verts.iter().map(|&v| (v, true)).collect();
    for _ in 0..cfg.interior {
        // strictly positive weights -> strict convex combination
        let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.05..1.0)).collect();
        let total: f64 = weights.iter().sum();
        let p = verts
            .iter()
            .zip(&weights)
            .fold(Vector2::zeros(), |acc: Vector2<f64>, (v, w)| acc + v * (w / total));
        tagged.push((p, false));
    }
    for _ in 0..cfg.on_edge {
        let k = rng.gen_range(0..n);
        let (a, b) = (verts[k], verts[(k + 1) % n]);
        let t = rng.gen_range(0.1..0.9);
        tagged.push((a + (b - a) * t, false));
    }
    tagged.shuffle(&mut rng);

    let mut hull_indices: Vec<usize> = tagged
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, on_hull))| on_hull.then_some(i))
        .collect();
    hull_indices.shuffle(&mut rng);
    Instance {
        points: tagged.into_iter().map(|(p, _)| p).collect(),
        hull_indices,
    }
}
