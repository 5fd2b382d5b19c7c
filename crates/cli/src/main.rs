use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hullcheck::geom2::DEFAULT_EPS;
use hullcheck::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{parse_problem, write_problem, Problem};

#[derive(Parser)]
#[command(name = "hullcheck-cli")]
#[command(about = "Validate a claimed convex hull of a planar point set")]
struct Cmd {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `N, x y .., C, indices ..` and print Yes or No
    Check {
        /// Input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Sign tolerance for orientation tests
        #[arg(long, default_value_t = DEFAULT_EPS)]
        eps: f64,
        /// Print a JSON object instead of the bare answer
        #[arg(long)]
        json: bool,
    },
    /// Write a random valid instance in the input format
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 20)]
        interior: usize,
        #[arg(long, default_value_t = 0)]
        on_edge: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Output file (plus a provenance sidecar); stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check { input, eps, json } => check(input, eps, json),
        Action::Sample {
            vertices,
            interior,
            on_edge,
            seed,
            index,
            out,
        } => {
            let cfg = InstanceCfg {
                polygon: EllipseCfg {
                    vertex_count: VertexCount::Fixed(vertices),
                    ..EllipseCfg::default()
                },
                interior,
                on_edge,
            };
            sample(cfg, ReplayToken { seed, index }, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Machine-readable result of `check --json`.
#[derive(Serialize)]
struct CheckReport {
    answer: &'static str,
    reason: &'static str,
    outside_index: Option<usize>,
    points: usize,
    hull: usize,
    eps: f64,
}

/// Boundary checks, then the core; returns the rendered answer.
fn run_check(problem: &Problem, cfg: GeomCfg, json: bool) -> Result<String> {
    check_hull_indices(problem.points.len(), &problem.hull_indices)?;
    let verdict = hullcheck::check(&problem.points, &problem.hull_indices, cfg);
    tracing::info!(
        points = problem.points.len(),
        hull = problem.hull_indices.len(),
        verdict = verdict.reason(),
        "check"
    );
    if !json {
        return Ok(verdict.answer().to_string());
    }
    let outside_index = match verdict {
        Verdict::PointOutside { index } => Some(index),
        _ => None,
    };
    let report = CheckReport {
        answer: verdict.answer(),
        reason: verdict.reason(),
        outside_index,
        points: problem.points.len(),
        hull: problem.hull_indices.len(),
        eps: cfg.eps_sign,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn check(input: Option<PathBuf>, eps: f64, json: bool) -> Result<()> {
    let cfg = GeomCfg::with_eps(eps)?;
    let text = read_input(input.as_deref())?;
    let problem = parse_problem(&text)?;
    println!("{}", run_check(&problem, cfg, json)?);
    Ok(())
}

fn sample(cfg: InstanceCfg, tok: ReplayToken, out: Option<&Path>) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, "sample");
    let inst = draw_instance(cfg, tok);
    let text = write_problem(&inst.points, &inst.hull_indices);
    let Some(out_path) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, text).with_context(|| format!("writing {}", out_path.display()))?;

    let params = json!({
        "seed": tok.seed,
        "index": tok.index,
        "vertices": inst.hull_indices.len(),
        "interior": cfg.interior,
        "on_edge": cfg.on_edge,
    });
    provenance::write_sidecar(out_path, provenance::Payload::new("sample", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["default_eps"] = json!(DEFAULT_EPS);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn problem(text: &str) -> Problem {
        parse_problem(text).unwrap()
    }

    #[test]
    fn answers_yes_and_no() {
        let cfg = GeomCfg::default();
        let yes = problem("4  0 0  4 0  0 4  1 1  3  0 1 2");
        assert_eq!(run_check(&yes, cfg, false).unwrap(), "Yes");
        let no = problem("4  0 0  4 0  0 4  5 5  3  0 1 2");
        assert_eq!(run_check(&no, cfg, false).unwrap(), "No");
        assert_eq!(run_check(&problem("0 0"), cfg, false).unwrap(), "Yes");
        assert_eq!(run_check(&problem("1 3 3 0"), cfg, false).unwrap(), "No");
    }

    #[test]
    fn usage_errors_stop_before_the_core() {
        let cfg = GeomCfg::default();
        let err = run_check(&problem("2 0 0 1 1 1 2"), cfg, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UsageError>(),
            Some(UsageError::IndexOutOfRange { index: 2, .. })
        ));
        let err = run_check(&problem("3 0 0 1 0 0 1 2 1 1"), cfg, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UsageError>(),
            Some(UsageError::DuplicateIndex { index: 1 })
        ));
    }

    #[test]
    fn json_report_names_the_outside_point() {
        let no = problem("4  0 0  4 0  0 4  5 5  3  0 1 2");
        let out = run_check(&no, GeomCfg::default(), true).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["answer"], "No");
        assert_eq!(v["reason"], "point_outside");
        assert_eq!(v["outside_index"], 3);
        assert_eq!(v["points"], 4);
    }

    #[test]
    fn sampled_file_checks_yes() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("inst.txt");
        let cfg = InstanceCfg {
            on_edge: 2,
            ..InstanceCfg::default()
        };
        sample(cfg, ReplayToken { seed: 5, index: 1 }, Some(out.as_path())).unwrap();
        assert!(dir.path().join("nested").join("inst.provenance.json").exists());

        let text = read_input(Some(out.as_path())).unwrap();
        let answer = run_check(&parse_problem(&text).unwrap(), GeomCfg::default(), false).unwrap();
        assert_eq!(answer, "Yes");
    }

    #[test]
    fn missing_input_file_has_context() {
        let dir = tempdir().unwrap();
        let err = read_input(Some(dir.path().join("absent.txt").as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
