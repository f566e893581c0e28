use anyhow::Result;
use chainhull::sample::{draw_points, ReplayToken, SampleCfg, Shape};
use chainhull::{compute_hull_from_sorted_with, compute_hull_with, HullCfg};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::{read_points, write_json, HullDoc};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "In-place convex hulls over point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a CSV (x,y columns) or JSON point file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Input is already sorted by x, then y; skip the sort
        #[arg(long)]
        presorted: bool,
        /// Borrow index buffers from the process-wide pool
        #[arg(long)]
        reuse_buffers: bool,
        /// Scan both chains in parallel from this many points on
        #[arg(long, default_value_t = HullCfg::default().parallel_min_len)]
        parallel_min_len: usize,
    },
    /// Write a random point cloud as a JSON coordinate array
    Sample {
        #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Radial jitter for `ring`
        #[arg(long, default_value_t = 0.05)]
        jitter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Disk,
    Ring,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            presorted,
            reuse_buffers,
            parallel_min_len,
        } => {
            let cfg = HullCfg {
                reuse_buffers,
                parallel_min_len,
            };
            hull(&input, &out, presorted, cfg).map(|_| ())
        }
        Action::Sample {
            shape,
            count,
            seed,
            index,
            jitter,
            out,
        } => {
            let shape = match shape {
                ShapeArg::Square => Shape::Square,
                ShapeArg::Disk => Shape::Disk,
                ShapeArg::Ring => Shape::Ring { jitter },
            };
            sample(SampleCfg { count, shape }, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn hull(input: &Path, out: &Path, presorted: bool, cfg: HullCfg) -> Result<HullDoc> {
    let mut points = read_points(input)?;
    let input_len = points.len();
    tracing::info!(input = %input.display(), input_len, presorted, "hull");

    let view = if presorted {
        compute_hull_from_sorted_with(&mut points[..], cfg)
    } else {
        compute_hull_with(&mut points[..], cfg)
    };
    let doc = HullDoc {
        input_len,
        hull_len: view.len(),
        hull: view.to_vec(),
    };
    tracing::info!(hull_len = doc.hull_len, out = %out.display(), "hull_done");

    write_json(out, &doc)?;
    let payload = Payload::new(
        "hull",
        json!({
            "input": input.to_string_lossy(),
            "presorted": presorted,
            "reuse_buffers": cfg.reuse_buffers,
            "parallel_min_len": cfg.parallel_min_len,
        }),
    )
    .with_counts(json!({ "input_len": input_len, "hull_len": doc.hull_len }));
    write_sidecar(out, payload)?;
    Ok(doc)
}

fn sample(cfg: SampleCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, shape = ?cfg.shape, seed = tok.seed, index = tok.index, "sample");
    let points = draw_points(cfg, tok);
    write_json(out, &points)?;
    let payload = Payload::new(
        "sample",
        json!({
            "shape": format!("{:?}", cfg.shape),
            "seed": tok.seed,
            "index": tok.index,
        }),
    )
    .with_counts(json!({ "count": points.len() }));
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "chainhull": chainhull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
