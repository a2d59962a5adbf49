use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::geom2::rand::{draw_triangle, extent_is_sampleable, ReplayToken, TriangleCfg};
use trigon::Triangle;

mod provenance;
mod report;

use provenance::Payload;
use report::{parse_point, CentersReport, LocateReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangle centers, barycentric coordinates and point location")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Three vertices given as `X,Y`.
#[derive(Args, Clone)]
struct Vertices {
    #[arg(long, allow_hyphen_values = true)]
    p1: String,
    #[arg(long, allow_hyphen_values = true)]
    p2: String,
    #[arg(long, allow_hyphen_values = true)]
    p3: String,
}

impl Vertices {
    fn triangle(&self) -> Result<Triangle> {
        let p1 = parse_point(&self.p1).context("--p1")?;
        let p2 = parse_point(&self.p2).context("--p2")?;
        let p3 = parse_point(&self.p3).context("--p3")?;
        let t = Triangle::new(p1, p2, p3);
        if t.is_degenerate() {
            tracing::warn!(p1 = %self.p1, p2 = %self.p2, p3 = %self.p3, "degenerate triangle");
        }
        Ok(t)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print sides, cosines, circles and named centers as JSON
    Centers {
        #[command(flatten)]
        tri: Vertices,
        /// Also write the JSON here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Barycentric coordinates and point-in-triangle tests for one query point
    Locate {
        #[command(flatten)]
        tri: Vertices,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Random well-shaped triangles with their centers, one JSON object per line
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let mut stdout = std::io::stdout().lock();
    match cmd.action {
        Action::Centers { tri, out } => centers(&tri, out.as_deref(), &mut stdout),
        Action::Locate { tri, point } => locate(&tri, &point),
        Action::Sample {
            seed,
            count,
            extent,
        } => sample(seed, count, extent, &mut stdout),
        Action::Report => report(),
    }
}

/// Print the centers report to `w`; with `out`, also write it there plus a sidecar.
fn centers<W: Write>(tri: &Vertices, out: Option<&Path>, w: &mut W) -> Result<()> {
    let t = tri.triangle()?;
    tracing::info!(degenerate = t.is_degenerate(), "centers");
    let body = serde_json::to_string_pretty(&CentersReport::new(&t))?;
    writeln!(w, "{body}")?;

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
        let params = json!({ "p1": tri.p1, "p2": tri.p2, "p3": tri.p3 });
        let sidecar = provenance::write_sidecar(out, &Payload::new("centers", params))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    }
    Ok(())
}

fn locate(tri: &Vertices, point: &str) -> Result<()> {
    let t = tri.triangle()?;
    let p = parse_point(point).context("--point")?;
    let r = LocateReport::new(&t, p);
    tracing::info!(
        inside_closed = r.inside_closed,
        inside_strict = r.inside_strict,
        "locate"
    );
    println!("{}", serde_json::to_string_pretty(&r)?);
    Ok(())
}

fn sample<W: Write>(seed: u64, count: u64, extent: f64, w: &mut W) -> Result<()> {
    tracing::info!(seed, count, extent, "sample");
    if !extent_is_sampleable(extent) {
        bail!("--extent {extent} is too large to sample (2·extent must be finite)");
    }
    let cfg = TriangleCfg {
        extent,
        ..TriangleCfg::default()
    };
    for index in 0..count {
        match draw_triangle(cfg, ReplayToken::new(seed, index)) {
            Some(t) => writeln!(w, "{}", serde_json::to_string(&CentersReport::new(&t))?)?,
            None => tracing::warn!(seed, index, "no acceptable triangle drawn"),
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(&Payload::new("report", json!({})));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
