use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tristrip::{
    check_strips, stitch_strips, stripify_with, triangles_from_rows, DegeneratePolicy,
    StripifyCfg, Triangle, Vertex,
};

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "tristrip-cli")]
#[command(about = "Convert triangle lists to triangle strips")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Stripify a triangle list (JSON triples, or a headerless 3-column CSV)
    Stripify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Faces simulated per direction when scoring seed starts
        #[arg(long)]
        lookahead: Option<usize>,
        #[arg(long)]
        no_merge: bool,
        /// Emit degenerate input triangles as their own strips
        #[arg(long)]
        keep_degenerate: bool,
        /// Join all strips into one
        #[arg(long)]
        stitch: bool,
    },
    /// Verify that a strips file decodes to exactly the given triangles
    Check {
        #[arg(long)]
        triangles: PathBuf,
        #[arg(long)]
        strips: PathBuf,
    },
    /// Write a generated triangle list
    Gen {
        #[arg(long, value_enum)]
        kind: GenKind,
        #[arg(long, default_value_t = 16)]
        cols: usize,
        #[arg(long, default_value_t = 16)]
        rows: usize,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 100)]
        vertices: usize,
        /// Seed for soups; for grids, shuffles the faces when given
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GenKind {
    Grid,
    Soup,
}

/// Flags of the `stripify` subcommand.
#[derive(Clone, Copy, Debug, Default)]
struct StripifyOpts {
    lookahead: Option<usize>,
    no_merge: bool,
    keep_degenerate: bool,
    stitch: bool,
}

impl StripifyOpts {
    fn cfg(&self) -> StripifyCfg {
        let mut cfg = StripifyCfg::default();
        if let Some(n) = self.lookahead {
            cfg.lookahead = n;
        }
        cfg.merge = !self.no_merge;
        if self.keep_degenerate {
            cfg.degenerate = DegeneratePolicy::Keep;
        }
        cfg
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct Stats {
    triangles: usize,
    degenerate: usize,
    strips: usize,
    indices: usize,
    stitched: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct StripsDoc {
    strips: Vec<Vec<Vertex>>,
    #[serde(default)]
    stats: Option<Stats>,
}

/// A strips file is either our own output document or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StripsFile {
    Doc(StripsDoc),
    Bare(Vec<Vec<Vertex>>),
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Stripify {
            input,
            out,
            lookahead,
            no_merge,
            keep_degenerate,
            stitch,
        } => {
            let opts = StripifyOpts {
                lookahead,
                no_merge,
                keep_degenerate,
                stitch,
            };
            run_stripify(&input, &out, opts).map(|_| ())
        }
        Action::Check { triangles, strips } => run_check(&triangles, &strips),
        Action::Gen {
            kind,
            cols,
            rows,
            count,
            vertices,
            seed,
            out,
        } => run_gen(kind, cols, rows, count, vertices, seed, &out),
        Action::Report => report(),
    }
}

fn run_stripify(input: &Path, out: &Path, opts: StripifyOpts) -> Result<Stats> {
    tracing::info!(input = %input.display(), out = %out.display(), ?opts, "stripify");
    let triangles = read_triangles(input)?;
    let cfg = opts.cfg();
    let mut strips = stripify_with(&triangles, cfg);
    if opts.stitch {
        let joined = stitch_strips(&strips);
        strips = if joined.is_empty() { Vec::new() } else { vec![joined] };
    }
    let stats = Stats {
        triangles: triangles.len(),
        degenerate: triangles.iter().filter(|t| tristrip::triangle::is_degenerate(t)).count(),
        strips: strips.len(),
        indices: strips.iter().map(Vec::len).sum(),
        stitched: opts.stitch,
    };
    tracing::info!(
        triangles = stats.triangles,
        strips = stats.strips,
        indices = stats.indices,
        "stripified"
    );

    ensure_parent(out)?;
    let doc = StripsDoc {
        strips,
        stats: Some(stats.clone()),
    };
    fs::write(out, serde_json::to_vec(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "lookahead": cfg.lookahead,
        "merge": cfg.merge,
        "keep_degenerate": opts.keep_degenerate,
        "stitch": opts.stitch,
    });
    let summary = serde_json::to_value(&stats)?;
    write_sidecar(out, Payload::new("stripify", params).with_summary(summary))?;
    Ok(stats)
}

fn run_check(triangles: &Path, strips: &Path) -> Result<()> {
    tracing::info!(triangles = %triangles.display(), strips = %strips.display(), "check");
    let tris = read_triangles(triangles)?;
    let strips = read_strips(strips)?;
    check_strips(&tris, &strips).context("strips do not match the triangle list")?;
    tracing::info!(triangles = tris.len(), strips = strips.len(), "check passed");
    Ok(())
}

fn run_gen(
    kind: GenKind,
    cols: usize,
    rows: usize,
    count: usize,
    vertices: usize,
    seed: Option<u64>,
    out: &Path,
) -> Result<()> {
    tracing::info!(?kind, out = %out.display(), "gen");
    let tris = match kind {
        GenKind::Grid => {
            let g = tristrip::gen::grid(cols, rows);
            match seed {
                Some(s) => tristrip::gen::shuffled(&g, s),
                None => g,
            }
        }
        GenKind::Soup => tristrip::gen::soup(count, vertices, seed.unwrap_or(0)),
    };
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec(&tris)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "kind": format!("{kind:?}").to_lowercase(),
        "cols": cols,
        "rows": rows,
        "count": count,
        "vertices": vertices,
        "seed": seed,
    });
    write_sidecar(
        out,
        Payload::new("gen", params).with_summary(serde_json::json!({ "triangles": tris.len() })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let cfg = StripifyCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": tristrip::VERSION,
        "defaults": {
            "lookahead": cfg.lookahead,
            "merge": cfg.merge,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Triangles from JSON (`[[a, b, c], ...]`) or, for `.csv`, three integer
/// columns without a header.
fn read_triangles(path: &Path) -> Result<Vec<Triangle>> {
    let rows = if path.extension().is_some_and(|e| e == "csv") {
        read_csv_rows(path)?
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice::<Vec<Vec<i64>>>(&bytes)
            .with_context(|| format!("parsing {} as a list of triples", path.display()))?
    };
    let tris = triangles_from_rows(&rows).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), triangles = tris.len(), "read triangles");
    Ok(tris)
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<i64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    if df.width() != 3 {
        bail!("{} has {} columns, expected 3", path.display(), df.width());
    }
    let columns = df
        .get_columns()
        .iter()
        .map(|s| s.cast(&DataType::Int64))
        .collect::<PolarsResult<Vec<_>>>()?;
    let columns = columns
        .iter()
        .map(|s| s.i64())
        .collect::<PolarsResult<Vec<_>>>()?;
    (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|c| c.get(row))
                .collect::<Option<Vec<i64>>>()
                .with_context(|| format!("row {row} of {} has an empty cell", path.display()))
        })
        .collect()
}

fn read_strips(path: &Path) -> Result<Vec<Vec<Vertex>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: StripsFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as strips", path.display()))?;
    Ok(match file {
        StripsFile::Doc(doc) => doc.strips,
        StripsFile::Bare(strips) => strips,
    })
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
