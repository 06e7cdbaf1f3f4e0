//! Command handlers for the `ngsfc` CLI.
//!
//! These functions load a dataset, order it along the requested curve and
//! write one text line per point to a file or stdout.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::info;
use nodegosper::{Code, PointCloud, SortedCurve, curve_from_name};

/// Options shared by the `sort` and `codes` subcommands.
pub struct CurveOptions<'a> {
    /// Dataset to read.
    pub input: &'a Path,
    /// Destination file; stdout when `None`.
    pub output: Option<&'a Path>,
    /// Deepest curve level.
    pub level: u32,
    /// Pattern name.
    pub pattern: &'a str,
    /// Number of points to read, all when `None`.
    pub count: Option<usize>,
    /// Print codes in base 8.
    pub octal: bool,
}

/// Load the dataset and construct the curve over it.
fn build(opts: &CurveOptions<'_>) -> Result<(PointCloud, SortedCurve)> {
    let cloud = PointCloud::load(opts.input, opts.count)
        .with_context(|| format!("failed to load {}", opts.input.display()))?;
    let curve = curve_from_name(opts.pattern, opts.level, cloud.bbox())?;
    let sorted = curve.construct(cloud.points())?;
    info!(
        "ordered {} points with the {} pattern at level {}",
        sorted.len(),
        sorted.pattern(),
        sorted.level()
    );
    Ok((cloud, sorted))
}

/// Open the output destination.
fn writer(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Format a code in decimal or octal.
fn format_code(code: Code, octal: bool) -> String {
    if octal {
        format!("{code:o}")
    } else {
        code.to_string()
    }
}

/// Write `rank index x y code` for every point, in curve order, using the
/// original coordinates.
pub fn sort(opts: &CurveOptions<'_>) -> Result<()> {
    let (cloud, sorted) = build(opts)?;
    let mut out = writer(opts.output)?;
    for (rank, entry) in sorted.entries().enumerate() {
        let p = cloud
            .original(entry.index as usize)
            .context("curve index out of range")?;
        writeln!(
            out,
            "{rank} {} {} {} {}",
            entry.index,
            p.x,
            p.y,
            format_code(entry.code, opts.octal)
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Write `index code rank` for every point, in input order.
pub fn codes(opts: &CurveOptions<'_>) -> Result<()> {
    let (_, sorted) = build(opts)?;
    let mut out = writer(opts.output)?;
    for (index, (code, rank)) in sorted
        .codes_by_index()
        .into_iter()
        .zip(sorted.ranks())
        .enumerate()
    {
        writeln!(out, "{index} {} {rank}", format_code(code, opts.octal))?;
    }
    out.flush()?;
    Ok(())
}
