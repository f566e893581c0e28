//! Reading and writing point files.
//!
//! Inputs: CSV with `x`,`y` columns (polars lazy reader), or JSON holding
//! either a bare `[[x, y], ...]` array or an object with a `coordinates`
//! array (GeoJSON `MultiPoint`/`LineString` style; extra ordinates ignored).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointsDoc {
    Bare(Vec<Vec<f64>>),
    Geometry { coordinates: Vec<Vec<f64>> },
}

/// Result document written by `cli hull`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HullDoc {
    pub input_len: usize,
    pub hull_len: usize,
    pub hull: Vec<[f64; 2]>,
}

pub fn read_points(path: &Path) -> Result<Vec<[f64; 2]>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let points = match ext.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") | Some("geojson") => read_json(path)?,
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    };
    if let Some(i) = points
        .iter()
        .position(|p| !(p[0].is_finite() && p[1].is_finite()))
    {
        bail!("point {i} in {} is not finite", path.display());
    }
    Ok(points)
}

fn read_csv(path: &Path) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, xy)| match xy {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => bail!("row {i} of {} is missing a coordinate", path.display()),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<[f64; 2]>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PointsDoc =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    let raw = match doc {
        PointsDoc::Bare(v) | PointsDoc::Geometry { coordinates: v } => v,
    };
    raw.into_iter()
        .enumerate()
        .map(|(i, p)| match p[..] {
            [x, y, ..] => Ok([x, y]),
            _ => bail!("position {i} of {} has fewer than 2 ordinates", path.display()),
        })
        .collect()
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
