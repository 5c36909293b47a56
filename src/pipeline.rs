//! One-shot generation pipelines.
//!
//! Each run is an independent, fully sequential pass:
//! scan -> group/sort -> pack -> geometry -> compose -> encode.
//! The returned run report carries the plan and the grouping census so
//! callers can print a summary or dump the plan as JSON.

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::error::PostergridResult;
use crate::geometry::{plan_collections, plan_pretty};
use crate::group::{group_posters, sort_parents};
use crate::model::{Grouped, LayoutPlan, PosterRef};
use crate::pack::optimal_rows;
use crate::render::{compose, save_jpeg};
use crate::scan::{scan_collections, scan_pretty};

/// Everything a multi-collection run decided, for inspection.
#[derive(Clone, Debug)]
pub struct CollectionsRun {
    pub primary: PosterRef,
    pub background: Option<PathBuf>,
    pub grouped: Grouped,
    pub plan: LayoutPlan,
}

/// Everything a pretty-display run decided, for inspection.
#[derive(Clone, Debug)]
pub struct PrettyRun {
    pub primary: PosterRef,
    pub rows: usize,
    pub parent_count: usize,
    pub plan: LayoutPlan,
}

/// Scan and plan the multi-collection display without rendering.
pub fn plan_collections_dir(
    input: &Path,
    cfg: &LayoutConfig,
) -> PostergridResult<CollectionsRun> {
    cfg.validate()?;
    let scan = scan_collections(input)?;
    let grouped = group_posters(scan.posters);
    let plan = plan_collections(&scan.primary, &grouped, cfg)?;
    Ok(CollectionsRun {
        primary: scan.primary,
        background: scan.background,
        grouped,
        plan,
    })
}

/// Generate the multi-collection display and write it to `output`.
pub fn generate_collections(
    input: &Path,
    output: &Path,
    cfg: &LayoutConfig,
) -> PostergridResult<CollectionsRun> {
    let run = plan_collections_dir(input, cfg)?;
    let canvas = compose(&run.plan, &run.primary, run.background.as_deref())?;
    save_jpeg(output, &canvas, cfg.jpeg_quality)?;
    Ok(run)
}

/// Scan and plan the pretty display without rendering.
///
/// `rows_override` skips the optimal-rows search when set.
pub fn plan_pretty_dir(
    input: &Path,
    rows_override: Option<usize>,
    cfg: &LayoutConfig,
) -> PostergridResult<PrettyRun> {
    cfg.validate()?;
    let scan = scan_pretty(input)?;
    let mut parents = scan.parents;
    sort_parents(&mut parents);

    let rows = rows_override.unwrap_or_else(|| optimal_rows(parents.len(), cfg));
    let plan = plan_pretty(&scan.primary, &parents, rows, cfg)?;
    Ok(PrettyRun {
        primary: scan.primary,
        rows,
        parent_count: parents.len(),
        plan,
    })
}

/// Generate the pretty display and write it to `output`.
pub fn generate_pretty(
    input: &Path,
    output: &Path,
    rows_override: Option<usize>,
    cfg: &LayoutConfig,
) -> PostergridResult<PrettyRun> {
    let run = plan_pretty_dir(input, rows_override, cfg)?;
    let canvas = compose(&run.plan, &run.primary, None)?;
    save_jpeg(output, &canvas, cfg.jpeg_quality)?;
    Ok(run)
}
