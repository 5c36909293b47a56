//! Canvas geometry.
//!
//! Turns packed assignments into absolute pixel placements. All
//! non-primary posters share one cell size derived from the first
//! poster in layout order; the primary poster is resized to span the
//! full grid height with its own aspect ratio deciding its width.
//! Narrow gaps separate posters inside a column, wide gaps separate
//! major blocks, and one narrow gap of border surrounds everything.

use crate::config::LayoutConfig;
use crate::error::{PostergridError, PostergridResult};
use crate::model::{Grouped, LayoutPlan, Placement, PosterRef, PrimaryPlacement};
use crate::pack::{columns_needed, fixed_columns, standalone_cells};

/// Plan the multi-collection display: primary poster left, collection
/// columns in the middle, standalones in their own block on the right.
#[tracing::instrument(
    skip(primary, grouped, cfg),
    fields(collections = grouped.collections.len(), standalones = grouped.standalones.len())
)]
pub fn plan_collections(
    primary: &PosterRef,
    grouped: &Grouped,
    cfg: &LayoutConfig,
) -> PostergridResult<LayoutPlan> {
    cfg.validate()?;

    let columns = cfg.columns as usize;
    let assign = fixed_columns(grouped.collections.len(), columns);

    // Standalone-only inputs still get a grid; rows then comes from the
    // standalone count instead of the (empty) collection set.
    let rows = if assign.rows == 0 && !grouped.standalones.is_empty() {
        grouped.standalones.len().div_ceil(columns)
    } else {
        assign.rows
    };

    if rows == 0 {
        return Ok(degenerate_plan(primary, cfg));
    }

    let first = grouped.first_poster().ok_or_else(|| {
        PostergridError::layout("groups are non-empty but no poster defines the cell size")
    })?;
    let cell_w = cfg.base_width;
    let cell_h = scaled_height(cell_w, first.aspect);

    let gap = cfg.gap;
    let wide = cfg.wide_gap();

    // Width of each occupied collection column: widest group decides.
    let used_cols = columns_needed(grouped.collections.len(), rows);
    let mut col_widths = vec![0u32; used_cols];
    for (i, cell) in assign.cells.iter().enumerate() {
        let members = grouped.collections[i].members.len() as u32;
        let width = members * cell_w + (members - 1) * gap;
        col_widths[cell.column] = col_widths[cell.column].max(width);
    }

    let standalone_cols = columns_needed(grouped.standalones.len(), rows) as u32;
    let standalone_width = if standalone_cols > 0 {
        standalone_cols * cell_w + (standalone_cols - 1) * gap
    } else {
        0
    };

    let rows_u = rows as u32;
    let grid_height = rows_u * cell_h + (rows_u - 1) * gap;
    let primary_w = scaled_width(grid_height, primary.aspect);

    // Major blocks joined by wide gaps, narrow border on all sides.
    let mut blocks = vec![primary_w];
    blocks.extend(&col_widths);
    if standalone_cols > 0 {
        blocks.push(standalone_width);
    }
    let canvas_width =
        2 * gap + blocks.iter().sum::<u32>() + (blocks.len() as u32 - 1) * wide;
    let canvas_height = 2 * gap + grid_height;

    let mut placements = Vec::with_capacity(grouped.poster_count());

    // x origin of each collection column, then of the standalone block
    let mut block_x = Vec::with_capacity(used_cols + 1);
    let mut x = gap + primary_w + wide;
    for width in &col_widths {
        block_x.push(x);
        x += width + wide;
    }
    block_x.push(x);

    for (i, collection) in grouped.collections.iter().enumerate() {
        let cell = assign.cells[i];
        let y = gap + cell.row as u32 * (cell_h + gap);
        for (j, member) in collection.members.iter().enumerate() {
            placements.push(Placement {
                poster: member.clone(),
                x: block_x[cell.column] + j as u32 * (cell_w + gap),
                y,
            });
        }
    }

    let standalone_x = block_x[used_cols];
    for (cell, poster) in standalone_cells(grouped.standalones.len(), rows)
        .iter()
        .zip(&grouped.standalones)
    {
        placements.push(Placement {
            poster: poster.clone(),
            x: standalone_x + cell.column as u32 * (cell_w + gap),
            y: gap + cell.row as u32 * (cell_h + gap),
        });
    }

    Ok(LayoutPlan {
        canvas_width,
        canvas_height,
        cell_width: cell_w,
        cell_height: cell_h,
        primary: PrimaryPlacement {
            x: gap,
            y: gap,
            width: primary_w,
            height: grid_height,
        },
        placements,
    })
}

/// Plan the pretty display: primary poster left, a flat row-major grid
/// of parent posters right, narrow gaps throughout.
#[tracing::instrument(skip(primary, parents, cfg), fields(parents = parents.len()))]
pub fn plan_pretty(
    primary: &PosterRef,
    parents: &[PosterRef],
    rows: usize,
    cfg: &LayoutConfig,
) -> PostergridResult<LayoutPlan> {
    cfg.validate()?;

    if parents.is_empty() {
        return Ok(degenerate_plan(primary, cfg));
    }
    if rows == 0 {
        return Err(PostergridError::layout("row count must be > 0"));
    }

    let first = &parents[0];
    let cell_w = cfg.base_width;
    let cell_h = scaled_height(cell_w, first.aspect);
    let gap = cfg.gap;

    let cols = parents.len().div_ceil(rows) as u32;
    let rows_u = rows as u32;

    let grid_height = rows_u * cell_h + (rows_u - 1) * gap;
    let primary_w = scaled_width(grid_height, primary.aspect);
    let right_width = cols * cell_w + (cols - 1) * gap;

    let canvas_width = 3 * gap + primary_w + right_width;
    let canvas_height = 2 * gap + grid_height;

    let x_offset = 2 * gap + primary_w;
    let placements = parents
        .iter()
        .enumerate()
        .map(|(i, poster)| {
            let row = (i as u32) / cols;
            let col = (i as u32) % cols;
            Placement {
                poster: poster.clone(),
                x: x_offset + col * (cell_w + gap),
                y: gap + row * (cell_h + gap),
            }
        })
        .collect();

    Ok(LayoutPlan {
        canvas_width,
        canvas_height,
        cell_width: cell_w,
        cell_height: cell_h,
        primary: PrimaryPlacement {
            x: gap,
            y: gap,
            width: primary_w,
            height: grid_height,
        },
        placements,
    })
}

/// No non-primary posters at all: the canvas is the primary poster at
/// twice the base width plus the narrow border.
fn degenerate_plan(primary: &PosterRef, cfg: &LayoutConfig) -> LayoutPlan {
    let width = cfg.base_width * 2;
    let height = scaled_height(width, primary.aspect);
    let gap = cfg.gap;
    LayoutPlan {
        canvas_width: width + 2 * gap,
        canvas_height: height + 2 * gap,
        cell_width: 0,
        cell_height: 0,
        primary: PrimaryPlacement {
            x: gap,
            y: gap,
            width,
            height,
        },
        placements: Vec::new(),
    }
}

/// Height of an image resized to `width` keeping `aspect` (h/w).
fn scaled_height(width: u32, aspect: f64) -> u32 {
    (f64::from(width) * aspect).round() as u32
}

/// Width of an image resized to `height` keeping `aspect` (h/w).
fn scaled_width(height: u32, aspect: f64) -> u32 {
    (f64::from(height) / aspect).round() as u32
}
