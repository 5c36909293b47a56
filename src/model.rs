use std::path::PathBuf;

/// One source poster plus its declared identity. Immutable once built
/// from the directory snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PosterRef {
    pub path: PathBuf,
    /// Identity from the filename: collection name for numbered members,
    /// the whole stem otherwise.
    pub display_name: String,
    /// Trailing integer for numbered collection members.
    pub sequence_number: Option<u32>,
    /// Intrinsic height/width of the source image.
    pub aspect: f64,
}

/// An ordered run of numbered posters sharing one collection name.
///
/// A standalone poster is the one-member, unnumbered case; grouping
/// keeps standalones in their own list so packing can place them in a
/// separate column block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Collection {
    pub name: String,
    pub members: Vec<PosterRef>,
}

/// Grouping output: collections ordered largest-first then by name,
/// standalones ordered by name.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grouped {
    pub collections: Vec<Collection>,
    pub standalones: Vec<PosterRef>,
}

impl Grouped {
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.standalones.is_empty()
    }

    /// First poster in layout order; its resized dimensions define the
    /// uniform cell size.
    pub fn first_poster(&self) -> Option<&PosterRef> {
        self.collections
            .first()
            .and_then(|c| c.members.first())
            .or_else(|| self.standalones.first())
    }

    pub fn poster_count(&self) -> usize {
        self.collections.iter().map(|c| c.members.len()).sum::<usize>() + self.standalones.len()
    }
}

/// Absolute top-left position for one non-primary poster. All such
/// posters share the plan's uniform cell size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub poster: PosterRef,
    pub x: u32,
    pub y: u32,
}

/// Position and resized box for the single tall primary poster, the
/// only element whose width is derived from its own aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PrimaryPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The engine's output: canvas geometry plus every absolute placement.
/// Recomputed fully on every run; a renderer can apply placements in
/// any order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPlan {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub primary: PrimaryPlacement,
    pub placements: Vec<Placement>,
}

impl LayoutPlan {
    /// True when every placement cell lies inside the canvas.
    pub fn placements_in_bounds(&self) -> bool {
        self.placements.iter().all(|p| {
            p.x + self.cell_width <= self.canvas_width
                && p.y + self.cell_height <= self.canvas_height
        })
    }
}
