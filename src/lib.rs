#![forbid(unsafe_code)]

//! Deterministic poster-collage generation.
//!
//! A folder of poster images named by convention becomes one composited
//! overview image: filenames are classified, grouped and ordered, a
//! pixel-accurate grid layout is computed, and the plan is rendered to
//! JPEG. The whole pipeline is a pure function of the directory
//! snapshot and a [`LayoutConfig`].

pub mod blur;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod group;
pub mod model;
pub mod pack;
pub mod pipeline;
pub mod render;
pub mod scan;

pub use classify::{PosterKind, PrettyKind, classify, classify_pretty};
pub use config::LayoutConfig;
pub use error::{PostergridError, PostergridResult};
pub use geometry::{plan_collections, plan_pretty};
pub use group::{group_posters, natural_key, sort_parents};
pub use model::{Collection, Grouped, LayoutPlan, Placement, PosterRef, PrimaryPlacement};
pub use pack::{ColumnAssignment, fixed_columns, optimal_rows};
pub use pipeline::{
    CollectionsRun, PrettyRun, generate_collections, generate_pretty, plan_collections_dir,
    plan_pretty_dir,
};
