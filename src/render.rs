//! Compositing.
//!
//! Mechanical consumer of a [`LayoutPlan`]: every coordinate and box
//! size was decided by the geometry pass, so rendering is a flat list
//! of decode/resize/paste operations plus the optional blurred
//! background underneath. Placements are independent of each other and
//! could be applied in any order.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::blur::{self, BACKGROUND_RADIUS};
use crate::error::{PostergridError, PostergridResult};
use crate::model::{LayoutPlan, PosterRef};

/// Compose the full canvas for a plan.
///
/// Non-primary posters are resized to exactly the plan's cell size; a
/// poster whose native aspect differs from the first poster's simply
/// distorts. The primary poster uses the independently derived box from
/// the plan.
#[tracing::instrument(
    skip_all,
    fields(canvas_w = plan.canvas_width, canvas_h = plan.canvas_height, posters = plan.placements.len())
)]
pub fn compose(
    plan: &LayoutPlan,
    primary: &PosterRef,
    background: Option<&Path>,
) -> PostergridResult<RgbImage> {
    let mut canvas = RgbImage::from_pixel(plan.canvas_width, plan.canvas_height, Rgb([0, 0, 0]));

    if let Some(bg_path) = background {
        let bg = load_resized(bg_path, plan.canvas_width, plan.canvas_height)?;
        let blurred = blur::blur_rgb8(
            bg.as_raw(),
            plan.canvas_width,
            plan.canvas_height,
            BACKGROUND_RADIUS,
            blur::sigma_for_radius(BACKGROUND_RADIUS),
        )?;
        canvas = RgbImage::from_raw(plan.canvas_width, plan.canvas_height, blurred)
            .ok_or_else(|| PostergridError::layout("blurred background buffer size mismatch"))?;
    }

    let primary_img = load_resized(&primary.path, plan.primary.width, plan.primary.height)?;
    imageops::replace(
        &mut canvas,
        &primary_img,
        i64::from(plan.primary.x),
        i64::from(plan.primary.y),
    );

    for placement in &plan.placements {
        let img = load_resized(&placement.poster.path, plan.cell_width, plan.cell_height)?;
        imageops::replace(
            &mut canvas,
            &img,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    Ok(canvas)
}

/// Decode an image, drop any alpha, and resize to an exact box.
fn load_resized(path: &Path, width: u32, height: u32) -> PostergridResult<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    if img.dimensions() == (width, height) {
        return Ok(img);
    }
    Ok(imageops::resize(&img, width, height, FilterType::Lanczos3))
}

/// Encode the canvas as JPEG at the configured quality.
pub fn save_jpeg(path: &Path, canvas: &RgbImage, quality: u8) -> PostergridResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    encoder.encode_image(canvas)?;
    Ok(())
}
