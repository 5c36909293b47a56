//! Directory snapshot.
//!
//! Scanning fixes the enumeration order the rest of the pipeline
//! depends on: files sort lexicographically by name, so "first match
//! wins" tie-breaks (duplicate primary posters) are deterministic
//! regardless of how the filesystem enumerates entries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{self, PosterKind, PrettyKind};
use crate::error::{PostergridError, PostergridResult};
use crate::model::PosterRef;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// Snapshot for the multi-collection display.
#[derive(Clone, Debug)]
pub struct CollectionScan {
    pub primary: PosterRef,
    pub background: Option<PathBuf>,
    pub posters: Vec<PosterRef>,
}

/// Snapshot for the pretty display. Season/special posters are already
/// filtered out; parents keep scan order until sorted by natural key.
#[derive(Clone, Debug)]
pub struct PrettyScan {
    pub primary: PosterRef,
    pub parents: Vec<PosterRef>,
}

/// Scan `dir` under the multi-collection grammar.
///
/// The first primary poster in lexicographic order is kept and later
/// candidates are silently dropped; the same policy applies to the
/// background sentinel.
pub fn scan_collections(dir: &Path) -> PostergridResult<CollectionScan> {
    let mut primary = None;
    let mut background = None;
    let mut posters = Vec::new();

    for (path, stem) in image_files(dir)? {
        match classify::classify(&stem) {
            PosterKind::Primary => {
                if primary.is_none() {
                    primary = Some(poster_ref(path, stem, None)?);
                }
            }
            PosterKind::Background => {
                if background.is_none() {
                    background = Some(path);
                }
            }
            PosterKind::NumberedMember { collection, number } => {
                posters.push(poster_ref(path, collection, Some(number))?);
            }
            PosterKind::Standalone { name } => {
                posters.push(poster_ref(path, name, None)?);
            }
        }
    }

    let primary = primary.ok_or(PostergridError::NoPrimaryPoster)?;
    Ok(CollectionScan {
        primary,
        background,
        posters,
    })
}

/// Scan `dir` under the pretty-display grammar.
pub fn scan_pretty(dir: &Path) -> PostergridResult<PrettyScan> {
    let mut primary = None;
    let mut parents = Vec::new();

    for (path, stem) in image_files(dir)? {
        match classify::classify_pretty(&stem) {
            PrettyKind::Primary => {
                if primary.is_none() {
                    primary = Some(poster_ref(path, stem, None)?);
                }
            }
            PrettyKind::SeasonOrSpecial => {}
            PrettyKind::Parent => {
                parents.push(poster_ref(path, stem, None)?);
            }
        }
    }

    let primary = primary.ok_or(PostergridError::NoPrimaryPoster)?;
    Ok(PrettyScan { primary, parents })
}

/// Image files in `dir`, sorted lexicographically by file name.
/// Entries with non-UTF-8 names are skipped.
fn image_files(dir: &Path) -> PostergridResult<Vec<(PathBuf, String)>> {
    if !dir.is_dir() {
        return Err(PostergridError::MissingInput(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        files.push((path.clone(), stem.to_string()));
    }

    files.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(files)
}

fn poster_ref(
    path: PathBuf,
    display_name: String,
    sequence_number: Option<u32>,
) -> PostergridResult<PosterRef> {
    let aspect = probe_aspect(&path)?;
    Ok(PosterRef {
        path,
        display_name,
        sequence_number,
        aspect,
    })
}

/// Intrinsic height/width from the image header, without decoding
/// pixel data.
fn probe_aspect(path: &Path) -> PostergridResult<f64> {
    let (width, height) = image::image_dimensions(path)?;
    if width == 0 {
        return Err(PostergridError::layout(format!(
            "'{}' reports zero width",
            path.display()
        )));
    }
    Ok(f64::from(height) / f64::from(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([40, 40, 40]));
        img.save(dir.join(name)).unwrap();
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("postergrid-scan-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory_is_fatal() {
        let err = scan_collections(Path::new("/nonexistent/postergrid-input"));
        assert!(matches!(err, Err(PostergridError::MissingInput(_))));
    }

    #[test]
    fn scan_splits_primary_background_and_posters() {
        let dir = temp_dir("split");
        write_png(&dir, "MCU Collection.png", 200, 300);
        write_png(&dir, "Background.png", 320, 180);
        write_png(&dir, "Iron Man 1.png", 200, 300);
        write_png(&dir, "Thunderbolts.png", 200, 300);
        fs::write(dir.join("readme.md"), "not an image").unwrap();

        let scan = scan_collections(&dir).unwrap();
        assert_eq!(scan.primary.display_name, "MCU Collection");
        assert!((scan.primary.aspect - 1.5).abs() < 1e-9);
        assert!(scan.background.is_some());
        assert_eq!(scan.posters.len(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn first_primary_in_lexicographic_order_wins() {
        let dir = temp_dir("dup-primary");
        write_png(&dir, "Zeta Collection.png", 200, 300);
        write_png(&dir, "Alpha Collection.png", 200, 300);

        let scan = scan_collections(&dir);
        // both are primaries, so there are no posters; the earlier name
        // is the one kept
        assert_eq!(scan.unwrap().primary.display_name, "Alpha Collection");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_primary_aborts_gracefully() {
        let dir = temp_dir("no-primary");
        write_png(&dir, "Iron Man 1.png", 200, 300);

        let err = scan_collections(&dir);
        assert!(matches!(err, Err(PostergridError::NoPrimaryPoster)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn pretty_scan_drops_seasons_and_specials() {
        let dir = temp_dir("pretty");
        write_png(&dir, "Toon Collection.png", 200, 300);
        write_png(&dir, "Wacky Races (1968).png", 200, 300);
        write_png(&dir, "Wacky Races (1968) - Season 1.png", 200, 300);
        write_png(&dir, "Top Cat (1961) - Specials.png", 200, 300);

        let scan = scan_pretty(&dir).unwrap();
        assert_eq!(scan.primary.display_name, "Toon Collection");
        let names: Vec<&str> = scan.parents.iter().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, ["Wacky Races (1968)"]);

        let _ = fs::remove_dir_all(&dir);
    }
}
