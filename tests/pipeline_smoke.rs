//! End-to-end runs against a synthesized poster directory.

use std::fs;
use std::path::{Path, PathBuf};

use postergrid::{LayoutConfig, PostergridError};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("postergrid-smoke-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) {
    image::RgbImage::from_pixel(width, height, image::Rgb(color))
        .save(dir.join(name))
        .unwrap();
}

fn small_cfg() -> LayoutConfig {
    // keep the canvas tiny so the smoke test stays fast
    LayoutConfig {
        base_width: 30,
        gap: 3,
        ..LayoutConfig::collections()
    }
}

#[test]
fn collections_run_writes_a_decodable_canvas() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = temp_dir("collections");
    write_png(&dir, "MCU Collection.png", 40, 60, [120, 0, 0]);
    write_png(&dir, "Iron Man 1.png", 40, 60, [0, 120, 0]);
    write_png(&dir, "Iron Man 2.png", 40, 60, [0, 130, 0]);
    write_png(&dir, "Captain America 1.png", 40, 60, [0, 0, 120]);
    write_png(&dir, "Thunderbolts.png", 40, 60, [120, 120, 0]);
    write_png(&dir, "Background.png", 32, 18, [20, 20, 80]);

    let out = dir.join("out/collage.jpg");
    let run = postergrid::generate_collections(&dir, &out, &small_cfg()).unwrap();

    assert_eq!(run.grouped.collections.len(), 2);
    assert_eq!(run.grouped.collections[0].name, "Iron Man");
    assert_eq!(run.grouped.standalones.len(), 1);
    assert!(run.background.is_some());
    assert!(run.plan.placements_in_bounds());

    let img = image::open(&out).unwrap();
    assert_eq!(img.width(), run.plan.canvas_width);
    assert_eq!(img.height(), run.plan.canvas_height);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerunning_the_same_directory_reproduces_the_plan() {
    let dir = temp_dir("idempotent");
    write_png(&dir, "Pixar Collection.png", 40, 60, [120, 0, 0]);
    write_png(&dir, "Cars 1.png", 40, 60, [0, 120, 0]);
    write_png(&dir, "Cars 2.png", 40, 60, [0, 130, 0]);
    write_png(&dir, "Luca.png", 40, 60, [0, 0, 120]);

    let cfg = small_cfg();
    let a = postergrid::plan_collections_dir(&dir, &cfg).unwrap();
    let b = postergrid::plan_collections_dir(&dir, &cfg).unwrap();
    assert_eq!(a.plan, b.plan);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_directory_aborts_before_layout() {
    let err = postergrid::plan_collections_dir(
        Path::new("/nonexistent/postergrid-smoke"),
        &small_cfg(),
    );
    assert!(matches!(err, Err(PostergridError::MissingInput(_))));
}

#[test]
fn primary_only_directory_yields_the_degenerate_canvas() {
    let dir = temp_dir("degenerate");
    write_png(&dir, "Solo Collection.png", 40, 60, [120, 0, 0]);

    let cfg = small_cfg();
    let out = dir.join("collage.jpg");
    let run = postergrid::generate_collections(&dir, &out, &cfg).unwrap();

    assert!(run.plan.placements.is_empty());
    assert_eq!(run.plan.primary.width, 2 * cfg.base_width);
    assert_eq!(run.plan.canvas_width, 2 * cfg.base_width + 2 * cfg.gap);
    assert!(out.is_file());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pretty_run_sorts_parents_naturally_and_writes_output() {
    let dir = temp_dir("pretty");
    write_png(&dir, "Hanna-Barbera Collection.png", 40, 60, [120, 0, 0]);
    write_png(&dir, "Show 12 (1999).png", 40, 60, [0, 120, 0]);
    write_png(&dir, "Show 2 (1999).png", 40, 60, [0, 130, 0]);
    write_png(&dir, "The Apple (2001).png", 40, 60, [0, 0, 120]);
    write_png(&dir, "Show 2 (1999) - Season 1.png", 40, 60, [9, 9, 9]);

    let cfg = LayoutConfig {
        base_width: 30,
        gap: 3,
        ..LayoutConfig::pretty()
    };
    let out = dir.join("pretty.jpg");
    let run = postergrid::generate_pretty(&dir, &out, Some(3), &cfg).unwrap();

    assert_eq!(run.parent_count, 3);
    assert_eq!(run.rows, 3);
    let names: Vec<&str> = run
        .plan
        .placements
        .iter()
        .map(|p| p.poster.display_name.as_str())
        .collect();
    assert_eq!(
        names,
        ["The Apple (2001)", "Show 2 (1999)", "Show 12 (1999)"]
    );

    let img = image::open(&out).unwrap();
    assert_eq!(img.width(), run.plan.canvas_width);

    let _ = fs::remove_dir_all(&dir);
}
