use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use postergrid::{CollectionsRun, LayoutConfig, LayoutPlan, PrettyRun};

#[derive(Parser, Debug)]
#[command(name = "postergrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a collection-of-collections display: primary poster on
    /// the left, numbered collections in columns, standalones in their
    /// own block.
    Collections(CollectionsArgs),
    /// Generate a pretty display: primary poster on the left, parent
    /// posters in an aspect-ratio-optimized grid on the right.
    Pretty(PrettyArgs),
}

#[derive(Parser, Debug)]
struct CollectionsArgs {
    /// Input folder containing poster images.
    #[arg(short, long, default_value = "input")]
    input: PathBuf,

    /// Output filename.
    #[arg(short, long, default_value = "collection-of-collections.jpg")]
    output: PathBuf,

    /// Number of collection columns.
    #[arg(long, default_value_t = 2)]
    columns: u32,

    /// Width in pixels each poster is resized to.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Gap in pixels between posters inside a column.
    #[arg(long, default_value_t = 20)]
    gap: u32,

    /// Write the computed layout plan as JSON.
    #[arg(long, value_name = "PATH")]
    dump_plan: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PrettyArgs {
    /// Input folder containing poster images.
    #[arg(short, long, default_value = "input")]
    input: PathBuf,

    /// Output filename.
    #[arg(short, long, default_value = "output.jpg")]
    output: PathBuf,

    /// Row count; skips the optimal-rows search.
    #[arg(long)]
    rows: Option<usize>,

    /// Target width/height ratio for the optimal-rows search.
    #[arg(long, default_value_t = 16.0 / 9.0)]
    target_ratio: f64,

    /// Width in pixels each poster is resized to.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Gap in pixels between posters.
    #[arg(long, default_value_t = 10)]
    gap: u32,

    /// Write the computed layout plan as JSON.
    #[arg(long, value_name = "PATH")]
    dump_plan: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Collections(args) => cmd_collections(args),
        Command::Pretty(args) => cmd_pretty(args),
    }
}

fn cmd_collections(args: CollectionsArgs) -> anyhow::Result<()> {
    let cfg = LayoutConfig {
        base_width: args.width,
        gap: args.gap,
        columns: args.columns,
        ..LayoutConfig::collections()
    };

    eprintln!("=== Collection-of-Collections Display Generator ===");
    let run = postergrid::generate_collections(&args.input, &args.output, &cfg)
        .with_context(|| format!("generate display from '{}'", args.input.display()))?;

    print_collections_summary(&run);
    if let Some(plan_path) = &args.dump_plan {
        dump_plan(plan_path, &run.plan)?;
    }
    report_output(&args.output, &run.plan)?;
    Ok(())
}

fn cmd_pretty(args: PrettyArgs) -> anyhow::Result<()> {
    if args.rows == Some(0) {
        anyhow::bail!("--rows must be > 0");
    }
    let cfg = LayoutConfig {
        base_width: args.width,
        gap: args.gap,
        target_ratio: args.target_ratio,
        ..LayoutConfig::pretty()
    };

    eprintln!("=== Pretty Collection Display Generator ===");
    let run = postergrid::generate_pretty(&args.input, &args.output, args.rows, &cfg)
        .with_context(|| format!("generate display from '{}'", args.input.display()))?;

    print_pretty_summary(&run, cfg.target_ratio);
    if let Some(plan_path) = &args.dump_plan {
        dump_plan(plan_path, &run.plan)?;
    }
    report_output(&args.output, &run.plan)?;
    Ok(())
}

fn print_collections_summary(run: &CollectionsRun) {
    eprintln!("Primary poster: {}", run.primary.path.display());
    if let Some(bg) = &run.background {
        eprintln!("Background image: {}", bg.display());
    }
    eprintln!(
        "Found {} posters in {} collections, {} standalone",
        run.grouped.poster_count(),
        run.grouped.collections.len(),
        run.grouped.standalones.len()
    );

    for collection in &run.grouped.collections {
        let members: Vec<String> = collection
            .members
            .iter()
            .map(|m| {
                format!(
                    "{} {}",
                    m.display_name,
                    m.sequence_number.map_or_else(String::new, |n| n.to_string())
                )
            })
            .collect();
        eprintln!("  {}: {} posters", collection.name, collection.members.len());
        eprintln!("    {}", members.join(", "));
    }
    if !run.grouped.standalones.is_empty() {
        eprintln!("  Standalones: {}", run.grouped.standalones.len());
        for poster in &run.grouped.standalones {
            eprintln!("    {}", poster.display_name);
        }
    }
}

fn print_pretty_summary(run: &PrettyRun, target_ratio: f64) {
    eprintln!("Primary poster: {}", run.primary.path.display());
    eprintln!("Found {} parent posters", run.parent_count);
    let cols = run.parent_count.div_ceil(run.rows.max(1));
    eprintln!("Layout (targeting {target_ratio:.2}:1):");
    eprintln!("  Primary: {} rows tall (left)", run.rows);
    eprintln!("  Parents: {} rows x {} columns (right)", run.rows, cols);
}

fn dump_plan(path: &Path, plan: &LayoutPlan) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(plan).context("serialize layout plan")?;
    std::fs::write(path, json)
        .with_context(|| format!("write plan '{}'", path.display()))?;
    eprintln!("wrote plan {}", path.display());
    Ok(())
}

fn report_output(path: &Path, plan: &LayoutPlan) -> anyhow::Result<()> {
    let size = std::fs::metadata(path)
        .with_context(|| format!("stat output '{}'", path.display()))?
        .len();
    eprintln!("wrote {}", path.display());
    eprintln!(
        "  {}x{}px, {:.2} MB",
        plan.canvas_width,
        plan.canvas_height,
        size as f64 / (1024.0 * 1024.0)
    );
    Ok(())
}
