use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::thread_rng;
use std::path::PathBuf;
use std::time::Instant;

use decompbench::corpus::CorpusBuilder;
use decompbench::geometry::{DEFAULT_MAX_ATTEMPTS, PolygonGenerator};
use decompbench::render::{render_all, render_file};
use decompbench::timing::{aggregate_timings, plot_timings};

/// Benchmark tooling for polygon decomposition: generate random simple
/// polygon corpora, render decomposition output, plot timing curves
///
/// Examples:
///   # Generate the default corpus (8-30 vertices, 10 polygons each)
///   decompbench generate
///
///   # Render a single decomposition output file
///   decompbench render output.txt
///
///   # Render a whole tree of decomposition results
///   decompbench render-batch --input decomposed --output images_output
///
///   # Plot decomposition time against vertex count
///   decompbench timeplot --min-vertices 4 --max-vertices 250
#[derive(Parser, Debug)]
#[command(name = "decompbench")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a corpus of random simple polygons
    Generate {
        /// Smallest vertex count in the band (inclusive)
        #[arg(long, default_value = "8")]
        min_vertices: u32,

        /// Largest vertex count in the band (inclusive)
        #[arg(long, default_value = "30")]
        max_vertices: u32,

        /// Polygons generated per vertex count
        #[arg(short = 'i', long, default_value = "10")]
        instances: u32,

        /// Root directory of the corpus tree to write
        #[arg(short = 'o', long, default_value = "polygons_input")]
        output: PathBuf,

        /// Rejection-sampling attempt cap per polygon
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Enable verbose logging
        #[arg(short = 'v', long)]
        verbose: bool,
    },

    /// Render one decomposition output file to a PNG
    Render {
        /// Decomposition stream to render
        #[arg(default_value = "output.txt")]
        input: PathBuf,

        /// Output image path (defaults to the input with a .png extension)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Render every decomposition file in a corpus tree
    RenderBatch {
        /// Smallest vertex count in the band (inclusive)
        #[arg(long, default_value = "8")]
        min_vertices: u32,

        /// Largest vertex count in the band (inclusive)
        #[arg(long, default_value = "30")]
        max_vertices: u32,

        /// Instances per vertex count
        #[arg(short = 'i', long, default_value = "10")]
        instances: u32,

        /// Root of the decomposition tree to read
        #[arg(long, default_value = "decomposed")]
        input: PathBuf,

        /// Root of the image tree to write
        #[arg(short = 'o', long, default_value = "images_output")]
        output: PathBuf,

        /// Enable verbose logging
        #[arg(short = 'v', long)]
        verbose: bool,
    },

    /// Aggregate decomposition timings into a time-vs-vertex-count plot
    Timeplot {
        /// Smallest vertex count in the band (inclusive)
        #[arg(long, default_value = "4")]
        min_vertices: u32,

        /// Largest vertex count in the band (inclusive)
        #[arg(long, default_value = "250")]
        max_vertices: u32,

        /// Instances per vertex count
        #[arg(short = 'i', long, default_value = "10")]
        instances: u32,

        /// Root of the decomposition tree to read
        #[arg(long, default_value = "decomposed")]
        input: PathBuf,

        /// Output chart path
        #[arg(short = 'o', long, default_value = "Time_vs_n.png")]
        output: PathBuf,

        /// Enable verbose logging
        #[arg(short = 'v', long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Generate {
            min_vertices,
            max_vertices,
            instances,
            output,
            max_attempts,
            verbose,
        } => run_generate(
            min_vertices,
            max_vertices,
            instances,
            &output,
            max_attempts,
            verbose,
        ),
        Command::Render { input, output } => run_render(&input, output),
        Command::RenderBatch {
            min_vertices,
            max_vertices,
            instances,
            input,
            output,
            verbose,
        } => run_render_batch(min_vertices, max_vertices, instances, &input, &output, verbose),
        Command::Timeplot {
            min_vertices,
            max_vertices,
            instances,
            input,
            output,
            verbose,
        } => run_timeplot(min_vertices, max_vertices, instances, &input, &output, verbose),
    }
}

fn check_band(min_vertices: u32, max_vertices: u32) -> Result<()> {
    if min_vertices > max_vertices {
        bail!(
            "--min-vertices ({}) must not exceed --max-vertices ({})",
            min_vertices,
            max_vertices
        );
    }
    Ok(())
}

fn run_generate(
    min_vertices: u32,
    max_vertices: u32,
    instances: u32,
    output: &std::path::Path,
    max_attempts: usize,
    verbose: bool,
) -> Result<()> {
    check_band(min_vertices, max_vertices)?;
    if min_vertices < 3 {
        bail!("--min-vertices must be at least 3, got {}", min_vertices);
    }

    if verbose {
        println!("Configuration:");
        println!("  Vertex counts: {}-{}", min_vertices, max_vertices);
        println!("  Instances per count: {}", instances);
        println!("  Attempt cap: {}", max_attempts);
        println!("  Output: {}", output.display());
        println!();
    }

    let total = (max_vertices - min_vertices + 1) * instances;
    let spinner = create_spinner(&format!("Generating {} polygons...", total));
    let start = Instant::now();

    let builder = CorpusBuilder::new(PolygonGenerator::new().with_max_attempts(max_attempts));
    let written = builder
        .build(
            min_vertices..=max_vertices,
            instances,
            output,
            &mut thread_rng(),
        )
        .context("Failed to generate polygon corpus")?;

    spinner.finish_with_message(format!(
        "Generated {} polygons under {} [{:.1}s]",
        written,
        output.display(),
        start.elapsed().as_secs_f32()
    ));
    Ok(())
}

fn run_render(input: &std::path::Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("png"));

    let spinner = create_spinner(&format!("Rendering {}...", input.display()));
    let start = Instant::now();
    render_file(input, &output, &mut thread_rng())?;
    spinner.finish_with_message(format!(
        "Rendered {} -> {} [{:.1}s]",
        input.display(),
        output.display(),
        start.elapsed().as_secs_f32()
    ));
    Ok(())
}

fn run_render_batch(
    min_vertices: u32,
    max_vertices: u32,
    instances: u32,
    input: &std::path::Path,
    output: &std::path::Path,
    verbose: bool,
) -> Result<()> {
    check_band(min_vertices, max_vertices)?;

    if verbose {
        println!("Configuration:");
        println!("  Vertex counts: {}-{}", min_vertices, max_vertices);
        println!("  Instances per count: {}", instances);
        println!("  Input: {}", input.display());
        println!("  Output: {}", output.display());
        println!();
    }

    let spinner = create_spinner("Rendering decomposition files...");
    let start = Instant::now();
    let summary = render_all(
        min_vertices..=max_vertices,
        instances,
        input,
        output,
        &mut thread_rng(),
    )?;
    spinner.finish_with_message(format!(
        "Rendered {} images under {} ({} missing inputs skipped) [{:.1}s]",
        summary.rendered,
        output.display(),
        summary.skipped,
        start.elapsed().as_secs_f32()
    ));
    Ok(())
}

fn run_timeplot(
    min_vertices: u32,
    max_vertices: u32,
    instances: u32,
    input: &std::path::Path,
    output: &std::path::Path,
    verbose: bool,
) -> Result<()> {
    check_band(min_vertices, max_vertices)?;

    if verbose {
        println!("Configuration:");
        println!("  Vertex counts: {}-{}", min_vertices, max_vertices);
        println!("  Instances per count: {}", instances);
        println!("  Input: {}", input.display());
        println!("  Output: {}", output.display());
        println!();
    }

    let spinner = create_spinner("Aggregating decomposition timings...");
    let start = Instant::now();
    let records = aggregate_timings(min_vertices..=max_vertices, instances, input)?;
    spinner.finish_with_message(format!(
        "Aggregated {} timing records [{:.1}s]",
        records.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Plotting timing curve...");
    let start = Instant::now();
    plot_timings(&records, output)?;
    spinner.finish_with_message(format!(
        "Wrote {} [{:.1}s]",
        output.display(),
        start.elapsed().as_secs_f32()
    ));
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
