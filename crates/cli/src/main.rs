use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polyscatter::api::{place_all, PlaceCfg, Region};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;
mod store;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scatter a polygon layer at random poses inside a region")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Move and rotate every input shape to a random pose inside the region
    Place(PlaceArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct PlaceArgs {
    /// Directory that input, region and output names are resolved against
    #[arg(long, default_value = ".")]
    workspace: PathBuf,
    /// Layer to move/rotate (GeoJSON FeatureCollection)
    #[arg(long)]
    input: String,
    /// Layer whose polygons constrain the placement
    #[arg(long)]
    region: String,
    /// Output layer; overwritten if present
    #[arg(long)]
    out: String,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Retries per shape before keeping a best-effort pose
    #[arg(long, default_value_t = 1000)]
    max_retries: u32,
    /// Cap on anchor draws per attempt
    #[arg(long, default_value_t = 1_000_000)]
    max_point_draws: u64,
    /// Place shapes on all cores
    #[arg(long)]
    parallel: bool,
    /// Optional per-shape table (.csv, or .parquet)
    #[arg(long)]
    report: Option<String>,
}

/// What a finished run looked like.
#[derive(Debug, PartialEq, Eq)]
struct PlaceSummary {
    total: usize,
    failed: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Place(args) => {
            let summary = place(&args)?;
            println!("Number of geometries: {}", summary.total);
            println!(
                "Geometries not fully inside the region: {}",
                summary.failed
            );
            Ok(())
        }
        Action::Report => report(),
    }
}

fn place(args: &PlaceArgs) -> Result<PlaceSummary> {
    let input_path = args.workspace.join(&args.input);
    let region_path = args.workspace.join(&args.region);
    let out_path = args.workspace.join(&args.out);
    tracing::info!(
        input = %input_path.display(),
        region = %region_path.display(),
        out = %out_path.display(),
        seed = args.seed,
        "place"
    );

    let layer = store::read_layer(&input_path)?;
    if layer.is_empty() {
        tracing::warn!(input = %input_path.display(), "input layer has no features");
    }
    let region_layer = store::read_layer(&region_path)?;
    let region = Region::from_shapes(&region_layer.shapes)
        .with_context(|| format!("region {}", region_path.display()))?;
    tracing::info!(
        shapes = layer.len(),
        region_polygons = region.polygons().len(),
        fill_ratio = region.fill_ratio(),
        "layers_loaded"
    );

    let cfg = PlaceCfg {
        max_retries: args.max_retries,
        max_point_draws: args.max_point_draws,
        seed: args.seed,
        parallel: args.parallel,
    };
    let (placed, batch) = place_all(&layer.shapes, &region, cfg)?;

    if let Some(name) = &args.report {
        report::write_report(&args.workspace.join(name), &placed, &batch)?;
    }
    let summary = PlaceSummary {
        total: placed.len(),
        failed: batch.failed(),
    };
    let layer = layer.with_shapes(placed)?;
    store::write_layer(&out_path, &layer)?;

    let payload = provenance::Payload::new(serde_json::json!({
        "seed": cfg.seed,
        "max_retries": cfg.max_retries,
        "max_point_draws": cfg.max_point_draws,
        "parallel": cfg.parallel
    }))
    .with_inputs([
        input_path.to_string_lossy().into_owned(),
        region_path.to_string_lossy().into_owned(),
    ])
    .with_summary(serde_json::json!({
        "total": summary.total,
        "failed": summary.failed,
        "failed_indices": batch.failed_indices(),
        "attempts": batch.total_attempts()
    }));
    provenance::write_sidecar(&out_path, payload)?;
    Ok(summary)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": polyscatter::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
