/// Blue-noise scatter tool: fills a rectangle with minimum-separation points
/// and reports packing density against the disk-packing upper bound.
use std::f32::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use relief_core::poisson::generate_samples;
use relief_core::Rect;

#[derive(Parser, Debug)]
#[command(name = "scatter", about = "Generate blue-noise sample points over a rectangle")]
struct Args {
    /// Region width.
    #[arg(long, default_value = "100.0")]
    width: f32,

    /// Region height.
    #[arg(long, default_value = "100.0")]
    height: f32,

    /// Minimum distance between any two points.
    #[arg(short, long, default_value = "10.0")]
    min_distance: f32,

    /// Candidate attempts per frontier point (0 selects the default of 30).
    #[arg(short, long, default_value = "30")]
    iterations: u32,

    /// RNG seed.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write accepted points as JSON to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let region = Rect::from_size(args.width, args.height);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let points = generate_samples(region, args.min_distance, args.iterations, &mut rng)
        .context("sampling failed")?;

    let radius = args.min_distance / 2.0;
    let bound = (args.width * args.height) / (PI * radius * radius);
    eprintln!(
        "{} points accepted ({:.1}% of the disk-packing bound of {:.0})",
        points.len(),
        points.len() as f32 / bound * 100.0,
        bound
    );

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &points)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
