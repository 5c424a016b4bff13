/// Heightfield synthesis tool: runs Diamond-Square at a given size and
/// roughness, writes the result as HeightField JSON and an optional 8-bit
/// grayscale preview.
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use relief_core::diamond_square::generate_height_map;
use relief_core::HeightField;

#[derive(Parser, Debug)]
#[command(name = "genmap", about = "Synthesize a Diamond-Square heightfield")]
struct Args {
    /// Grid size; the output field is (size+1) x (size+1). Powers of two
    /// subdivide fully; other sizes leave unreached cells at zero.
    #[arg(short, long, default_value = "128")]
    size: usize,

    /// Bound on the uniform perturbation added at every subdivision level.
    #[arg(short, long, default_value = "0.5")]
    roughness: f32,

    /// RNG seed.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write the heightfield as JSON to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an 8-bit grayscale preview (min/max normalized) to this path.
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let field = generate_height_map(args.size, args.roughness, &mut rng);

    eprintln!(
        "{}x{} field, elevation range [{:.3}, {:.3}]",
        field.width,
        field.height,
        field.min_elevation(),
        field.max_elevation()
    );

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &field)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = &args.png {
        write_preview(&field, path)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

/// Normalize elevations to 0..255 and encode as grayscale PNG.
fn write_preview(field: &HeightField, path: &Path) -> Result<()> {
    let lo = field.min_elevation();
    let hi = field.max_elevation();
    let span = if hi > lo { hi - lo } else { 1.0 };

    let pixels: Vec<u8> = field
        .data
        .iter()
        .map(|&v| (((v - lo) / span) * 255.0).round() as u8)
        .collect();

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), field.width as u32, field.height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().context("writing png header")?;
    writer.write_image_data(&pixels).context("writing png data")?;
    Ok(())
}
