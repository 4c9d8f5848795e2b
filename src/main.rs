use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use dictypick::AnnotationStore;
use dictypick::detection;
use dictypick::export;

#[derive(Parser)]
#[command(name = "dictypick")]
#[command(about = "Detect the observation area in a feeding-front image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Write the detected annotations to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Export the JSON sidecar instead of CSV
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let circle = detection::detect(&img)?;
    println!(
        "Observation area: center=({:.2}, {:.2}) radius={:.2}",
        circle.center.x, circle.center.y, circle.radius
    );

    if let Some(path) = args.export {
        let mut store = AnnotationStore::new();
        store.set_circle(circle.center, circle.radius);
        if args.json {
            std::fs::write(&path, export::render_json(&store)?)?;
        } else {
            export::write_csv(&store, &path)?;
        }
        println!("Exported to {:?}", path);
    }

    Ok(())
}
