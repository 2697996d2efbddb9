use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use measure::{
    config::{Config, FailurePolicy},
    unit::PixelToMm,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
/// Measure annotated circular features and draw them on the images
struct Args {
    #[clap(long)]
    /// configuration file, built-in defaults are used if omitted
    pub config_file: Option<PathBuf>,
    #[clap(long)]
    /// millimetres per pixel
    pub pixel_to_mm: Option<f64>,
    #[clap(long)]
    /// directory to scan for images
    pub image_dir: Option<PathBuf>,
    #[clap(long)]
    /// directory of annotation files
    pub annotation_dir: Option<PathBuf>,
    #[clap(long)]
    /// directory receiving annotated images
    pub output_dir: Option<PathBuf>,
    #[clap(long)]
    /// CSV report path
    pub report_file: Option<PathBuf>,
    #[clap(long)]
    /// record failing images and process the rest
    pub keep_going: bool,
}

fn main() -> Result<()> {
    init_logger();

    // parse arguments
    let Args {
        config_file,
        pixel_to_mm,
        image_dir,
        annotation_dir,
        output_dir,
        report_file,
        keep_going,
    } = Args::parse();

    let mut config = match &config_file {
        Some(path) => Config::open(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => Config::default(),
    };

    // command line overrides
    if let Some(ratio) = pixel_to_mm {
        config.pixel_to_mm = PixelToMm::try_new(ratio)?;
    }
    if let Some(dir) = image_dir {
        config.image_dir = dir;
    }
    if let Some(dir) = annotation_dir {
        config.annotation_dir = dir;
    }
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    if let Some(file) = report_file {
        config.report_file = file;
    }
    if keep_going {
        config.on_error = FailurePolicy::Continue;
    }
    config.validate()?;

    measure::start(&config)?;

    Ok(())
}

fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Info);
        }
    }
    builder.init();
}
