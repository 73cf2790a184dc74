use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use bayer_cutout::image_pipeline::{
    AutoImageReader, ConversionConfig, CutoutPipeline, DistanceMetric, ImageWriter, Pixel,
    PngImageWriter, Rotation, StandardTiffWriter, Threshold, TiffCompression,
};
use bayer_cutout::logger;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bayer-cutout")]
#[command(version, about = "Cut subjects out of raw RGGB captures using a backdrop shot", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the backdrop in INPUT with a flat marker color.
    /// Inputs may be PNG, TIFF or camera RAW; the output format follows OUT's extension.
    Cutout {
        /// Capture containing the subject
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Capture of the empty backdrop
        #[arg(value_name = "BACKDROP")]
        backdrop: PathBuf,

        /// Output file (.png, otherwise TIFF)
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        /// Background sensitivity, 0 (exact match) to 100 (everything)
        #[arg(short, long, value_name = "0-100", default_value_t = 10)]
        threshold: i32,

        /// Marker color painted over the backdrop (R,G,B)
        #[arg(long, value_name = "R,G,B", default_value = "32,32,32")]
        marker: String,

        /// How channel differences are combined
        #[arg(long, value_enum, default_value_t = MetricArg::Chebyshev)]
        metric: MetricArg,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Demosaic INPUT and save it as an RGB PNG or TIFF
    Demosaic {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (.png, otherwise TIFF)
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Clockwise rotation in degrees (multiple of 90)
    #[arg(short, long, value_name = "DEGREES", default_value_t = 0, allow_hyphen_values = true)]
    rotate: i32,

    /// Inputs are already RGB, skip demosaicing
    #[arg(long)]
    no_debayer: bool,

    /// Output compression (PNG maps it to an effort level)
    #[arg(long, value_enum, default_value_t = CompressionArg::Uncompressed)]
    compression: CompressionArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Chebyshev,
    Manhattan,
    Euclidean,
}

impl From<MetricArg> for DistanceMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Chebyshev => DistanceMetric::Chebyshev,
            MetricArg::Manhattan => DistanceMetric::Manhattan,
            MetricArg::Euclidean => DistanceMetric::Euclidean,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    #[value(name = "none")]
    Uncompressed,
    Lzw,
    Deflate,
    DeflateFast,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Uncompressed => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::Deflate => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn parse_marker(value: &str) -> anyhow::Result<Pixel> {
    let channels: Vec<u8> = value
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("invalid marker color '{value}'"))?;

    match channels.as_slice() {
        &[red, green, blue] => Ok(Pixel::new(red, green, blue)),
        _ => bail!("marker color needs three channels, got '{value}'"),
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn build_config(common: &CommonArgs) -> anyhow::Result<ConversionConfig> {
    Ok(ConversionConfig::builder()
        .rotation(Rotation::from_degrees(common.rotate)?)
        .debayer(!common.no_debayer)
        .compression(common.compression.into())
        .build())
}

fn run<W: ImageWriter>(writer: W, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Cutout { input, backdrop, out, threshold, marker, metric, common } => {
            let mut config = build_config(&common)?;
            config.threshold = Threshold::new(threshold)?;
            config.marker = parse_marker(&marker)?;
            config.metric = metric.into();

            let pipeline = CutoutPipeline::with_custom(AutoImageReader, writer, config);
            let timings = pipeline.convert_file(&input, &backdrop, &out)?;
            timings.log_summary();
        }
        Commands::Demosaic { input, out, common } => {
            let pipeline = CutoutPipeline::with_custom(AutoImageReader, writer, build_config(&common)?);
            let image = pipeline.load_file(&input)?;
            pipeline.save_file(&image, &out)?;
            info!("Saved {}x{} image to {}", image.width(), image.height(), out.display());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let (input, out) = match &cli.command {
        Commands::Cutout { input, out, .. } | Commands::Demosaic { input, out, .. } => {
            (input.clone(), out.clone())
        }
    };

    info!("Starting bayer-cutout on {}", input.display());

    let result = if is_png(&out) {
        run(PngImageWriter, cli.command)
    } else {
        run(StandardTiffWriter, cli.command)
    };

    if let Err(e) = &result {
        error!("Conversion failed: {:#}", e);
    }
    result
}
