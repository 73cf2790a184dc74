use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    background::BackgroundSubtractor,
    common::error::{PipelineError, Result},
    conversions::{ConversionConfig, PipelineTimings},
    debayer::BinningDebayer,
    image::{Image, rotate},
    tiff_io::{ImageReader, ImageWriter, StandardTiffWriter, TiffImageReader},
};

/// Loads a subject capture and a backdrop capture, cuts the subject out and
/// writes the result.
pub struct CutoutPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl CutoutPipeline<TiffImageReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: TiffImageReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> CutoutPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes one capture and brings it into display orientation:
    /// demosaic (when enabled) then rotate.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load(&self, data: &[u8]) -> Result<Image> {
        self.load_timed(data, &mut PipelineTimings::new())
    }

    fn load_timed(&self, data: &[u8], timings: &mut PipelineTimings) -> Result<Image> {
        let decoded = timings.time("decode", || self.reader.read_image(data))?;

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = decoded.width(),
                height = decoded.height()
            ).entered();
            self.validate_dimensions(decoded.width(), decoded.height())?;
        }

        let image = if self.config.debayer {
            let _span = tracing::info_span!("demosaic").entered();
            timings.time("demosaic", || BinningDebayer::new().process(&decoded))?
        } else {
            decoded
        };

        Ok(timings.time("rotate", || rotate(&image, self.config.rotation)))
    }

    /// Replaces the backdrop in `input` with the configured marker color.
    pub fn cut_out(&self, input: &Image, backdrop: &Image) -> Result<Image> {
        let _span = tracing::info_span!("remove_background",
            threshold = self.config.threshold.value()
        ).entered();

        BackgroundSubtractor::new(self.config.metric).process(
            input,
            backdrop,
            self.config.threshold,
            self.config.marker,
        )
    }

    pub fn convert(&self, input_data: &[u8], backdrop_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, backdrop_data, output)?;
        Ok(())
    }

    #[instrument(skip_all, fields(input_size = input_data.len(), backdrop_size = backdrop_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        backdrop_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting cut-out conversion");

        let input = self.load_timed(input_data, &mut timings)?;
        let backdrop = self.load_timed(backdrop_data, &mut timings)?;

        let cutout = timings.time("remove_background", || self.cut_out(&input, &backdrop))?;

        {
            let _span = tracing::info_span!("encode").entered();
            timings.time("encode", || self.writer.write_image(&cutout, output, &self.config))?;
        }

        info!(
            width = cutout.width(),
            height = cutout.height(),
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, backdrop_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, B: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        backdrop_path: B,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.as_ref().display(),
            backdrop = %backdrop_path.as_ref().display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = read_file(input_path.as_ref())?;
        let backdrop_data = read_file(backdrop_path.as_ref())?;
        let mut output_file = create_file(output_path)?;

        self.convert_with_timings(&input_data, &backdrop_data, &mut output_file)
    }

    /// Loads one capture from disk (demosaic and rotate included).
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Image> {
        let data = read_file(path.as_ref())?;
        self.load(&data)
    }

    pub fn save_file<P: AsRef<Path>>(&self, image: &Image, path: P) -> Result<()> {
        let mut output_file = create_file(path.as_ref())?;
        self.writer.write_image(image, &mut output_file, &self.config)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(path).map_err(|e| {
        PipelineError::InputReadError(format!("{}: {}", path.display(), e))
    })
}

fn create_file(path: &Path) -> Result<std::fs::File> {
    let _span = tracing::info_span!("create_output_file").entered();
    std::fs::File::create(path).map_err(|e| {
        PipelineError::OutputWriteError(format!("{}: {}", path.display(), e))
    })
}
