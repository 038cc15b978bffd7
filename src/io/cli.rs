//! Command-line interface for batch stylization of PNG files

use crate::io::animation::MotionCapture;
use crate::io::configuration::{
    ANIMATION_TICK_MS, DEFAULT_ANIMATION_FRAMES, DEFAULT_GRID_GAP, DEFAULT_GRID_SIZE,
    DEFAULT_LUMA_GAMMA, DEFAULT_PRE_BLUR, DEFAULT_SEED, DEFAULT_STREAK_COUNT,
    DEFAULT_STREAK_MAX_LEN, DEFAULT_STREAK_THICKNESS, DEFAULT_WOBBLE_AMPLITUDE,
    DEFAULT_WOBBLE_SPEED, GIF_FRAME_DELAY_MS, MOTION_SUFFIX, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_png, load_source};
use crate::io::progress::ProgressManager;
use crate::motion::session::Session;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::random::advance_seed;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sixtone")]
#[command(
    author,
    version,
    about = "Stylize raster images into six-tone grid tiles and motion streaks"
)]
/// Command-line arguments for the stylizer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Apply the deterministic reseed step this many times before rendering
    #[arg(long, default_value_t = 0)]
    pub reseed: u32,

    /// Output canvas width in pixels (source is cover-cropped)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Output canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Grid cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Gap between grid tiles in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_GAP)]
    pub grid_gap: u32,

    /// Pre-quantization blur radius (0 disables)
    #[arg(long, default_value_t = DEFAULT_PRE_BLUR)]
    pub pre_blur: f64,

    /// Number of motion streaks per run
    #[arg(long = "streaks", default_value_t = DEFAULT_STREAK_COUNT)]
    pub streak_count: u32,

    /// Maximum streak length as a ratio of canvas width
    #[arg(long = "streak-len", default_value_t = DEFAULT_STREAK_MAX_LEN)]
    pub streak_max_len: f64,

    /// Streak thickness in pixels
    #[arg(long, default_value_t = DEFAULT_STREAK_THICKNESS)]
    pub streak_thickness: u32,

    /// Luminance gamma; below 1 biases tones toward white
    #[arg(short, long, default_value_t = DEFAULT_LUMA_GAMMA)]
    pub gamma: f64,

    /// Export an animated GIF driven by the blur wobble
    #[arg(short, long)]
    pub animate: bool,

    /// Number of regenerated frames to capture in animation mode
    #[arg(short, long, default_value_t = DEFAULT_ANIMATION_FRAMES)]
    pub frames: usize,

    /// Wobble amplitude added to the base blur radius
    #[arg(long, default_value_t = DEFAULT_WOBBLE_AMPLITUDE)]
    pub wobble_amplitude: f64,

    /// Wobble angular speed in radians per second
    #[arg(long, default_value_t = DEFAULT_WOBBLE_SPEED)]
    pub wobble_speed: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration assembled from the flag values
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            grid_size: self.grid_size,
            grid_gap: self.grid_gap,
            pre_blur: self.pre_blur,
            streak_count: self.streak_count,
            streak_max_len: self.streak_max_len,
            streak_thickness: self.streak_thickness,
            luma_gamma: self.gamma,
        }
    }

    /// Seed after applying the requested number of reseed steps
    pub const fn effective_seed(&self) -> u32 {
        let mut seed = self.seed;
        let mut remaining = self.reseed;
        while remaining > 0 {
            seed = advance_seed(seed);
            remaining -= 1;
        }
        seed
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);
        let steps = if self.cli.animate { self.cli.frames } else { 1 };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, steps);
        }

        let source = load_source(input_path)?;
        let canvas = Self::canvas_dimensions(&self.cli, &source);

        let mut session = Session::new(
            self.cli.pipeline_config(),
            self.cli.effective_seed(),
            self.cli.wobble_amplitude,
            self.cli.wobble_speed,
        );
        session.set_source(source);
        session.set_canvas(canvas.0, canvas.1);

        session.regenerate();
        if let Some(result) = session.result() {
            export_png(
                result,
                output_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
            )?;
        }

        if self.cli.animate {
            let capture = self.capture_animation(&mut session, index);
            let motion_path = Self::get_motion_path(input_path);
            capture.export_gif(
                motion_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid animation path"))?,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Drive the session's tick loop until enough frames are captured
    fn capture_animation(&mut self, session: &mut Session, index: usize) -> MotionCapture {
        let frames = self.cli.frames;
        let mut capture = MotionCapture::new(GIF_FRAME_DELAY_MS, frames);

        session.set_wobble_enabled(true);

        // The gate throttles regenerations, so ticks outnumber frames;
        // bound the loop in case a degenerate canvas never produces one
        let max_ticks = frames.saturating_mul(32).max(64);
        for _ in 0..max_ticks {
            if capture.frame_count() >= frames {
                break;
            }
            if session.tick(ANIMATION_TICK_MS) {
                if let Some(result) = session.result() {
                    capture.record_frame(result.clone());
                }
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_step(index, capture.frame_count());
                }
            }
        }

        session.set_wobble_enabled(false);
        capture
    }

    /// Canvas size: explicit flags win; a single flag means a square
    fn canvas_dimensions(cli: &Cli, source: &image::RgbaImage) -> (u32, u32) {
        match (cli.width, cli.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (source.width(), source.height()),
        }
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_motion_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let motion_name = format!("{}{}.gif", stem.to_string_lossy(), MOTION_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(motion_name)
        } else {
            PathBuf::from(motion_name)
        }
    }
}
