//! Session context tying configuration, motion state, and results together

use image::RgbaImage;

use crate::motion::scheduler::RegenerationGate;
use crate::motion::wobble::WobbleModulator;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::generate::generate;
use crate::pipeline::random::advance_seed;

/// Explicit pipeline session state
///
/// Owns everything a running stylizer needs — configuration, seed, wobble
/// modulator, regeneration gate, source, result, and a monotonic clock —
/// so nothing lives in ambient globals. The host drives it with
/// [`Session::tick`] once per frame; the result raster is replaced
/// wholesale on each completed run and never mutated in place.
pub struct Session {
    config: PipelineConfig,
    seed: u32,
    wobble: WobbleModulator,
    gate: RegenerationGate,
    clock_ms: f64,
    canvas: (u32, u32),
    source: Option<RgbaImage>,
    result: Option<RgbaImage>,
}

impl Session {
    /// Create a session with the given configuration and seed
    ///
    /// The wobble modulator starts disabled, resting at the configured
    /// blur radius.
    pub fn new(config: PipelineConfig, seed: u32, wobble_amplitude: f64, wobble_speed: f64) -> Self {
        Self {
            config,
            seed,
            wobble: WobbleModulator::new(config.pre_blur, wobble_amplitude, wobble_speed),
            gate: RegenerationGate::default(),
            clock_ms: 0.0,
            canvas: (0, 0),
            source: None,
            result: None,
        }
    }

    /// Install the source image; the canvas defaults to the source size
    pub fn set_source(&mut self, source: RgbaImage) {
        self.canvas = (source.width(), source.height());
        self.source = Some(source);
    }

    /// Override the output canvas size (the source is cover-cropped to it)
    pub const fn set_canvas(&mut self, width: u32, height: u32) {
        self.canvas = (width, height);
    }

    /// Replace the configuration read by subsequent runs
    pub const fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
        self.wobble.set_base(config.pre_blur);
    }

    /// Current configuration
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Current seed value
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Step the seed with the fixed linear-congruential update
    pub const fn reseed(&mut self) {
        self.seed = advance_seed(self.seed);
    }

    /// Enable or disable the blur wobble
    pub const fn set_wobble_enabled(&mut self, enabled: bool) {
        self.wobble.set_enabled(enabled);
    }

    /// Last completed result, if any run has finished
    pub const fn result(&self) -> Option<&RgbaImage> {
        self.result.as_ref()
    }

    /// Advance the session by one host frame
    ///
    /// Accumulates the clock, advances the wobble, and reruns the pipeline
    /// when the regeneration gate approves. Returns `true` when a new
    /// result was produced. Without a source image this is a no-op that
    /// leaves any previous result untouched.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        self.clock_ms += elapsed_ms.max(0.0);
        let radius = self.wobble.advance(elapsed_ms.max(0.0) / 1000.0);

        if self.source.is_none() {
            return false;
        }
        if !self.gate.should_run(self.clock_ms, self.result.is_some()) {
            return false;
        }

        self.run_with_radius(radius)
    }

    /// Run the pipeline immediately, bypassing the regeneration gate
    ///
    /// Used for one-shot renders; the wobble's current radius still
    /// applies, so a disabled wobble renders at the configured blur.
    pub fn regenerate(&mut self) -> bool {
        let radius = self.wobble.radius();
        self.run_with_radius(radius)
    }

    fn run_with_radius(&mut self, radius: f64) -> bool {
        let Some(source) = &self.source else {
            return false;
        };

        let mut run_config = self.config;
        run_config.pre_blur = radius;

        match generate(source, self.canvas, &run_config, self.seed) {
            Some(image) => {
                self.result = Some(image);
                true
            }
            None => false,
        }
    }
}
