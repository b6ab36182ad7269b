//! CLI argument parser for the fixture generator.
//!
//! All numeric parameters are validated up front so invalid invocations
//! abort before anything is written to disk.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, WavegenError};

/// File name of the impulse fixture.
pub const IMPULSE_FILE: &str = "impulse.wav";

/// File name of the 1 kHz sine fixture.
pub const SINE_FILE: &str = "sine1k.wav";

/// wavegen: impulse and 1 kHz sine test fixture generator
#[derive(Parser, Debug)]
#[command(name = "wavegen")]
#[command(about = "Generates impulse and 1 kHz sine test WAV files")]
#[command(version)]
pub struct Cli {
    /// Output directory for the generated WAV files
    #[arg(long)]
    pub outdir: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    pub sr: u32,

    /// Duration of each fixture in seconds
    #[arg(long, default_value = "2.0")]
    pub seconds: f64,

    /// Number of channels
    #[arg(long, default_value = "2")]
    pub channels: u16,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Checks that sample rate, duration, and channel count are all
    /// strictly positive.
    ///
    /// The unsigned flag types already make negative `--sr` and
    /// `--channels` unrepresentable; zero values and non-positive
    /// durations are rejected here, each with its own error code.
    pub fn validate(&self) -> Result<()> {
        if self.sr == 0 {
            return Err(WavegenError::invalid_sample_rate(self.sr));
        }
        if !(self.seconds > 0.0 && self.seconds.is_finite()) {
            return Err(WavegenError::invalid_duration(self.seconds));
        }
        if self.channels == 0 {
            return Err(WavegenError::invalid_channels(self.channels));
        }
        Ok(())
    }

    /// Calculates the total frame count: round(sample_rate × seconds).
    pub fn total_frames(&self) -> usize {
        (self.sr as f64 * self.seconds).round() as usize
    }

    /// Returns the path of the impulse fixture inside the output directory.
    pub fn impulse_path(&self) -> PathBuf {
        self.outdir.join(IMPULSE_FILE)
    }

    /// Returns the path of the sine fixture inside the output directory.
    pub fn sine_path(&self) -> PathBuf {
        self.outdir.join(SINE_FILE)
    }
}
