//! WAV file writer for the generated fixtures.
//!
//! Writes 16-bit PCM using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, WavegenError};

/// Bit depth of all written fixtures.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Scale factor mapping [-1.0, 1.0] onto the i16 range.
const PCM_SCALE: f32 = 32767.0;

/// Converts one amplitude to a signed 16-bit PCM value.
///
/// Out-of-range input saturates at the clamp; the scaled value is
/// truncated toward zero.
fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM_SCALE) as i16
}

/// Writes a sample buffer to a 16-bit PCM WAV file.
///
/// Each buffer entry is one frame. The quantized value is written once
/// per channel, so every channel carries the same signal.
///
/// # Arguments
///
/// * `samples` - Per-frame amplitudes in [-1.0, 1.0]
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz
/// * `channels` - Number of channels to write
pub fn write_wav(samples: &[f32], path: &Path, sample_rate: u32, channels: u16) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| {
        WavegenError::wav_write_failed(format!("Failed to create WAV file: {}", e))
    })?;

    for sample in samples {
        let value = quantize(*sample);
        for _ in 0..channels {
            writer.write_sample(value).map_err(|e| {
                WavegenError::wav_write_failed(format!("Failed to write sample: {}", e))
            })?;
        }
    }

    writer.finalize().map_err(|e| {
        WavegenError::wav_write_failed(format!("Failed to finalize WAV file: {}", e))
    })?;

    Ok(())
}
