//! Waveform generators for the test fixtures.
//!
//! Both fixtures are closed-form functions of the frame index, so each
//! generator fills its buffer in a single pass with no state. Buffers
//! hold one amplitude per frame; the WAV writer replicates each value
//! across channels.

use std::f64::consts::TAU;

/// Peak amplitude of the impulse fixture.
pub const IMPULSE_AMPLITUDE: f32 = 0.9;

/// Peak amplitude of the sine fixture.
pub const SINE_AMPLITUDE: f64 = 0.5;

/// Frequency of the sine fixture in Hz.
pub const SINE_FREQ_HZ: f64 = 1000.0;

/// Generates an impulse: 0.9 at frame 0, silence everywhere after.
pub fn impulse(total_frames: usize) -> Vec<f32> {
    let mut samples = vec![0.0; total_frames];
    if let Some(first) = samples.first_mut() {
        *first = IMPULSE_AMPLITUDE;
    }
    samples
}

/// Generates a half-amplitude sine tone at `freq_hz`.
///
/// Phase is computed in f64 from the frame index so late frames of a
/// long buffer stay within quantization tolerance of the closed form.
pub fn sine(total_frames: usize, sample_rate: u32, freq_hz: f64) -> Vec<f32> {
    let rate = f64::from(sample_rate);
    (0..total_frames)
        .map(|i| {
            let t = i as f64 / rate;
            (SINE_AMPLITUDE * (TAU * freq_hz * t).sin()) as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_has_requested_length() {
        assert_eq!(impulse(96000).len(), 96000);
        assert_eq!(impulse(1).len(), 1);
    }

    #[test]
    fn impulse_is_zero_after_first_frame() {
        let samples = impulse(4800);
        assert_eq!(samples[0], IMPULSE_AMPLITUDE);
        assert!(samples[1..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn impulse_with_zero_frames_is_empty() {
        assert!(impulse(0).is_empty());
    }

    #[test]
    fn sine_has_requested_length() {
        assert_eq!(sine(96000, 48000, SINE_FREQ_HZ).len(), 96000);
    }

    #[test]
    fn sine_starts_at_zero() {
        let samples = sine(16, 48000, SINE_FREQ_HZ);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn sine_hits_peak_at_quarter_period() {
        // 1 kHz at 4 kHz puts frame 1 at sin(π/2)
        let samples = sine(4, 4000, SINE_FREQ_HZ);
        assert!((samples[1] - 0.5).abs() < 1e-6);
        assert!(samples[2].abs() < 1e-6);
        assert!((samples[3] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn sine_matches_closed_form() {
        let sample_rate = 48000;
        let samples = sine(96000, sample_rate, SINE_FREQ_HZ);
        for (i, &s) in samples.iter().enumerate().step_by(977) {
            let expected =
                SINE_AMPLITUDE * (TAU * SINE_FREQ_HZ * i as f64 / sample_rate as f64).sin();
            assert!(
                (f64::from(s) - expected).abs() < 1e-6,
                "frame {}: {} vs {}",
                i,
                s,
                expected
            );
        }
    }

    #[test]
    fn sine_stays_within_unit_range() {
        assert!(sine(96000, 48000, SINE_FREQ_HZ)
            .iter()
            .all(|s| s.abs() <= 0.5));
    }
}
