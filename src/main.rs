//! wavegen: writes the impulse and 1 kHz sine test fixtures.
//!
//! Parses parameters, validates them, synthesizes both buffers in
//! memory, and serializes each to a 16-bit PCM WAV file.

use std::fs;
use std::path::PathBuf;

use wavegen::audio::{impulse, sine, write_wav, SINE_FREQ_HZ};
use wavegen::cli::Cli;
use wavegen::error::{Result, WavegenError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Validate before any filesystem effect
    cli.validate()?;

    let (impulse_path, sine_path) = generate_fixtures(&cli)?;

    println!("Wrote: {}", impulse_path.display());
    println!("Wrote: {}", sine_path.display());

    Ok(())
}

/// Generates both fixtures into the output directory.
///
/// Returns the paths of the two written files.
fn generate_fixtures(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    let total_frames = cli.total_frames();

    eprintln!("=== wavegen test fixtures ===");
    eprintln!("Output directory: {}", cli.outdir.display());
    eprintln!("Sample rate: {} Hz", cli.sr);
    eprintln!("Duration: {}s ({} frames)", cli.seconds, total_frames);
    eprintln!("Channels: {}", cli.channels);
    eprintln!();

    fs::create_dir_all(&cli.outdir).map_err(|e| {
        WavegenError::output_dir_failed(format!("{}: {}", cli.outdir.display(), e))
    })?;

    let impulse_path = cli.impulse_path();
    write_wav(&impulse(total_frames), &impulse_path, cli.sr, cli.channels)?;

    let sine_path = cli.sine_path();
    write_wav(
        &sine(total_frames, cli.sr, SINE_FREQ_HZ),
        &sine_path,
        cli.sr,
        cli.channels,
    )?;

    Ok((impulse_path, sine_path))
}
