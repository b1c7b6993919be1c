//! patientsim - terminal patient monitor
//!
//! Run with: cargo run -- --bpm 75

mod app;
mod ui;
mod window;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::Monitor;
use patientsim::{io::preset::Preset, RespirationParams, SignalParams, WaveformParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Trace {
    Ecg,
    Respiration,
}

/// Live synthetic ECG / respiration trace in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Trace to start with
    #[arg(long, value_enum, default_value_t = Trace::Ecg)]
    signal: Trace,

    /// Sampling rate (Hz)
    #[arg(long)]
    fs: Option<u32>,

    /// Heart rate (BPM) or breathing rate (breaths/min)
    #[arg(long)]
    rate: Option<f32>,

    /// P-wave peak (mV)
    #[arg(long, default_value_t = 2.0)]
    amp_p: f32,

    /// R-wave peak (mV)
    #[arg(long, default_value_t = 5.0)]
    amp_r: f32,

    /// T-wave peak (mV)
    #[arg(long, default_value_t = 3.0)]
    amp_t: f32,

    /// P-wave duration (ms)
    #[arg(long, default_value_t = 80.0)]
    p_ms: f32,

    /// QRS duration (ms)
    #[arg(long, default_value_t = 100.0)]
    qrs_ms: f32,

    /// T-wave duration (ms)
    #[arg(long, default_value_t = 160.0)]
    t_ms: f32,

    /// Delay between P and QRS (ms)
    #[arg(long, default_value_t = 80.0)]
    t1_ms: f32,

    /// Delay between QRS and T (ms)
    #[arg(long, default_value_t = 120.0)]
    t2_ms: f32,

    /// Respiration trace gain
    #[arg(long, default_value_t = 1.0)]
    resp_amp: f32,

    /// Samples pulled from the source per redraw tick
    #[arg(long, default_value_t = 2)]
    samples_per_tick: usize,

    /// Redraw interval (ms)
    #[arg(long, default_value_t = 4)]
    tick_ms: u64,

    /// Load settings from a JSON preset (overrides the wave flags)
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Write the effective settings to a JSON preset and exit
    #[arg(long)]
    save_preset: Option<PathBuf>,
}

impl Args {
    fn signal_params(&self) -> SignalParams {
        match self.signal {
            Trace::Ecg => {
                let defaults = WaveformParams::default();
                WaveformParams::new(
                    self.fs.unwrap_or(defaults.sampling_rate_hz),
                    self.rate.unwrap_or(defaults.heart_rate_bpm),
                )
                .with_amplitudes(self.amp_p, self.amp_r, self.amp_t)
                .with_durations(self.p_ms, self.qrs_ms, self.t_ms)
                .with_isoelectric(self.t1_ms, self.t2_ms)
                .into()
            }
            Trace::Respiration => {
                let defaults = RespirationParams::default();
                RespirationParams::new(
                    self.fs.unwrap_or(defaults.sampling_rate_hz),
                    self.rate.unwrap_or(defaults.breaths_per_minute),
                )
                .with_amplitude(self.resp_amp)
                .into()
            }
        }
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    let preset = match &args.preset {
        Some(path) => Preset::load(path)
            .wrap_err_with(|| format!("failed to load preset {}", path.display()))?,
        None => {
            let params = args.signal_params();
            params.validate().wrap_err("invalid settings")?;
            Preset::new("command line", params)
        }
    };

    if let Some(path) = &args.save_preset {
        preset
            .save(path)
            .wrap_err_with(|| format!("failed to save preset {}", path.display()))?;
        println!("Saved settings to: {}", path.display());
        return Ok(());
    }

    let mut monitor = Monitor::new(preset.params)
        .samples_per_tick(args.samples_per_tick)
        .tick_interval_ms(args.tick_ms);

    let mut terminal = ratatui::init();
    let result = monitor.run(&mut terminal);
    ratatui::restore();
    result
}
