//! Monitor - owns the signal source and drives it from the redraw loop

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{info, warn};
use ratatui::DefaultTerminal;

use patientsim::{
    RespirationParams, Signal, SignalKind, SignalParams, SignalSource, WaveformParams,
    MAX_STEP_SIZE,
};

use super::ui;
use super::window::{window_len, ScrollingWindow};

/// Rate change per `+` / `-` key press.
const RATE_STEP: f32 = 5.0;
const MIN_RATE: f32 = 5.0;

/// Interactive monitor state
pub struct Monitor {
    signal: Signal,
    // Last committed settings per trace, so switching back restores them
    ecg: WaveformParams,
    respiration: RespirationParams,
    window: ScrollingWindow,
    step_buf: [f32; MAX_STEP_SIZE],
    samples_per_tick: usize,
    tick_interval: Duration,
    running: bool,
    grid: bool,
    status: String,
    should_quit: bool,
}

impl Monitor {
    pub fn new(params: SignalParams) -> Self {
        let (ecg, respiration) = match params {
            SignalParams::Ecg(p) => (p, RespirationParams::default()),
            SignalParams::Respiration(p) => (WaveformParams::default(), p),
        };

        Self {
            signal: Signal::from_params(params),
            ecg,
            respiration,
            window: ScrollingWindow::new(window_len(params.sampling_rate_hz())),
            step_buf: [0.0; MAX_STEP_SIZE],
            samples_per_tick: 2,
            tick_interval: Duration::from_millis(4),
            running: false,
            grid: true,
            status: "Idle".to_string(),
            should_quit: false,
        }
    }

    pub fn samples_per_tick(mut self, n: usize) -> Self {
        if n > MAX_STEP_SIZE {
            warn!("samples per tick capped at {MAX_STEP_SIZE} (asked for {n})");
        }
        self.samples_per_tick = n.min(MAX_STEP_SIZE);
        self
    }

    pub fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval = Duration::from_millis(ms.max(1));
        self
    }

    /// Run the redraw loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        self.start();

        while !self.should_quit {
            let frame_start = Instant::now();

            if self.running {
                self.advance();
            }

            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = self.tick_interval.saturating_sub(frame_start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Pull one tick worth of samples into the scrolling window
    fn advance(&mut self) {
        let block = &mut self.step_buf[..self.samples_per_tick];
        self.signal.step_into(block);
        self.window.push(block);
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if self.running {
                    self.stop();
                } else {
                    self.start();
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') => self.grid = !self.grid,
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_rate(RATE_STEP),
            KeyCode::Char('-') => self.adjust_rate(-RATE_STEP),
            KeyCode::Char('s') | KeyCode::Char('S') => self.switch_signal(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.apply(self.current_params()),
            _ => {}
        }
    }

    fn start(&mut self) {
        self.apply(self.current_params());
        self.running = true;
        self.status = "Running".to_string();
    }

    fn stop(&mut self) {
        self.running = false;
        self.status = "Stopped".to_string();
    }

    fn current_params(&self) -> SignalParams {
        match self.signal.kind() {
            SignalKind::Ecg => self.ecg.into(),
            SignalKind::Respiration => self.respiration.into(),
        }
    }

    fn adjust_rate(&mut self, delta: f32) {
        let params = match self.signal.kind() {
            SignalKind::Ecg => {
                self.ecg.heart_rate_bpm = (self.ecg.heart_rate_bpm + delta).max(MIN_RATE);
                self.ecg.into()
            }
            SignalKind::Respiration => {
                self.respiration.breaths_per_minute =
                    (self.respiration.breaths_per_minute + delta).max(MIN_RATE);
                self.respiration.into()
            }
        };
        self.apply(params);
    }

    fn switch_signal(&mut self) {
        let params = match self.signal.kind() {
            SignalKind::Ecg => self.respiration.into(),
            SignalKind::Respiration => self.ecg.into(),
        };
        self.apply(params);
    }

    /// Commit settings: rebuilds the source (phase restarts) and resizes the
    /// window to about two seconds of trace.
    fn apply(&mut self, params: SignalParams) {
        self.signal.configure(params);
        self.window.resize(window_len(params.sampling_rate_hz()));

        self.status = format!(
            "Updated: Rate={} {}, Fs={} Hz, Buffer={}",
            self.rate(),
            self.rate_unit(),
            params.sampling_rate_hz(),
            self.window.len()
        );
        info!("{}", self.status);
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn samples(&self) -> &[f32] {
        self.window.samples()
    }

    pub fn rate(&self) -> f32 {
        match self.signal.kind() {
            SignalKind::Ecg => self.ecg.heart_rate_bpm,
            SignalKind::Respiration => self.respiration.breaths_per_minute,
        }
    }

    pub fn rate_unit(&self) -> &'static str {
        match self.signal.kind() {
            SignalKind::Ecg => "BPM",
            SignalKind::Respiration => "br/min",
        }
    }

    /// Vertical chart range: fixed ±5 mV for ECG, amplitude-scaled for
    /// respiration.
    pub fn y_bounds(&self) -> [f64; 2] {
        match self.signal.kind() {
            SignalKind::Ecg => [-5.0, 5.0],
            SignalKind::Respiration => {
                let amp = (self.respiration.amplitude.abs() as f64).max(0.1) * 1.25;
                [-amp, amp]
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_keys_ignore_case() {
        let mut monitor = Monitor::new(WaveformParams::default().into());

        monitor.handle_key(KeyCode::Char('G'));
        assert!(!monitor.grid());
        monitor.handle_key(KeyCode::Char('g'));
        assert!(monitor.grid());

        monitor.handle_key(KeyCode::Char('S'));
        assert_eq!(monitor.signal().kind(), SignalKind::Respiration);
        monitor.handle_key(KeyCode::Char('s'));
        assert_eq!(monitor.signal().kind(), SignalKind::Ecg);

        monitor.handle_key(KeyCode::Char('+'));
        monitor.advance();
        monitor.handle_key(KeyCode::Char('R'));
        assert_eq!(monitor.signal().position(), 0);
        assert_eq!(monitor.rate(), 65.0);

        monitor.handle_key(KeyCode::Char('Q'));
        assert!(monitor.should_quit);
    }
}
