//! TUI module for patientsim
//!
//! Header with the active settings, the scrolling trace, and a help bar.

mod header;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::Monitor;

use header::render_header;
use waveform::render_waveform;

/// Render the whole monitor
pub fn render(frame: &mut Frame, monitor: &Monitor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Trace
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], monitor);
    render_waveform(frame, chunks[1], monitor);

    let status = Paragraph::new(format!(" {}", monitor.status()))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        " [Q] Quit  [Space] Start/Stop  [+/-] Rate  [S] ECG/Resp  [R] Restart  [G] Grid",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
