//! Header bar - trace type, rate, sampling rate and cycle position

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use patientsim::SignalSource;

use crate::app::Monitor;

pub fn render_header(frame: &mut Frame, area: Rect, monitor: &Monitor) {
    let block = Block::default()
        .title(" Patient Simulator ")
        .borders(Borders::ALL);

    let signal = monitor.signal();
    let (play_symbol, play_color) = if monitor.is_running() {
        ("▶ Running", Color::Green)
    } else {
        ("⏸ Stopped", Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", signal.kind().label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{play_symbol}  "), Style::default().fg(play_color)),
        Span::styled(
            format!("{:.0} {}  ", monitor.rate(), monitor.rate_unit()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{} Hz  ", signal.sampling_rate()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("cycle {}/{}", signal.position(), signal.period()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
