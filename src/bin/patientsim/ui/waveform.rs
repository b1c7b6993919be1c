//! Scrolling trace chart

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use patientsim::SignalKind;

use crate::app::Monitor;

/// Render the live trace, with dotted reference lines when the grid is on
pub fn render_waveform(frame: &mut Frame, area: Rect, monitor: &Monitor) {
    let samples = monitor.samples();
    let [y_min, y_max] = monitor.y_bounds();
    let x_max = samples.len().saturating_sub(1).max(1) as f64;

    let title = match monitor.signal().kind() {
        SignalKind::Ecg => " Live ECG (mV) ",
        SignalKind::Respiration => " Live Respiration ",
    };

    let trace: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| (i as f64, s as f64))
        .collect();

    let grid_lines: Vec<Vec<(f64, f64)>> = if monitor.grid() {
        grid_levels(y_min, y_max)
            .map(|y| vec![(0.0, y), (x_max, y)])
            .collect()
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset> = grid_lines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&trace),
    );

    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .style(Style::default().fg(Color::DarkGray))
                .labels(vec![
                    format!("{y_min:.1}"),
                    "0".to_string(),
                    format!("{y_max:.1}"),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Evenly spaced reference levels (five divisions) inside `[min, max]`
fn grid_levels(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let step = (max - min) / 5.0;
    (1..5).map(move |i| min + step * i as f64)
}
