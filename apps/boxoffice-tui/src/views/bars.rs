use boxoffice_core::BarChart as DecadeBars;
use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    widgets::{BarChart, Block, Borders},
    Frame,
};

/// Horizontal bars, one per decade
pub fn render(frame: &mut Frame, area: Rect, bars: &DecadeBars) {
    let data: Vec<(&str, u64)> = bars
        .bars
        .iter()
        .map(|bar| (bar.label.as_str(), bar.count as u64))
        .collect();

    let block = Block::default()
        .title(bars.title.as_str())
        .title_bottom(bars.x_label.as_str())
        .borders(Borders::ALL);

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(data.as_slice())
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    frame.render_widget(chart, area);
}
