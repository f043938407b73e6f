use boxoffice_core::Histogram;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{BarChart, Block, Borders},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, histogram: &Histogram) {
    let labels: Vec<String> = histogram
        .bins
        .iter()
        .map(|bin| format!("{:.0}", bin.start))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&histogram.bins)
        .map(|(label, bin)| (label.as_str(), bin.count as u64))
        .collect();

    let block = Block::default()
        .title(histogram.title.as_str())
        .title_bottom(format!("{} / {}", histogram.x_label, histogram.y_label))
        .borders(Borders::ALL);

    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(super::bar_width(area.width, data.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));

    frame.render_widget(chart, area);
}
