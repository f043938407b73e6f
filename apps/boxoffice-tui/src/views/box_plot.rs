use boxoffice_core::BoxPlot;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use crate::widgets::BoxPlotWidget;

pub fn render(frame: &mut Frame, area: Rect, plot: &BoxPlot) {
    let mut block = Block::default()
        .title(plot.title.as_str())
        .title_bottom(plot.y_label.as_str())
        .borders(Borders::ALL);
    if let Some(x_label) = &plot.x_label {
        block = block.title_top(ratatui::text::Line::from(x_label.as_str()).right_aligned());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(BoxPlotWidget::new(plot), inner);
}
