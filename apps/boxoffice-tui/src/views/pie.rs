use boxoffice_core::PieChart;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use crate::widgets::ShareBreakdown;

pub fn render(frame: &mut Frame, area: Rect, pie: &PieChart) {
    let block = Block::default()
        .title(pie.title.as_str())
        .borders(Borders::ALL);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(ShareBreakdown::new(pie), inner);
}
