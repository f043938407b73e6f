//! Proportional share breakdown, used in place of a pie chart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use boxoffice_core::PieChart;

const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

/// One row per slice: label, a bar sized by share, then `12.5% (3)`
pub struct ShareBreakdown<'a> {
    chart: &'a PieChart,
}

impl<'a> ShareBreakdown<'a> {
    pub fn new(chart: &'a PieChart) -> Self {
        Self { chart }
    }

    /// Slice colour, cycling through the palette
    pub fn color(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }
}

impl Widget for ShareBreakdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self
            .chart
            .slices
            .iter()
            .map(|slice| slice.label.chars().count() as u16)
            .max()
            .unwrap_or(0);

        for (i, slice) in self.chart.slices.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y >= area.bottom() {
                break;
            }
            let color = Self::color(i);
            buf.set_string(area.x, y, &slice.label, Style::default().fg(color));

            let suffix = format!(" {:.1}% ({})", slice.percent, slice.count);
            let bar_x = area.x + label_width + 1;
            let room = area
                .right()
                .saturating_sub(bar_x)
                .saturating_sub(suffix.len() as u16);
            let filled = ((slice.percent / 100.0) * f64::from(room)).round() as u16;

            buf.set_string(bar_x, y, "█".repeat(filled as usize), Style::default().fg(color));
            if bar_x + filled < area.right() {
                buf.set_string(bar_x + filled, y, &suffix, Style::default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::PieSlice;

    fn chart() -> PieChart {
        PieChart {
            title: "Share".to_string(),
            slices: vec![
                PieSlice {
                    label: "1970s".to_string(),
                    count: 1,
                    percent: 25.0,
                },
                PieSlice {
                    label: "1980s".to_string(),
                    count: 3,
                    percent: 75.0,
                },
            ],
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_rows_carry_share_and_count() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        ShareBreakdown::new(&chart()).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("1970s █"));
        assert!(row(&buf, 0).contains("25.0% (1)"));
        assert!(row(&buf, 2).contains("75.0% (3)"));
    }

    #[test]
    fn test_larger_share_gets_longer_bar() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        ShareBreakdown::new(&chart()).render(area, &mut buf);

        let blocks = |y| row(&buf, y).matches('█').count();
        assert!(blocks(2) > blocks(0));
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(ShareBreakdown::color(0), ShareBreakdown::color(PALETTE.len()));
    }
}
