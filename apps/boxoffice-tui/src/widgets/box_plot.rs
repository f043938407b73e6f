//! Horizontal box-and-whisker plot.
//!
//! Each box takes one row: `├───███┃███───┤` with the mean marked `◆`.
//! Outliers beyond the whiskers are not drawn. A value axis runs along the
//! bottom row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use boxoffice_core::BoxPlot;

pub struct BoxPlotWidget<'a> {
    plot: &'a BoxPlot,
}

impl<'a> BoxPlotWidget<'a> {
    pub fn new(plot: &'a BoxPlot) -> Self {
        Self { plot }
    }
}

/// Maps values in `[low, high]` onto `width` columns
#[derive(Debug, Clone, Copy)]
struct Scale {
    low: f64,
    high: f64,
    width: u16,
}

impl Scale {
    fn column(&self, value: f64) -> u16 {
        let last = self.width.saturating_sub(1);
        if self.high <= self.low {
            return 0;
        }
        let t = ((value - self.low) / (self.high - self.low)).clamp(0.0, 1.0);
        ((t * f64::from(last)).round() as u16).min(last)
    }
}

impl Widget for BoxPlotWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.plot.boxes.is_empty() || area.height < 2 {
            return;
        }

        let label_width = self
            .plot
            .boxes
            .iter()
            .map(|b| b.label.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let gutter = if label_width > 0 { label_width + 1 } else { 0 };
        if area.width <= gutter + 2 {
            return;
        }

        let (low, high) = self.plot.bounds();
        let scale = Scale {
            low,
            high,
            width: area.width - gutter,
        };
        let plot_x = area.x + gutter;
        let axis_row = area.bottom() - 1;

        let whisker = Style::default().fg(Color::Gray);
        let body = Style::default().fg(Color::Blue);
        let median = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mean = Style::default().fg(Color::Green);

        for (i, labeled) in self.plot.boxes.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y >= axis_row {
                break;
            }
            let s = &labeled.summary;
            let col = |value: f64| plot_x + scale.column(value);

            buf.set_string(area.x, y, &labeled.label, Style::default().fg(Color::Cyan));

            for x in col(s.lower_whisker)..=col(s.upper_whisker) {
                buf.set_string(x, y, "─", whisker);
            }
            for x in col(s.q1)..=col(s.q3) {
                buf.set_string(x, y, "█", body);
            }
            buf.set_string(col(s.lower_whisker), y, "├", whisker);
            buf.set_string(col(s.upper_whisker), y, "┤", whisker);
            buf.set_string(col(s.median), y, "┃", median);
            buf.set_string(col(s.mean), y, "◆", mean);
        }

        let low_label = format!("{low:.0}");
        let high_label = format!("{high:.0}");
        buf.set_string(plot_x, axis_row, &low_label, whisker);
        let high_x = (area.right()).saturating_sub(high_label.len() as u16);
        if high_x > plot_x + low_label.len() as u16 {
            buf.set_string(high_x, axis_row, &high_label, whisker);
        }
    }
}
