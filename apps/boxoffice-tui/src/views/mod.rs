//! Chart views
//!
//! One render function per chart kind. The bottom row of the frame is kept
//! for the key hint.

mod bars;
mod box_plot;
mod histogram;
mod pie;
mod scatter;

use boxoffice_core::Chart;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const HINT: &str = "Press q, Esc or Enter to return to the menu";

/// Smallest body that fits axes and labels
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 6;

/// Draw `chart` with a key hint underneath
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &Chart) {
    let [body, footer] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    if body.width < MIN_WIDTH || body.height < MIN_HEIGHT {
        frame.render_widget(Paragraph::new("Terminal too small"), body);
    } else {
        draw_body(frame, body, chart);
    }

    let hint = Paragraph::new(Line::from(HINT)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, footer);
}

fn draw_body(frame: &mut Frame, body: Rect, chart: &Chart) {
    match chart {
        Chart::Histogram(histogram) => histogram::render(frame, body, histogram),
        Chart::BoxPlot(plot) => box_plot::render(frame, body, plot),
        Chart::Scatter(scatter) => scatter::render(frame, body, scatter),
        Chart::Pie(pie) => pie::render(frame, body, pie),
        Chart::Bar(bars) => bars::render(frame, body, bars),
    }
}

/// Width of each of `count` bars sharing `width` columns with a gap of one
fn bar_width(width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    (width.saturating_sub(2) / count).saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::{ChartConfig, VizQuery};
    use boxoffice_io::{MovieDataset, MovieRecord};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn dataset() -> MovieDataset {
        MovieDataset::from_records(vec![
            MovieRecord::new("1970s", "Star Wars", 11.0, 775.8),
            MovieRecord::new("1970s", "Jaws", 7.0, 470.7),
            MovieRecord::new("1980s", "E.T.", 10.5, 792.9),
            MovieRecord::new("1990s", "Titanic", 200.0, 2264.7),
            MovieRecord::new("1990s", "Home Alone", 18.0, 476.7),
            MovieRecord::new("2000s", "Avatar", 237.0, 2923.7),
        ])
    }

    fn screen(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(query: VizQuery) -> String {
        let chart = Chart::build(query, &dataset(), &ChartConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_chart(frame, frame.area(), &chart))
            .unwrap();
        screen(terminal.backend().buffer())
    }

    #[test]
    fn test_every_chart_renders_title_and_hint() {
        for query in VizQuery::ALL {
            let chart = Chart::build(query, &dataset(), &ChartConfig::default()).unwrap();
            let text = draw(query);
            assert!(text.contains(chart.title()), "missing title for {query:?}");
            assert!(text.contains(HINT));
        }
    }

    #[test]
    fn test_decade_views_show_labels() {
        for query in [VizQuery::DecadeShare, VizQuery::DecadeGrossBoxPlots] {
            let text = draw(query);
            for label in ["1970s", "1980s", "1990s", "2000s"] {
                assert!(text.contains(label), "{query:?} is missing {label}");
            }
        }
    }

    #[test]
    fn test_tiny_terminal_shows_notice() {
        for query in VizQuery::ALL {
            let chart = Chart::build(query, &dataset(), &ChartConfig::default()).unwrap();
            let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
            terminal
                .draw(|frame| render_chart(frame, frame.area(), &chart))
                .unwrap();
            assert!(screen(terminal.backend().buffer()).starts_with("Terminal"));
        }
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(102, 10), 9);
        assert_eq!(bar_width(10, 50), 1);
        assert_eq!(bar_width(0, 0), 1);
    }
}
