use boxoffice_core::ScatterPlot;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, scatter: &ScatterPlot) {
    let ([x_min, x_max], [y_min, y_max]) = scatter.bounds().unwrap_or(([0.0, 1.0], [0.0, 1.0]));
    let x_bounds = padded(x_min, x_max);
    let y_bounds = padded(y_min, y_max);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Cyan))
        .data(&scatter.points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(scatter.title.as_str())
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(scatter.x_label.as_str())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(scatter.y_label.as_str())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

/// Start the axis at zero and widen a zero-length range
fn padded(min: f64, max: f64) -> [f64; 2] {
    let low = min.min(0.0);
    let high = if max > low { max * 1.05 } else { low + 1.0 };
    [low, high]
}

fn axis_labels([low, high]: [f64; 2]) -> Vec<String> {
    let mid = (low + high) / 2.0;
    [low, mid, high]
        .iter()
        .map(|value| format!("{value:.0}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_starts_at_zero() {
        assert_eq!(padded(7.0, 200.0), [0.0, 210.0]);
        assert_eq!(padded(5.0, 5.0)[0], 0.0);
        assert_eq!(padded(0.0, 0.0), [0.0, 1.0]);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_labels([0.0, 100.0]), vec!["0", "50", "100"]);
    }
}
