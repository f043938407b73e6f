//! Chart-ready data for the visualisation menu
//!
//! Charts are computed here as plain data and drawn by a
//! [`ChartPresenter`](crate::menu::ChartPresenter). Decade-based charts list
//! decades in label order.

use boxoffice_io::MovieDataset;
use boxoffice_stats::{maximum, BoxSummary, StatsError, StatsResult};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;

/// One entry of the visualisation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizQuery {
    BudgetHistogram,
    GrossHistogram,
    BudgetBoxPlot,
    GrossBoxPlot,
    BudgetVsGross,
    DecadeShare,
    DecadeCounts,
    DecadeGrossBoxPlots,
}

impl VizQuery {
    /// All entries in menu order
    pub const ALL: [VizQuery; 8] = [
        VizQuery::BudgetHistogram,
        VizQuery::GrossHistogram,
        VizQuery::BudgetBoxPlot,
        VizQuery::GrossBoxPlot,
        VizQuery::BudgetVsGross,
        VizQuery::DecadeShare,
        VizQuery::DecadeCounts,
        VizQuery::DecadeGrossBoxPlots,
    ];

    /// Parse a menu choice such as `"5"`
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// Menu text
    pub fn label(&self) -> &'static str {
        match self {
            VizQuery::BudgetHistogram => "Histogram of Budgets",
            VizQuery::GrossHistogram => "Histogram of Worldwide Gross",
            VizQuery::BudgetBoxPlot => "Box plot of Budgets",
            VizQuery::GrossBoxPlot => "Box plot of Worldwide Gross",
            VizQuery::BudgetVsGross => "Scatter plot of Budget vs Worldwide Gross",
            VizQuery::DecadeShare => {
                "Pie chart showing the percentage number of profitable movies in each decade"
            }
            VizQuery::DecadeCounts => {
                "Bar chart showing the total of the profitable movies in each decade"
            }
            VizQuery::DecadeGrossBoxPlots => "Box plots of the worldwide grosses for each decade",
        }
    }
}

/// A chart ready to be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Chart {
    Histogram(Histogram),
    BoxPlot(BoxPlot),
    Scatter(ScatterPlot),
    Pie(PieChart),
    Bar(BarChart),
}

impl Chart {
    /// Build the chart for a menu entry
    pub fn build(query: VizQuery, dataset: &MovieDataset, config: &ChartConfig) -> StatsResult<Self> {
        let chart = match query {
            VizQuery::BudgetHistogram => Chart::Histogram(Histogram::from_data(
                dataset.budgets(),
                config.budget_bin_width,
                "Budgets of Most Profitable Movies",
                "Budget (in million USD)",
            )?),
            VizQuery::GrossHistogram => Chart::Histogram(Histogram::from_data(
                dataset.grosses(),
                config.gross_bin_width,
                "Worldwide Gross of Most Profitable Movies",
                "Worldwide gross (in million USD)",
            )?),
            VizQuery::BudgetBoxPlot => Chart::BoxPlot(BoxPlot::single(
                dataset.budgets(),
                "Budgets of Most Profitable Movies",
                "Budget (in million USD)",
            )?),
            VizQuery::GrossBoxPlot => Chart::BoxPlot(BoxPlot::single(
                dataset.grosses(),
                "Worldwide Gross of Most Profitable Movies",
                "Worldwide gross (in million USD)",
            )?),
            VizQuery::BudgetVsGross => Chart::Scatter(ScatterPlot::budget_vs_gross(dataset)),
            VizQuery::DecadeShare => Chart::Pie(PieChart::decade_share(dataset)),
            VizQuery::DecadeCounts => Chart::Bar(BarChart::decade_counts(dataset)),
            VizQuery::DecadeGrossBoxPlots => Chart::BoxPlot(BoxPlot::per_decade(dataset)?),
        };
        Ok(chart)
    }

    pub fn title(&self) -> &str {
        match self {
            Chart::Histogram(chart) => &chart.title,
            Chart::BoxPlot(chart) => &chart.title,
            Chart::Scatter(chart) => &chart.title,
            Chart::Pie(chart) => &chart.title,
            Chart::Bar(chart) => &chart.title,
        }
    }
}

/// Upper bound on the number of histogram bins
pub const MAX_BINS: usize = 1000;

/// A histogram bin `[start, end)`; the last bin also includes `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin `data` with edges `0, width, 2 * width, ...` up to (but not
    /// including) `trunc(max) + width`
    ///
    /// At most [`MAX_BINS`] bins are built. Values below zero or above the
    /// last edge are not counted.
    pub fn from_data(data: &[f64], width: u32, title: &str, x_label: &str) -> StatsResult<Self> {
        let max = maximum(data)?.value;
        let width = f64::from(width.max(1));
        let limit = max.trunc() + width;

        let edge_count = if limit > 0.0 {
            ((limit / width).ceil() as usize).min(MAX_BINS + 1)
        } else {
            0
        };
        let edges: Vec<f64> = (0..edge_count).map(|k| k as f64 * width).collect();

        let mut bins: Vec<HistogramBin> = edges
            .windows(2)
            .map(|pair| HistogramBin {
                start: pair[0],
                end: pair[1],
                count: 0,
            })
            .collect();

        if let Some(last_edge) = edges.last().copied() {
            for &value in data {
                if bins.is_empty() || value < 0.0 || value > last_edge {
                    continue;
                }
                let index = ((value / width).floor() as usize).min(bins.len() - 1);
                bins[index].count += 1;
            }
        }

        Ok(Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: "Number of movies".to_string(),
            bins,
        })
    }

    /// Number of values counted across all bins
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// A labelled box in a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledBox {
    pub label: String,
    pub summary: BoxSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: String,
    pub boxes: Vec<LabeledBox>,
}

impl BoxPlot {
    /// A box plot with one box
    pub fn single(data: &[f64], title: &str, y_label: &str) -> StatsResult<Self> {
        Ok(Self {
            title: title.to_string(),
            x_label: None,
            y_label: y_label.to_string(),
            boxes: vec![LabeledBox {
                label: String::new(),
                summary: BoxSummary::from_data(data)?,
            }],
        })
    }

    /// One box of gross values per decade
    pub fn per_decade(dataset: &MovieDataset) -> StatsResult<Self> {
        if dataset.decades().is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let boxes = dataset
            .gross_by_decade()
            .map(|(label, grosses)| {
                Ok(LabeledBox {
                    label: label.to_string(),
                    summary: BoxSummary::from_data(grosses)?,
                })
            })
            .collect::<StatsResult<Vec<_>>>()?;

        Ok(Self {
            title: "Worldwide Gross for each Decade".to_string(),
            x_label: Some("Decade".to_string()),
            y_label: "Worldwide Gross (in million USD)".to_string(),
            boxes,
        })
    }

    /// Lowest and highest whisker across all boxes
    pub fn bounds(&self) -> (f64, f64) {
        self.boxes.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), b| (lo.min(b.summary.lower_whisker), hi.max(b.summary.upper_whisker)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

impl ScatterPlot {
    pub fn budget_vs_gross(dataset: &MovieDataset) -> Self {
        Self {
            title: "Scatter Plot of Budget vs Worldwide gross".to_string(),
            x_label: "Budget (in million USD)".to_string(),
            y_label: "Worldwide gross (in million USD)".to_string(),
            points: dataset
                .budgets()
                .iter()
                .copied()
                .zip(dataset.grosses().iter().copied())
                .collect(),
        }
    }

    /// `(min, max)` of the x and y coordinates, or `None` without points
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let (first, rest) = self.points.split_first()?;
        let init = ([first.0, first.0], [first.1, first.1]);
        Some(rest.iter().fold(init, |(x, y), &(px, py)| {
            ([x[0].min(px), x[1].max(px)], [y[0].min(py), y[1].max(py)])
        }))
    }
}

/// A decade's share of movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of all movies, 0-100
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn decade_share(dataset: &MovieDataset) -> Self {
        let total: usize = dataset.count_by_decade().map(|(_, count)| count).sum();
        let slices = dataset
            .count_by_decade()
            .map(|(label, count)| PieSlice {
                label: label.to_string(),
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        Self {
            title: "Distribution of Most Profitable Movies by Decade".to_string(),
            slices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
}

/// Horizontal bar chart of movie counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn decade_counts(dataset: &MovieDataset) -> Self {
        Self {
            title: "Most Profitable Movies in each Decade".to_string(),
            x_label: "Number of Movies".to_string(),
            y_label: "Decade".to_string(),
            bars: dataset
                .count_by_decade()
                .map(|(label, count)| Bar {
                    label: label.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_io::MovieRecord;

    fn dataset() -> MovieDataset {
        MovieDataset::from_records(vec![
            MovieRecord::new("1990s", "Titanic", 200.0, 2264.7),
            MovieRecord::new("1970s", "Jaws", 7.0, 470.7),
            MovieRecord::new("1990s", "Home Alone", 18.0, 476.7),
            MovieRecord::new("2000s", "Avatar", 237.0, 2923.7),
        ])
    }

    #[test]
    fn test_histogram_edges_follow_truncated_max() {
        let histogram = Histogram::from_data(&[10.0, 60.0, 237.0], 50, "t", "x").unwrap();
        // Edges 0, 50, ..., 250
        assert_eq!(histogram.bins.len(), 5);
        assert_eq!(histogram.bins[0].start, 0.0);
        assert_eq!(histogram.bins[4].end, 250.0);
        let counts: Vec<usize> = histogram.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 0, 0, 1]);
    }

    #[test]
    fn test_histogram_last_bin_is_closed() {
        let histogram = Histogram::from_data(&[250.0, 0.0], 50, "t", "x").unwrap();
        assert_eq!(histogram.bins.last().unwrap().count, 1);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_histogram_bin_count_is_capped() {
        let histogram = Histogram::from_data(&[10.0, 1e20], 50, "t", "x").unwrap();
        assert_eq!(histogram.bins.len(), MAX_BINS);
        assert_eq!(histogram.bins[MAX_BINS - 1].end, 50_000.0);
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn test_histogram_negative_max_has_no_bins() {
        let histogram = Histogram::from_data(&[-500.0, -120.0], 50, "t", "x").unwrap();
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn test_histogram_empty_data() {
        assert_eq!(
            Histogram::from_data(&[], 50, "t", "x"),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_build_every_chart() {
        let dataset = dataset();
        let config = ChartConfig::default();
        for query in VizQuery::ALL {
            let chart = Chart::build(query, &dataset, &config).unwrap();
            assert!(!chart.title().is_empty());
        }
    }

    #[test]
    fn test_decade_charts_in_label_order() {
        let dataset = dataset();
        let pie = PieChart::decade_share(&dataset);
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["1970s", "1990s", "2000s"]);
        assert_eq!(pie.slices[1].count, 2);
        assert_eq!(pie.slices[1].percent, 50.0);

        let bars = BarChart::decade_counts(&dataset);
        assert_eq!(bars.bars[0].label, "1970s");
        assert_eq!(bars.bars[0].count, 1);

        let boxes = BoxPlot::per_decade(&dataset).unwrap();
        assert_eq!(boxes.boxes.len(), 3);
        assert_eq!(boxes.boxes[1].summary.count, 2);
    }

    #[test]
    fn test_scatter_bounds() {
        let scatter = ScatterPlot::budget_vs_gross(&dataset());
        assert_eq!(scatter.points.len(), 4);
        assert_eq!(
            scatter.bounds(),
            Some(([7.0, 237.0], [470.7, 2923.7]))
        );
    }

    #[test]
    fn test_viz_choice() {
        assert_eq!(VizQuery::from_choice("1"), Some(VizQuery::BudgetHistogram));
        assert_eq!(
            VizQuery::from_choice("8"),
            Some(VizQuery::DecadeGrossBoxPlots)
        );
        assert_eq!(VizQuery::from_choice("9"), None);
    }

    #[test]
    fn test_empty_dataset_charts() {
        let empty = MovieDataset::default();
        let config = ChartConfig::default();
        assert!(Chart::build(VizQuery::BudgetHistogram, &empty, &config).is_err());
        assert!(Chart::build(VizQuery::DecadeGrossBoxPlots, &empty, &config).is_err());
        assert!(Chart::build(VizQuery::DecadeCounts, &empty, &config).is_ok());
    }
}
