//! Serializable snapshot of every statistic
//!
//! Used for non-interactive output. Statistics that cannot be computed for
//! the dataset (empty input, degenerate distribution) are `None`.

use boxoffice_io::MovieDataset;
use boxoffice_stats::{
    correlation, highest_total, interquartile_range, least_frequent, lowest_total, maximum, mean,
    median, minimum, mode, most_frequent, range, skewness, std_deviation, DecadeCount,
    DecadeTotal, Extremum, SkewnessKind,
};
use serde::{Deserialize, Serialize};

use crate::error::BoxofficeResult;

/// Statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    pub max: Option<Extremum>,
    pub max_title: Option<String>,
    pub min: Option<Extremum>,
    pub min_title: Option<String>,
    pub range: Option<f64>,
    pub interquartile_range: Option<f64>,
    pub std_deviation: Option<f64>,
    pub pearson_mode_skewness: Option<f64>,
    pub median_skewness: Option<f64>,
}

impl SeriesSummary {
    fn from_column(data: &[f64], dataset: &MovieDataset) -> Self {
        let max = maximum(data).ok();
        let min = minimum(data).ok();
        let title_of = |e: &Option<Extremum>| {
            e.and_then(|e| dataset.title(e.index))
                .map(str::to_string)
        };

        Self {
            count: data.len(),
            mean: mean(data).ok(),
            median: median(data).ok(),
            mode: mode(data).ok(),
            max_title: title_of(&max),
            max,
            min_title: title_of(&min),
            min,
            range: range(data).ok(),
            interquartile_range: interquartile_range(data).ok(),
            std_deviation: std_deviation(data).ok(),
            pearson_mode_skewness: skewness(data, SkewnessKind::PearsonMode).ok(),
            median_skewness: skewness(data, SkewnessKind::Median).ok(),
        }
    }
}

/// Per-decade figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeSummary {
    pub label: String,
    pub count: usize,
    /// Total gross in million USD
    pub total: f64,
}

/// Every statistic the menu can show, in one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub movies: usize,
    pub budget: SeriesSummary,
    pub gross: SeriesSummary,
    pub correlation: Option<f64>,
    pub decades: Vec<DecadeSummary>,
    pub most_frequent_decade: Option<DecadeCount>,
    pub least_frequent_decade: Option<DecadeCount>,
    pub highest_grossing_decade: Option<DecadeTotal>,
    pub lowest_grossing_decade: Option<DecadeTotal>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &MovieDataset) -> Self {
        let non_empty_total = |total: DecadeTotal| (!total.is_empty()).then_some(total);
        let non_empty_count = |count: DecadeCount| (!count.is_empty()).then_some(count);

        Self {
            movies: dataset.len(),
            budget: SeriesSummary::from_column(dataset.budgets(), dataset),
            gross: SeriesSummary::from_column(dataset.grosses(), dataset),
            correlation: correlation(dataset.budgets(), dataset.grosses()).ok(),
            decades: dataset
                .decades()
                .iter()
                .map(|group| DecadeSummary {
                    label: group.label.clone(),
                    count: group.count(),
                    total: group.total(),
                })
                .collect(),
            most_frequent_decade: non_empty_count(most_frequent(dataset.count_by_decade())),
            least_frequent_decade: non_empty_count(least_frequent(dataset.count_by_decade())),
            highest_grossing_decade: non_empty_total(highest_total(dataset.gross_by_decade())),
            lowest_grossing_decade: non_empty_total(lowest_total(dataset.gross_by_decade())),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> BoxofficeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
