//! Statistics menu entries and their text reports

use boxoffice_io::MovieDataset;
use boxoffice_stats::{
    correlation, highest_total, interquartile_range, least_frequent, lowest_total, maximum, mean,
    median, minimum, mode, most_frequent, range, skewness, std_deviation, SkewnessKind,
    StatsError, StatsResult,
};

use crate::format::{fixed2, plain};

/// One entry of the statistics menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsQuery {
    Counts,
    Mean,
    Median,
    Mode,
    Maximum,
    Minimum,
    Range,
    InterquartileRange,
    StdDeviation,
    Skewness,
    Correlation,
    DistinctDecades,
    MostFrequentDecade,
    LeastFrequentDecade,
    HighestGrossingDecade,
    LowestGrossingDecade,
}

impl StatsQuery {
    /// All entries in menu order
    pub const ALL: [StatsQuery; 16] = [
        StatsQuery::Counts,
        StatsQuery::Mean,
        StatsQuery::Median,
        StatsQuery::Mode,
        StatsQuery::Maximum,
        StatsQuery::Minimum,
        StatsQuery::Range,
        StatsQuery::InterquartileRange,
        StatsQuery::StdDeviation,
        StatsQuery::Skewness,
        StatsQuery::Correlation,
        StatsQuery::DistinctDecades,
        StatsQuery::MostFrequentDecade,
        StatsQuery::LeastFrequentDecade,
        StatsQuery::HighestGrossingDecade,
        StatsQuery::LowestGrossingDecade,
    ];

    /// Parse a menu choice such as `"7"`
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// 1-based menu number
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|q| q == self).unwrap_or_default() + 1
    }

    /// Menu text
    pub fn label(&self) -> &'static str {
        match self {
            StatsQuery::Counts => "Number of values in Budgets and Worldwide Gross",
            StatsQuery::Mean => "Mean of the Budgets and Worldwide Gross",
            StatsQuery::Median => "Median of the Budgets and Worldwide Gross",
            StatsQuery::Mode => "Mode of the Budgets and Worldwide Gross",
            StatsQuery::Maximum => "Maximum of the Budgets and Worldwide Gross",
            StatsQuery::Minimum => "Minimum of the Budgets and Worldwide Gross",
            StatsQuery::Range => "Range of the Budgets and Worldwide Gross",
            StatsQuery::InterquartileRange => {
                "Inter-Quartile Range of the Budgets and Worldwide Gross"
            }
            StatsQuery::StdDeviation => "Standard Deviation of the Budgets and Worldwide Gross",
            StatsQuery::Skewness => "Skewness of the Budgets and Worldwide Gross",
            StatsQuery::Correlation => "Correlation between Budgets and Worldwide Gross",
            StatsQuery::DistinctDecades => "Number of distinct sub-categories",
            StatsQuery::MostFrequentDecade => {
                "Decade with the highest number of profitable movies"
            }
            StatsQuery::LeastFrequentDecade => {
                "Decade with the lowest number of profitable movies"
            }
            StatsQuery::HighestGrossingDecade => "Decade with the highest total gross",
            StatsQuery::LowestGrossingDecade => "Decade with the lowest total gross",
        }
    }

    /// Whether the entry analyses the decade category rather than the
    /// numeric columns
    pub fn is_categorical(&self) -> bool {
        self.number() >= StatsQuery::DistinctDecades.number()
    }
}

/// Formats statistics over a dataset as report lines
pub struct Reporter<'a> {
    dataset: &'a MovieDataset,
    unit: &'a str,
}

impl<'a> Reporter<'a> {
    pub fn new(dataset: &'a MovieDataset, unit: &'a str) -> Self {
        Self { dataset, unit }
    }

    /// Compute and format the lines for one menu entry
    ///
    /// Lines are produced in order and the first failing statistic aborts
    /// the whole report.
    pub fn report(&self, query: StatsQuery) -> StatsResult<Vec<String>> {
        let budgets = self.dataset.budgets();
        let grosses = self.dataset.grosses();
        let unit = self.unit;

        let lines = match query {
            StatsQuery::Counts => vec![
                format!("Number of values in budget: {}", budgets.len()),
                format!("Number of values in Worldwide Gross: {}", grosses.len()),
            ],
            StatsQuery::Mean => vec![
                format!(
                    "Mean of the budgets of the most profitable movies: {} {unit}",
                    fixed2(mean(budgets)?)
                ),
                format!(
                    "Mean of the worldwide grosses of the most profitable movies: {} {unit}",
                    fixed2(mean(grosses)?)
                ),
            ],
            StatsQuery::Median => vec![
                format!(
                    "Median of the budgets of the most profitable movies: {} {unit}",
                    fixed2(median(budgets)?)
                ),
                format!(
                    "Median of the worldwide grosses of the most profitable movies: {} {unit}",
                    fixed2(median(grosses)?)
                ),
            ],
            StatsQuery::Mode => vec![
                format!(
                    "Mode of the budgets of the most profitable movies: {} {unit}",
                    fixed2(mode(budgets)?)
                ),
                format!(
                    "Mode of the worldwide grosses of the most profitable movies: {} {unit}",
                    fixed2(mode(grosses)?)
                ),
            ],
            StatsQuery::Maximum => {
                let budget = maximum(budgets)?;
                let gross = maximum(grosses)?;
                vec![
                    format!(
                        "Maximum budget of the most profitable movie: {} {unit} ({})",
                        fixed2(budget.value),
                        self.title(budget.index)
                    ),
                    format!(
                        "Maximum worldwide gross of the most profitable movie: {} {unit} ({})",
                        fixed2(gross.value),
                        self.title(gross.index)
                    ),
                ]
            }
            StatsQuery::Minimum => {
                let budget = minimum(budgets)?;
                let gross = minimum(grosses)?;
                vec![
                    format!(
                        "Minimum budget of the most profitable movie: {} {unit} ({})",
                        fixed2(budget.value),
                        self.title(budget.index)
                    ),
                    format!(
                        "Minimum worldwide gross of the most profitable movie: {} {unit} ({})",
                        fixed2(gross.value),
                        self.title(gross.index)
                    ),
                ]
            }
            StatsQuery::Range => vec![
                format!(
                    "Range of the budgets of the most profitable movies: {} {unit}",
                    plain(range(budgets)?)
                ),
                format!(
                    "Range of the worldwide grosses of the most profitable movies: {} {unit}",
                    plain(range(grosses)?)
                ),
            ],
            StatsQuery::InterquartileRange => vec![
                format!(
                    "Inter-quartile range of budgets of the most profitable movies: {} {unit}",
                    fixed2(interquartile_range(budgets)?)
                ),
                format!(
                    "Inter-quartile range of worldwide grosses of the most profitable movies: {} {unit}",
                    plain(interquartile_range(grosses)?)
                ),
            ],
            StatsQuery::StdDeviation => vec![
                format!(
                    "Standard Deviation of the budgets of the most profitable movies: {} {unit}",
                    plain(std_deviation(budgets)?)
                ),
                format!(
                    "Standard Deviation of the worldwide grosses of the most profitable movies: {} {unit}",
                    plain(std_deviation(grosses)?)
                ),
            ],
            StatsQuery::Skewness => vec![
                format!(
                    "Pearson Mode Skewness of the budgets of the most profitable movies: {}",
                    plain(skewness(budgets, SkewnessKind::PearsonMode)?)
                ),
                format!(
                    "Alternative Pearson Mode Skewness of the budgets of the most profitable movies: {}",
                    plain(skewness(budgets, SkewnessKind::Median)?)
                ),
                format!(
                    "Pearson Mode Skewness of the worldwide grosses of the most profitable movies: {}",
                    plain(skewness(grosses, SkewnessKind::PearsonMode)?)
                ),
                format!(
                    "Alternative Pearson Mode Skewness of the worldwide grosses of the most profitable movies: {}",
                    plain(skewness(grosses, SkewnessKind::Median)?)
                ),
            ],
            StatsQuery::Correlation => vec![format!(
                "Correlation value of budget with worldwide gross: {}",
                plain(correlation(budgets, grosses)?)
            )],
            StatsQuery::DistinctDecades => {
                let labels: Vec<&str> = self.dataset.decade_labels().collect();
                vec![format!(
                    "Number of distinct sub-categories: {} ({})",
                    labels.len(),
                    labels.join(", ")
                )]
            }
            StatsQuery::MostFrequentDecade => {
                let best = most_frequent(self.dataset.count_by_decade());
                if best.is_empty() {
                    return Err(StatsError::EmptyInput);
                }
                vec![format!(
                    "The decade with the highest number of profitable movies is the {} with {} movies",
                    best.label, best.count
                )]
            }
            StatsQuery::LeastFrequentDecade => {
                let worst = least_frequent(self.dataset.count_by_decade());
                if worst.is_empty() {
                    return Err(StatsError::EmptyInput);
                }
                vec![format!(
                    "The decade with the lowest number of profitable movies is the {} with {} movies",
                    worst.label, worst.count
                )]
            }
            StatsQuery::HighestGrossingDecade => {
                let best = highest_total(self.dataset.gross_by_decade());
                if best.is_empty() {
                    return Err(StatsError::EmptyInput);
                }
                vec![format!(
                    "The highest grossing decade is the {} with a total of {} Billion USD",
                    best.label,
                    fixed2(best.total_billions())
                )]
            }
            StatsQuery::LowestGrossingDecade => {
                let worst = lowest_total(self.dataset.gross_by_decade());
                if worst.is_empty() {
                    return Err(StatsError::EmptyInput);
                }
                vec![format!(
                    "The lowest grossing decade is the {} with a total of {} Billion USD",
                    worst.label,
                    fixed2(worst.total_billions())
                )]
            }
        };

        Ok(lines)
    }

    fn title(&self, index: usize) -> &str {
        self.dataset.title(index).unwrap_or_default()
    }
}
