//! Box plot summaries
//!
//! Conventional quartiles for drawing box plots:
//! - Quartiles by linear interpolation between closest ranks
//! - Whiskers at the furthest observation within 1.5 * IQR of the box
//! - Mean marked separately; outliers are not retained

use serde::{Deserialize, Serialize};

use crate::descriptive::{mean, sorted};
use crate::error::{StatsError, StatsResult};

/// Whisker reach as a multiple of the interquartile range
pub const WHISKER_REACH: f64 = 1.5;

/// Summary statistics needed to draw one box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Lower whisker end
    pub lower_whisker: f64,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Upper whisker end
    pub upper_whisker: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
}

impl BoxSummary {
    /// Compute a box summary from data
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        if data.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let sorted = sorted(data);
        let q1 = percentile_sorted(&sorted, 25.0);
        let median = percentile_sorted(&sorted, 50.0);
        let q3 = percentile_sorted(&sorted, 75.0);

        let reach = WHISKER_REACH * (q3 - q1);
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&x| x >= q1 - reach)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= q3 + reach)
            .unwrap_or(q3);

        Ok(Self {
            count: sorted.len(),
            min: sorted[0],
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            max: sorted[sorted.len() - 1],
            mean: mean(data)?,
        })
    }
}

fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_summary_basic() {
        let data: Vec<f64> = (1..=5).map(|x| x as f64).collect();
        let summary = BoxSummary::from_data(&data).unwrap();

        assert_eq!(summary.count, 5);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
        assert_eq!(summary.mean, 3.0);
    }

    #[test]
    fn test_box_summary_whiskers_exclude_outliers() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 100.0];
        let summary = BoxSummary::from_data(&data).unwrap();

        // Fences at 2 - 3 = -1 and 4 + 3 = 7
        assert_eq!(summary.upper_whisker, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.max, 100.0);
    }

    #[test]
    fn test_quartiles_interpolate_between_ranks() {
        let summary = BoxSummary::from_data(&[40.0, 10.0, 30.0, 20.0]).unwrap();
        assert_eq!(summary.q1, 17.5);
        assert_eq!(summary.median, 25.0);
        assert_eq!(summary.q3, 32.5);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 40.0);
    }

    #[test]
    fn test_box_summary_singleton() {
        let summary = BoxSummary::from_data(&[7.0]).unwrap();
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.max, 7.0);
        assert_eq!(summary.q3 - summary.q1, 0.0);
    }

    #[test]
    fn test_box_summary_empty() {
        assert_eq!(BoxSummary::from_data(&[]), Err(StatsError::EmptyInput));
    }
}
