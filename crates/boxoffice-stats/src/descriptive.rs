//! Descriptive statistics over observation sequences
//!
//! Every function takes a slice of observations (budgets or grosses, in
//! million USD) and returns a [`StatsResult`]. Empty input is reported as
//! [`StatsError::EmptyInput`], never a panic.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Which skewness measure to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkewnessKind {
    /// Pearson mode skewness: (mean - mode) / std_dev
    PearsonMode,
    /// Alternative (median) skewness: 3 * (mean - median) / std_dev
    Median,
}

/// An extreme value together with its first position in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Index of the first occurrence
    pub index: usize,
    /// The extreme value
    pub value: f64,
}

/// Round to two decimal places
///
/// Rounds the exact stored value, so `840.775` (stored just below the
/// midpoint) becomes `840.77`. Exact midpoints go to even.
pub fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median, pivoting on `floor(n / 2)`
pub fn median(data: &[f64]) -> StatsResult<f64> {
    sorted_median(&sorted(data))
}

/// Most frequent value
///
/// Ties go to the value whose first occurrence comes earliest.
pub fn mode(data: &[f64]) -> StatsResult<f64> {
    // Distinct values in order of first occurrence
    let mut frequencies: Vec<(f64, usize)> = Vec::new();
    for &value in data {
        match frequencies.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => frequencies.push((value, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (value, count) in frequencies {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value).ok_or(StatsError::EmptyInput)
}

/// Largest value and the position of its first occurrence
pub fn maximum(data: &[f64]) -> StatsResult<Extremum> {
    extremum(data, |candidate, best| candidate > best)
}

/// Smallest value and the position of its first occurrence
pub fn minimum(data: &[f64]) -> StatsResult<Extremum> {
    extremum(data, |candidate, best| candidate < best)
}

/// max - min, rounded to two decimals
pub fn range(data: &[f64]) -> StatsResult<f64> {
    let max = maximum(data)?.value;
    let min = minimum(data)?.value;
    Ok(round2(max - min))
}

/// Interquartile range as median(upper half) - median(lower half)
///
/// The sorted data is split at `pivot = floor(n / 2)`. For odd `n` the
/// pivot belongs to neither half; for even `n` it starts the upper half.
/// The result is not rounded.
pub fn interquartile_range(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sorted = sorted(data);
    let pivot = sorted.len() / 2;
    let (lower, upper) = if sorted.len() % 2 == 1 {
        (&sorted[..pivot], &sorted[pivot + 1..])
    } else {
        (&sorted[..pivot], &sorted[pivot..])
    };

    Ok(sorted_median(upper)? - sorted_median(lower)?)
}

/// Sample standard deviation (Bessel's correction), rounded to two decimals
pub fn std_deviation(data: &[f64]) -> StatsResult<f64> {
    let mean = mean(data)?;
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            actual: data.len(),
        });
    }

    let squared_deviations: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(round2((squared_deviations / (data.len() - 1) as f64).sqrt()))
}

/// Skewness, rounded to two decimals
///
/// The denominator is the rounded value returned by [`std_deviation`], so a
/// spread that rounds to `0.00` is reported as
/// [`StatsError::DegenerateDistribution`].
pub fn skewness(data: &[f64], kind: SkewnessKind) -> StatsResult<f64> {
    let mean = mean(data)?;
    let numerator = match kind {
        SkewnessKind::PearsonMode => mean - mode(data)?,
        SkewnessKind::Median => 3.0 * (mean - median(data)?),
    };

    let std_dev = std_deviation(data)?;
    if std_dev == 0.0 {
        return Err(StatsError::DegenerateDistribution);
    }

    Ok(round2(numerator / std_dev))
}

/// Pearson correlation coefficient, rounded to two decimals
///
/// Each mean and each root-sum-of-squares is taken over its own full
/// sequence; the cross products stop at the shorter of the two.
pub fn correlation(xs: &[f64], ys: &[f64]) -> StatsResult<f64> {
    let x_mean = mean(xs)?;
    let y_mean = mean(ys)?;

    let cross: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - x_mean) * (y - y_mean))
        .sum();

    let denominator = sum_of_squares(xs, x_mean).sqrt() * sum_of_squares(ys, y_mean).sqrt();
    if denominator == 0.0 {
        return Err(StatsError::DegenerateDistribution);
    }

    Ok(round2(cross / denominator))
}

fn sum_of_squares(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|x| (x - mean).powi(2)).sum()
}

fn extremum(data: &[f64], better: impl Fn(f64, f64) -> bool) -> StatsResult<Extremum> {
    let (&first, rest) = data.split_first().ok_or(StatsError::EmptyInput)?;

    let mut best = Extremum {
        index: 0,
        value: first,
    };
    for (offset, &value) in rest.iter().enumerate() {
        if better(value, best.value) {
            best = Extremum {
                index: offset + 1,
                value,
            };
        }
    }

    Ok(best)
}

pub(crate) fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn sorted_median(sorted: &[f64]) -> StatsResult<f64> {
    if sorted.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
