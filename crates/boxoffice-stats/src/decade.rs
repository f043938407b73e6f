//! Decade aggregation
//!
//! Reduces per-decade groups to the single decade with the largest or
//! smallest total gross (or movie count). Groups are scanned in the order
//! the iterator yields them, which for a loaded dataset is label order.
//!
//! Tie-breaks differ between the two families:
//! - totals use `>=` / `<=`, so the **last** tied decade wins
//! - counts use `>` / `<`, so the **first** tied decade wins

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A decade and the sum of its values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecadeTotal {
    pub label: String,
    pub total: f64,
}

impl DecadeTotal {
    /// True for the sentinel returned when there are no decades
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }

    /// Total converted from millions to billions
    pub fn total_billions(&self) -> f64 {
        self.total / 1000.0
    }
}

/// A decade and its number of movies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    pub label: String,
    pub count: usize,
}

impl DecadeCount {
    /// True for the sentinel returned when there are no decades
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

/// Decade with the largest total; later ties replace earlier ones
///
/// Returns `DecadeTotal::default()` (empty label, zero total) when there
/// are no groups.
pub fn highest_total<'a, I>(groups: I) -> DecadeTotal
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    scan_totals(decade_sums(groups), |total, best| total >= best)
}

/// Decade with the smallest total; later ties replace earlier ones
///
/// Returns `DecadeTotal::default()` when there are no groups.
pub fn lowest_total<'a, I>(groups: I) -> DecadeTotal
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    scan_totals(decade_sums(groups), |total, best| total <= best)
}

/// Decade with the most movies; the first of tied decades wins
pub fn most_frequent<'a, I>(groups: I) -> DecadeCount
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    scan_counts(groups, |count, best| count > best)
}

/// Decade with the fewest movies; the first of tied decades wins
pub fn least_frequent<'a, I>(groups: I) -> DecadeCount
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    scan_counts(groups, |count, best| count < best)
}

#[cfg(not(feature = "parallel"))]
fn decade_sums<'a, I>(groups: I) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    groups
        .into_iter()
        .map(|(label, values)| (label, values.iter().sum()))
        .collect()
}

// `collect` on an indexed parallel iterator keeps input order, so the scan
// below sees the same sequence as the sequential build.
#[cfg(feature = "parallel")]
fn decade_sums<'a, I>(groups: I) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    let groups: Vec<(&'a str, &'a [f64])> = groups.into_iter().collect();
    groups
        .par_iter()
        .map(|&(label, values)| (label, values.iter().sum()))
        .collect()
}

fn scan_totals(sums: Vec<(&str, f64)>, replaces: impl Fn(f64, f64) -> bool) -> DecadeTotal {
    let mut best: Option<(&str, f64)> = None;
    for (label, total) in sums {
        match best {
            Some((_, current)) if !replaces(total, current) => {}
            _ => best = Some((label, total)),
        }
    }

    best.map(|(label, total)| DecadeTotal {
        label: label.to_string(),
        total,
    })
    .unwrap_or_default()
}

fn scan_counts<'a, I>(groups: I, replaces: impl Fn(usize, usize) -> bool) -> DecadeCount
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in groups {
        match best {
            Some((_, current)) if !replaces(count, current) => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, count)| DecadeCount {
        label: label.to_string(),
        count,
    })
    .unwrap_or_default()
}
