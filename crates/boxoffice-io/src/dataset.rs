//! In-memory movie dataset

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One parsed row of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Decade label, e.g. "1970s"
    pub decade: String,
    /// Movie title
    pub title: String,
    /// Budget in million USD
    pub budget: f64,
    /// Worldwide gross in million USD
    pub gross: f64,
}

impl MovieRecord {
    pub fn new(decade: impl Into<String>, title: impl Into<String>, budget: f64, gross: f64) -> Self {
        Self {
            decade: decade.into(),
            title: title.into(),
            budget,
            gross,
        }
    }
}

/// The gross values of every movie in one decade
///
/// The decade's movie count is the number of values, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeGroup {
    pub label: String,
    pub grosses: Vec<f64>,
}

impl DecadeGroup {
    /// Number of movies in this decade
    pub fn count(&self) -> usize {
        self.grosses.len()
    }

    /// Sum of gross values in million USD
    pub fn total(&self) -> f64 {
        self.grosses.iter().sum()
    }
}

/// Immutable dataset built once at load time
///
/// `titles`, `budgets` and `grosses` are positionally parallel: index `i`
/// in each refers to the same movie. Decade groups are ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDataset {
    titles: Vec<String>,
    budgets: Vec<f64>,
    grosses: Vec<f64>,
    decades: Vec<DecadeGroup>,
}

impl MovieDataset {
    /// Build a dataset from parsed rows, keeping row order
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MovieRecord>,
    {
        let mut titles = Vec::new();
        let mut budgets = Vec::new();
        let mut grosses = Vec::new();
        let mut by_decade: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for record in records {
            by_decade
                .entry(record.decade)
                .or_default()
                .push(record.gross);
            titles.push(record.title);
            budgets.push(record.budget);
            grosses.push(record.gross);
        }

        let decades = by_decade
            .into_iter()
            .map(|(label, grosses)| DecadeGroup { label, grosses })
            .collect();

        Self {
            titles,
            budgets,
            grosses,
            decades,
        }
    }

    /// Number of movies
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Budgets in million USD, parallel to `titles`
    pub fn budgets(&self) -> &[f64] {
        &self.budgets
    }

    /// Worldwide grosses in million USD, parallel to `titles`
    pub fn grosses(&self) -> &[f64] {
        &self.grosses
    }

    /// Title of the movie at `index`
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Decade groups ordered by label
    pub fn decades(&self) -> &[DecadeGroup] {
        &self.decades
    }

    /// Decade labels in order
    pub fn decade_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.decades.iter().map(|group| group.label.as_str())
    }

    /// `(label, gross values)` per decade, in label order
    pub fn gross_by_decade(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.decades
            .iter()
            .map(|group| (group.label.as_str(), group.grosses.as_slice()))
    }

    /// `(label, movie count)` per decade, in label order
    pub fn count_by_decade(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.decades
            .iter()
            .map(|group| (group.label.as_str(), group.count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieDataset {
        MovieDataset::from_records(vec![
            MovieRecord::new("1990s", "Titanic", 200.0, 2264.7),
            MovieRecord::new("1970s", "Star Wars", 11.0, 775.8),
            MovieRecord::new("1990s", "Jurassic Park", 63.0, 1109.8),
        ])
    }

    #[test]
    fn test_columns_stay_parallel() {
        let dataset = sample();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.budgets(), &[200.0, 11.0, 63.0]);
        assert_eq!(dataset.grosses(), &[2264.7, 775.8, 1109.8]);
        assert_eq!(dataset.title(1), Some("Star Wars"));
        assert_eq!(dataset.title(3), None);
    }

    #[test]
    fn test_decades_ordered_by_label() {
        let dataset = sample();
        let labels: Vec<&str> = dataset.decade_labels().collect();
        assert_eq!(labels, vec!["1970s", "1990s"]);
    }

    #[test]
    fn test_decade_counts_match_values() {
        let dataset = sample();
        let counts: Vec<(&str, usize)> = dataset.count_by_decade().collect();
        assert_eq!(counts, vec![("1970s", 1), ("1990s", 2)]);

        for group in dataset.decades() {
            assert_eq!(group.count(), group.grosses.len());
        }
        let nineties = &dataset.decades()[1];
        assert_eq!(nineties.grosses, vec![2264.7, 1109.8]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = MovieDataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.decades().is_empty());
    }
}
