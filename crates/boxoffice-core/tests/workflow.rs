//! Load a dataset from disk and drive the menu end to end

use std::io::{self, Cursor, Write};

use boxoffice_core::{BoxofficeConfig, Chart, ChartPresenter, DatasetSummary, Session};
use boxoffice_io::DatasetLoader;
use tempfile::NamedTempFile;

const DATASET: &str = "Decade,Title,Budget,Worldwide Gross\n\
1970s,Star Wars,11,775.8\n\
1970s,Jaws,7,470.2\n\
1980s,E.T.,10,792.9\n\
1980s,Ghost,22,505.7\n\
1990s,Titanic,200,2264.7\n\
1990s,Broken Row,abc,1.0\n\
2000s,Avatar,237,2923.7\n";

#[derive(Default)]
struct Recorder {
    charts: Vec<Chart>,
}

impl ChartPresenter for &mut Recorder {
    fn present(&mut self, chart: &Chart) -> io::Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_session() {
    let file = dataset_file();
    let config = BoxofficeConfig::default();
    let report = DatasetLoader::new(config.load_options())
        .load_path(file.path())
        .unwrap();
    assert_eq!(report.dataset.len(), 6);
    assert_eq!(report.skipped.len(), 1);

    let mut recorder = Recorder::default();
    let input = "1\n1\n\n15\n\n16\n\nq\n2\n8\n\nq\n3\n";
    let mut output = Vec::new();
    {
        let mut session = Session::new(
            &report.dataset,
            &config,
            Cursor::new(input),
            &mut output,
            &mut recorder,
        );
        session.run().unwrap();
    }

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Number of values in budget: 6"));
    assert!(output.contains("The highest grossing decade is the 2000s with a total of 2.92 Billion USD"));
    assert!(output.contains("The lowest grossing decade is the 1970s with a total of 1.25 Billion USD"));
    assert!(output.contains("Good Bye!"));

    assert_eq!(recorder.charts.len(), 1);
    match &recorder.charts[0] {
        Chart::BoxPlot(plot) => {
            let labels: Vec<&str> = plot.boxes.iter().map(|b| b.label.as_str()).collect();
            assert_eq!(labels, vec!["1970s", "1980s", "1990s", "2000s"]);
        }
        other => panic!("expected decade box plots, got {other:?}"),
    }
}

#[test]
fn test_summary_matches_session_figures() {
    let file = dataset_file();
    let report = DatasetLoader::default().load_path(file.path()).unwrap();
    let summary = DatasetSummary::from_dataset(&report.dataset);

    assert_eq!(summary.movies, 6);
    assert_eq!(summary.budget.max_title.as_deref(), Some("Avatar"));
    assert_eq!(summary.budget.min_title.as_deref(), Some("Jaws"));
    assert_eq!(
        summary.lowest_grossing_decade.map(|d| d.label),
        Some("1970s".to_string())
    );
    assert_eq!(
        summary.most_frequent_decade.map(|d| d.label),
        Some("1970s".to_string())
    );
}
