//! Loading datasets from files on disk

use std::io::Write;

use boxoffice_io::{load_dataset, DatasetLoader, IoError, LoadOptions, SkipReason};
use tempfile::NamedTempFile;

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_one_malformed_row_among_valid_rows() {
    let file = write_dataset(
        "Decade,Title,Budget,Worldwide Gross\n\
         1970s,Jaws,7,470.7\n\
         1980s,Top Gun,15,357.3\n\
         1990s,Home Alone,18,476.7\n\
         2000s,Avatar,237,2923.7\n\
         2010s,Joker,55,1078.9\n\
         2010s,Untitled,unknown,12.5\n",
    );

    let report = load_dataset(file.path()).unwrap();

    assert_eq!(report.dataset.len(), 5);
    assert_eq!(report.dataset.budgets().len(), 5);
    assert_eq!(report.dataset.grosses().len(), 5);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 7);
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::InvalidNumber { .. }
    ));

    let tens = report
        .dataset
        .decades()
        .iter()
        .find(|group| group.label == "2010s")
        .unwrap();
    assert_eq!(tens.count(), 1);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("dataset.csv");

    let err = load_dataset(&missing).unwrap_err();
    match err {
        IoError::FileNotFound(path) => assert!(path.ends_with("dataset.csv")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_semicolon_file() {
    let file = write_dataset("Decade;Title;Budget;Gross\n1980s;Rain Man;25;354.8\n");
    let loader = DatasetLoader::new(LoadOptions::default().with_delimiter(b';'));

    let report = loader.load_path(file.path()).unwrap();
    assert_eq!(report.dataset.title(0), Some("Rain Man"));
}
