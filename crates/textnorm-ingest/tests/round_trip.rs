//! Load, standardize and save a CSV file end to end.

use std::fs;

use tempfile::tempdir;
use textnorm_core::{StandardizeOptions, standardize};
use textnorm_ingest::{read_csv_table, write_csv_table};

#[test]
fn test_standardized_csv_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("people.standardized.csv");
    fs::write(
        &input,
        "  Full Name ,Age,Home City\n Alice ,31,  New York\nBOB,42,\n",
    )
    .unwrap();

    let mut df = read_csv_table(&input).unwrap();
    standardize(&mut df, &StandardizeOptions::default()).unwrap();
    write_csv_table(&mut df, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "full_name,age,home_city\nalice,31,new york\nbob,42,\n");

    let reloaded = read_csv_table(&output).unwrap();
    let city = reloaded.column("home_city").unwrap().str().unwrap();
    assert_eq!(city.get(1), None);
}
