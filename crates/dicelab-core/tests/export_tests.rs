use dicelab_core::distribution::{compute, Method};
use dicelab_core::export::{
    write_csv, write_csv_sweep, write_json, write_json_sweep, DistributionRecord,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn record_mirrors_the_distribution() {
    let dist = compute(2, Method::Enumerate).unwrap();
    let record = DistributionRecord::from(&dist);

    assert_eq!(record.dice_count, 2);
    assert_eq!(record.total_outcomes, 36);
    assert_eq!(record.sums, dist.sums());
    assert_eq!(record.counts[5], 6); // sum 7
    assert_eq!(record.probabilities.len(), record.sums.len());
}

#[test]
fn csv_has_header_and_one_row_per_sum() {
    let dist = compute(1, Method::Enumerate).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("dist.csv");

    write_csv(&dist, fs::File::create(&path).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "sum,count,probability");
    assert_eq!(lines.len(), 1 + dist.len());

    let fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(fields[0], "1");
    assert_eq!(fields[1], "1");
    let p: f64 = fields[2].parse().unwrap();
    assert!((p - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn sweep_csv_carries_the_dice_column() {
    let sweep: Vec<_> = (1..=3)
        .map(|n| compute(n, Method::Enumerate).unwrap())
        .collect();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sweep.csv");

    write_csv_sweep(&sweep, fs::File::create(&path).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "dice,sum,count,probability");

    let rows: usize = sweep.iter().map(|d| d.len()).sum();
    assert_eq!(lines.len(), 1 + rows);
    assert!(lines[1].starts_with("1,1,"));
    assert!(lines.last().unwrap().starts_with("3,18,"));
}

#[test]
fn json_round_trips_through_the_record() {
    let dist = compute(3, Method::Enumerate).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("dist.json");

    write_json(&dist, fs::File::create(&path).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"diceCount\""));
    assert!(content.contains("\"totalOutcomes\""));

    let record: DistributionRecord = serde_json::from_str(&content).unwrap();
    assert_eq!(record.dice_count, 3);
    assert_eq!(record.counts[7], 27); // sum 10
}

#[test]
fn sweep_json_is_an_array_in_sweep_order() {
    let sweep: Vec<_> = (1..=5)
        .map(|n| compute(n, Method::Enumerate).unwrap())
        .collect();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sweep.json");

    write_json_sweep(&sweep, fs::File::create(&path).unwrap()).unwrap();

    let records: Vec<DistributionRecord> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.dice_count, i as u32 + 1);
    }
}
