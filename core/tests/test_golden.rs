// core/tests/test_golden.rs
use serde::Deserialize;
use training_core::{read_package, Training};

#[derive(Debug, Deserialize)]
struct GoldenRow {
    workout_type: String,
    data: String,
    expected: String,
}

#[test]
fn golden_messages_match() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/golden.csv");
    let mut rdr = csv::Reader::from_path(path).expect("golden.csv");

    let mut n = 0;
    for row in rdr.deserialize() {
        let row: GoldenRow = row.expect("gyldig rad");
        let data: Vec<f64> = row
            .data
            .split_whitespace()
            .map(|x| x.parse().expect("tall"))
            .collect();

        let workout = read_package(&row.workout_type, &data).unwrap();
        assert_eq!(workout.show_training_info().get_message(), row.expected, "rad {n}");
        n += 1;
    }
    assert_eq!(n, 6);
}
