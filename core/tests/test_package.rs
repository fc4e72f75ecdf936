// core/tests/test_package.rs
use training_core::{read_package, Training, TrainingError, Workout, WorkoutType};

#[test]
fn read_package_maps_codes_to_variants() {
    let swm = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let wlk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

    assert!(matches!(swm, Workout::Swimming(_)));
    assert!(matches!(run, Workout::Running(_)));
    assert!(matches!(wlk, Workout::SportsWalking(_)));

    assert_eq!(swm.training_type(), "Swimming");
    assert_eq!(run.training_type(), "Running");
    assert_eq!(wlk.training_type(), "SportsWalking");
}

#[test]
fn workout_delegates_swimming_overrides() {
    let swm = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert!((swm.mean_speed() - 1.0).abs() < 1e-9);
    assert!((swm.distance() - 0.9936).abs() < 1e-9);
    assert!((swm.spent_calories() - 336.0).abs() < 1e-9);
}

#[test]
fn unknown_code_fails() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    match err {
        TrainingError::UnknownWorkoutType(code) => assert_eq!(code, "XYZ"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn wrong_number_of_readings_fails() {
    for (code, len) in [("RUN", 4usize), ("WLK", 3), ("SWM", 4), ("SWM", 6)] {
        let data = vec![1.0; len];
        let err = read_package(code, &data).unwrap_err();
        match err {
            TrainingError::ArityMismatch { workout_type, expected, got } => {
                assert_eq!(workout_type, code);
                assert_eq!(expected, code.parse::<WorkoutType>().unwrap().arity());
                assert_eq!(got, len);
            }
            other => panic!("unexpected error for {code}: {other:?}"),
        }
    }
}

#[test]
fn invalid_numbers_are_rejected() {
    let cases: [(&str, Vec<f64>, &str); 6] = [
        ("RUN", vec![15000.0, 0.0, 75.0], "duration"),
        ("RUN", vec![15000.0, -1.0, 75.0], "duration"),
        ("WLK", vec![9000.0, 1.0, 75.0, 0.0], "height"),
        ("RUN", vec![150.5, 1.0, 75.0], "action"),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.5], "count_pool"),
        ("SWM", vec![720.0, 1.0, 80.0, -25.0, 40.0], "length_pool"),
    ];

    for (code, data, field) in cases {
        match read_package(code, &data) {
            Err(TrainingError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidInput({field}) for {code} {data:?}, got {other:?}"),
        }
    }
}
