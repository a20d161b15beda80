//! End-to-end tests: CSV file -> series -> estimate -> chart.

mod common;

use common::{csv_fixture, init_test_setup};
use growth_lens::data::{LoaderError, SeriesLoader};
use growth_lens::stats::{EstimateError, GrowthEstimator};
use growth_lens::{Analysis, AnalysisError, AppState};
use rstest::rstest;

const SALARY_CSV: &str = "Year,Salary\n\
2018,50000\n\
2019,52000\n\
2020,54500\n\
2021,57000\n\
2022,60500\n";

#[rstest]
#[case::two_points(&[100.0, 150.0], 0.5, 225.0)]
#[case::flat(&[200.0, 200.0, 200.0], 0.0, 200.0)]
#[case::doubling(&[1.0, 2.0, 4.0, 8.0], 1.0, 16.0)]
#[case::halving(&[80.0, 40.0], -0.5, 20.0)]
fn given_values_when_estimating_then_matches_expected(
    #[case] values: &[f64],
    #[case] rate: f64,
    #[case] projected: f64,
) {
    let est = GrowthEstimator::estimate(values).unwrap();
    assert!((est.rate - rate).abs() < 1e-9, "rate {}", est.rate);
    assert!(
        (est.projected_value - projected).abs() < 1e-9,
        "projected {}",
        est.projected_value
    );
}

#[rstest]
#[case(&[1000.0, 1100.0, 1150.0])]
#[case(&[3.5, 2.0, 9.0, 4.25, 7.0])]
#[case(&[0.01, 1e6])]
fn given_valid_values_when_compounding_rate_then_reaches_last_value(#[case] values: &[f64]) {
    let est = GrowthEstimator::estimate(values).unwrap();
    let n = (values.len() - 1) as i32;
    let first = values[0];
    let last = values[values.len() - 1];

    let reconstructed = first * (1.0 + est.rate).powi(n);
    assert!(((reconstructed - last) / last).abs() < 1e-9);
}

#[test]
fn given_salary_csv_when_analyzing_then_label_and_chart_are_consistent() {
    init_test_setup();
    let file = csv_fixture(SALARY_CSV);

    let analysis = Analysis::from_path(file.path()).unwrap();

    let expected_rate = (60500.0f64 / 50000.0).powf(0.25) - 1.0;
    assert!((analysis.estimate.rate - expected_rate).abs() < 1e-12);
    assert_eq!(analysis.projected_period, 2023);
    assert_eq!(
        analysis.rate_label(),
        format!("Average annual growth rate: {:.2} %", expected_rate * 100.0)
    );

    let expected: Vec<(i64, f64)> = analysis.series.points().collect();
    assert_eq!(analysis.chart.historical_points(), expected.as_slice());
    assert_eq!(
        analysis.chart.projected_point(),
        (2023, analysis.estimate.projected_value)
    );
}

#[test]
fn given_header_only_csv_when_analyzing_then_insufficient_data() {
    init_test_setup();
    let file = csv_fixture("Year,Salary\n");

    let series = SeriesLoader::load(file.path()).unwrap();
    assert!(series.is_empty());

    let err = Analysis::from_path(file.path()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Estimate(EstimateError::InsufficientData(0))
    ));
}

#[test]
fn given_missing_file_when_analyzing_then_not_found_message() {
    init_test_setup();
    let dir = tempfile::tempdir().unwrap();

    let err = Analysis::from_path(dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, AnalysisError::Load(LoaderError::NotFound(_))));
    assert_eq!(err.user_message(), "File not found.");
}

#[test]
fn given_non_numeric_value_when_analyzing_then_read_error_message() {
    init_test_setup();
    let file = csv_fixture("Year,Salary\n2020,abc\n2021,10\n");

    let err = Analysis::from_path(file.path()).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Load(LoaderError::InvalidValue { record: 1, .. })
    ));
    assert!(err
        .user_message()
        .starts_with("An error occurred while reading the file:"));
}

#[test]
fn given_extra_fields_when_analyzing_then_only_first_two_are_used() {
    init_test_setup();
    let file = csv_fixture("Year\n2020,100,bonus\n2021,121,bonus\n");

    let analysis = Analysis::from_path(file.path()).unwrap();

    assert_eq!(analysis.series.values(), &[100.0, 121.0]);
    assert_eq!(analysis.projected_period, 2022);
}

#[test]
fn given_last_period_at_integer_limit_when_analyzing_then_estimate_error() {
    init_test_setup();
    let file = csv_fixture("Year,Salary\n9223372036854775806,1\n9223372036854775807,2\n");

    let err = Analysis::from_path(file.path()).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Estimate(EstimateError::InvalidValue(_))
    ));
    assert!(err.user_message().starts_with("Unable to compute the growth rate"));
}

#[test]
fn given_failed_load_when_state_has_analysis_then_previous_analysis_kept() {
    init_test_setup();
    let good = csv_fixture(SALARY_CSV);
    let zero_start = csv_fixture("Year,Salary\n2020,0\n2021,10\n");
    let mut state = AppState::new();

    let generation = state.load(good.path()).unwrap().chart.generation();
    let label = state.rate_label();

    let err = state.load(zero_start.path()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Estimate(EstimateError::DivisionByZero)
    ));

    let current = state.current().unwrap();
    assert_eq!(current.source, good.path());
    assert_eq!(current.chart.generation(), generation);
    assert_eq!(state.rate_label(), label);
}

#[test]
fn given_two_loads_when_replacing_then_chart_is_rebuilt() {
    init_test_setup();
    let first = csv_fixture(SALARY_CSV);
    let second = csv_fixture("Year,Value\n2000,10\n2001,20\n");
    let mut state = AppState::new();

    let gen_first = state.load(first.path()).unwrap().chart.generation();
    let analysis = state.load(second.path()).unwrap();

    assert!(analysis.chart.generation() > gen_first);
    assert_eq!(analysis.chart.historical_points(), &[(2000, 10.0), (2001, 20.0)]);
    assert_eq!(analysis.chart.projected_point(), (2002, 40.0));
}
