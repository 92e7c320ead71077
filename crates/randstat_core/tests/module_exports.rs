//! Integration tests for the public API.
//!
//! Exercises generate → summarize → render through absolute paths, the way
//! the binary uses the library.

use approx::assert_abs_diff_eq;
use randstat_core::config::{RunConfig, SAMPLE_SIZES};
use randstat_core::rng::{generate, generate_by_index, Generator, SharedRng};
use randstat_core::table::{render, TableRenderer, COLUMN_WIDTH};
use randstat_core::{driver, stats, RandStatError, Statistics, Strategy};

#[test]
fn test_pipeline_for_every_strategy() {
    for strategy in Strategy::ALL {
        for n in SAMPLE_SIZES {
            let sample = generate(n, strategy);
            let summary = stats::summarize(&sample);
            assert_eq!(summary.count(), n as f64);

            let table = render(&summary, true);
            assert_eq!(table.lines().count(), 5);
        }
    }
}

#[test]
fn test_large_samples_converge() {
    let expected_std_dev = 1.0 / 12.0_f64.sqrt();
    for index in 0..3 {
        let summary = stats::summarize(&generate_by_index(10_000, index).unwrap());
        assert_abs_diff_eq!(summary.mean(), 0.5, epsilon = 0.02);
        assert_abs_diff_eq!(summary.std_dev(), expected_std_dev, epsilon = 0.02);
        assert!(summary.min() >= 0.0 && summary.max() < 1.0);
    }
}

#[test]
fn test_unsupported_selector_fails() {
    let result = generate_by_index(10, 99);
    match result {
        Err(RandStatError::InvalidArgument(msg)) => assert!(msg.contains("99")),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_reference_table() {
    let summary = Statistics::from([10.0, 0.5, 0.2887, 0.0, 1.0]);
    let text = TableRenderer::default().render(&summary, true);

    for label in ["n", "mean", "stddev", "min", "max"] {
        assert!(text.contains(&format!("| {:<width$} ", label, width = COLUMN_WIDTH)));
    }
    for value in ["10.0000", "0.5000", "0.2887", "0.0000", "1.0000"] {
        assert!(text.contains(&format!("| {:<width$} ", value, width = COLUMN_WIDTH)));
    }

    let border = format!("{}+", format!("+{}", "-".repeat(COLUMN_WIDTH + 2)).repeat(5));
    assert!(text.starts_with(&border));
    assert!(text.trim_end().ends_with(&border));
}

#[test]
fn test_driver_with_seeded_source() {
    let shared = SharedRng::from_seed(2024);
    let config = RunConfig::builder()
        .sample_sizes(vec![0, 1, 10])
        .column_width(10)
        .build()
        .unwrap();

    let mut out = Vec::new();
    driver::run_with(&config, &Generator::new(&shared), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("Method: ").count(), 9);
    // n = 0 renders all zeros
    assert!(text.contains(
        "| 0.0000     | 0.0000     | 0.0000     | 0.0000     | 0.0000     |"
    ));
}
