#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use mts_rs::internals::evaluation::signal::{LogBase, signal_to_noise};

#[test]
fn test_log_base_default_is_decimal() {
    assert_eq!(LogBase::default(), LogBase::Decimal);
}

#[test]
fn test_log_base_values() {
    assert_relative_eq!(LogBase::Decimal.log(1000.0), 3.0, epsilon = 1e-12);
    assert_relative_eq!(LogBase::Natural.log(std::f64::consts::E), 1.0, epsilon = 1e-12);
}

#[test]
fn test_signal_to_noise_unit_distances_is_zero() {
    // All distances equal to one: mean inverse distance is one.
    assert_relative_eq!(signal_to_noise(4.0, 4, LogBase::Decimal), 0.0);
    assert_relative_eq!(signal_to_noise(4.0, 4, LogBase::Natural), 0.0);
}

#[test]
fn test_signal_to_noise_known_value() {
    // Distances 10 and 10: mean of 1/D is 0.1, SN = -10 · log10(0.1) = 10 dB.
    assert_relative_eq!(signal_to_noise(0.2, 2, LogBase::Decimal), 10.0, epsilon = 1e-12);
}

#[test]
fn test_signal_to_noise_grows_with_distance() {
    let near = signal_to_noise(1.0 / 0.5 + 1.0 / 0.8, 2, LogBase::Decimal);
    let far = signal_to_noise(1.0 / 5.0 + 1.0 / 8.0, 2, LogBase::Decimal);
    assert!(far > near);
}

#[test]
fn test_signal_to_noise_bases_differ_by_constant_factor() {
    for sum in [0.01, 0.5, 3.0, 250.0] {
        let decimal = signal_to_noise(sum, 3, LogBase::Decimal);
        let natural = signal_to_noise(sum, 3, LogBase::Natural);
        assert_relative_eq!(natural, decimal * std::f64::consts::LN_10, max_relative = 1e-12);
    }
}

#[test]
fn test_signal_to_noise_zero_distance() {
    // A zero distance makes the inverse sum infinite.
    let sn = signal_to_noise(f64::INFINITY, 3, LogBase::Decimal);
    assert_eq!(sn, f64::NEG_INFINITY);
}
