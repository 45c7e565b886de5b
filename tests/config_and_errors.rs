//! Integration tests for size limits, error kinds and logger setup.

use dynmat::config::{Limits, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
use dynmat::logging::init_logging;
use dynmat::math::Vector;
use dynmat::MathError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

#[test]
fn limits_default_values() {
    let limits = Limits::default();
    assert_eq!(limits.max_vector_size, MAX_VECTOR_SIZE);
    assert_eq!(limits.max_matrix_size, MAX_MATRIX_SIZE);
    assert!(MAX_MATRIX_SIZE < MAX_VECTOR_SIZE);
}

#[test]
fn limits_check_bounds() {
    let limits = Limits::new(10, 2);
    assert!(limits.check_vector_size(1).is_ok());
    assert!(limits.check_vector_size(10).is_ok());
    assert!(limits.check_vector_size(0).unwrap_err().is_invalid_size());
    assert!(limits.check_vector_size(11).unwrap_err().is_invalid_size());
    assert!(limits.check_matrix_size(2).is_ok());
    assert!(limits.check_matrix_size(3).unwrap_err().is_invalid_size());
}

#[test]
fn limits_validate_matrix_bound_below_vector_bound() {
    assert!(Limits::default().validate().is_ok());
    assert!(Limits::new(10, 9).validate().is_ok());
    for limits in [Limits::new(10, 10), Limits::new(10, 0), Limits::new(100, usize::MAX)] {
        let err = limits.validate().unwrap_err();
        assert!(matches!(err, MathError::InvalidLimits { .. }), "{err}");
        assert!(limits.check_vector_size(1).is_err());
        assert!(limits.check_matrix_size(1).is_err());
    }
}

#[test]
fn limits_check_matrix_size_returns_buffer_length() {
    assert_eq!(Limits::default().check_matrix_size(3).unwrap(), 9);
    assert_eq!(
        Limits::default().check_matrix_size(MAX_MATRIX_SIZE).unwrap(),
        MAX_MATRIX_SIZE * MAX_MATRIX_SIZE
    );
}

#[test]
fn limits_serialize_to_json() {
    let json = serde_json::to_string(&Limits::default()).unwrap();
    assert!(json.contains("max_vector_size"));
    assert!(json.contains("max_matrix_size"));
}

#[test]
fn limits_partial_json_uses_defaults() {
    let limits: Limits = serde_json::from_str(r#"{ "max_matrix_size": 16 }"#).unwrap();
    assert_eq!(limits.max_matrix_size, 16);
    assert_eq!(limits.max_vector_size, MAX_VECTOR_SIZE);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_kinds_are_distinguishable() {
    let invalid = Vector::<i32>::new(0).unwrap_err();
    let out_of_range = Vector::<i32>::new(2).unwrap().at(2).map(|_| ()).unwrap_err();
    let mismatch = Vector::<i32>::new(2)
        .unwrap()
        .dot(&Vector::new(3).unwrap())
        .unwrap_err();

    assert!(invalid.is_invalid_size() && !invalid.is_out_of_range());
    assert!(out_of_range.is_out_of_range() && !out_of_range.is_size_mismatch());
    assert!(mismatch.is_size_mismatch() && !mismatch.is_invalid_size());
}

#[test]
fn error_messages_mention_sizes() {
    let err = MathError::SizeMismatch { left: 5, right: 3 };
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('3'), "{msg}");

    let err = MathError::InvalidSize { size: 0, max: 10 };
    assert!(err.to_string().contains("invalid size 0"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
    let err: MathError = io.into();
    assert!(matches!(err, MathError::Io(_)));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn init_logging_only_installs_once() {
    let first = init_logging("debug");
    let second = init_logging("debug");
    assert!(first.is_ok());
    assert!(second.is_err());
}
