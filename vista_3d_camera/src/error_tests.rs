//! Unit tests for error.rs
//!
//! Tests both Error variants and their implementations (Display, Debug,
//! Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_orientation_display() {
    let err = Error::InvalidOrientation("quaternion magnitude 0 cannot be normalized".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid orientation"));
    assert!(display.contains("cannot be normalized"));
}

#[test]
fn test_invalid_axis_display() {
    let err = Error::InvalidAxis("axis (0, 0, 0) has near-zero length".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid rotation axis"));
    assert!(display.contains("near-zero length"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidOrientation("test".to_string());
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::InvalidOrientation("test".to_string());
    let debug1 = format!("{:?}", err1);
    assert!(debug1.contains("InvalidOrientation"));

    let err2 = Error::InvalidAxis("test".to_string());
    let debug2 = format!("{:?}", err2);
    assert!(debug2.contains("InvalidAxis"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidOrientation("test".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = Error::InvalidAxis("test".to_string());
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }

    let result = returns_ok();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_err() {
    fn returns_error() -> Result<i32> {
        Err(Error::InvalidAxis("degenerate".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(format!("{}", e).contains("degenerate"));
    }
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::InvalidOrientation("zero".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    let result = outer();
    assert!(result.is_err());
}
