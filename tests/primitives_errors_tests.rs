#![cfg(feature = "dev")]

use polyreg_rs::internals::primitives::errors::{ErrorKind, PolyRegError, ShapeError};

#[test]
fn test_shape_error_display() {
    // NotTwoDimensional
    let err = ShapeError::NotTwoDimensional {
        input: "x",
        row: 2,
        expected: 3,
        got: 1,
    };
    assert_eq!(
        format!("{}", err),
        "x must be a 2-dimensional array: row 2 has 1 columns, expected 3"
    );

    // TargetColumns
    let err = ShapeError::TargetColumns { got: 2 };
    assert_eq!(format!("{}", err), "y must have exactly one column, got 2");

    // MismatchedRows
    let err = ShapeError::MismatchedRows {
        x_rows: 10,
        y_rows: 5,
    };
    assert_eq!(format!("{}", err), "Row mismatch: x has 10 rows, y has 5");

    // FeatureCount
    let err = ShapeError::FeatureCount {
        expected: 2,
        got: 3,
    };
    assert_eq!(format!("{}", err), "x must have 2 features, got 3");

    // FlatLength
    let err = ShapeError::FlatLength {
        len: 7,
        dimensions: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Flat buffer of length 7 is not a multiple of dimensions 2"
    );
}

#[test]
fn test_polyreg_error_display() {
    // InvalidInputShape wraps the shape error message
    let err = PolyRegError::from(ShapeError::TargetColumns { got: 0 });
    assert_eq!(
        format!("{}", err),
        "Invalid input shape: y must have exactly one column, got 0"
    );

    // SingularMatrix
    let err = PolyRegError::SingularMatrix { n: 3, k: 4 };
    assert_eq!(
        format!("{}", err),
        "Design matrix (X^T X) is singular and cannot be inverted [n: 3, k: 4]"
    );

    // InvalidDegree
    let err = PolyRegError::InvalidDegree(0);
    assert_eq!(format!("{}", err), "Invalid degree: 0 (must be >= 1)");

    // InvalidDimensions
    let err = PolyRegError::InvalidDimensions(0);
    assert_eq!(format!("{}", err), "Invalid dimensions: 0 (must be >= 1)");

    // InvalidNumericValue
    let err = PolyRegError::InvalidNumericValue("x[0, 0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[0, 0]=NaN");

    // DuplicateParameter
    let err = PolyRegError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_error_kind() {
    let shape = PolyRegError::InvalidInputShape(ShapeError::FeatureCount {
        expected: 1,
        got: 2,
    });
    assert_eq!(shape.kind(), ErrorKind::InvalidInputShape);
    assert_eq!(
        PolyRegError::SingularMatrix { n: 1, k: 2 }.kind(),
        ErrorKind::SingularMatrix
    );
    assert_eq!(
        PolyRegError::InvalidDegree(0).kind(),
        ErrorKind::InvalidParameter
    );
    assert_eq!(
        PolyRegError::DuplicateParameter { parameter: "degree" }.kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn test_polyreg_error_properties() {
    let err1 = PolyRegError::InvalidDegree(0);
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, PolyRegError::InvalidDimensions(0));
}

#[cfg(feature = "std")]
#[test]
fn test_polyreg_error_is_std_error() {
    use std::error::Error;

    fn assert_error<T: std::error::Error>() {}
    assert_error::<PolyRegError>();
    assert_error::<ShapeError>();

    let err = PolyRegError::from(ShapeError::TargetColumns { got: 2 });
    assert!(err.source().is_some());
}
