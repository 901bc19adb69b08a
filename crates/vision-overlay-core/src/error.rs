/// Which reference dimension a relative position was computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors returned by the formatting and normalization routines.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("malformed bounding box {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("polygon needs exactly 8 values, got {got}")]
    PolygonLength { got: usize },

    #[error("division by zero: reference {axis} is zero")]
    DivisionByZero { axis: Axis },
}
