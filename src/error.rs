use thiserror::Error;

/// Expected failures of the shape hierarchy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid sides ({a:?}, {b:?}, {c:?}): every pair must sum to more than the third")]
    InvalidSides { a: f64, b: f64, c: f64 },

    #[error("Area unknown for general polygons: {shape}")]
    UnsupportedArea { shape: String },
}

impl ShapeError {
    pub fn unsupported_area(shape: impl ToString) -> Self {
        Self::UnsupportedArea {
            shape: shape.to_string(),
        }
    }
}

/// Raised when an absent optional value is required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MissingValue(pub String);

impl MissingValue {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
