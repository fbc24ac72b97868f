//! Error types for program generation.

use joinbench_tpl::EmitError;
use thiserror::Error;

/// Error during benchmark program generation.
///
/// Generation runs over closed, fully-determined domains, so every variant
/// here is a programming defect; there is no partial-output recovery and the
/// whole emission aborts.
#[derive(Debug, Error)]
pub enum GenError {
    /// A column count outside the supported 1..=5 range.
    #[error("column count {0} outside supported range 1..={max}", max = crate::params::MAX_COLUMNS)]
    ColumnCountOutOfRange(u8),

    /// Two generated functions collided on the same name.
    #[error("duplicate function name '{0}' in generated program")]
    DuplicateFunction(String),

    /// The serializer failed.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl GenError {
    /// Create an out-of-range column count error.
    pub fn column_count_out_of_range(n: u8) -> Self {
        GenError::ColumnCountOutOfRange(n)
    }

    /// Create a duplicate function name error.
    pub fn duplicate_function(name: &str) -> Self {
        GenError::DuplicateFunction(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = GenError::column_count_out_of_range(9);
        assert_eq!(e.to_string(), "column count 9 outside supported range 1..=5");

        let e = GenError::duplicate_function("buildCol1Row1Car1");
        assert_eq!(
            e.to_string(),
            "duplicate function name 'buildCol1Row1Car1' in generated program"
        );
    }
}
