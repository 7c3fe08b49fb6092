//! Result type alias for Seedlog

use super::errors::SeedlogError;

/// Result type alias for Seedlog operations
///
/// # Examples
///
/// ```
/// use seedlog::domain::result::Result;
/// use seedlog::domain::errors::SeedlogError;
///
/// fn example_function() -> Result<usize> {
///     Ok(100)
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SeedlogError::Validation("batch_size must be at least 1".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SeedlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(SeedlogError::Parse("unexpected token".to_string()));
        assert!(result.is_err());
    }
}
