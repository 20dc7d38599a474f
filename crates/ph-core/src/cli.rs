//! CLI-related types.
//!
//! # Examples
//!
//! ```
//! use ph_core::cli::ExitCode;
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! ```

/// Process exit code with semantic constants.
///
/// # Examples
///
/// ```
/// use ph_core::cli::ExitCode;
///
/// let code = ExitCode::SUCCESS;
/// assert_eq!(code.as_i32(), 0);
/// assert!(code.is_success());
///
/// let code = ExitCode::from_i32(1);
/// assert_eq!(code, ExitCode::ERROR);
/// assert!(!code.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Every icon and aggregate file was generated (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// The build failed (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_ne!(ExitCode::SUCCESS, ExitCode::ERROR);
        assert_eq!(ExitCode::ERROR.as_i32(), 1);
    }

    #[test]
    fn test_default_is_success() {
        assert!(ExitCode::default().is_success());
    }
}
