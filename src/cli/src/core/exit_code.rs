use crate::core::error::DevxError;

/// Exit codes for the devx CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Bad argument values or missing input
    InvalidInput = 2,
    /// Unknown or undetectable language
    LanguageError = 3,
    /// File not found or IO error
    FileError = 4,
    NotFoundError = 5,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&DevxError> for ExitCode {
    fn from(error: &DevxError) -> Self {
        match error {
            DevxError::Io(_) => ExitCode::FileError,
            DevxError::Json(_) => ExitCode::GeneralError,
            DevxError::UnknownLanguage(_) => ExitCode::LanguageError,
            DevxError::LanguageNotDetected(_) => ExitCode::LanguageError,
            DevxError::MissingInput(_) => ExitCode::InvalidInput,
            DevxError::SkillNotFound(_) => ExitCode::NotFoundError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devx_lib::syntax::ParseLanguageError;

    #[test]
    fn test_language_errors_map_to_language_code() {
        let err = DevxError::from(ParseLanguageError::new("go"));
        assert_eq!(ExitCode::from(&err).code(), 3);
        let err = DevxError::LanguageNotDetected("x".into());
        assert_eq!(ExitCode::from(&err), ExitCode::LanguageError);
    }

    #[test]
    fn test_json_error_maps_to_general_code() {
        let err = DevxError::from(serde_json::from_str::<serde_json::Value>("[1,").unwrap_err());
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&err).code(), 1);
    }

    #[test]
    fn test_io_error_maps_to_file_code() {
        let err = DevxError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(ExitCode::from(&err), ExitCode::FileError);
    }
}
