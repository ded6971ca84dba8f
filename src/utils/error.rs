use thiserror::Error;

/// Fatal errors. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Required column '{column}' is missing from the input header")]
    MissingColumnError { column: String },

    #[error("Cannot encode '{character}' as Shift_JIS (line {line})")]
    EncodingError { line: usize, character: char },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Encoding,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(e) if e.is_io_error() => ErrorCategory::Io,
            EtlError::CsvError(_) | EtlError::MissingColumnError { .. } => ErrorCategory::Parse,
            EtlError::EncodingError { .. } => ErrorCategory::Encoding,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Parse => 2,
            ErrorCategory::Encoding => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Parse => format!("Order export could not be read: {}", self),
            ErrorCategory::Encoding => format!("Label file could not be encoded: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Place the Shopify order export next to the binary as shopify-orders.csv"
            }
            EtlError::IoError(_) => "Check file permissions and free disk space",
            EtlError::CsvError(e) if e.is_io_error() => "Check file permissions and free disk space",
            EtlError::CsvError(_) => "Re-export the orders from Shopify as CSV without editing",
            EtlError::MissingColumnError { .. } => {
                "Export the orders with the shipping address columns included"
            }
            EtlError::EncodingError { .. } => {
                "Replace characters outside Shift_JIS in the order's shipping details"
            }
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration values and rebuild"
            }
        }
    }
}

/// Per-record rejection reasons. Never fatal: the record is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("postal code required")]
    PostalCodeRequired,

    #[error("name required")]
    NameRequired,

    #[error("name too long")]
    NameTooLong,

    #[error("address line 1 required")]
    AddressLine1Required,

    #[error("address line 1 too long")]
    AddressLine1TooLong,

    #[error("address line 2 required")]
    AddressLine2Required,

    #[error("address line 2 too long")]
    AddressLine2TooLong,

    #[error("address line 3 too long")]
    AddressLine3TooLong,

    #[error("address line 4 too long")]
    AddressLine4TooLong,

    #[error("contents too long")]
    ContentsTooLong,

    #[error("{field} contains '{character}', which Shift_JIS cannot represent")]
    Unencodable {
        field: &'static str,
        character: char,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let io = EtlError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_ne!(io.exit_code(), 0);

        let missing = EtlError::MissingColumnError {
            column: "Shipping Zip".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Parse);
        assert!(missing.to_string().contains("Shipping Zip"));

        let encoding = EtlError::EncodingError {
            line: 2,
            character: '😀',
        };
        assert_eq!(encoding.category(), ErrorCategory::Encoding);
        assert_eq!(
            encoding.to_string(),
            "Cannot encode '😀' as Shift_JIS (line 2)"
        );
    }

    #[test]
    fn test_label_error_messages() {
        assert_eq!(LabelError::NameTooLong.to_string(), "name too long");
        assert_eq!(
            LabelError::AddressLine2Required.to_string(),
            "address line 2 required"
        );
    }
}
