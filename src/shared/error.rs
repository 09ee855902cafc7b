use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to distinguish a clean
/// run from a failed one without scraping logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run completed, including the "nothing to insert" case
    Success = 0,
    /// The run failed at configuration, fetch, transform, or load
    RunFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RunFailed => write!(f, "Run Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the ETL connector.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Required configuration is missing: {name}\n\n💡 Hint: {hint}")]
    Configuration { name: String, hint: String },

    #[error("Failed to fetch feed from {url}\nDetails: {details}\n\n💡 Hint: Check the URL and your network connection")]
    Fetch { url: String, details: String },

    #[error("Feed response from {url} is not valid JSON\nDetails: {details}")]
    Parse { url: String, details: String },

    #[error("Bulk insert into {namespace} failed\nDetails: {details}")]
    Insert { namespace: String, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RunFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::RunFailed), "Run Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConnectorError::Configuration {
            name: "MONGO_URI".to_string(),
            hint: "Set the MONGO_URI environment variable".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Required configuration is missing"));
        assert!(display.contains("MONGO_URI"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_fetch_error_display() {
        let error = ConnectorError::Fetch {
            url: "https://example.com/feed.json".to_string(),
            details: "server returned status 500 Internal Server Error".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch feed"));
        assert!(display.contains("https://example.com/feed.json"));
        assert!(display.contains("500"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = ConnectorError::Parse {
            url: "https://example.com/feed.json".to_string(),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not valid JSON"));
        assert!(display.contains("line 1 column 1"));
    }

    #[test]
    fn test_insert_error_display() {
        let error = ConnectorError::Insert {
            namespace: "etl_db.cisa_kev".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Bulk insert into etl_db.cisa_kev failed"));
        assert!(display.contains("connection refused"));
    }
}
