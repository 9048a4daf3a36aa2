//! Blocking messages printed instead of a report

use breath_domain::ReaderError;

/// Form validation failure
pub fn reader_alert(error: &ReaderError) -> String {
    error.alert()
}

/// The service could not produce a report
pub fn breaking_alert(message: &str, base_url: &str) -> String {
    format!(
        "BREAKING: Connection Failed!\n\n{}\n\nEnsure the backend press is running at {}",
        message, base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_alert() {
        assert_eq!(
            reader_alert(&ReaderError::MissingParentStatus),
            "ATTENTION READER: Please indicate parent status"
        );
    }

    #[test]
    fn test_breaking_alert() {
        let alert = breaking_alert("Failed to fetch", "http://localhost:5000");
        assert_eq!(
            alert,
            "BREAKING: Connection Failed!\n\nFailed to fetch\n\nEnsure the backend press is running at http://localhost:5000"
        );
    }
}
