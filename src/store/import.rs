//! JSON Import
//!
//! Reads a login export (an array of login objects) from disk.

use std::path::Path;

use super::models::{LoginEntry, LoginRecord};
use super::{StoreError, StoreResult};

/// Parse logins from JSON text
pub fn parse_logins(json: &str) -> StoreResult<Vec<LoginRecord>> {
    let entries: Vec<LoginEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(LoginRecord::from).collect())
}

/// Read logins from a JSON file
pub fn read_logins(path: &Path) -> StoreResult<Vec<LoginRecord>> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let logins = parse_logins(&json)?;
    tracing::debug!("Read {} logins from {}", logins.len(), path.display());
    Ok(logins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_logins() {
        let json = r#"[
            {"hostname": "https://www.amazon.com", "username": "a", "password": "x"},
            {"hostname": "not a url", "password": "y"}
        ]"#;

        let logins = parse_logins(json).unwrap();
        assert_eq!(logins.len(), 2);
        assert_eq!(logins[1].hostname, "not a url");
        assert!(logins[1].username.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let result = parse_logins(r#"{"hostname": "https://example.com"}"#);
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_read_logins_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"hostname": "https://example.com", "password": "pw"}}]"#).unwrap();

        let logins = read_logins(file.path()).unwrap();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].hostname, "https://example.com");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_logins(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
