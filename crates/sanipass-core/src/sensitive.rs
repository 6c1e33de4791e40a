//! Sensitive-data list

use std::path::Path;

use crate::Result;

/// Ordered set of literal strings to protect.
///
/// Loaded from a newline-delimited file; whitespace-only lines are skipped and
/// the remaining lines are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensitiveData {
    entries: Vec<String>,
}

impl SensitiveData {
    pub fn new(entries: Vec<String>) -> Self {
        entries.into_iter().collect()
    }

    /// Parse newline-delimited literals
    pub fn parse(content: &str) -> Self {
        content.lines().map(str::to_string).collect()
    }

    /// Load the list from a file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading sensitive data from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for SensitiveData {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .filter(|entry| !entry.trim().is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_blank_lines() {
        let data = SensitiveData::parse("alice\n\n   \nhunter2\r\nAKIA123\n");
        let entries: Vec<_> = data.iter().collect();
        assert_eq!(entries, vec!["alice", "hunter2", "AKIA123"]);
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let data = SensitiveData::parse("John Smith\n");
        assert_eq!(data.iter().next(), Some("John Smith"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-one").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "secret-two").unwrap();

        let data = SensitiveData::load(file.path()).unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = SensitiveData::load(Path::new("/nonexistent/sensitive.txt"));
        assert!(result.is_err());
    }
}
