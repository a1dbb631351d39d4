//! Common utilities for seqkit-cmd

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Reads a single JSON document from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<&str>) -> Result<Value> {
    match path {
        Some(path) => {
            validate_file_exists(path)?;
            let file =
                File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse JSON from file: {}", path))
        }
        None => serde_json::from_reader(io::stdin().lock())
            .context("Failed to parse JSON from stdin"),
    }
}

/// Writes `value` as pretty JSON to `path`, or to stdout when no path is given.
pub fn write_json(path: Option<&str>, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write result to file: {}", path))?;
            tracing::debug!("result written to {}", path);
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let path = path.to_str().unwrap();

        let value = json!([1, [2, "three"], null]);
        write_json(Some(path), &value).unwrap();
        assert_eq!(read_json(Some(path)).unwrap(), value);
    }

    #[test]
    fn test_read_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_json(path.to_str()).unwrap_err();
        assert!(err.to_string().starts_with("File does not exist"));
    }

    #[test]
    fn test_read_json_rejects_directory_and_garbage() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_file_exists(dir.path().to_str().unwrap()).is_err());

        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = read_json(path.to_str()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }
}
