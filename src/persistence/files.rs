use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name used for both the project and the global task file
pub const TASKS_FILE_NAME: &str = ".ticklist.json";

/// Task file in the current working directory
pub fn project_file() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    Ok(current_dir.join(TASKS_FILE_NAME))
}

/// Task file in the user's home directory
pub fn global_file() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(TASKS_FILE_NAME))
}

/// True if `path` is an existing file. Any error reads as false.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(&dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_file_name() {
        let path = project_file().unwrap();
        assert!(path.ends_with(TASKS_FILE_NAME));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("tasks.json");

        atomic_write(&test_file, "{\"tasks\": []}").unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, "{\"tasks\": []}");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nested").join("tasks.json");

        atomic_write(&test_file, "[]").unwrap();
        assert!(file_exists(&test_file));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.json");

        assert_eq!(read_file(&test_file).unwrap(), "");
        assert!(!file_exists(&test_file));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(!file_exists(temp_dir.path()));
    }
}
