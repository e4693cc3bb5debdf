//! JSON persistence for generated messages.
//!
//! Each record lands in `<dir>/<category>_<index>.json`. The index is one
//! more than the number of entries in `dir` whose name starts with the
//! category name. This scan is not atomic: two processes writing to the same
//! directory at once can pick the same index and overwrite each other.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::error::{CoreError, Result};
use crate::record::MessageRecord;

/// Writes records into a single output directory.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    dir: PathBuf,
}

impl JsonWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `record` and return the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or listed, or the
    /// file cannot be written.
    pub fn write(&self, record: &MessageRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::io(&self.dir, e))?;

        let index = next_index(&self.dir, record.category)?;
        let path = self.dir.join(format!("{}_{index}.json", record.category));

        // serde_json keeps non-ASCII text as-is and indents with two spaces.
        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content).map_err(|e| CoreError::io(&path, e))?;

        tracing::info!(path = %path.display(), category = %record.category, "message written");
        Ok(path)
    }
}

/// Index the next file of `category` in `dir` would get.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed.
pub fn next_index(dir: &Path, category: Category) -> Result<usize> {
    let mut existing = 0;
    for entry in fs::read_dir(dir).map_err(|e| CoreError::io(dir, e))? {
        let entry = entry.map_err(|e| CoreError::io(dir, e))?;
        if entry.file_name().to_string_lossy().starts_with(category.as_str()) {
            existing += 1;
        }
    }
    Ok(existing + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(category: Category) -> MessageRecord {
        MessageRecord {
            category,
            professor: "Jorge Gonzalez Reaño".into(),
            course: "Programación 3".into(),
            message: "Adjunto el informe de Programación 3.".into(),
        }
    }

    #[test]
    fn first_file_gets_index_one() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonWriter::new(temp_dir.path());

        let path = writer.write(&sample(Category::Correo)).unwrap();

        assert_eq!(path, temp_dir.path().join("correo_1.json"));
        assert!(path.exists());
    }

    #[test]
    fn indices_count_per_category() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonWriter::new(temp_dir.path());

        writer.write(&sample(Category::Correo)).unwrap();
        writer.write(&sample(Category::Zoom)).unwrap();
        let second = writer.write(&sample(Category::Correo)).unwrap();

        assert_eq!(second.file_name().unwrap(), "correo_2.json");
        assert_eq!(next_index(temp_dir.path(), Category::Zoom).unwrap(), 2);
        assert_eq!(next_index(temp_dir.path(), Category::Tarea).unwrap(), 1);
    }

    #[test]
    fn creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested/out");
        assert!(!nested.exists());

        let path = JsonWriter::new(&nested).write(&sample(Category::Tarea)).unwrap();

        assert!(nested.is_dir());
        assert_eq!(path, nested.join("tarea_1.json"));
    }

    #[test]
    fn unrelated_files_are_not_counted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("zoom_9.json"), "{}").unwrap();

        let path = JsonWriter::new(temp_dir.path())
            .write(&sample(Category::Deadline))
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "deadline_1.json");
    }

    #[test]
    fn output_is_indented_and_keeps_non_ascii() {
        let temp_dir = TempDir::new().unwrap();
        let path = JsonWriter::new(temp_dir.path())
            .write(&sample(Category::Correo))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"tipo\": \"correo\""));
        assert!(content.contains("Reaño"));
        assert!(content.contains("Programación 3"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn written_file_reads_back_identically() {
        let temp_dir = TempDir::new().unwrap();
        let record = sample(Category::Whatsapp);
        let path = JsonWriter::new(temp_dir.path()).write(&record).unwrap();

        let parsed: MessageRecord =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn directory_that_is_a_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = JsonWriter::new(&blocker)
            .write(&sample(Category::Zoom))
            .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
