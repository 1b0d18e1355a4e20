use super::EntryStore;
use crate::error::{HexaError, Result};
use crate::model::{join_lines, last_entry_index, to_entry_line};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    // Guards the file within this process only; other processes are not excluded.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a panic in another holder leaves nothing inconsistent.
        self.lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(HexaError::EmptyPath);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HexaError::Io)?;
            }
        }

        if !self.path.exists() {
            debug!(path = %self.path.display(), "creating empty data file");
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(false)
                .open(&self.path)
                .map_err(HexaError::Io)?;
        }

        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(HexaError::Io)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(HexaError::Io)?;
        Ok(lines)
    }

    /// Replace the whole file: write a sibling temp file, then rename it over the original.
    fn rewrite(&self, content: &str) -> Result<()> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        let tmp_path = self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&tmp_path, content).map_err(HexaError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(HexaError::Io(e));
        }
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn add(&self, value: &str) -> Result<()> {
        let _guard = self.acquire();
        self.ensure_exists()?;

        let line = to_entry_line(value);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(HexaError::Io)?;
        writeln!(file, "{}", line).map_err(HexaError::Io)?;

        debug!(path = %self.path.display(), bytes = line.len(), "appended entry");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let _guard = self.acquire();
        self.ensure_exists()?;

        let lines = self.read_lines()?;
        debug!(path = %self.path.display(), count = lines.len(), "listed entries");
        Ok(lines)
    }

    fn delete_last(&self) -> Result<()> {
        let _guard = self.acquire();
        self.ensure_exists()?;

        let lines = self.read_lines()?;
        if lines.is_empty() {
            return Err(HexaError::NothingToDelete);
        }

        match last_entry_index(&lines) {
            None => {
                warn!(
                    path = %self.path.display(),
                    blank_lines = lines.len(),
                    "only blank lines left, truncating data file"
                );
                self.rewrite("")
            }
            Some(idx) => {
                debug!(
                    path = %self.path.display(),
                    removed = lines.len() - idx,
                    remaining = idx,
                    "deleting last entry"
                );
                self.rewrite(&join_lines(&lines[..idx]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn creates_missing_file_and_parents_on_first_access() {
        let env = TestEnv::new();
        let path = env.root.join("nested").join("deeper").join("lines.txt");
        let store = FileStore::new(&path);

        assert!(store.list().unwrap().is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn add_appends_with_trailing_newline() {
        let env = TestEnv::new();
        env.store.add("hello").unwrap();
        env.store.add("world").unwrap();

        assert_eq!(env.contents(), "hello\nworld\n");
        assert_eq!(env.store.list().unwrap(), vec!["hello", "world"]);
    }

    #[test]
    fn add_flattens_newlines_into_spaces() {
        let env = TestEnv::new();
        env.store.add("first\nsecond").unwrap();

        assert_eq!(env.contents(), "first second\n");
        assert_eq!(env.store.list().unwrap(), vec!["first second"]);
    }

    #[test]
    fn list_is_stable_between_calls() {
        let env = TestEnv::new();
        env.store.add("a").unwrap();
        env.store.add("b").unwrap();

        assert_eq!(env.store.list().unwrap(), env.store.list().unwrap());
    }

    #[test]
    fn list_strips_carriage_returns() {
        let env = TestEnv::new();
        env.write_contents("one\r\ntwo\r\n");

        assert_eq!(env.store.list().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn delete_last_removes_final_entry() {
        let env = TestEnv::new();
        for value in ["a", "b", "c"] {
            env.store.add(value).unwrap();
        }

        env.store.delete_last().unwrap();

        assert_eq!(env.store.list().unwrap(), vec!["a", "b"]);
        assert_eq!(env.contents(), "a\nb\n");
    }

    #[test]
    fn delete_last_on_empty_file_fails() {
        let env = TestEnv::new();
        match env.store.delete_last() {
            Err(HexaError::NothingToDelete) => {}
            other => panic!("Expected NothingToDelete, got {:?}", other),
        }
        // The file still gets created by the access.
        assert!(env.data_file.exists());
    }

    #[test]
    fn delete_last_drops_trailing_blank_lines() {
        let env = TestEnv::new();
        env.write_contents("a\nb\n\n   \n");

        env.store.delete_last().unwrap();

        assert_eq!(env.contents(), "a\n");
    }

    #[test]
    fn delete_last_keeps_interior_blank_lines() {
        let env = TestEnv::new();
        env.write_contents("a\n\nb\n");

        env.store.delete_last().unwrap();

        assert_eq!(env.contents(), "a\n\n");
        assert_eq!(env.store.list().unwrap(), vec!["a", ""]);
    }

    #[test]
    fn delete_last_truncates_all_blank_file() {
        let env = TestEnv::new();
        env.write_contents("\n  \n\t\n");

        env.store.delete_last().unwrap();

        assert_eq!(env.contents(), "");
        assert!(matches!(
            env.store.delete_last(),
            Err(HexaError::NothingToDelete)
        ));
    }

    #[test]
    fn delete_last_of_only_entry_leaves_empty_file() {
        let env = TestEnv::new();
        env.store.add("solo").unwrap();

        env.store.delete_last().unwrap();

        assert_eq!(env.contents(), "");
    }

    #[test]
    fn delete_last_leaves_no_temp_files_behind() {
        let env = TestEnv::new();
        env.store.add("a").unwrap();
        env.store.add("b").unwrap();
        env.store.delete_last().unwrap();

        let names: Vec<String> = fs::read_dir(&env.root)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["data.txt".to_string()]);
    }

    #[test]
    fn empty_path_is_rejected() {
        let store = FileStore::new("");
        assert!(matches!(store.add("x"), Err(HexaError::EmptyPath)));
        assert!(matches!(store.list(), Err(HexaError::EmptyPath)));
        assert!(matches!(store.delete_last(), Err(HexaError::EmptyPath)));
    }

    #[test]
    fn directory_in_place_of_file_surfaces_io_error() {
        let env = TestEnv::new();
        let store = FileStore::new(&env.root);

        assert!(matches!(store.add("x"), Err(HexaError::Io(_))));
    }

    #[test]
    fn concurrent_adds_are_serialized() {
        let env = TestEnv::new();
        let store = Arc::new(FileStore::new(&env.data_file));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store.add(&format!("thread-{}-entry-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = store.list().unwrap();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|line| line.starts_with("thread-")));
    }
}
