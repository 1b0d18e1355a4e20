use crate::store::fs::FileStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let data_file = root.join("data.txt");
        let store = FileStore::new(&data_file);
        Self {
            _temp_dir: temp_dir,
            store,
            root,
            data_file,
        }
    }

    /// Raw bytes of the data file as text, empty if it does not exist yet.
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.data_file).unwrap_or_default()
    }

    pub fn write_contents(&self, content: &str) {
        fs::write(&self.data_file, content).expect("failed to seed data file");
    }
}
