use plugin_scanner_api::{BoxError, ClassBytes, ClassSource};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Every `*.class` file below a directory root
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ClassSource for DirectorySource {
    fn name(&self) -> String {
        self.root.display().to_string()
    }

    fn classes(&self) -> Result<Vec<ClassBytes>, BoxError> {
        let mut classes = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("class")
            {
                continue;
            }
            let bytes = std::fs::read(path)?;
            classes.push(ClassBytes::new(path.display().to_string(), bytes));
        }
        Ok(classes)
    }
}
