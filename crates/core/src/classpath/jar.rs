use plugin_scanner_api::{BoxError, ClassBytes, ClassSource};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use zip::ZipArchive;

/// Every `*.class` entry of a jar (or any zip archive)
pub struct JarSource {
    path: PathBuf,
}

impl JarSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ClassSource for JarSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn classes(&self) -> Result<Vec<ClassBytes>, BoxError> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut classes = Vec::new();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if !entry.is_file() || !entry.name().ends_with(".class") {
                continue;
            }
            let origin = format!("{}!/{}", self.path.display(), entry.name());
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            classes.push(ClassBytes::new(origin, bytes));
        }

        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_reads_class_entries_from_jar() {
        let dir = tempdir().unwrap();
        let jar_path = dir.path().join("test.jar");

        let file = File::create(&jar_path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("com/example/Test.class", options).unwrap();
        zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34])
            .unwrap();
        zip.start_file("META-INF/MANIFEST.MF", options).unwrap();
        zip.write_all(b"Manifest-Version: 1.0\n").unwrap();
        zip.finish().unwrap();

        let classes = JarSource::new(jar_path).classes().unwrap();

        assert_eq!(classes.len(), 1);
        assert!(classes[0].origin.ends_with("!/com/example/Test.class"));
        assert_eq!(&classes[0].bytes[..4], &[0xCA, 0xFE, 0xBA, 0xBE]);
    }
}
