use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};


/// Named-blob access to a level archive. Names are `/`-separated paths such
/// as `course/course1.bin`.
pub trait ArchiveReader {
    fn try_get(&self, name: &str) -> Result<Option<Vec<u8>>>;

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>>;
}


#[derive(Debug, Default, Clone)]
pub struct MemoryArchive {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N, D>(&mut self, name: N, data: D)
    where
        N: Into<String>,
        D: Into<Vec<u8>>,
    {
        self.files.insert(name.into(), data.into());
    }

    pub fn with<N, D>(mut self, name: N, data: D) -> Self
    where
        N: Into<String>,
        D: Into<Vec<u8>>,
    {
        self.insert(name, data);
        self
    }
}

impl ArchiveReader for MemoryArchive {
    fn try_get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(name).cloned())
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(self
            .files
            .iter()
            .map(|(name, data)| (name.clone(), data.clone()))
            .collect())
    }
}


/// An archive that was already extracted to a directory.
#[derive(Debug, Clone)]
pub struct DirArchive {
    root: PathBuf,
}

impl DirArchive {
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collect(&self, dir: &Path, prefix: &str, out: &mut Vec<(String, Vec<u8>)>) -> Result<()> {
        let mut children = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
            .map_err(|source| archive_error(prefix, source))?;
        children.sort_by_key(|entry| entry.file_name());

        for entry in children {
            let name = format!("{}{}", prefix, entry.file_name().to_string_lossy());
            let path = entry.path();

            if path.is_dir() {
                self.collect(&path, &format!("{}/", name), out)?;
            } else {
                let data = fs::read(&path).map_err(|source| archive_error(&name, source))?;
                out.push((name, data));
            }
        }

        Ok(())
    }
}

impl ArchiveReader for DirArchive {
    fn try_get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = name
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part));

        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(archive_error(name, source)),
        }
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>> {
        let mut out = Vec::new();
        self.collect(&self.root, "", &mut out)?;
        Ok(out)
    }
}

fn archive_error(name: &str, source: io::Error) -> Error {
    Error::Archive {
        name: name.to_string(),
        source,
    }
}


#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn memory_archive_lookup() {
        let archive = MemoryArchive::new()
            .with("course/course1.bin", vec![1u8, 2])
            .with("levelname", "1-1");

        assert_eq!(archive.try_get("course/course1.bin").unwrap(), Some(vec![1, 2]));
        assert_eq!(archive.try_get("course/course2.bin").unwrap(), None);
        assert_eq!(archive.entries().unwrap().len(), 2);
    }

    #[test]
    fn dir_archive_lists_nested_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("course")).unwrap();
        fs::write(root.join("course").join("course1.bin"), [7u8]).unwrap();
        fs::write(root.join("levelname"), b"1-1").unwrap();

        let archive = DirArchive::new(root);
        let entries = archive.entries().unwrap();

        assert_eq!(archive.try_get("course/course1.bin").unwrap(), Some(vec![7]));
        assert_eq!(archive.try_get("course/course2.bin").unwrap(), None);
        assert_eq!(
            entries.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            ["course/course1.bin", "levelname"]
        );
    }
}
