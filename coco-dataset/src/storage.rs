//! Resolution of annotation documents and image files.

use crate::common::*;

/// The storage backing a dataset.
///
/// Implementations may fetch and cache remote artifacts. The dataset only
/// asks for documents and image references by their path relative to the
/// dataset root.
pub trait Storage
where
    Self: Debug,
{
    /// Open an annotation document for reading.
    fn open_document(&self, relative: &Path) -> Result<Box<dyn Read + '_>>;

    /// Resolve the reference of an image file.
    fn resolve_image_path(&self, relative: &Path) -> PathBuf;
}

/// The storage of a dataset extracted into a local directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new<P>(root: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            root: root.as_ref().to_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Storage for DirStorage {
    fn open_document(&self, relative: &Path) -> Result<Box<dyn Read + '_>> {
        let path = self.root.join(relative);
        let file = File::open(&path).map_err(|source| Error::Io { path, source })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn resolve_image_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_io_error() {
        let storage = DirStorage::new("/nonexistent/coco");
        let result = storage.open_document(Path::new("annotations/instances_train2017.json"));
        match result {
            Err(Error::Io { path, source }) => {
                assert_eq!(
                    path,
                    Path::new("/nonexistent/coco/annotations/instances_train2017.json")
                );
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("expect an I/O error"),
        }
    }

    #[test]
    fn image_paths_are_rooted() {
        let storage = DirStorage::new("/data/coco");
        assert_eq!(
            storage.resolve_image_path(Path::new("train2017/000000000009.jpg")),
            Path::new("/data/coco/train2017/000000000009.jpg")
        );
    }
}
