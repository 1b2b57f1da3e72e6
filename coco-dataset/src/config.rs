//! Dataset configuration format.

use crate::{common::*, dataset::Split, translator::ImageFlag};

/// The dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The split prepared by default.
    pub split: Split,
    /// The local dataset directory. If unset, the dataset root is located in
    /// the cache directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// The directory where downloaded artifacts are cached.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default)]
    pub artifact: ArtifactConfig,
    #[serde(default)]
    pub flag: ImageFlag,
}

impl DatasetConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = json5::from_str(&text).map_err(|err| Error::Config(err.to_string()))?;
        Ok(config)
    }

    /// The directory containing the `annotations` directory and the image
    /// directories of the splits.
    pub fn dataset_root(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => self.cache_dir.join(self.artifact.resource_path()),
        }
    }
}

/// Identifies the dataset artifact in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactConfig {
    /// The artifact directory relative to the cache directory.
    pub fn resource_path(&self) -> PathBuf {
        let mut path = PathBuf::from("dataset/cv");
        self.group_id.split('.').for_each(|part| path.push(part));
        path.push(&self.artifact_id);
        path.push(&self.version);
        path
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            group_id: "org.apache.mxnet".into(),
            artifact_id: "coco".into(),
            version: "1.0".into(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".coco-dataset")
        .join("cache")
}
