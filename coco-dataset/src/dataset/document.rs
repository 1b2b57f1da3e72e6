use super::*;
use crate::common::*;

/// The instance annotation document of a COCO split.
///
/// Only the fields needed to build the label index are kept. Other sections
/// and fields such as `info`, `licenses` and `segmentation` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub images: Vec<ImageRecord>,
    pub annotations: Vec<AnnotationRecord>,
    pub categories: Vec<Category>,
}

impl Document {
    /// Parse the JSON document from a reader.
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        serde_json::from_reader(reader).map_err(|err| Error::Parse(err.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|err| Error::Parse(err.to_string()))
    }
}

/// An image entry of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    /// The file name relative to the image directory of the split.
    pub file_name: PathBuf,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub width: Option<usize>,
}

/// A single labeled object instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: AnnotationId,
    pub image_id: ImageId,
    pub category_id: CategoryId,
    pub bbox: BBox,
    pub area: R64,
}

/// A category entry of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub supercategory: Option<String>,
}
