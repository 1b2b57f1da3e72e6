use super::*;
use crate::common::*;

/// In-memory lookup index over an annotation document.
///
/// Images are kept in ascending id order. Annotation ids of an image are kept
/// in the order they appear in the document.
#[derive(Debug, Clone, Getters)]
pub struct AnnotationStore {
    images: IndexMap<ImageId, ImageRecord>,
    image_annotations: HashMap<ImageId, Vec<AnnotationId>>,
    annotations: HashMap<AnnotationId, AnnotationRecord>,
    #[get = "pub"]
    categories: CategoryMap,
}

impl AnnotationStore {
    /// Build the index in a single pass over each section of the document.
    pub fn build(document: Document) -> Result<Self> {
        let Document {
            images: image_list,
            annotations: annotation_list,
            categories,
        } = document;

        let categories = CategoryMap::new(categories)?;

        let mut images = IndexMap::with_capacity(image_list.len());
        image_list
            .into_iter()
            .sorted_by_key(|image| image.id)
            .try_for_each(|image| {
                let id = image.id;
                match images.insert(id, image) {
                    Some(_) => Err(Error::Parse(format!("duplicated image id {}", id))),
                    None => Ok(()),
                }
            })?;

        let mut image_annotations: HashMap<_, Vec<_>> = HashMap::new();
        let mut annotations = HashMap::with_capacity(annotation_list.len());
        annotation_list.into_iter().try_for_each(|ann| {
            let AnnotationRecord { id, image_id, .. } = ann;
            if annotations.insert(id, ann).is_some() {
                return Err(Error::Parse(format!("duplicated annotation id {}", id)));
            }
            image_annotations.entry(image_id).or_default().push(id);
            Ok(())
        })?;

        let orphan_count: usize = image_annotations
            .iter()
            .filter(|(image_id, _)| !images.contains_key(*image_id))
            .map(|(_, ids)| ids.len())
            .sum();
        if orphan_count > 0 {
            warn!(
                "{} annotations refer to undeclared images and are ignored",
                orphan_count
            );
        }

        Ok(Self {
            images,
            image_annotations,
            annotations,
            categories,
        })
    }

    /// Parse a JSON document from a reader and build the index.
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        Self::build(Document::from_reader(reader)?)
    }

    /// Iterate over all declared image ids in ascending order, including
    /// images without annotations.
    pub fn image_ids(&self) -> impl ExactSizeIterator<Item = ImageId> + '_ {
        self.images.keys().copied()
    }

    /// Iterate over all declared images in ascending id order.
    pub fn images(&self) -> impl ExactSizeIterator<Item = &ImageRecord> + '_ {
        self.images.values()
    }

    pub fn image(&self, id: ImageId) -> Result<&ImageRecord> {
        self.images.get(&id).ok_or_else(|| id.not_found())
    }

    /// Get the annotation ids of an image. Returns an empty slice if the image
    /// has no annotations.
    pub fn annotation_ids_for_image(&self, id: ImageId) -> &[AnnotationId] {
        self.image_annotations
            .get(&id)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn annotation(&self, id: AnnotationId) -> Result<&AnnotationRecord> {
        self.annotations.get(&id).ok_or_else(|| id.not_found())
    }

    pub fn dense_category_index(&self, id: CategoryId) -> Result<usize> {
        self.categories.dense_index(id)
    }

    pub fn num_images(&self) -> usize {
        self.images.len()
    }

    pub fn num_annotations(&self) -> usize {
        self.annotations.len()
    }
}
