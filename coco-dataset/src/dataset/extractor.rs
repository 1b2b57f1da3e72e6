use super::*;
use crate::common::*;

/// Converts the annotations of an image into label rows.
#[derive(Debug, Clone, Copy)]
pub struct LabelExtractor<'a> {
    store: &'a AnnotationStore,
}

impl<'a> LabelExtractor<'a> {
    pub fn new(store: &'a AnnotationStore) -> Self {
        Self { store }
    }

    /// Extract the label rows of an image.
    ///
    /// Annotations with non-positive area are dropped. The result is empty if
    /// the image has no annotations or all of them are degenerate.
    pub fn extract(&self, image_id: ImageId) -> Result<Vec<LabelRow>> {
        let store = self.store;

        store
            .annotation_ids_for_image(image_id)
            .iter()
            .map(|&id| -> Result<_> {
                let AnnotationRecord {
                    bbox,
                    category_id,
                    area,
                    ..
                } = *store.annotation(id)?;

                // kick off degenerate boxes
                if area <= 0.0 {
                    return Ok(None);
                }

                let class = store.dense_category_index(category_id)?;
                Ok(Some(LabelRow { bbox, class }))
            })
            .filter_map(|result| result.transpose())
            .try_collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(text: &str) -> AnnotationStore {
        AnnotationStore::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn degenerate_annotations_are_dropped() {
        let store = store(
            r#"{
                "images": [{ "id": 1, "file_name": "a.jpg" }, { "id": 2, "file_name": "b.jpg" }],
                "annotations": [
                    { "id": 1, "image_id": 1, "category_id": 7, "bbox": [1, 2, 3, 4], "area": 12 },
                    { "id": 2, "image_id": 1, "category_id": 3, "bbox": [5, 6, 0, 4], "area": 0 },
                    { "id": 3, "image_id": 1, "category_id": 3, "bbox": [0, 0, 2, 2], "area": 4 },
                    { "id": 4, "image_id": 2, "category_id": 7, "bbox": [0, 0, 1, 1], "area": -1 }
                ],
                "categories": [{ "id": 7 }, { "id": 3 }]
            }"#,
        );
        let extractor = LabelExtractor::new(&store);

        let labels = extractor.extract(ImageId(1)).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].to_array(), [1.0, 2.0, 3.0, 4.0, 1.0]);
        assert_eq!(labels[1].to_array(), [0.0, 0.0, 2.0, 2.0, 0.0]);

        assert!(extractor.extract(ImageId(2)).unwrap().is_empty());
        assert!(extractor.extract(ImageId(3)).unwrap().is_empty());
    }

    #[test]
    fn undeclared_category_is_not_found() {
        let store = store(
            r#"{
                "images": [{ "id": 1, "file_name": "a.jpg" }],
                "annotations": [
                    { "id": 1, "image_id": 1, "category_id": 42, "bbox": [1, 2, 3, 4], "area": 12 }
                ],
                "categories": [{ "id": 7 }]
            }"#,
        );
        let result = LabelExtractor::new(&store).extract(ImageId(1));
        assert!(matches!(
            result,
            Err(Error::NotFound {
                kind: IdKind::Category,
                id: 42
            })
        ));
    }

    #[test]
    fn degenerate_annotation_with_undeclared_category_is_dropped() {
        let store = store(
            r#"{
                "images": [{ "id": 1, "file_name": "a.jpg" }],
                "annotations": [
                    { "id": 1, "image_id": 1, "category_id": 42, "bbox": [1, 2, 0, 0], "area": 0 }
                ],
                "categories": [{ "id": 7 }]
            }"#,
        );
        let labels = LabelExtractor::new(&store).extract(ImageId(1)).unwrap();
        assert!(labels.is_empty());
    }
}
