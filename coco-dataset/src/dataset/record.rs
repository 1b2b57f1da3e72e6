use super::*;
use crate::common::*;

/// The label of one valid object: its box and dense class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelRow {
    pub bbox: BBox,
    pub class: usize,
}

impl LabelRow {
    /// Flatten into `[x, y, width, height, class]`.
    pub fn to_array(&self) -> [f64; 5] {
        let [x, y, w, h] = self.bbox.xywh();
        [x.raw(), y.raw(), w.raw(), h.raw(), self.class as f64]
    }
}

/// An image reference paired with the labels of its valid objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetEntry {
    pub path: PathBuf,
    pub labels: Vec<LabelRow>,
}

impl DatasetEntry {
    /// The labels as a `labels.len() x 5` matrix of rows.
    pub fn label_matrix(&self) -> Vec<[f64; 5]> {
        self.labels.iter().map(LabelRow::to_array).collect()
    }
}
