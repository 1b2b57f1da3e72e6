//! Conversion of dataset entries into model inputs and labels.
//!
//! [Translator] converts an image reference alone, as needed for inference.
//! [TrainTranslator] converts an image reference together with its labels.
//! Decoding pixels and building tensors is left to the consumer of the
//! produced [ImageInput] and [LabelMatrix].

use crate::{common::*, dataset::LabelRow};

/// The color mode to decode images with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFlag {
    Color,
    Grayscale,
}

impl ImageFlag {
    pub fn channels(&self) -> usize {
        match self {
            Self::Color => 3,
            Self::Grayscale => 1,
        }
    }
}

impl Default for ImageFlag {
    fn default() -> Self {
        Self::Color
    }
}

/// Converts an image reference into a model input.
pub trait Translator {
    type Input;

    fn process_input(&self, image: &Path) -> Result<Self::Input>;
}

/// Converts an image reference and its labels into a training record.
pub trait TrainTranslator
where
    Self: Translator,
{
    type Label;

    fn process_record(
        &self,
        image: &Path,
        labels: &[LabelRow],
    ) -> Result<Record<Self::Input, Self::Label>>;
}

/// A paired input and label.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<I, L> {
    pub input: I,
    pub label: L,
}

/// The request to load an image with a color mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageInput {
    pub path: PathBuf,
    pub flag: ImageFlag,
}

impl ImageInput {
    pub fn channels(&self) -> usize {
        self.flag.channels()
    }
}

/// Row-major `rows x 5` matrix of `[x, y, width, height, class]` labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMatrix {
    rows: usize,
    data: Vec<f64>,
}

impl LabelMatrix {
    pub const COLUMNS: usize = 5;

    pub fn from_labels(labels: &[LabelRow]) -> Self {
        let data: Vec<f64> = labels
            .iter()
            .flat_map(|label| label.to_array())
            .collect();
        Self {
            rows: labels.len(),
            data,
        }
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, Self::COLUMNS]
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        (index < self.rows)
            .then(|| &self.data[(index * Self::COLUMNS)..((index + 1) * Self::COLUMNS)])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks(Self::COLUMNS)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// The translator producing [ImageInput] and [LabelMatrix].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DefaultTranslator {
    pub flag: ImageFlag,
}

impl DefaultTranslator {
    pub fn new(flag: ImageFlag) -> Self {
        Self { flag }
    }
}

impl Translator for DefaultTranslator {
    type Input = ImageInput;

    fn process_input(&self, image: &Path) -> Result<Self::Input> {
        Ok(ImageInput {
            path: image.to_owned(),
            flag: self.flag,
        })
    }
}

impl TrainTranslator for DefaultTranslator {
    type Label = LabelMatrix;

    fn process_record(
        &self,
        image: &Path,
        labels: &[LabelRow],
    ) -> Result<Record<Self::Input, Self::Label>> {
        Ok(Record {
            input: self.process_input(image)?,
            label: LabelMatrix::from_labels(labels),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BBox;

    fn label(xywh: [f64; 4], class: usize) -> LabelRow {
        let [x, y, w, h] = xywh;
        LabelRow {
            bbox: BBox::from_xywh([r64(x), r64(y), r64(w), r64(h)]),
            class,
        }
    }

    #[test]
    fn record_translation() {
        let translator = DefaultTranslator::new(ImageFlag::Grayscale);
        let labels = [label([1.0, 2.0, 3.0, 4.0], 0), label([5.0, 6.0, 7.0, 8.0], 2)];
        let Record { input, label } = translator
            .process_record(Path::new("/data/coco/train2017/1.jpg"), &labels)
            .unwrap();

        assert_eq!(input.path, Path::new("/data/coco/train2017/1.jpg"));
        assert_eq!(input.channels(), 1);
        assert_eq!(label.shape(), [2, 5]);
        assert_eq!(label.row(1).unwrap(), &[5.0, 6.0, 7.0, 8.0, 2.0]);
        assert!(label.row(2).is_none());
        assert_eq!(label.rows().count(), 2);
        assert_eq!(label.as_slice().len(), 10);
    }

    #[test]
    fn input_translation() {
        let input = DefaultTranslator::default()
            .process_input(Path::new("a.jpg"))
            .unwrap();
        assert_eq!(input.flag, ImageFlag::Color);
        assert_eq!(input.channels(), 3);
    }

    #[test]
    fn empty_label_matrix() {
        let matrix = LabelMatrix::from_labels(&[]);
        assert_eq!(matrix.shape(), [0, 5]);
        assert_eq!(matrix.rows().count(), 0);
    }
}
