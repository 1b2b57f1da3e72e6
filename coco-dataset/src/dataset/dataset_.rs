use super::*;
use crate::common::*;

/// The generic dataset trait.
pub trait GenericDataset
where
    Self: Debug,
{
    /// The number of color channels of the dataset images.
    fn input_channels(&self) -> usize;

    /// The categories of the dataset in dense class index order.
    fn categories(&self) -> Result<&CategoryMap>;

    /// The number of classes.
    fn num_classes(&self) -> Result<usize> {
        Ok(self.categories()?.len())
    }
}

/// The dataset that can be random accessed.
pub trait RandomAccessDataset
where
    Self: GenericDataset,
{
    /// Get number of entries in the dataset.
    fn size(&self) -> Result<usize>;

    /// Get the nth entry in the dataset.
    fn get(&self, index: usize) -> Result<&DatasetEntry>;
}
