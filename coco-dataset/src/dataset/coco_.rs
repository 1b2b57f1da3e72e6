use super::*;
use crate::{
    common::*,
    config::DatasetConfig,
    storage::{DirStorage, Storage},
    translator::{DefaultTranslator, ImageFlag, Record, TrainTranslator},
};

/// The Microsoft COCO detection dataset.
///
/// The dataset is empty until [CocoDetection::prepare] succeeds. Afterwards
/// it serves the images having at least one valid object, in ascending image
/// id order.
#[derive(Debug)]
pub struct CocoDetection<S = DirStorage>
where
    S: Storage,
{
    storage: S,
    split: Split,
    flag: ImageFlag,
    state: State,
}

#[derive(Debug)]
enum State {
    Unprepared,
    Preparing,
    Prepared(Prepared),
    Failed,
}

#[derive(Debug)]
struct Prepared {
    split: Split,
    store: AnnotationStore,
    entries: Vec<DatasetEntry>,
}

impl CocoDetection<DirStorage> {
    pub fn from_config(config: &DatasetConfig) -> Self {
        let storage = DirStorage::new(config.dataset_root());
        Self::new(storage, config.split, config.flag)
    }
}

impl<S> CocoDetection<S>
where
    S: Storage,
{
    pub fn new(storage: S, split: Split, flag: ImageFlag) -> Self {
        Self {
            storage,
            split,
            flag,
            state: State::Unprepared,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The split the dataset is prepared for, or the configured split if it
    /// is not prepared yet.
    pub fn split(&self) -> Split {
        match &self.state {
            State::Prepared(prepared) => prepared.split,
            _ => self.split,
        }
    }

    pub fn flag(&self) -> ImageFlag {
        self.flag
    }

    pub fn is_prepared(&self) -> bool {
        matches!(self.state, State::Prepared(_))
    }

    /// Prepare the configured split.
    pub fn prepare_configured(&mut self) -> Result<()> {
        self.prepare(self.split)
    }

    /// Parse the annotation document of the split and materialize the entries.
    ///
    /// It does nothing if the dataset is already prepared. A failed attempt
    /// discards everything and leaves the dataset unprepared, and the next
    /// call starts over.
    pub fn prepare(&mut self, split: Split) -> Result<()> {
        if let State::Prepared(prepared) = &self.state {
            debug!(
                "dataset is already prepared for the {} split, ignore request for the {} split",
                prepared.split, split
            );
            return Ok(());
        }

        self.state = State::Preparing;

        match self.load(split) {
            Ok(prepared) => {
                self.state = State::Prepared(prepared);
                Ok(())
            }
            Err(err) => {
                self.state = State::Failed;
                Err(err)
            }
        }
    }

    fn load(&self, split: Split) -> Result<Prepared> {
        let document_file = split.annotation_file()?;
        let image_dir = split.image_dir()?;

        info!(
            "loading {} split annotations from '{}'",
            split,
            document_file.display()
        );
        let store = {
            let reader = self.storage.open_document(&document_file)?;
            AnnotationStore::from_reader(reader)?
        };

        let extractor = LabelExtractor::new(&store);
        let mut filtered_count = 0;

        let entries: Vec<_> = store
            .images()
            .map(|image| -> Result<_> {
                let labels = extractor.extract(image.id)?;
                filtered_count += store.annotation_ids_for_image(image.id).len() - labels.len();

                if labels.is_empty() {
                    return Ok(None);
                }

                let path = self
                    .storage
                    .resolve_image_path(&image_dir.join(&image.file_name));
                Ok(Some(DatasetEntry { path, labels }))
            })
            .filter_map(|result| result.transpose())
            .try_collect()?;

        if filtered_count > 0 {
            warn!(
                "filtered out {} degenerate objects in the {} split",
                filtered_count, split
            );
        }
        info!(
            "prepared {} split with {} out of {} images and {} classes",
            split,
            entries.len(),
            store.num_images(),
            store.categories().len()
        );

        Ok(Prepared {
            split,
            store,
            entries,
        })
    }

    fn prepared(&self) -> Result<&Prepared> {
        match &self.state {
            State::Prepared(prepared) => Ok(prepared),
            State::Unprepared | State::Preparing | State::Failed => Err(Error::NotPrepared),
        }
    }

    /// The annotation index of the prepared split.
    pub fn store(&self) -> Result<&AnnotationStore> {
        Ok(&self.prepared()?.store)
    }

    /// Iterate over the prepared entries in order.
    pub fn entries(&self) -> Result<impl ExactSizeIterator<Item = &DatasetEntry> + '_> {
        Ok(self.prepared()?.entries.iter())
    }

    /// The translator converting entries with the configured color mode.
    pub fn default_translator(&self) -> DefaultTranslator {
        DefaultTranslator::new(self.flag)
    }

    /// Convert the nth entry with a translator.
    pub fn record<T>(&self, index: usize, translator: &T) -> Result<Record<T::Input, T::Label>>
    where
        T: TrainTranslator,
    {
        let DatasetEntry { path, labels } = self.get(index)?;
        translator.process_record(path, labels)
    }
}

impl<S> GenericDataset for CocoDetection<S>
where
    S: Storage,
{
    fn input_channels(&self) -> usize {
        self.flag.channels()
    }

    fn categories(&self) -> Result<&CategoryMap> {
        Ok(self.prepared()?.store.categories())
    }
}

impl<S> RandomAccessDataset for CocoDetection<S>
where
    S: Storage,
{
    fn size(&self) -> Result<usize> {
        Ok(self.prepared()?.entries.len())
    }

    fn get(&self, index: usize) -> Result<&DatasetEntry> {
        let entries = &self.prepared()?.entries;
        entries.get(index).ok_or(Error::Index {
            index,
            size: entries.len(),
        })
    }
}
