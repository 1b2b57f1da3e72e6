use anyhow::{Context, Result};
use clap::Parser;
use coco_dataset::{
    config::DatasetConfig,
    dataset::{CocoDetection, GenericDataset, RandomAccessDataset, Split},
};
use itertools::Itertools as _;
use log::info;
use prettytable::{cell, row, Table};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
/// Prepare a COCO detection dataset split and inspect its entries.
enum Opts {
    Info {
        /// configuration file
        config_file: PathBuf,
        /// override the configured split
        #[clap(long)]
        split: Option<Split>,
    },
    Show {
        /// configuration file
        config_file: PathBuf,
        /// entry index
        index: usize,
        /// override the configured split
        #[clap(long)]
        split: Option<Split>,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    match Opts::parse() {
        Opts::Info { config_file, split } => info(config_file, split)?,
        Opts::Show {
            config_file,
            index,
            split,
        } => show(config_file, index, split)?,
    }

    Ok(())
}

fn load(config_file: impl AsRef<Path>, split: Option<Split>) -> Result<CocoDetection> {
    let config_file = config_file.as_ref();
    let config = DatasetConfig::open(config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;
    let split = split.unwrap_or(config.split);
    info!("dataset root '{}'", config.dataset_root().display());

    let mut dataset = CocoDetection::from_config(&config);
    dataset
        .prepare(split)
        .with_context(|| format!("failed to prepare the {} split", split))?;
    Ok(dataset)
}

fn info(config_file: impl AsRef<Path>, split: Option<Split>) -> Result<()> {
    let dataset = load(config_file, split)?;
    let store = dataset.store()?;

    // print dataset summary
    {
        let mut table = Table::new();
        table.add_row(row!["split", dataset.split()]);
        table.add_row(row!["root", dataset.storage().root().display()]);
        table.add_row(row!["images", store.num_images()]);
        table.add_row(row!["annotations", store.num_annotations()]);
        table.add_row(row!["entries", dataset.size()?]);
        table.add_row(row!["classes", dataset.num_classes()?]);
        table.printstd();
    }

    // print per-class label counts
    {
        let counts = dataset
            .entries()?
            .flat_map(|entry| &entry.labels)
            .map(|label| label.class)
            .counts();

        let mut table = Table::new();
        table.add_row(row!["index", "category id", "name", "labels"]);

        dataset
            .categories()?
            .iter()
            .enumerate()
            .for_each(|(index, category)| {
                table.add_row(row![
                    index,
                    category.id,
                    category.name.as_deref().unwrap_or(""),
                    counts.get(&index).copied().unwrap_or(0),
                ]);
            });

        table.printstd();
    }

    Ok(())
}

fn show(config_file: impl AsRef<Path>, index: usize, split: Option<Split>) -> Result<()> {
    let dataset = load(config_file, split)?;
    let translator = dataset.default_translator();
    let record = dataset
        .record(index, &translator)
        .with_context(|| format!("failed to read entry {}", index))?;

    println!(
        "{} ({} channels)",
        record.input.path.display(),
        record.input.channels()
    );

    let mut table = Table::new();
    table.add_row(row!["x", "y", "width", "height", "class"]);
    record.label.rows().for_each(|values| {
        table.add_row(row![values[0], values[1], values[2], values[3], values[4]]);
    });
    table.printstd();

    Ok(())
}
