//! Preparation of the Microsoft COCO object detection dataset.
//!
//! The crate parses the instance annotation document of a split, remaps the
//! sparse category ids to dense class indices and materializes a randomly
//! accessible list of image references and label rows.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod storage;
pub mod translator;

pub use error::{Error, IdKind, Result};
