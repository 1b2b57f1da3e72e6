//! Dataset processing toolkit.

mod bbox;
mod category;
mod coco_;
mod dataset_;
mod document;
mod extractor;
mod id;
mod record;
mod split;
mod store;

pub use bbox::*;
pub use category::*;
pub use coco_::*;
pub use dataset_::*;
pub use document::*;
pub use extractor::*;
pub use id::*;
pub use record::*;
pub use split::*;
pub use store::*;
