pub use crate::error::{Error, IdKind, Result};
pub use getset::Getters;
pub use indexmap::IndexMap;
pub use itertools::Itertools as _;
pub use log::{debug, info, warn};
pub use noisy_float::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashMap,
    env,
    fmt::{self, Debug, Display},
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};
