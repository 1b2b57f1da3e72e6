use crate::common::*;

/// A named partition of the dataset backed by its own annotation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Split {
    Train,
    Test,
    Validation,
}

impl Split {
    /// The annotation document of the split, relative to the dataset root.
    pub fn annotation_file(&self) -> Result<PathBuf> {
        let file_name = match self {
            Self::Train => "instances_train2017.json",
            Self::Test => "instances_val2017.json",
            Self::Validation => return Err(Error::UnsupportedSplit(*self)),
        };
        Ok(Path::new("annotations").join(file_name))
    }

    /// The image directory of the split, relative to the dataset root.
    pub fn image_dir(&self) -> Result<&'static Path> {
        let dir = match self {
            Self::Train => "train2017",
            Self::Test => "val2017",
            Self::Validation => return Err(Error::UnsupportedSplit(*self)),
        };
        Ok(Path::new(dir))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
            Self::Validation => "validation",
        }
    }
}

impl Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let split = match text.to_ascii_lowercase().as_str() {
            "train" => Self::Train,
            "test" => Self::Test,
            "validation" | "val" => Self::Validation,
            _ => return Err(Error::Config(format!("unknown split name '{}'", text))),
        };
        Ok(split)
    }
}

impl TryFrom<String> for Split {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Split> for String {
    fn from(split: Split) -> Self {
        split.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_documents() {
        assert_eq!(
            Split::Train.annotation_file().unwrap(),
            Path::new("annotations/instances_train2017.json")
        );
        assert_eq!(
            Split::Test.annotation_file().unwrap(),
            Path::new("annotations/instances_val2017.json")
        );
        assert_eq!(Split::Test.image_dir().unwrap(), Path::new("val2017"));
        assert!(matches!(
            Split::Validation.annotation_file(),
            Err(Error::UnsupportedSplit(Split::Validation))
        ));
        assert!(matches!(
            Split::Validation.image_dir(),
            Err(Error::UnsupportedSplit(Split::Validation))
        ));
    }

    #[test]
    fn parse_split_names() {
        assert_eq!("train".parse::<Split>().unwrap(), Split::Train);
        assert_eq!("TEST".parse::<Split>().unwrap(), Split::Test);
        assert_eq!("val".parse::<Split>().unwrap(), Split::Validation);
        assert_eq!("Validation".parse::<Split>().unwrap(), Split::Validation);
        assert!("minival".parse::<Split>().is_err());
    }

    #[test]
    fn split_serde() {
        let split: Split = serde_json::from_str(r#""Train""#).unwrap();
        assert_eq!(split, Split::Train);
        assert_eq!(serde_json::to_string(&Split::Test).unwrap(), r#""test""#);
        assert!(serde_json::from_str::<Split>(r#""holdout""#).is_err());
    }
}
