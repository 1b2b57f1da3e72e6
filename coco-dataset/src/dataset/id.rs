use crate::common::*;

macro_rules! id_wrapper {
    ($(#[$attr:meta])* $name:ident, $kind:expr) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const KIND: IdKind = $kind;

            pub(crate) fn not_found(self) -> Error {
                Error::NotFound {
                    kind: Self::KIND,
                    id: self.0,
                }
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

id_wrapper!(
    /// The id of an image declared in the annotation document.
    ImageId,
    IdKind::Image
);
id_wrapper!(
    /// The id of an object annotation.
    AnnotationId,
    IdKind::Annotation
);
id_wrapper!(
    /// The raw, sparse category id defined by the data source.
    CategoryId,
    IdKind::Category
);
