use super::*;
use crate::common::*;

/// Maps sparse raw category ids to dense class indices.
///
/// Dense indices are assigned in ascending order of raw id, so documents
/// declaring the same categories in a different order share the indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    categories: IndexMap<CategoryId, Category>,
}

impl CategoryMap {
    pub fn new<I>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = Category>,
    {
        let mut map = IndexMap::new();

        categories
            .into_iter()
            .sorted_by_key(|category| category.id)
            .try_for_each(|category| {
                let id = category.id;
                match map.insert(id, category) {
                    Some(_) => Err(Error::Parse(format!("duplicated category id {}", id))),
                    None => Ok(()),
                }
            })?;

        Ok(Self { categories: map })
    }

    /// Get the dense class index of a raw category id.
    pub fn dense_index(&self, id: CategoryId) -> Result<usize> {
        self.categories
            .get_index_of(&id)
            .ok_or_else(|| id.not_found())
    }

    /// Get the category assigned to a dense class index.
    pub fn category(&self, index: usize) -> Option<&Category> {
        let (_id, category) = self.categories.get_index(index)?;
        Some(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over categories in dense index order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u64, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: Some(name.to_owned()),
            supercategory: None,
        }
    }

    #[test]
    fn dense_indices_follow_raw_id_order() {
        let map = CategoryMap::new(vec![
            category(18, "dog"),
            category(1, "person"),
            category(3, "car"),
        ])
        .unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.dense_index(CategoryId(1)).unwrap(), 0);
        assert_eq!(map.dense_index(CategoryId(3)).unwrap(), 1);
        assert_eq!(map.dense_index(CategoryId(18)).unwrap(), 2);
        assert_eq!(map.category(2).unwrap().name.as_deref(), Some("dog"));
        assert!(map.category(3).is_none());
    }

    #[test]
    fn declaration_order_does_not_matter() {
        let lhs = CategoryMap::new(vec![category(5, "a"), category(2, "b")]).unwrap();
        let rhs = CategoryMap::new(vec![category(2, "b"), category(5, "a")]).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let map = CategoryMap::new(vec![category(1, "person")]).unwrap();
        assert!(matches!(
            map.dense_index(CategoryId(7)),
            Err(Error::NotFound {
                kind: IdKind::Category,
                id: 7
            })
        ));
    }

    #[test]
    fn duplicated_category_is_rejected() {
        let result = CategoryMap::new(vec![category(1, "person"), category(1, "human")]);
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
