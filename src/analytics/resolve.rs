//! Category resolution
//!
//! Expenses reference categories either by id or with an embedded category
//! object. Both forms must land in the same bucket, so every report that
//! groups by category goes through [`CategoryIndex`].

use std::collections::HashMap;

use crate::models::{Category, CategoryId, CategoryRef};

/// Bucket name for expenses whose category cannot be resolved
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Identity of a category bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Category(CategoryId),
    Uncategorized,
}

/// Outcome of resolving an expense's category reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// A category present in the snapshot's category list
    Known(&'a Category),
    /// An embedded category object that the category list does not contain
    Embedded {
        id: &'a CategoryId,
        name: &'a str,
        color: Option<&'a str>,
    },
    Uncategorized,
}

impl<'a> Resolved<'a> {
    pub fn key(&self) -> BucketKey {
        match self {
            Self::Known(category) => BucketKey::Category(category.id.clone()),
            Self::Embedded { id, .. } => BucketKey::Category((*id).clone()),
            Self::Uncategorized => BucketKey::Uncategorized,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Known(category) => &category.name,
            Self::Embedded { name, .. } => name,
            Self::Uncategorized => UNCATEGORIZED,
        }
    }

    pub fn color(&self) -> Option<&'a str> {
        match *self {
            Self::Known(category) => category.color.as_deref(),
            Self::Embedded { color, .. } => color,
            Self::Uncategorized => None,
        }
    }

    pub fn category_id(&self) -> Option<&'a CategoryId> {
        match *self {
            Self::Known(category) => Some(&category.id),
            Self::Embedded { id, .. } => Some(id),
            Self::Uncategorized => None,
        }
    }
}

/// Lookup table from category id to category
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<&'a CategoryId, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            // First definition wins when the list repeats an id
            by_id.entry(&category.id).or_insert(category);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &CategoryId) -> Option<&'a Category> {
        self.by_id.get(id).copied()
    }

    /// Resolve a reference to a bucket
    ///
    /// A known id always wins over embedded data, so a bare id and an
    /// embedded object with the same id resolve identically.
    pub fn resolve(&self, reference: Option<&'a CategoryRef>) -> Resolved<'a> {
        let Some(reference) = reference else {
            return Resolved::Uncategorized;
        };

        if let Some(category) = reference.id().and_then(|id| self.get(id)) {
            return Resolved::Known(category);
        }

        match reference {
            CategoryRef::Embedded(embedded) => match (&embedded.id, &embedded.name) {
                (Some(id), Some(name)) if !name.trim().is_empty() => Resolved::Embedded {
                    id,
                    name,
                    color: embedded.color.as_deref(),
                },
                _ => Resolved::Uncategorized,
            },
            CategoryRef::Id(id) => {
                log::debug!("Category {} not found, treating as uncategorized", id);
                Resolved::Uncategorized
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmbeddedCategory;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Food").with_id("c1").with_color("#00C49F"),
            Category::new("Rent").with_id("c2"),
        ]
    }

    #[test]
    fn test_id_and_embedded_resolve_to_same_bucket() {
        let categories = categories();
        let index = CategoryIndex::new(&categories);

        let by_id = CategoryRef::Id("c1".into());
        let embedded = CategoryRef::Embedded(EmbeddedCategory {
            id: Some("c1".into()),
            name: Some("Stale name".into()),
            color: None,
        });

        let a = index.resolve(Some(&by_id));
        let b = index.resolve(Some(&embedded));
        assert_eq!(a.key(), b.key());
        assert_eq!(b.name(), "Food");
        assert_eq!(b.color(), Some("#00C49F"));
    }

    #[test]
    fn test_unknown_id_is_uncategorized() {
        let categories = categories();
        let index = CategoryIndex::new(&categories);

        let unknown = CategoryRef::Id("missing".into());
        let resolved = index.resolve(Some(&unknown));
        assert_eq!(resolved, Resolved::Uncategorized);
        assert_eq!(resolved.name(), UNCATEGORIZED);
        assert_eq!(index.resolve(None).key(), BucketKey::Uncategorized);
    }

    #[test]
    fn test_unknown_embedded_category_keeps_its_name() {
        let categories = categories();
        let index = CategoryIndex::new(&categories);

        let embedded = CategoryRef::Embedded(EmbeddedCategory {
            id: Some("c9".into()),
            name: Some("Travel".into()),
            color: Some("#FFBB28".into()),
        });
        let resolved = index.resolve(Some(&embedded));
        assert_eq!(resolved.name(), "Travel");
        assert_eq!(resolved.key(), BucketKey::Category("c9".into()));
    }

    #[test]
    fn test_embedded_without_id_is_uncategorized() {
        let categories = categories();
        let index = CategoryIndex::new(&categories);

        let embedded = CategoryRef::Embedded(EmbeddedCategory {
            id: None,
            name: Some("Travel".into()),
            color: None,
        });
        assert_eq!(index.resolve(Some(&embedded)), Resolved::Uncategorized);
    }
}
