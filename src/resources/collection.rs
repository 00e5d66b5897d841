//! Resource Collection Module
//!
//! Ordered in-memory record collections filtered by category discriminator
//! fields. Queries are pure: the source collection is never modified and
//! matches keep their original relative order.

use serde::{Deserialize, Serialize};

// == Categorized ==
/// A record carrying category discriminator fields.
pub trait Categorized {
    /// The record's category.
    fn category(&self) -> &str;

    /// The record's sub-category.
    fn sub_category(&self) -> &str;
}

/// Compares two discriminator values, trimming surrounding whitespace and
/// ignoring case.
fn fields_match(stored: &str, wanted: &str) -> bool {
    stored.trim().to_uppercase() == wanted.trim().to_uppercase()
}

// == Resource Collection ==
/// An ordered collection of categorized records.
///
/// Typically constructed from a deserialized payload; serializes as a
/// plain sequence of its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCollection<T> {
    items: Vec<T>,
}

impl<T> ResourceCollection<T> {
    // == Constructor ==
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T: Categorized + Clone> ResourceCollection<T> {
    // == Match By Category ==
    /// Returns the records whose category matches `category`.
    ///
    /// Comparison trims surrounding whitespace and ignores case. An empty
    /// result is a valid empty collection.
    pub fn match_by_category(&self, category: &str) -> Self {
        self.items
            .iter()
            .filter(|record| fields_match(record.category(), category))
            .cloned()
            .collect()
    }

    // == Match By Sub-Category ==
    /// Returns the records matching both `category` and `sub_category`,
    /// under the same comparison rules.
    pub fn match_by_sub_category(&self, category: &str, sub_category: &str) -> Self {
        self.items
            .iter()
            .filter(|record| {
                fields_match(record.category(), category)
                    && fields_match(record.sub_category(), sub_category)
            })
            .cloned()
            .collect()
    }
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ResourceCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ResourceCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        category: String,
        sub_category: String,
        value: i32,
    }

    impl Record {
        fn new(category: &str, sub_category: &str, value: i32) -> Self {
            Self {
                category: category.to_string(),
                sub_category: sub_category.to_string(),
                value,
            }
        }
    }

    impl Categorized for Record {
        fn category(&self) -> &str {
            &self.category
        }

        fn sub_category(&self) -> &str {
            &self.sub_category
        }
    }

    fn sample() -> ResourceCollection<Record> {
        vec![
            Record::new("Books", "Fiction", 1),
            Record::new(" books ", "History", 2),
            Record::new("BOOKS", " fiction ", 3),
            Record::new("Music", "Jazz", 4),
        ]
        .into()
    }

    #[test]
    fn test_match_by_category_trims_and_ignores_case() {
        let collection = sample();

        for query in ["Books", "BOOKS", " books "] {
            let matched = collection.match_by_category(query);
            assert_eq!(matched.len(), 3, "query '{}' should match 3 records", query);
        }
    }

    #[test]
    fn test_match_by_category_preserves_order() {
        let matched = sample().match_by_category("books");
        let values: Vec<i32> = matched.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_match_by_category_no_match_is_empty_not_error() {
        let matched = sample().match_by_category("X");
        assert!(matched.is_empty());
        assert_eq!(matched.len(), 0);
    }

    #[test]
    fn test_match_by_sub_category_conjunctive() {
        let matched = sample().match_by_sub_category("books", "FICTION");
        let values: Vec<i32> = matched.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_match_by_sub_category_empty_result() {
        let matched = sample().match_by_sub_category("Music", "Fiction");
        assert!(matched.is_empty());
    }

    #[test]
    fn test_source_collection_unmodified() {
        let collection = sample();
        let _ = collection.match_by_category("books");
        assert_eq!(collection.len(), 4);
    }

    proptest! {
        // Sub-category matching equals category matching followed by a
        // sub-category filter.
        #[test]
        fn prop_sub_category_is_intersection(
            records in prop::collection::vec(
                ("[a-c ]{1,6}", "[x-z ]{1,6}", any::<i32>())
                    .prop_map(|(c, s, v)| Record { category: c, sub_category: s, value: v }),
                0..20
            ),
            category in "[a-cA-C ]{1,6}",
            sub_category in "[x-zX-Z ]{1,6}"
        ) {
            let collection: ResourceCollection<Record> = records.into();

            let direct = collection.match_by_sub_category(&category, &sub_category);
            let staged = collection
                .match_by_category(&category)
                .match_by_sub_category(&category, &sub_category);

            prop_assert_eq!(direct, staged);
        }
    }
}
