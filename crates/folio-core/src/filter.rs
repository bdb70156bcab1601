//! Category filtering for the gallery grid.
//!
//! Everything here is pure: records in, records out.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{title_case, ProjectRecord};

/// Reserved slug meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Label of the "no filter" chip.
pub const ALL_LABEL: &str = "All";

/// The active filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// `"all"` (and the empty string) select everything; any other slug is
    /// taken verbatim.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "" | ALL_CATEGORIES => CategorySelection::All,
            other => CategorySelection::Category(other.to_string()),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Category(slug) => slug,
        }
    }

    /// Exact, case-sensitive match against the record's category.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(slug) => record.category() == Some(slug.as_str()),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn categories_of(records: &[ProjectRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(ProjectRecord::category)
        .filter(|cat| seen.insert(*cat))
        .map(str::to_string)
        .collect()
}

/// Records matching `selection`, in their original order.
pub fn apply_filter(records: &[ProjectRecord], selection: &CategorySelection) -> Vec<ProjectRecord> {
    records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}

/// Order in which tiles are placed: `xl` first, then `wide`, then the rest.
/// The sort is stable, so records keep their relative order within a weight.
pub fn layout_order(mut records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    records.sort_by_key(|r| std::cmp::Reverse(r.size.layout_weight()));
    records
}

/// One configured category and its chip label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub slug: String,
    pub label: String,
}

impl CategoryLabel {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }
}

/// A rendered filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub selection: CategorySelection,
    pub label: String,
}

/// Configured category labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    entries: Vec<CategoryLabel>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            CategoryLabel::new("branding", "Branding"),
            CategoryLabel::new("web", "Web/App"),
            CategoryLabel::new("social", "Social Media"),
            CategoryLabel::new("packaging", "Packaging"),
            CategoryLabel::new("editorial", "Editorial"),
            CategoryLabel::new("advertising", "Advertising"),
        ])
    }
}

impl CategoryCatalog {
    pub fn new(entries: Vec<CategoryLabel>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[CategoryLabel] {
        &self.entries
    }

    /// Label for `slug`: the configured one, or the title-cased slug.
    pub fn label_for(&self, slug: &str) -> String {
        if slug == ALL_CATEGORIES {
            return ALL_LABEL.to_string();
        }
        self.entries
            .iter()
            .find(|e| e.slug == slug)
            .map(|e| e.label.clone())
            .unwrap_or_else(|| title_case(slug))
    }

    /// Configured slugs followed by any slug found in `records` but not
    /// configured.
    pub fn known_categories(&self, records: &[ProjectRecord]) -> Vec<String> {
        let mut known: Vec<String> = self.entries.iter().map(|e| e.slug.clone()).collect();
        for cat in categories_of(records) {
            if !known.contains(&cat) {
                known.push(cat);
            }
        }
        known
    }

    pub fn is_known(&self, slug: &str, records: &[ProjectRecord]) -> bool {
        self.entries.iter().any(|e| e.slug == slug)
            || records.iter().any(|r| r.category() == Some(slug))
    }

    /// `All` first, then every known category.
    pub fn chips(&self, records: &[ProjectRecord]) -> Vec<CategoryChip> {
        std::iter::once(CategoryChip {
            selection: CategorySelection::All,
            label: ALL_LABEL.to_string(),
        })
        .chain(
            self.known_categories(records)
                .into_iter()
                .map(|slug| CategoryChip {
                    label: self.label_for(&slug),
                    selection: CategorySelection::Category(slug),
                }),
        )
        .collect()
    }

    /// Turn a requested slug into a selection, falling back to `All` for
    /// anything unknown.
    pub fn resolve(&self, slug: Option<&str>, records: &[ProjectRecord]) -> CategorySelection {
        match slug {
            Some(slug) if slug != ALL_CATEGORIES && self.is_known(slug, records) => {
                CategorySelection::Category(slug.to_string())
            }
            _ => CategorySelection::All,
        }
    }
}
