// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Links grouped by category for the home page

use crate::types::{Category, Link};
use std::collections::HashMap;

/// One heading of the directory and the links filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// `None` for links without a known category
    pub category: Option<Category>,
    pub links: Vec<Link>,
}

impl CategorySection {
    /// Heading to display for this section
    pub fn title(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

/// Group links under their categories.
///
/// Sections follow the category order and links keep their list order.
/// Every category gets a section, even an empty one. Links whose category
/// is missing or unknown go into a trailing uncategorized section, which is
/// only present when it has links.
pub fn group_by_category(categories: &[Category], links: &[Link]) -> Vec<CategorySection> {
    let mut sections: Vec<CategorySection> = categories
        .iter()
        .map(|c| CategorySection {
            category: Some(c.clone()),
            links: Vec::new(),
        })
        .collect();

    // First occurrence wins if the server ever sends a duplicate id
    let mut index = HashMap::with_capacity(categories.len());
    for (i, category) in categories.iter().enumerate() {
        index.entry(category.id).or_insert(i);
    }

    let mut uncategorized = Vec::new();
    for link in links {
        match link.category_id.and_then(|id| index.get(&id)) {
            Some(&i) => sections[i].links.push(link.clone()),
            None => uncategorized.push(link.clone()),
        }
    }

    if !uncategorized.is_empty() {
        sections.push(CategorySection {
            category: None,
            links: uncategorized,
        });
    }

    sections
}
