//! Category tree retrieval and lookup.
//!
//! The category endpoint returns a nested tree of arbitrary depth whose node
//! shapes are not uniform: category objects with an optional `children`
//! field, bare arrays of subtrees, and the occasional scalar. The tree is
//! modeled as an untagged enum so shape dispatch lives in the type rather
//! than at every call site.

use serde::Deserialize;
use serde_json::Value;

use crate::client::MagnitClient;
use crate::error::ScraperError;

/// Display name of the category this tool exports.
pub const COFFEE_CATEGORY: &str = "Кофе";

/// Response from the category-tree endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoryTreeResponse {
    /// Root of the tree. Absent `items` reads as an empty forest.
    #[serde(default = "empty_forest")]
    pub items: CategoryTree,
}

fn empty_forest() -> CategoryTree {
    CategoryTree::Forest(Vec::new())
}

/// One subtree of the category tree.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryTree {
    /// A category object. Leaves simply have no `children`.
    Node(CategoryNode),
    /// A nested list of subtrees.
    Forest(Vec<CategoryTree>),
    /// Any other shape (null, string, number); carried but never matched.
    Other(Value),
}

/// A category object. Every field is optional so malformed nodes degrade to
/// unmatched nodes instead of failing the whole response.
#[derive(Debug, Deserialize)]
pub struct CategoryNode {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// `null` and absent both read as "no children".
    #[serde(default)]
    pub children: Option<Vec<CategoryTree>>,
}

impl CategoryTree {
    /// Depth-first search for the first node whose display name equals
    /// `name`, returning its id.
    ///
    /// A node whose name matches but which carries no id is skipped and the
    /// walk continues.
    #[must_use]
    pub fn find_category_id(&self, name: &str) -> Option<i64> {
        match self {
            CategoryTree::Node(node) => {
                if node.name.as_deref() == Some(name) {
                    if let Some(id) = node.id {
                        return Some(id);
                    }
                }
                node.children
                    .iter()
                    .flatten()
                    .find_map(|child| child.find_category_id(name))
            }
            CategoryTree::Forest(subtrees) => subtrees
                .iter()
                .find_map(|subtree| subtree.find_category_id(name)),
            CategoryTree::Other(_) => None,
        }
    }
}

/// Fetches the category tree and returns the id of the category named
/// `name`.
///
/// # Errors
///
/// - [`ScraperError::CategoryNotFound`] — no node anywhere in the tree has
///   that name (including the empty-tree case).
/// - Transport and decode errors from [`MagnitClient::category_tree`].
pub async fn locate_category(client: &MagnitClient, name: &str) -> Result<i64, ScraperError> {
    let tree = client.category_tree().await?;
    tree.items
        .find_category_id(name)
        .ok_or_else(|| ScraperError::CategoryNotFound {
            name: name.to_string(),
        })
}
