//! The categories domain: the flat category list, the nested tree, and
//! the single "current" category projection.

use store_types::{Category, CategoryNode};

use crate::remote::{OpStatus, Remote};

/// State of the categories domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    /// Flat list of categories.
    pub items: Vec<Category>,
    /// Nested category tree for navigation menus.
    pub tree: Vec<CategoryNode>,
    /// The category currently being browsed, if any.
    pub current: Option<Category>,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the categories domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesEvent {
    /// The flat category list was requested.
    FetchList(Remote<Vec<Category>>),
    /// The nested category tree was requested.
    FetchTree(Remote<Vec<CategoryNode>>),
    /// A category was requested by id.
    FetchOne(Remote<Category>),
    /// A category was requested by slug.
    FetchBySlug(Remote<Category>),
    /// Drop the current-category projection.
    ClearCurrent,
    /// Clear a surfaced error.
    ClearError,
}

impl CategoriesState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: CategoriesEvent) {
        let Self {
            items,
            tree,
            current,
            status,
        } = self;

        match event {
            CategoriesEvent::FetchList(remote) => remote.settle(status, |categories| {
                *items = categories;
            }),
            CategoriesEvent::FetchTree(remote) => remote.settle(status, |nodes| {
                *tree = nodes;
            }),
            CategoriesEvent::FetchOne(remote) | CategoriesEvent::FetchBySlug(remote) => {
                remote.settle(status, |category| {
                    *current = Some(category);
                })
            }
            CategoriesEvent::ClearCurrent => *current = None,
            CategoriesEvent::ClearError => status.clear_error(),
        }
    }
}
