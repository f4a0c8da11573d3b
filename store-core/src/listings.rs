//! The listings domain: the public search results and the single
//! "current" listing projection.

use store_types::{
    FilterPatch, Listing, ListingFilters, ListingId, ListingPageBody, Pagination,
};

use crate::remote::{OpStatus, Remote};

/// State of the listings domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsState {
    /// The visible page of search results.
    pub items: Vec<Listing>,
    /// The single listing currently being viewed, if any.
    pub current: Option<Listing>,
    /// The active search filters.
    pub filters: ListingFilters,
    /// The pagination window for the search results.
    pub pagination: Pagination,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the listings domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingsEvent {
    /// A page of search results was requested.
    FetchList(Remote<ListingPageBody>),
    /// A single listing was requested by id.
    FetchOne(Remote<Listing>),
    /// A new listing was submitted.
    Create(Remote<Listing>),
    /// An existing listing was updated.
    Update(Remote<Listing>),
    /// A listing was deleted. The payload is the deleted id, confirmed by
    /// the server - removal is never optimistic.
    Delete(Remote<ListingId>),
    /// Merge a partial filter update. Resets the page to 1 in the same
    /// transition.
    SetFilters(FilterPatch),
    /// Restore the default filters. Also resets the page to 1.
    ResetFilters,
    /// Navigate to a page.
    SetPage(u32),
    /// Drop the current-listing projection.
    ClearCurrent,
    /// Clear a surfaced error.
    ClearError,
}

impl ListingsState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: ListingsEvent) {
        let Self {
            items,
            current,
            filters,
            pagination,
            status,
        } = self;

        match event {
            ListingsEvent::FetchList(remote) => remote.settle(status, |page| {
                *items = page.listings;
                pagination.absorb(page.meta);
            }),
            ListingsEvent::FetchOne(remote) => remote.settle(status, |listing| {
                *current = Some(listing);
            }),
            ListingsEvent::Create(remote) => remote.settle(status, |listing| {
                items.insert(0, listing);
            }),
            ListingsEvent::Update(remote) => remote.settle(status, |listing| {
                if let Some(existing) = items.iter_mut().find(|item| item.id == listing.id) {
                    *existing = listing.clone();
                }
                if current.as_ref().is_some_and(|c| c.id == listing.id) {
                    *current = Some(listing);
                }
            }),
            ListingsEvent::Delete(remote) => remote.settle(status, |id| {
                items.retain(|item| item.id != id);
                if current.as_ref().is_some_and(|c| c.id == id) {
                    *current = None;
                }
            }),
            ListingsEvent::SetFilters(patch) => {
                filters.apply(patch);
                pagination.page = 1;
            }
            ListingsEvent::ResetFilters => {
                *filters = ListingFilters::default();
                pagination.page = 1;
            }
            ListingsEvent::SetPage(page) => pagination.page = page,
            ListingsEvent::ClearCurrent => *current = None,
            ListingsEvent::ClearError => status.clear_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_types::{PageMeta, UserId};

    fn listing(id: i64) -> Listing {
        Listing {
            id: ListingId::new(id),
            user_id: UserId::new(1),
            title: format!("Listing {id}"),
            description: "description".into(),
            price: 100.0,
            category_id: None,
            location: None,
            images: vec![],
            created_at: "2026-01-10T09:00:00Z".into(),
            updated_at: None,
        }
    }

    fn page(listings: Vec<Listing>, page: u32) -> ListingPageBody {
        let total = listings.len() as u64;
        ListingPageBody {
            listings,
            meta: PageMeta {
                page,
                limit: 10,
                total,
                pages: 1,
            },
        }
    }

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let mut state = ListingsState::default();
        state.status.error = Some("stale failure".into());

        state.apply(ListingsEvent::FetchList(Remote::Pending));

        assert!(state.status.is_loading);
        assert_eq!(state.status.error, None);
    }

    #[test]
    fn fetch_list_replaces_items_and_pagination() {
        let mut state = ListingsState::default();
        state.items = vec![listing(99)];

        state.apply(ListingsEvent::FetchList(Remote::Pending));
        state.apply(ListingsEvent::FetchList(Remote::Fulfilled(page(
            vec![listing(1), listing(2)],
            2,
        ))));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, ListingId::new(1));
        assert_eq!(state.pagination.page, 2);
        assert!(!state.status.is_loading);
    }

    #[test]
    fn rejected_fetch_leaves_collections_untouched() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchList(Remote::Fulfilled(page(
            vec![listing(1)],
            1,
        ))));
        let before = state.clone();

        state.apply(ListingsEvent::FetchList(Remote::Pending));
        state.apply(ListingsEvent::FetchList(Remote::Rejected("offline".into())));

        assert_eq!(state.items, before.items);
        assert_eq!(state.pagination, before.pagination);
        assert_eq!(state.current, before.current);
        assert!(!state.status.is_loading);
        assert_eq!(state.status.error.as_deref(), Some("offline"));
    }

    #[test]
    fn create_prepends_the_new_listing() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1)];

        state.apply(ListingsEvent::Create(Remote::Fulfilled(listing(2))));

        assert_eq!(state.items[0].id, ListingId::new(2));
        assert_eq!(state.items[1].id, ListingId::new(1));
    }

    #[test]
    fn update_replaces_matching_item_and_current() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1), listing(2)];
        state.current = Some(listing(2));

        let mut updated = listing(2);
        updated.title = "Updated".into();
        state.apply(ListingsEvent::Update(Remote::Fulfilled(updated)));

        assert_eq!(state.items[1].title, "Updated");
        assert_eq!(state.current.as_ref().unwrap().title, "Updated");
        // The other item is untouched.
        assert_eq!(state.items[0].title, "Listing 1");
    }

    #[test]
    fn update_for_unlisted_id_changes_nothing() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1)];

        state.apply(ListingsEvent::Update(Remote::Fulfilled(listing(5))));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, ListingId::new(1));
    }

    #[test]
    fn delete_removes_item_and_clears_matching_current() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1), listing(2)];
        state.current = Some(listing(2));

        state.apply(ListingsEvent::Delete(Remote::Fulfilled(ListingId::new(2))));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.current, None);
    }

    #[test]
    fn delete_of_another_id_leaves_current_alone() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1), listing(2)];
        state.current = Some(listing(2));

        state.apply(ListingsEvent::Delete(Remote::Fulfilled(ListingId::new(1))));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.current.as_ref().unwrap().id, ListingId::new(2));
    }

    #[test]
    fn set_filters_resets_page_in_the_same_transition() {
        let mut state = ListingsState::default();
        state.pagination.page = 4;

        state.apply(ListingsEvent::SetFilters(FilterPatch {
            search: Some("bike".into()),
            ..FilterPatch::default()
        }));

        assert_eq!(state.filters.search, "bike");
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn reset_filters_restores_defaults_and_resets_page() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::SetFilters(FilterPatch {
            search: Some("bike".into()),
            min_price: Some(Some(10.0)),
            ..FilterPatch::default()
        }));
        state.apply(ListingsEvent::SetPage(3));

        state.apply(ListingsEvent::ResetFilters);

        assert_eq!(state.filters, ListingFilters::default());
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn set_page_moves_only_the_page() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchList(Remote::Fulfilled(page(
            vec![listing(1)],
            1,
        ))));

        state.apply(ListingsEvent::SetPage(3));

        assert_eq!(state.pagination.page, 3);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn clear_error_only_clears_the_error() {
        let mut state = ListingsState::default();
        state.items = vec![listing(1)];
        state.apply(ListingsEvent::Delete(Remote::Rejected("denied".into())));

        state.apply(ListingsEvent::ClearError);

        assert_eq!(state.status.error, None);
        assert_eq!(state.items.len(), 1);
    }
}
