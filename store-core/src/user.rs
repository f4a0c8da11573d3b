//! The user domain: the current user's profile and their own listings.

use store_types::{Listing, ListingPageBody, Pagination, User};

use crate::remote::{OpStatus, Remote};

/// State of the user domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    /// The current user's profile, absent until fetched.
    pub profile: Option<User>,
    /// The current user's own listings.
    pub listings: Vec<Listing>,
    /// The pagination window for the user's listings.
    pub pagination: Pagination,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the user domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    /// The profile was requested.
    FetchProfile(Remote<User>),
    /// A profile update was submitted.
    UpdateProfile(Remote<User>),
    /// The user's own listings were requested.
    FetchListings(Remote<ListingPageBody>),
    /// Install a profile obtained out-of-band (e.g. from the login
    /// response handled by the authentication domain).
    SetProfile(User),
    /// Drop the profile projection.
    ClearProfile,
    /// Navigate the user's listings to a page.
    SetPage(u32),
    /// Clear a surfaced error.
    ClearError,
}

impl UserState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: UserEvent) {
        let Self {
            profile,
            listings,
            pagination,
            status,
        } = self;

        match event {
            UserEvent::FetchProfile(remote) | UserEvent::UpdateProfile(remote) => {
                remote.settle(status, |user| {
                    *profile = Some(user);
                })
            }
            UserEvent::FetchListings(remote) => remote.settle(status, |page| {
                *listings = page.listings;
                pagination.absorb(page.meta);
            }),
            UserEvent::SetProfile(user) => *profile = Some(user),
            UserEvent::ClearProfile => *profile = None,
            UserEvent::SetPage(page) => pagination.page = page,
            UserEvent::ClearError => status.clear_error(),
        }
    }
}
