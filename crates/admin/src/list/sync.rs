//! Keeps a list view's sort state, its rows and the address bar in step.
//!
//! Every change of the sort state issues exactly one fetch and rewrites the
//! address bar to the canonical `?sort=<field>,<direction>` query if it does
//! not show it already.

use store_admin_core::SortState;

use super::location::Location;
use super::store::{EntityStore, FetchRequest, FetchTicket};

/// What one synchronization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The fetch that was issued.
    pub request: FetchRequest,
    /// Ticket of that fetch.
    pub ticket: FetchTicket,
    /// Address navigated to, when the query had to change.
    pub navigated_to: Option<String>,
}

/// Fetch and navigation needed to bring `location` in line with `state`.
#[must_use]
pub fn plan_sync(state: &SortState, location: &impl Location) -> (FetchRequest, Option<String>) {
    let desired = state.to_query();
    let navigation = (location.current_query() != desired)
        .then(|| format!("{}{desired}", location.current_path()));
    (FetchRequest::sorted(state.to_param()), navigation)
}

/// Owner of one list view's sort state.
#[derive(Debug)]
pub struct ListController<S, L> {
    store: S,
    location: L,
    sort: SortState,
    synced: Option<SortState>,
    last_sync: Option<SyncOutcome>,
}

impl<S: EntityStore, L: Location> ListController<S, L> {
    /// Read the sort state from the address bar and synchronize once.
    pub fn mount(store: S, location: L, default_field: &str) -> (Self, SyncOutcome) {
        let sort = SortState::initialize(location.current_query(), default_field);
        Self::mount_with(store, location, sort)
    }

    /// Synchronize once with an already derived sort state.
    pub fn mount_with(store: S, location: L, sort: SortState) -> (Self, SyncOutcome) {
        let mut controller = Self {
            store,
            location,
            sort,
            synced: None,
            last_sync: None,
        };
        let outcome = controller.synchronize();
        (controller, outcome)
    }

    /// Resume a view whose address bar already reflects a synchronized state.
    ///
    /// Nothing is fetched; the next change or refresh synchronizes.
    pub fn restore(store: S, location: L, default_field: &str) -> Self {
        let sort = SortState::initialize(location.current_query(), default_field);
        Self::restore_with(store, location, sort)
    }

    /// Resume a view with an already derived sort state.
    ///
    /// If `sort` is not what the address bar shows, the next synchronization
    /// navigates to it.
    pub fn restore_with(store: S, location: L, sort: SortState) -> Self {
        Self {
            store,
            location,
            synced: Some(sort.clone()),
            sort,
            last_sync: None,
        }
    }

    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Outcome of the most recent synchronization.
    #[must_use]
    pub const fn last_sync(&self) -> Option<&SyncOutcome> {
        self.last_sync.as_ref()
    }

    /// Replace the sort state, synchronizing only if it changed.
    pub fn set_sort_state(&mut self, sort: SortState) -> Option<SyncOutcome> {
        self.sort = sort;
        if self.synced.as_ref() == Some(&self.sort) {
            return None;
        }
        Some(self.synchronize())
    }

    /// Apply a click on the header of `field`.
    pub fn sort_by(&mut self, field: &str) -> Option<SyncOutcome> {
        let next = self.sort.toggle(field);
        self.set_sort_state(next)
    }

    /// Fetch again with the current sort state.
    pub fn manual_refresh(&mut self) -> SyncOutcome {
        self.synchronize()
    }

    fn synchronize(&mut self) -> SyncOutcome {
        let (request, navigation) = plan_sync(&self.sort, &self.location);
        let ticket = self.store.fetch(request.clone());
        if let Some(target) = &navigation {
            self.location.navigate(target);
        }

        tracing::debug!(
            sort = %self.sort,
            generation = ticket.generation(),
            navigated_to = ?navigation,
            "Synchronized list view"
        );

        self.synced = Some(self.sort.clone());
        let outcome = SyncOutcome {
            request,
            ticket,
            navigated_to: navigation,
        };
        self.last_sync = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use store_admin_core::SortDirection;
    use tokio::sync::watch;

    use crate::list::location::AddressBar;
    use crate::list::store::ListSnapshot;
    use super::*;

    /// Store that only records what it was asked to fetch.
    #[derive(Default)]
    struct RecordingStore {
        requests: Mutex<Vec<FetchRequest>>,
    }

    impl RecordingStore {
        fn sorts(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.sort.clone())
                .collect()
        }
    }

    impl EntityStore for RecordingStore {
        type Entity = ();

        fn fetch(&self, request: FetchRequest) -> FetchTicket {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            FetchTicket::new(requests.len() as u64)
        }

        fn subscribe(&self) -> watch::Receiver<ListSnapshot<()>> {
            watch::channel(ListSnapshot::default()).1
        }
    }

    fn controller(query: &str) -> ListController<RecordingStore, AddressBar> {
        ListController::mount(
            RecordingStore::default(),
            AddressBar::new("/shopping-cart", query),
            "id",
        )
        .0
    }

    #[test]
    fn test_plan_sync_skips_navigation_when_canonical() {
        let state = SortState::ascending("id");
        let (request, navigation) = plan_sync(&state, &AddressBar::new("/x", "?sort=id,asc"));
        assert_eq!(request.sort, "id,asc");
        assert_eq!(navigation, None);

        let (_, navigation) = plan_sync(&state, &AddressBar::new("/x", "?sort=id,ASC"));
        assert_eq!(navigation.as_deref(), Some("/x?sort=id,asc"));
    }

    #[test]
    fn test_mount_without_query_fetches_and_navigates() {
        let c = controller("");
        assert_eq!(c.sort_state(), &SortState::ascending("id"));
        assert_eq!(c.store().sorts(), vec!["id,asc"]);
        assert_eq!(c.location().current_query(), "?sort=id,asc");
        assert_eq!(
            c.last_sync().and_then(|s| s.navigated_to.as_deref()),
            Some("/shopping-cart?sort=id,asc")
        );
    }

    #[test]
    fn test_mount_with_canonical_query_does_not_navigate() {
        let c = controller("?sort=status,desc");
        assert_eq!(
            c.sort_state(),
            &SortState::new("status", SortDirection::Descending)
        );
        assert_eq!(c.store().sorts(), vec!["status,desc"]);
        assert!(c.location().navigations().is_empty());
    }

    #[test]
    fn test_click_status_after_default_mount() {
        let mut c = controller("");
        let outcome = c.sort_by("status").unwrap();

        assert_eq!(
            c.sort_state(),
            &SortState::new("status", SortDirection::Descending)
        );
        assert_eq!(outcome.request.sort, "status,desc");
        assert_eq!(c.location().current_query(), "?sort=status,desc");
        assert_eq!(c.store().sorts(), vec!["id,asc", "status,desc"]);
    }

    #[test]
    fn test_every_change_fetches_once_and_canonicalizes() {
        let mut c = controller("?sort=id,asc");
        for field in ["id", "name", "name", "price"] {
            let before = c.store().sorts().len();
            c.sort_by(field).unwrap();
            assert_eq!(c.store().sorts().len(), before + 1);
            assert_eq!(c.location().current_query(), c.sort_state().to_query());
        }
    }

    #[test]
    fn test_unchanged_state_is_a_no_op() {
        let mut c = controller("?sort=id,asc");
        assert!(c.set_sort_state(SortState::ascending("id")).is_none());
        assert_eq!(c.store().sorts().len(), 1);
        assert!(c.location().navigations().is_empty());
    }

    #[test]
    fn test_manual_refresh_always_fetches() {
        let mut c = controller("?sort=id,asc");
        let outcome = c.manual_refresh();
        assert_eq!(outcome.request.sort, "id,asc");
        assert_eq!(outcome.navigated_to, None);
        assert_eq!(c.store().sorts().len(), 2);
    }

    #[test]
    fn test_restore_does_not_fetch() {
        let mut c = ListController::restore(
            RecordingStore::default(),
            AddressBar::new("/product", "?sort=name,asc"),
            "id",
        );
        assert!(c.store().sorts().is_empty());
        assert!(c.set_sort_state(SortState::ascending("name")).is_none());

        c.sort_by("name").unwrap();
        assert_eq!(c.store().sorts(), vec!["name,desc"]);
        assert_eq!(
            c.location().pushed_url(),
            Some("/product?sort=name,desc")
        );
    }

    #[test]
    fn test_restore_with_other_state_navigates_on_refresh() {
        let mut c = ListController::restore_with(
            RecordingStore::default(),
            AddressBar::new("/product-order", "?sort=cart,asc"),
            SortState::ascending("id"),
        );
        assert!(c.store().sorts().is_empty());

        let outcome = c.manual_refresh();
        assert_eq!(outcome.request.sort, "id,asc");
        assert_eq!(
            outcome.navigated_to.as_deref(),
            Some("/product-order?sort=id,asc")
        );
    }
}
