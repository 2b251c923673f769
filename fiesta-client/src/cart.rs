//! Cart engine
//!
//! [`CartStore`] holds the ordered line items and the cart panel flag. All
//! mutations are synchronous; the session variant hands each resulting list
//! to the sync worker without waiting for the remote.

use crate::remote::CartRemote;
use crate::session::SessionStore;
use crate::sync::SyncHandle;
use rust_decimal::Decimal;
use shared::money::{self, CartTotals};
use shared::{CartItem, FulfillmentMethod};
use std::sync::Arc;
use tokio::sync::watch;

struct SyncTarget {
    session: SessionStore,
    remote: Arc<dyn CartRemote>,
    handle: Option<SyncHandle>,
}

/// Client-side cart state
pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    /// Shared so observers can see the flag while `init` holds `&mut self`
    loading: watch::Sender<bool>,
    user_id: Option<String>,
    sync: Option<SyncTarget>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Local-only cart with no session and no remote
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            loading: watch::channel(false).0,
            user_id: None,
            sync: None,
        }
    }

    /// Cart mirrored to `remote` under the session id kept in `session`
    ///
    /// Nothing is synced until [`init`](Self::init) has run.
    pub fn with_sync(session: SessionStore, remote: Arc<dyn CartRemote>) -> Self {
        Self {
            sync: Some(SyncTarget {
                session,
                remote,
                handle: None,
            }),
            ..Self::new()
        }
    }

    /// Resolve the session id, start the sync worker and load the remote cart
    ///
    /// Failures are logged; the local list is kept when the fetch fails.
    pub async fn init(&mut self) {
        let Some(target) = self.sync.as_mut() else {
            tracing::debug!("Local-only cart, nothing to initialize");
            return;
        };

        let user_id = match &self.user_id {
            Some(id) => id.clone(),
            None => match target.session.load_or_create() {
                Ok((id, _)) => id,
                Err(e) => {
                    let id = shared::util::new_id();
                    tracing::warn!(
                        path = %target.session.path().display(),
                        error = %e,
                        user_id = %id,
                        "Failed to persist session, using an unsaved id"
                    );
                    id
                }
            },
        };
        self.user_id = Some(user_id.clone());

        if target.handle.is_none() {
            target.handle = Some(SyncHandle::spawn(user_id.clone(), target.remote.clone()));
        }

        self.loading.send_replace(true);
        match target.remote.fetch_cart(&user_id).await {
            Ok(items) => {
                let fetched = items.len();
                let items: Vec<CartItem> = items.into_iter().filter(money::is_priceable).collect();
                if items.len() < fetched {
                    tracing::warn!(
                        user_id = %user_id,
                        dropped = fetched - items.len(),
                        "Dropped remote cart items with a zero quantity or an unusable price"
                    );
                }
                tracing::info!(user_id = %user_id, items = items.len(), "Loaded remote cart");
                self.items = items;
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to fetch initial cart");
            }
        }
        self.loading.send_replace(false);
    }

    /// Append `item` and open the cart panel
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
        self.is_open = true;
        self.schedule_sync();
    }

    /// Remove the item with `id`; unknown ids leave the list unchanged
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
        self.schedule_sync();
    }

    /// Set the quantity of `id`, clamping negatives to 0
    ///
    /// An item whose quantity ends at 0 is removed.
    pub fn update_item_quantity(&mut self, id: &str, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
        self.items.retain(|i| i.quantity > 0);
        self.schedule_sync();
    }

    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Empty the cart and sync the empty list
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.schedule_sync();
    }

    fn schedule_sync(&self) {
        if let Some(handle) = self.sync.as_ref().and_then(|t| t.handle.as_ref()) {
            handle.publish(self.items.clone());
        }
    }

    /// Stop the sync worker after the latest cart has been pushed
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.sync.as_mut().and_then(|t| t.handle.take()) {
            handle.shutdown().await;
        }
    }

    // ========== Reads ==========

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Receiver that follows the loading flag
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Sum of quantities
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> Decimal {
        money::subtotal(&self.items)
    }

    pub fn tax(&self) -> Decimal {
        money::tax(self.subtotal())
    }

    pub fn delivery_fee(&self, fulfillment: FulfillmentMethod) -> Decimal {
        money::delivery_fee(fulfillment)
    }

    pub fn total(&self, fulfillment: FulfillmentMethod) -> Decimal {
        self.totals(fulfillment).total
    }

    pub fn totals(&self, fulfillment: FulfillmentMethod) -> CartTotals {
        money::cart_totals(&self.items, fulfillment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::mock::MockRemote;
    use shared::catalog;
    use shared::models::{ModifierSelections, ModifierValue};
    use std::str::FromStr;
    use crate::ClientError;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(product_id: &str, quantity: u32) -> CartItem {
        CartItem::with_defaults(catalog::product(product_id).unwrap(), quantity).unwrap()
    }

    fn synced(remote: Arc<MockRemote>) -> (CartStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CartStore::with_sync(SessionStore::new(dir.path()), remote);
        (store, dir)
    }

    #[test]
    fn test_add_item_opens_cart() {
        let mut cart = CartStore::new();
        assert!(!cart.is_open());
        cart.add_item(item("t1", 1));
        cart.add_item(item("t1", 1));
        assert!(cart.is_open());
        // No de-duplication
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        let a = item("t1", 1);
        let a_id = a.id.clone();
        cart.add_item(a);
        cart.add_item(item("b1", 1));

        cart.remove_item("missing");
        assert_eq!(cart.items().len(), 2);

        cart.remove_item(&a_id);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, "b1");
    }

    #[test]
    fn test_update_quantity_clamps_and_removes() {
        let mut cart = CartStore::new();
        let a = item("t1", 1);
        let id = a.id.clone();
        cart.add_item(a);

        cart.update_item_quantity(&id, 5);
        assert_eq!(cart.item(&id).unwrap().quantity, 5);

        cart.update_item_quantity(&id, -3);
        assert!(cart.item(&id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_keeps_items() {
        let mut cart = CartStore::new();
        cart.add_item(item("t1", 2));
        cart.update_item_quantity("missing", 0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_toggle_and_set_open() {
        let mut cart = CartStore::new();
        cart.toggle_cart();
        assert!(cart.is_open());
        cart.toggle_cart();
        assert!(!cart.is_open());
        cart.set_open(true);
        cart.set_open(true);
        assert!(cart.is_open());
    }

    #[test]
    fn test_totals_from_catalog_items() {
        // 2.39 × 2 + (1.79 + 0.60) × 1 = 7.17
        let mut cart = CartStore::new();
        cart.add_item(item("t1", 2));
        let mut cheese = ModifierSelections::new();
        cheese.insert("extra-cheese".into(), ModifierValue::Toggle(true));
        cart.add_item(CartItem::new(catalog::product("t2").unwrap(), 1, cheese).unwrap());

        assert_eq!(cart.subtotal(), dec("7.17"));
        assert_eq!(cart.tax(), dec("0.5736"));
        assert_eq!(cart.total(FulfillmentMethod::Pickup), dec("7.7436"));
        assert_eq!(cart.total(FulfillmentMethod::Delivery), dec("12.7336"));
        assert_eq!(cart.delivery_fee(FulfillmentMethod::Pickup), Decimal::ZERO);
    }

    #[test]
    fn test_clear_cart_keeps_panel_state() {
        let mut cart = CartStore::new();
        cart.add_item(item("t1", 1));
        cart.clear_cart();
        assert!(cart.is_empty());
        assert!(cart.is_open());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_local_only_init_is_noop() {
        let mut cart = CartStore::new();
        cart.init().await;
        assert!(cart.user_id().is_none());
        assert!(!cart.is_loading());
    }

    #[tokio::test]
    async fn test_init_loads_remote_cart_and_reuses_session() {
        let remote = Arc::new(MockRemote::default());
        let dir = TempDir::new().unwrap();
        let session = SessionStore::new(dir.path());
        let (user_id, _) = session.load_or_create().unwrap();

        let mut zero = item("b1", 1);
        zero.quantity = 0;
        remote
            .carts
            .lock()
            .insert(user_id.clone(), vec![item("t1", 2), zero]);

        let mut cart = CartStore::with_sync(session, remote.clone());
        cart.init().await;

        assert_eq!(cart.user_id(), Some(user_id.as_str()));
        assert!(!cart.is_loading());
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, "t1");
        cart.shutdown().await;
        // Loading does not push
        assert_eq!(remote.push_count(), 0);
    }

    #[tokio::test]
    async fn test_init_failure_keeps_local_items() {
        let remote = Arc::new(MockRemote::failing());
        let (mut cart, _dir) = synced(remote.clone());
        cart.add_item(item("t1", 1));

        cart.init().await;
        assert!(cart.user_id().is_some());
        assert_eq!(cart.items().len(), 1);
        assert!(!cart.is_loading());

        remote.malformed.store(true, Ordering::SeqCst);
        remote.fail.store(false, Ordering::SeqCst);
        cart.init().await;
        assert_eq!(cart.items().len(), 1);
        cart.shutdown().await;
    }

    #[tokio::test]
    async fn test_mutations_before_init_are_not_synced() {
        let remote = Arc::new(MockRemote::default());
        let (mut cart, _dir) = synced(remote.clone());
        cart.add_item(item("t1", 1));
        cart.shutdown().await;
        assert_eq!(remote.push_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_holds_latest_list_after_shutdown() {
        let remote = Arc::new(MockRemote::default());
        let (mut cart, _dir) = synced(remote.clone());
        cart.init().await;
        let user_id = cart.user_id().unwrap().to_string();

        let a = item("t1", 1);
        let a_id = a.id.clone();
        cart.add_item(a);
        cart.add_item(item("s1", 1));
        cart.update_item_quantity(&a_id, 4);
        cart.remove_item("missing");
        cart.shutdown().await;

        let stored = remote.carts.lock().get(&user_id).cloned().unwrap();
        assert_eq!(stored, cart.items());
        assert_eq!(stored[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_sync_failure_does_not_revert() {
        let remote = Arc::new(MockRemote::default());
        let (mut cart, _dir) = synced(remote.clone());
        cart.init().await;
        remote.fail.store(true, Ordering::SeqCst);

        cart.add_item(item("t1", 1));
        cart.clear_cart();
        cart.add_item(item("d1", 3));
        cart.shutdown().await;

        assert_eq!(cart.item_count(), 3);
        assert!(remote.push_count() >= 1);
    }

    #[tokio::test]
    async fn test_clear_cart_syncs_empty_list() {
        let remote = Arc::new(MockRemote::default());
        let (mut cart, _dir) = synced(remote.clone());
        cart.init().await;
        cart.add_item(item("t1", 1));
        cart.clear_cart();
        cart.shutdown().await;

        assert_eq!(remote.last_push().unwrap(), Vec::<CartItem>::new());
    }

    #[test]
    fn test_zero_quantity_matches_remove() {
        let a = item("t1", 1);
        let b = item("b1", 2);
        let c = item("q1", 1);
        let target = b.id.clone();

        let mut updated = CartStore::new();
        let mut removed = CartStore::new();
        for i in [&a, &b, &c] {
            updated.add_item(i.clone());
            removed.add_item(i.clone());
        }

        updated.update_item_quantity(&target, 0);
        removed.remove_item(&target);
        assert_eq!(updated.items(), removed.items());
        assert_eq!(
            updated.items().iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec![a.id.as_str(), c.id.as_str()]
        );
    }

    #[tokio::test]
    async fn test_init_twice_creates_one_session() {
        let remote = Arc::new(MockRemote::default());
        let (mut cart, dir) = synced(remote);

        cart.init().await;
        let first = cart.user_id().unwrap().to_string();
        cart.init().await;
        assert_eq!(cart.user_id(), Some(first.as_str()));

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        let saved = SessionStore::new(dir.path()).load().unwrap();
        assert_eq!(saved.user_id, first);
        cart.shutdown().await;
    }

    #[tokio::test]
    async fn test_fresh_store_reuses_saved_session() {
        let remote = Arc::new(MockRemote::default());
        let dir = TempDir::new().unwrap();

        let mut first = CartStore::with_sync(SessionStore::new(dir.path()), remote.clone());
        first.init().await;
        first.shutdown().await;

        let mut second = CartStore::with_sync(SessionStore::new(dir.path()), remote);
        second.init().await;
        assert_eq!(first.user_id(), second.user_id());
        second.shutdown().await;
    }

    #[tokio::test]
    async fn test_loading_visible_during_fetch() {
        let remote = Arc::new(MockRemote {
            fetch_delay: Some(Duration::from_millis(50)),
            ..Default::default()
        });
        let (mut cart, _dir) = synced(remote);
        let mut rx = cart.loading();
        assert!(!*rx.borrow());

        let observer = async move { rx.wait_for(|loading| *loading).await.is_ok() };
        let ((), saw_loading) = tokio::join!(cart.init(), observer);

        assert!(saw_loading);
        assert!(!cart.is_loading());
        cart.shutdown().await;
    }

    #[tokio::test]
    async fn test_init_drops_unpriceable_remote_items() {
        let remote = Arc::new(MockRemote::default());
        let dir = TempDir::new().unwrap();
        let session = SessionStore::new(dir.path());
        let (user_id, _) = session.load_or_create().unwrap();

        let mut huge = item("t1", 2);
        huge.total_price = dec("50000000000000000000000000000");
        let mut negative = item("b1", 1);
        negative.total_price = dec("-2.00");
        remote
            .carts
            .lock()
            .insert(user_id, vec![huge, item("t2", 1), negative]);

        let mut cart = CartStore::with_sync(session, remote);
        cart.init().await;

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, "t2");
        assert_eq!(cart.subtotal(), dec("1.79"));
        cart.shutdown().await;
    }

    #[tokio::test]
    async fn test_init_with_unwritable_session_still_assigns_id() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();
        let session = SessionStore::new(&blocker);
        assert!(matches!(session.load_or_create(), Err(ClientError::Io(_))));

        let mut cart = CartStore::with_sync(session, Arc::new(MockRemote::default()));
        cart.init().await;
        assert!(cart.user_id().is_some());
        assert!(!cart.is_loading());
        cart.shutdown().await;
    }
}
