//! In-memory store backed by `DashMap`.
//!
//! Rating transaction: each product record owns its rating set, so holding
//! the record's exclusive map-entry guard covers the uniqueness check, the
//! rating write, and the statistics recompute as one critical section. Two
//! concurrent creates for the same product serialize on the guard; the
//! loser fails the uniqueness check and is told to retry, never merged.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{
    BillingAddress, Card, Notification, NotificationPreference, Order, PrincipalId, Product,
    Rating, Report, UserAccount,
};
use storefront_core::model::catalog::validate_value;
use storefront_core::rating::RatingAggregator;

/// A product plus the rating set the aggregate is derived from.
#[derive(Debug)]
struct ProductRecord {
    product: Product,
    ratings: Vec<Rating>,
}

#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<PrincipalId, UserAccount>,
    usernames: DashMap<String, PrincipalId>,
    emails: DashMap<String, PrincipalId>,

    products: DashMap<u64, ProductRecord>,
    /// rating id -> product id, for direct rating lookups.
    rating_index: DashMap<u64, u64>,

    addresses: DashMap<u64, BillingAddress>,
    orders: DashMap<u64, Order>,
    cards: DashMap<u64, Card>,
    reports: DashMap<u64, Report>,
    notifications: DashMap<u64, Notification>,
    preferences: DashMap<PrincipalId, NotificationPreference>,

    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // --------------------
    // Users
    // --------------------

    /// Insert a new account; username and email must both be unused.
    pub fn create_user(&self, user: UserAccount) -> Result<UserAccount> {
        use dashmap::mapref::entry::Entry;

        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => {
                return Err(StorefrontError::Conflict("username already taken"))
            }
            Entry::Vacant(e) => {
                e.insert(user.id);
            }
        }
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => {
                // Roll the username reservation back.
                self.usernames.remove(&user.username);
                return Err(StorefrontError::Conflict("email already registered"));
            }
            Entry::Vacant(e) => {
                e.insert(user.id);
            }
        }

        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: PrincipalId) -> Result<UserAccount> {
        self.users
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("user"))
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<UserAccount> {
        let id = *self.usernames.get(username)?;
        self.users.get(&id).map(|e| e.value().clone())
    }

    /// Replace an account, keeping the username/email indexes consistent.
    pub fn update_user(&self, updated: UserAccount) -> Result<UserAccount> {
        use dashmap::mapref::entry::Entry;

        let old = self.get_user(updated.id)?;

        if updated.username != old.username {
            match self.usernames.entry(updated.username.clone()) {
                Entry::Occupied(_) => {
                    return Err(StorefrontError::Conflict("username already taken"))
                }
                Entry::Vacant(e) => {
                    e.insert(updated.id);
                }
            }
            self.usernames.remove(&old.username);
        }
        if updated.email != old.email {
            match self.emails.entry(updated.email.clone()) {
                Entry::Occupied(_) => {
                    if updated.username != old.username {
                        self.usernames.remove(&updated.username);
                        self.usernames.insert(old.username.clone(), old.id);
                    }
                    return Err(StorefrontError::Conflict("email already registered"));
                }
                Entry::Vacant(e) => {
                    e.insert(updated.id);
                }
            }
            self.emails.remove(&old.email);
        }

        self.users.insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// Remove an account and everything it owns. Affected product
    /// aggregates are recomputed inside each product's critical section.
    pub fn delete_user(&self, id: PrincipalId) -> Result<()> {
        let user = self.get_user(id)?;

        self.users.remove(&id);
        self.usernames.remove(&user.username);
        self.emails.remove(&user.email);

        self.addresses.retain(|_, a| a.owner != id);
        self.cards.retain(|_, c| c.owner != id);
        self.orders.retain(|_, o| o.owner != id);
        self.reports.retain(|_, r| r.owner != id);
        self.notifications.retain(|_, n| n.owner != id);
        self.preferences.remove(&id);

        let mut removed_ratings = Vec::new();
        for mut rec in self.products.iter_mut() {
            let before = rec.ratings.len();
            removed_ratings.extend(rec.ratings.iter().filter(|r| r.owner == id).map(|r| r.id));
            rec.ratings.retain(|r| r.owner != id);
            if rec.ratings.len() != before {
                let rec = &mut *rec;
                RatingAggregator::recompute(&mut rec.product, &rec.ratings);
            }
        }
        for rid in removed_ratings {
            self.rating_index.remove(&rid);
        }

        Ok(())
    }

    pub fn list_users(&self) -> Vec<UserAccount> {
        let mut out: Vec<_> = self.users.iter().map(|e| e.value().clone()).collect();
        out.sort_by_key(|u| u.id);
        out
    }

    // --------------------
    // Products
    // --------------------

    pub fn create_product(&self, product: Product) -> Product {
        self.products.insert(
            product.id,
            ProductRecord {
                product: product.clone(),
                ratings: Vec::new(),
            },
        );
        product
    }

    pub fn get_product(&self, id: u64) -> Result<Product> {
        self.products
            .get(&id)
            .map(|e| e.product.clone())
            .ok_or(StorefrontError::NotFound("product"))
    }

    pub fn list_products(&self) -> Vec<Product> {
        let mut out: Vec<_> = self.products.iter().map(|e| e.product.clone()).collect();
        out.sort_by_key(|p| p.id);
        out
    }

    /// Update catalog fields. Rating statistics are owned by the
    /// aggregator and deliberately untouched here.
    pub fn update_product_info(
        &self,
        id: u64,
        name: Option<String>,
        description: Option<String>,
        price: Option<rust_decimal::Decimal>,
        in_stock: Option<bool>,
    ) -> Result<Product> {
        let mut rec = self
            .products
            .get_mut(&id)
            .ok_or(StorefrontError::NotFound("product"))?;
        if let Some(v) = name {
            rec.product.name = v;
        }
        if let Some(v) = description {
            rec.product.description = v;
        }
        if let Some(v) = price {
            rec.product.price = v;
        }
        if let Some(v) = in_stock {
            rec.product.in_stock = v;
        }
        Ok(rec.product.clone())
    }

    pub fn delete_product(&self, id: u64) -> Result<()> {
        let (_, rec) = self
            .products
            .remove(&id)
            .ok_or(StorefrontError::NotFound("product"))?;
        for r in &rec.ratings {
            self.rating_index.remove(&r.id);
        }
        Ok(())
    }

    // --------------------
    // Ratings
    // --------------------

    /// Create a rating and recompute the product aggregate, atomically.
    ///
    /// The entry guard is the transaction: the duplicate check, the rating
    /// insert, and the recompute happen with no interleaving writer, and no
    /// reader of the record can observe one write without the other.
    pub fn create_rating(
        &self,
        owner: PrincipalId,
        product_id: u64,
        value: u8,
        comment: Option<String>,
    ) -> Result<Rating> {
        let id = self.next_id();

        let rating = {
            let mut rec = self
                .products
                .get_mut(&product_id)
                .ok_or(StorefrontError::NotFound("product"))?;

            if rec.ratings.iter().any(|r| r.owner == owner) {
                return Err(StorefrontError::Conflict(
                    "product already rated by this user",
                ));
            }

            let rating = Rating::new(id, owner, product_id, value, comment)?;
            rec.ratings.push(rating.clone());

            let rec = &mut *rec;
            RatingAggregator::on_rating_created(&mut rec.product, &rec.ratings);
            rating
        };

        self.rating_index.insert(id, product_id);
        Ok(rating)
    }

    /// Update an existing rating's value/comment and recompute the average.
    /// The count is unchanged.
    pub fn update_rating(
        &self,
        rating_id: u64,
        value: Option<u8>,
        comment: Option<Option<String>>,
    ) -> Result<Rating> {
        if let Some(v) = value {
            validate_value(v)?;
        }

        let product_id = *self
            .rating_index
            .get(&rating_id)
            .ok_or(StorefrontError::NotFound("rating"))?;
        let mut rec = self
            .products
            .get_mut(&product_id)
            .ok_or(StorefrontError::NotFound("rating"))?;

        let updated = {
            let r = rec
                .ratings
                .iter_mut()
                .find(|r| r.id == rating_id)
                .ok_or(StorefrontError::NotFound("rating"))?;
            if let Some(v) = value {
                r.value = v;
            }
            if let Some(c) = comment {
                r.comment = c;
            }
            r.clone()
        };

        let rec = &mut *rec;
        RatingAggregator::on_rating_updated(&mut rec.product, &rec.ratings);

        Ok(updated)
    }

    pub fn get_rating(&self, rating_id: u64) -> Result<Rating> {
        let product_id = *self
            .rating_index
            .get(&rating_id)
            .ok_or(StorefrontError::NotFound("rating"))?;
        let rec = self
            .products
            .get(&product_id)
            .ok_or(StorefrontError::NotFound("rating"))?;
        rec.ratings
            .iter()
            .find(|r| r.id == rating_id)
            .cloned()
            .ok_or(StorefrontError::NotFound("rating"))
    }

    /// The (owner, product) lookup backing the uniqueness invariant.
    pub fn find_rating(&self, owner: PrincipalId, product_id: u64) -> Result<Option<Rating>> {
        let rec = self
            .products
            .get(&product_id)
            .ok_or(StorefrontError::NotFound("product"))?;
        Ok(rec.ratings.iter().find(|r| r.owner == owner).cloned())
    }

    pub fn ratings_for_product(&self, product_id: u64) -> Result<Vec<Rating>> {
        let rec = self
            .products
            .get(&product_id)
            .ok_or(StorefrontError::NotFound("product"))?;
        Ok(rec.ratings.clone())
    }

    pub fn ratings_by_owner(&self, owner: PrincipalId) -> Vec<Rating> {
        let mut out: Vec<_> = self
            .products
            .iter()
            .flat_map(|rec| {
                rec.ratings
                    .iter()
                    .filter(|r| r.owner == owner)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        out.sort_by_key(|r| r.id);
        out
    }

    // --------------------
    // Addresses
    // --------------------

    pub fn insert_address(&self, address: BillingAddress) -> BillingAddress {
        self.addresses.insert(address.id, address.clone());
        address
    }

    pub fn get_address(&self, id: u64) -> Result<BillingAddress> {
        self.addresses
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("address"))
    }

    pub fn update_address(&self, address: BillingAddress) -> Result<BillingAddress> {
        if !self.addresses.contains_key(&address.id) {
            return Err(StorefrontError::NotFound("address"));
        }
        self.addresses.insert(address.id, address.clone());
        Ok(address)
    }

    pub fn delete_address(&self, id: u64) -> Result<()> {
        self.addresses
            .remove(&id)
            .map(|_| ())
            .ok_or(StorefrontError::NotFound("address"))
    }

    pub fn addresses_by_owner(&self, owner: PrincipalId) -> Vec<BillingAddress> {
        let mut out: Vec<_> = self
            .addresses
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.value().clone())
            .collect();
        out.sort_by_key(|a| a.id);
        out
    }

    // --------------------
    // Orders
    // --------------------

    pub fn insert_order(&self, order: Order) -> Order {
        self.orders.insert(order.id, order.clone());
        order
    }

    pub fn get_order(&self, id: u64) -> Result<Order> {
        self.orders
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("order"))
    }

    pub fn update_order(&self, order: Order) -> Result<Order> {
        if !self.orders.contains_key(&order.id) {
            return Err(StorefrontError::NotFound("order"));
        }
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    pub fn orders_by_owner(&self, owner: PrincipalId) -> Vec<Order> {
        let mut out: Vec<_> = self
            .orders
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.value().clone())
            .collect();
        out.sort_by_key(|o| o.id);
        out
    }

    pub fn list_orders(&self) -> Vec<Order> {
        let mut out: Vec<_> = self.orders.iter().map(|e| e.value().clone()).collect();
        out.sort_by_key(|o| o.id);
        out
    }

    // --------------------
    // Cards
    // --------------------

    pub fn insert_card(&self, card: Card) -> Card {
        self.cards.insert(card.id, card.clone());
        card
    }

    pub fn get_card(&self, id: u64) -> Result<Card> {
        self.cards
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("card"))
    }

    pub fn delete_card(&self, id: u64) -> Result<Card> {
        self.cards
            .remove(&id)
            .map(|(_, c)| c)
            .ok_or(StorefrontError::NotFound("card"))
    }

    pub fn cards_by_owner(&self, owner: PrincipalId) -> Vec<Card> {
        let mut out: Vec<_> = self
            .cards
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.value().clone())
            .collect();
        out.sort_by_key(|c| c.id);
        out
    }

    // --------------------
    // Reports
    // --------------------

    pub fn insert_report(&self, report: Report) -> Report {
        self.reports.insert(report.id, report.clone());
        report
    }

    pub fn get_report(&self, id: u64) -> Result<Report> {
        self.reports
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("report"))
    }

    pub fn update_report(&self, report: Report) -> Result<Report> {
        if !self.reports.contains_key(&report.id) {
            return Err(StorefrontError::NotFound("report"));
        }
        self.reports.insert(report.id, report.clone());
        Ok(report)
    }

    pub fn reports_by_owner(&self, owner: PrincipalId) -> Vec<Report> {
        let mut out: Vec<_> = self
            .reports
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.value().clone())
            .collect();
        out.sort_by_key(|r| r.id);
        out
    }

    pub fn list_reports(&self) -> Vec<Report> {
        let mut out: Vec<_> = self.reports.iter().map(|e| e.value().clone()).collect();
        out.sort_by_key(|r| r.id);
        out
    }

    // --------------------
    // Notifications
    // --------------------

    pub fn insert_notification(&self, notification: Notification) -> Notification {
        self.notifications
            .insert(notification.id, notification.clone());
        notification
    }

    pub fn get_notification(&self, id: u64) -> Result<Notification> {
        self.notifications
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StorefrontError::NotFound("notification"))
    }

    pub fn update_notification(&self, notification: Notification) -> Result<Notification> {
        if !self.notifications.contains_key(&notification.id) {
            return Err(StorefrontError::NotFound("notification"));
        }
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    /// Newest first, id as the tiebreaker.
    pub fn notifications_by_owner(&self, owner: PrincipalId) -> Vec<Notification> {
        let mut out: Vec<_> = self
            .notifications
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.value().clone())
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out
    }

    // --------------------
    // Notification preferences
    // --------------------

    /// Materialize defaults on first touch.
    pub fn preferences_for(&self, owner: PrincipalId) -> NotificationPreference {
        self.preferences
            .entry(owner)
            .or_insert_with(|| NotificationPreference::new(owner))
            .clone()
    }

    pub fn update_preferences(&self, prefs: NotificationPreference) -> NotificationPreference {
        self.preferences.insert(prefs.owner, prefs.clone());
        prefs
    }
}
