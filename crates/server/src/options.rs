//! Per-instance fixture overrides.

use pizza_fixture_core::{Franchise, FranchiseList, MenuItem, OrderHistory};

/// Overrides applied to one fixture instance.
///
/// Every field defaults to "use the built-in data". Tests set only what the
/// scenario needs:
///
/// ```
/// use pizza_fixture_server::FixtureOptions;
///
/// let options = FixtureOptions::default().with_initial_user("a@jwt.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureOptions {
    /// Seeded email to start logged in as; the session begins anonymous
    /// when unset or unknown.
    pub initial_user_email: Option<String>,
    /// Replaces the default menu.
    pub menu: Option<Vec<MenuItem>>,
    /// Replaces the default franchise listing.
    pub franchise_list: Option<FranchiseList>,
    /// Replaces the franchise-by-id response.
    pub franchises_by_user: Option<Vec<Franchise>>,
    /// Replaces the order history returned for the current diner.
    pub order_history: Option<OrderHistory>,
}

impl FixtureOptions {
    /// Start the run already logged in as the given seeded user.
    #[must_use]
    pub fn with_initial_user(mut self, email: impl Into<String>) -> Self {
        self.initial_user_email = Some(email.into());
        self
    }

    /// Serve this menu instead of the default one.
    #[must_use]
    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Serve this franchise listing instead of the default one.
    #[must_use]
    pub fn with_franchise_list(mut self, list: FranchiseList) -> Self {
        self.franchise_list = Some(list);
        self
    }

    /// Serve these franchises from the franchise-by-id route.
    #[must_use]
    pub fn with_franchises_by_user(mut self, franchises: Vec<Franchise>) -> Self {
        self.franchises_by_user = Some(franchises);
        self
    }

    /// Serve this order history instead of an empty one.
    #[must_use]
    pub fn with_order_history(mut self, history: OrderHistory) -> Self {
        self.order_history = Some(history);
        self
    }
}
