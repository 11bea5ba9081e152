//! Seed data and fixed response constants.
//!
//! Everything here is deliberately static: the fixture's value is that every
//! run observes the same users, menu, and tokens.

use pizza_fixture_core::{
    AdminSummary, Credentialed, Franchise, FranchiseId, FranchiseList, MenuItem, MenuItemId, Role,
    Store, StoreId, User, UserId,
};

/// Token returned by every successful login, registration, and update.
pub const AUTH_TOKEN: &str = "abcdef";

/// Opaque payment token paired with every submitted order.
pub const PAYMENT_TOKEN: &str = "eyJpYXQ";

/// ID assigned to every submitted order.
pub const ORDER_ID: &str = "23";

/// Timestamp stamped onto every submitted order.
pub const ORDER_DATE: &str = "2026-01-01T00:00:00.000Z";

/// ID assigned to every registered user, and the update-merge fallback.
pub const REGISTERED_USER_ID: i64 = 42;

/// Users defined at fixture-construction time, immutable for the run.
#[must_use]
pub fn seeded_users() -> Vec<Credentialed> {
    vec![
        Credentialed {
            password: "a".to_string(),
            user: User {
                id: UserId::new(3),
                name: "Kai Chen".to_string(),
                email: "d@jwt.com".to_string(),
                roles: vec![Role::Diner],
            },
        },
        Credentialed {
            password: "franchisee".to_string(),
            user: User {
                id: UserId::new(7),
                name: "Fran Chisee".to_string(),
                email: "f@jwt.com".to_string(),
                roles: vec![Role::franchisee("99")],
            },
        },
        Credentialed {
            password: "admin".to_string(),
            user: User {
                id: UserId::new(1),
                name: "Admin User".to_string(),
                email: "a@jwt.com".to_string(),
                roles: vec![Role::Admin],
            },
        },
    ]
}

/// The menu served when a test does not override it.
#[must_use]
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: MenuItemId::new(1),
            title: "Veggie".to_string(),
            image: "pizza1.png".to_string(),
            price: 0.0038,
            description: "A garden of delight".to_string(),
        },
        MenuItem {
            id: MenuItemId::new(2),
            title: "Pepperoni".to_string(),
            image: "pizza2.png".to_string(),
            price: 0.0042,
            description: "Spicy treat".to_string(),
        },
    ]
}

/// The franchise listing served when a test does not override it.
#[must_use]
pub fn default_franchise_list() -> FranchiseList {
    FranchiseList {
        franchises: vec![Franchise {
            id: FranchiseId::new(2),
            name: "LotaPizza".to_string(),
            admins: Some(vec![AdminSummary {
                email: "f@jwt.com".to_string(),
                id: None,
                name: Some("Fran Chisee".to_string()),
            }]),
            stores: vec![
                Store {
                    id: StoreId::new(4),
                    name: "Lehi".to_string(),
                    total_revenue: Some(123.45),
                },
                Store {
                    id: StoreId::new(5),
                    name: "Springville".to_string(),
                    total_revenue: Some(67.89),
                },
            ],
        }],
        more: false,
    }
}
