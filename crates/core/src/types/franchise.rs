//! Franchise and store types.

use serde::{Deserialize, Serialize};

use crate::types::id::{FranchiseId, StoreId};

/// A franchise and its stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    /// Franchise ID.
    pub id: FranchiseId,
    /// Franchise name.
    pub name: String,
    /// Users who administer this franchise, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<AdminSummary>>,
    /// Stores operated by this franchise, in declaration order.
    pub stores: Vec<Store>,
}

/// A store within a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Store ID.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Accumulated revenue, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
}

/// Summary of a franchise administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    /// Administrator's email address.
    pub email: String,
    /// Administrator's user ID, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Administrator's display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The franchise listing response: a page of franchises plus a paging flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseList {
    /// Franchises on this page.
    pub franchises: Vec<Franchise>,
    /// Whether more franchises exist beyond this page.
    pub more: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_wire_shape() {
        let store = Store {
            id: StoreId::new(4),
            name: "Lehi".to_string(),
            total_revenue: Some(123.45),
        };

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 4, "name": "Lehi", "totalRevenue": 123.45 })
        );
    }

    #[test]
    fn test_optional_fields_are_omitted_not_null() {
        let store = Store {
            id: StoreId::new(5),
            name: "Springville".to_string(),
            total_revenue: None,
        };
        assert!(!serde_json::to_string(&store).unwrap().contains("totalRevenue"));

        let franchise = Franchise {
            id: FranchiseId::new(2),
            name: "LotaPizza".to_string(),
            admins: None,
            stores: vec![],
        };
        assert!(!serde_json::to_string(&franchise).unwrap().contains("admins"));
    }

    #[test]
    fn test_franchise_deserializes_without_admins() {
        let franchise: Franchise = serde_json::from_value(serde_json::json!({
            "id": 99,
            "name": "FranCo",
            "stores": [{ "id": 501, "name": "Downtown", "totalRevenue": 9.99 }],
        }))
        .unwrap();
        assert_eq!(franchise.admins, None);
        assert_eq!(franchise.stores.len(), 1);
    }
}
