use serde::{Deserialize, Serialize};

/// Payment status of a rent record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentStatus {
    Due,
    Paid,
    Vacant,
}

impl RentStatus {
    pub fn label(self) -> &'static str {
        match self {
            RentStatus::Due => "Due",
            RentStatus::Paid => "Paid",
            RentStatus::Vacant => "Vacant",
        }
    }
}

/// A billing-cycle entry linking a property to a tenant and amount.
///
/// `property` is free text, not a foreign key into the listings
/// collection. Vacant rows are created with `tenant = "Vacant"` and
/// amount 0; no operation transitions into or out of Vacant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRecord {
    /// Unique ID like `R-201`
    pub id: String,
    pub property: String,
    pub tenant: String,
    pub amount: u32,
    /// Free-text due label like "Sep 05", or "--" when vacant
    pub due: String,
    pub status: RentStatus,
}

impl RentRecord {
    /// Create a rent record with status fixed to Due
    pub fn new_due(id: String, property: String, tenant: String, amount: u32, due: String) -> Self {
        RentRecord {
            id,
            property,
            tenant,
            amount,
            due,
            status: RentStatus::Due,
        }
    }

    /// Create a vacant rent record (no tenant, zero amount)
    pub fn new_vacant(id: String, property: String) -> Self {
        RentRecord {
            id,
            property,
            tenant: "Vacant".into(),
            amount: 0,
            due: "--".into(),
            status: RentStatus::Vacant,
        }
    }
}
