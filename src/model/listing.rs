use serde::{Deserialize, Serialize};

/// Occupancy status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    Occupied,
    Available,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Occupied => "Occupied",
            ListingStatus::Available => "Available",
        }
    }

    /// Occupancy percentage derived from status at creation time.
    /// Not kept in sync with later status changes.
    pub fn occupancy(self) -> u8 {
        match self {
            ListingStatus::Occupied => 100,
            ListingStatus::Available => 0,
        }
    }
}

/// A rentable property unit in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique ID like `L-1001`
    pub id: String,
    pub name: String,
    pub address: String,
    pub status: ListingStatus,
    /// Monthly rent in whole dollars
    pub rent: u32,
    /// 0 or 100, snapshot of status at creation
    pub occupancy: u8,
}

impl Listing {
    /// Create a new listing; occupancy is derived from the given status
    pub fn new(id: String, name: String, address: String, status: ListingStatus, rent: u32) -> Self {
        Listing {
            id,
            name,
            address,
            occupancy: status.occupancy(),
            status,
            rent,
        }
    }
}
