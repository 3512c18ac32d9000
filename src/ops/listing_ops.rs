use crate::model::{Listing, ListingStatus, Portfolio};

use super::ids;

/// Add a new listing at the front of the collection (newest-first).
/// Returns the generated ID.
pub fn add_listing(
    portfolio: &mut Portfolio,
    name: String,
    address: String,
    status: ListingStatus,
    rent: u32,
) -> String {
    let id = ids::listing_id();
    portfolio
        .listings
        .insert(0, Listing::new(id.clone(), name, address, status, rent));
    id
}
