use serde::{Deserialize, Serialize};

use super::listing::{Listing, ListingStatus};
use super::rent::{RentRecord, RentStatus};
use super::ticket::{Priority, Ticket, TicketStatus};

/// The full in-memory portfolio: three ordered collections, newest-first.
///
/// This is the one shared mutable object in the application; it is owned
/// by the running app (TUI) or constructed per invocation (CLI), mutated
/// by the `ops` functions, and serialized whole by `io::store`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub listings: Vec<Listing>,
    pub rents: Vec<RentRecord>,
    pub maintenance: Vec<Ticket>,
}

impl Portfolio {
    /// The built-in seed dataset, used whenever no saved state exists or
    /// the saved state cannot be read.
    pub fn default_dataset() -> Portfolio {
        Portfolio {
            listings: vec![
                Listing {
                    id: "L-1001".into(),
                    name: "Maple Ridge Townhome".into(),
                    address: "2403 Maple Ridge Dr, Austin".into(),
                    status: ListingStatus::Occupied,
                    rent: 2150,
                    occupancy: 100,
                },
                Listing {
                    id: "L-1002".into(),
                    name: "Harborline Lofts".into(),
                    address: "88 Dockside Ave, Tampa".into(),
                    status: ListingStatus::Available,
                    rent: 1850,
                    occupancy: 0,
                },
                Listing {
                    id: "L-1003".into(),
                    name: "Cedar Court Duplex".into(),
                    address: "14 Cedar Ct, Raleigh".into(),
                    status: ListingStatus::Occupied,
                    rent: 1325,
                    occupancy: 100,
                },
            ],
            rents: vec![
                RentRecord {
                    id: "R-201".into(),
                    property: "Maple Ridge Townhome".into(),
                    tenant: "Maya Alvarez".into(),
                    amount: 2150,
                    due: "Sep 05".into(),
                    status: RentStatus::Due,
                },
                RentRecord {
                    id: "R-202".into(),
                    property: "Harborline Lofts".into(),
                    tenant: "Vacant".into(),
                    amount: 0,
                    due: "--".into(),
                    status: RentStatus::Vacant,
                },
                RentRecord {
                    id: "R-203".into(),
                    property: "Cedar Court Duplex".into(),
                    tenant: "Chris Douglas".into(),
                    amount: 1325,
                    due: "Sep 08".into(),
                    status: RentStatus::Paid,
                },
            ],
            maintenance: vec![
                Ticket {
                    id: "M-77".into(),
                    property: "Maple Ridge Townhome".into(),
                    issue: "AC making loud noise".into(),
                    priority: Priority::High,
                    status: TicketStatus::Open,
                    eta: "Sep 03".into(),
                },
                Ticket {
                    id: "M-78".into(),
                    property: "Cedar Court Duplex".into(),
                    issue: "Leaky faucet in kitchen".into(),
                    priority: Priority::Medium,
                    status: TicketStatus::Scheduled,
                    eta: "Sep 04".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_shape() {
        let p = Portfolio::default_dataset();
        assert_eq!(p.listings.len(), 3);
        assert_eq!(p.rents.len(), 3);
        assert_eq!(p.maintenance.len(), 2);
    }

    #[test]
    fn serializes_with_three_top_level_arrays() {
        let p = Portfolio::default_dataset();
        let json = serde_json::to_value(&p).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("listings"));
        assert!(obj.contains_key("rents"));
        assert!(obj.contains_key("maintenance"));
    }

    #[test]
    fn record_json_field_names_match_wire_format() {
        let p = Portfolio::default_dataset();
        let json = serde_json::to_value(&p.rents[0]).unwrap();
        assert_eq!(json["id"], "R-201");
        assert_eq!(json["property"], "Maple Ridge Townhome");
        assert_eq!(json["tenant"], "Maya Alvarez");
        assert_eq!(json["amount"], 2150);
        assert_eq!(json["due"], "Sep 05");
        assert_eq!(json["status"], "Due");
    }
}
