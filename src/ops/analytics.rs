use crate::model::{ListingStatus, Portfolio, RentStatus, TicketStatus};

/// Derived portfolio metrics, recomputed whole from state on every
/// render. Cheap at this data volume; no caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortfolioStats {
    /// Occupied-listing count
    pub occupied: usize,
    /// Total listing count
    pub total_listings: usize,
    /// round(100 × occupied / max(total, 1))
    pub occupancy_pct: u32,
    /// Sum of amounts where status = Paid
    pub collected: u32,
    /// Sum of amounts where status = Due
    pub due: u32,
    /// Count of rent records with status Due
    pub due_count: usize,
    /// Count of tickets with status Open
    pub open_tickets: usize,
    /// min(100, round(100 × collected / max(collected + due, 1)))
    pub collected_bar: u32,
    /// min(100, open × 20)
    pub open_bar: u32,
    /// max(70, 100 − open × 8); synthetic, floored at 70
    pub health: u32,
}

/// Compute every derived metric from the current state
pub fn portfolio_stats(portfolio: &Portfolio) -> PortfolioStats {
    let occupied = portfolio
        .listings
        .iter()
        .filter(|l| l.status == ListingStatus::Occupied)
        .count();
    let total_listings = portfolio.listings.len();
    let occupancy_pct = ((occupied as f64 / total_listings.max(1) as f64) * 100.0).round() as u32;

    let collected: u32 = portfolio
        .rents
        .iter()
        .filter(|r| r.status == RentStatus::Paid)
        .map(|r| r.amount)
        .sum();
    let due: u32 = portfolio
        .rents
        .iter()
        .filter(|r| r.status == RentStatus::Due)
        .map(|r| r.amount)
        .sum();
    let due_count = portfolio
        .rents
        .iter()
        .filter(|r| r.status == RentStatus::Due)
        .count();

    let open_tickets = portfolio
        .maintenance
        .iter()
        .filter(|t| t.status == TicketStatus::Open)
        .count();

    let collected_bar =
        (((collected as f64 / (collected + due).max(1) as f64) * 100.0).round() as u32).min(100);
    let open_bar = ((open_tickets as u32) * 20).min(100);
    let health = (100u32.saturating_sub(open_tickets as u32 * 8)).max(70);

    PortfolioStats {
        occupied,
        total_listings,
        occupancy_pct,
        collected,
        due,
        due_count,
        open_tickets,
        collected_bar,
        open_bar,
        health,
    }
}

/// Cap for dashboard preview lists
pub const PREVIEW_LIMIT: usize = 3;

/// First `PREVIEW_LIMIT` items of a collection, in collection order
pub fn preview<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(PREVIEW_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Listing, Portfolio, RentRecord, Ticket};
    use crate::model::{Priority, TicketStatus};
    use pretty_assertions::assert_eq;

    fn listing(id: &str, status: ListingStatus) -> Listing {
        Listing::new(id.into(), id.into(), "1 Main St".into(), status, 1000)
    }

    fn rent(id: &str, amount: u32, status: RentStatus) -> RentRecord {
        RentRecord {
            id: id.into(),
            property: id.into(),
            tenant: "T".into(),
            amount,
            due: "Sep 01".into(),
            status,
        }
    }

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: id.into(),
            property: id.into(),
            issue: "issue".into(),
            priority: Priority::Medium,
            status,
            eta: "Sep 09".into(),
        }
    }

    #[test]
    fn worked_example_from_three_listings_two_rents() {
        let p = Portfolio {
            listings: vec![
                listing("L-1", ListingStatus::Occupied),
                listing("L-2", ListingStatus::Available),
                listing("L-3", ListingStatus::Occupied),
            ],
            rents: vec![
                rent("R-1", 2150, RentStatus::Paid),
                rent("R-2", 1325, RentStatus::Due),
            ],
            maintenance: vec![],
        };

        let stats = portfolio_stats(&p);
        assert_eq!(stats.occupancy_pct, 67);
        assert_eq!(stats.collected, 2150);
        assert_eq!(stats.due, 1325);
        assert_eq!(stats.collected_bar, 62);
        assert_eq!(stats.open_tickets, 0);
        assert_eq!(stats.open_bar, 0);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn empty_portfolio_divides_safely() {
        let p = Portfolio {
            listings: vec![],
            rents: vec![],
            maintenance: vec![],
        };
        let stats = portfolio_stats(&p);
        assert_eq!(stats.occupancy_pct, 0);
        assert_eq!(stats.collected_bar, 0);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn open_bar_and_health_clamp() {
        let p = Portfolio {
            listings: vec![],
            rents: vec![],
            maintenance: (0..6)
                .map(|i| ticket(&format!("M-{}", i), TicketStatus::Open))
                .collect(),
        };
        let stats = portfolio_stats(&p);
        assert_eq!(stats.open_tickets, 6);
        assert_eq!(stats.open_bar, 100); // 6 × 20 clamped
        assert_eq!(stats.health, 70); // 100 − 48 floored at 70
    }

    #[test]
    fn default_dataset_stats() {
        let stats = portfolio_stats(&Portfolio::default_dataset());
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.occupancy_pct, 67);
        assert_eq!(stats.collected, 1325);
        assert_eq!(stats.due, 2150);
        assert_eq!(stats.due_count, 1);
        assert_eq!(stats.open_tickets, 1);
        assert_eq!(stats.open_bar, 20);
        assert_eq!(stats.health, 92);
    }

    #[test]
    fn preview_caps_at_three_in_order() {
        let items: Vec<Ticket> = (0..5)
            .map(|i| ticket(&format!("M-{}", i), TicketStatus::Open))
            .collect();
        let p = preview(&items);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].id, "M-0");
        assert_eq!(p[1].id, "M-1");
        assert_eq!(p[2].id, "M-2");
    }

    #[test]
    fn preview_of_short_collection_is_whole() {
        let items = vec![ticket("M-1", TicketStatus::Open)];
        assert_eq!(preview(&items).len(), 1);
        let empty: Vec<Ticket> = vec![];
        assert!(preview(&empty).is_empty());
    }
}
