use serde::Serialize;

use crate::model::{Listing, Portfolio, RentRecord, Ticket};
use crate::ops::analytics::PortfolioStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListingsJson<'a> {
    pub listings: &'a [Listing],
}

#[derive(Serialize)]
pub struct RentsJson<'a> {
    pub rents: &'a [RentRecord],
}

#[derive(Serialize)]
pub struct TicketsJson<'a> {
    pub tickets: &'a [Ticket],
}

#[derive(Serialize)]
pub struct StatsJson {
    pub occupancy_pct: u32,
    pub collected: u32,
    pub due: u32,
    pub open_tickets: usize,
    pub health: u32,
}

impl From<&PortfolioStats> for StatsJson {
    fn from(stats: &PortfolioStats) -> Self {
        StatsJson {
            occupancy_pct: stats.occupancy_pct,
            collected: stats.collected,
            due: stats.due,
            open_tickets: stats.open_tickets,
            health: stats.health,
        }
    }
}

#[derive(Serialize)]
pub struct AddedJson<'a> {
    pub id: &'a str,
}

// ---------------------------------------------------------------------------
// Plain-text tables
// ---------------------------------------------------------------------------

pub fn print_listings(portfolio: &Portfolio) {
    for listing in &portfolio.listings {
        println!(
            "{}  {:<28} {:<10} ${}/mo  {}",
            listing.id,
            listing.name,
            listing.status.label(),
            listing.rent,
            listing.address
        );
    }
}

pub fn print_rents(portfolio: &Portfolio) {
    for rent in &portfolio.rents {
        println!(
            "{}  {:<28} {:<18} ${:<8} due {:<8} {}",
            rent.id,
            rent.property,
            rent.tenant,
            rent.amount,
            rent.due,
            rent.status.label()
        );
    }
}

pub fn print_tickets(portfolio: &Portfolio) {
    for ticket in &portfolio.maintenance {
        println!(
            "{}  {:<28} {:<30} {:<8} eta {:<8} {}",
            ticket.id,
            ticket.property,
            ticket.issue,
            ticket.priority.label(),
            ticket.eta,
            ticket.status.label()
        );
    }
}
