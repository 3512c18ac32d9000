use std::path::PathBuf;

use chrono::{Duration, Local};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store;
use crate::model::{ListingStatus, Portfolio, Priority};
use crate::ops::analytics::portfolio_stats;
use crate::ops::{listing_ops, rent_ops, ticket_ops};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = store::resolve_state_path(cli.state_file.as_deref());

    match cli.command {
        None => unreachable!("TUI launch is handled in main"),
        Some(cmd) => match cmd {
            // Read commands
            Commands::Listings => cmd_listings(&path, json),
            Commands::Rents => cmd_rents(&path, json),
            Commands::Tickets => cmd_tickets(&path, json),
            Commands::Stats => cmd_stats(&path, json),

            // Write commands
            Commands::AddListing(args) => cmd_add_listing(&path, args, json),
            Commands::AddRent(args) => cmd_add_rent(&path, args, json),
            Commands::AddTicket(args) => cmd_add_ticket(&path, args, json),
            Commands::Collect(args) => cmd_collect(&path, args),
            Commands::Advance(args) => cmd_advance(&path, args),
            Commands::PaidAll => cmd_paid_all(&path),

            // Simulated actions: acknowledged, nothing mutated
            Commands::Remind => {
                println!("Reminders sent to tenants with due balances.");
                Ok(())
            }
            Commands::Export => {
                println!("Report exported as HarborKey-Portfolio.pdf");
                Ok(())
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Default due label: a week out, in the dataset's "Sep 05" style
fn default_due_label() -> String {
    (Local::now() + Duration::days(7)).format("%b %d").to_string()
}

/// Default ETA label: a few days out
fn default_eta_label() -> String {
    (Local::now() + Duration::days(3)).format("%b %d").to_string()
}

fn parse_listing_status(s: &str) -> Result<ListingStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "occupied" => Ok(ListingStatus::Occupied),
        "available" => Ok(ListingStatus::Available),
        other => Err(format!("unknown status '{}' (occupied|available)", other)),
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    match s.to_ascii_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        other => Err(format!("unknown priority '{}' (high|medium|low)", other)),
    }
}

fn save(path: &PathBuf, portfolio: &Portfolio) -> Result<(), Box<dyn std::error::Error>> {
    store::save(path, portfolio)?;
    Ok(())
}

fn print_added(id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(&AddedJson { id })?);
    } else {
        println!("added {}", id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_listings(path: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load(path);
    if json {
        let out = ListingsJson {
            listings: &portfolio.listings,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_listings(&portfolio);
    }
    Ok(())
}

fn cmd_rents(path: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load(path);
    if json {
        let out = RentsJson {
            rents: &portfolio.rents,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_rents(&portfolio);
    }
    Ok(())
}

fn cmd_tickets(path: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load(path);
    if json {
        let out = TicketsJson {
            tickets: &portfolio.maintenance,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_tickets(&portfolio);
    }
    Ok(())
}

fn cmd_stats(path: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load(path);
    let stats = portfolio_stats(&portfolio);
    if json {
        println!("{}", serde_json::to_string_pretty(&StatsJson::from(&stats))?);
    } else {
        println!("occupancy   {}%", stats.occupancy_pct);
        println!("collected   ${}", stats.collected);
        println!("due         ${}", stats.due);
        println!("open        {} tickets", stats.open_tickets);
        println!("health      {}%", stats.health);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add_listing(
    path: &PathBuf,
    args: AddListingArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = parse_listing_status(&args.status)?;
    let mut portfolio = store::load(path);
    let id = listing_ops::add_listing(&mut portfolio, args.name, args.address, status, args.rent);
    save(path, &portfolio)?;
    print_added(&id, json)
}

fn cmd_add_rent(
    path: &PathBuf,
    args: AddRentArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load(path);
    let id = if args.vacant {
        rent_ops::add_vacant_rent(&mut portfolio, args.property)
    } else {
        let tenant = args.tenant.unwrap_or_default();
        let due = args.due.unwrap_or_else(default_due_label);
        rent_ops::add_rent(&mut portfolio, args.property, tenant, args.amount, due)
    };
    save(path, &portfolio)?;
    print_added(&id, json)
}

fn cmd_add_ticket(
    path: &PathBuf,
    args: AddTicketArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let priority = parse_priority(&args.priority)?;
    let mut portfolio = store::load(path);
    let eta = args.eta.unwrap_or_else(default_eta_label);
    let id = ticket_ops::add_ticket(&mut portfolio, args.property, args.issue, priority, eta);
    save(path, &portfolio)?;
    print_added(&id, json)
}

fn cmd_collect(path: &PathBuf, args: CollectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load(path);
    // Unknown ID is a quiet no-op, matching the in-app behavior
    rent_ops::collect_rent(&mut portfolio, &args.id);
    save(path, &portfolio)?;
    println!("ok");
    Ok(())
}

fn cmd_advance(path: &PathBuf, args: AdvanceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load(path);
    ticket_ops::advance_ticket(&mut portfolio, &args.id);
    save(path, &portfolio)?;
    println!("ok");
    Ok(())
}

fn cmd_paid_all(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load(path);
    rent_ops::mark_all_paid(&mut portfolio);
    save(path, &portfolio)?;
    println!("ok");
    Ok(())
}
