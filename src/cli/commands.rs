use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hk",
    about = concat!("[\u{2302}] harborkey v", env!("CARGO_PKG_VERSION"), " - your portfolio at a glance"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the state file (default: harborkey.json, or $HARBORKEY_STATE)
    #[arg(short = 'S', long = "state-file", global = true)]
    pub state_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all listings
    Listings,
    /// List all rent records
    Rents,
    /// List all maintenance tickets
    Tickets,
    /// Show derived portfolio analytics
    Stats,
    /// Add a listing
    AddListing(AddListingArgs),
    /// Add a rent record
    AddRent(AddRentArgs),
    /// Add a maintenance ticket
    AddTicket(AddTicketArgs),
    /// Mark one rent record paid
    Collect(CollectArgs),
    /// Advance a maintenance ticket (open -> scheduled -> completed)
    Advance(AdvanceArgs),
    /// Mark every due rent record paid
    PaidAll,
    /// Send payment reminders (simulated)
    Remind,
    /// Export a portfolio report (simulated)
    Export,
}

#[derive(Args)]
pub struct AddListingArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    /// occupied or available
    #[arg(long, default_value = "available")]
    pub status: String,
    /// Monthly rent in whole dollars
    #[arg(long, default_value_t = 0)]
    pub rent: u32,
}

#[derive(Args)]
pub struct AddRentArgs {
    #[arg(long)]
    pub property: String,
    /// Tenant name; omit together with --vacant for a vacant record
    #[arg(long, required_unless_present = "vacant")]
    pub tenant: Option<String>,
    #[arg(long, default_value_t = 0)]
    pub amount: u32,
    /// Due label like "Sep 15" (default: a week from today)
    #[arg(long)]
    pub due: Option<String>,
    /// Create a vacant record (no tenant, zero amount)
    #[arg(long)]
    pub vacant: bool,
}

#[derive(Args)]
pub struct AddTicketArgs {
    #[arg(long)]
    pub property: String,
    #[arg(long)]
    pub issue: String,
    /// high, medium, or low
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// ETA label like "Sep 10" (default: a few days from today)
    #[arg(long)]
    pub eta: Option<String>,
}

#[derive(Args)]
pub struct CollectArgs {
    /// Rent record ID like R-201
    pub id: String,
}

#[derive(Args)]
pub struct AdvanceArgs {
    /// Ticket ID like M-77
    pub id: String,
}
