use serde::{Deserialize, Serialize};

/// Urgency of a maintenance ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Workflow status of a maintenance ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Scheduled,
    Completed,
}

impl TicketStatus {
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Scheduled => "Scheduled",
            TicketStatus::Completed => "Completed",
        }
    }

    /// Monotonic, saturating transition: Open → Scheduled → Completed.
    /// Completed is terminal.
    pub fn advanced(self) -> TicketStatus {
        match self {
            TicketStatus::Open => TicketStatus::Scheduled,
            TicketStatus::Scheduled => TicketStatus::Completed,
            TicketStatus::Completed => TicketStatus::Completed,
        }
    }
}

/// A tracked repair/service request against a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ID like `M-77`
    pub id: String,
    pub property: String,
    pub issue: String,
    pub priority: Priority,
    pub status: TicketStatus,
    /// Free-text ETA label like "Sep 03"
    pub eta: String,
}

impl Ticket {
    /// Create a ticket with status fixed to Open
    pub fn new_open(id: String, property: String, issue: String, priority: Priority, eta: String) -> Self {
        Ticket {
            id,
            property,
            issue,
            priority,
            status: TicketStatus::Open,
            eta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_monotonic_and_saturating() {
        assert_eq!(TicketStatus::Open.advanced(), TicketStatus::Scheduled);
        assert_eq!(TicketStatus::Scheduled.advanced(), TicketStatus::Completed);
        assert_eq!(TicketStatus::Completed.advanced(), TicketStatus::Completed);
    }

    #[test]
    fn new_open_fixes_status() {
        let t = Ticket::new_open(
            "M-79".into(),
            "Maple Ridge Townhome".into(),
            "Broken gate latch".into(),
            Priority::Low,
            "Sep 12".into(),
        );
        assert_eq!(t.status, TicketStatus::Open);
    }
}
