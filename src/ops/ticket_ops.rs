use crate::model::{Portfolio, Priority, Ticket};

use super::ids;

/// Add a new maintenance ticket at the front of the collection, status
/// Open. Returns the generated ID.
pub fn add_ticket(
    portfolio: &mut Portfolio,
    property: String,
    issue: String,
    priority: Priority,
    eta: String,
) -> String {
    let id = ids::ticket_id();
    portfolio
        .maintenance
        .insert(0, Ticket::new_open(id.clone(), property, issue, priority, eta));
    id
}

/// Advance one ticket along Open → Scheduled → Completed. Unknown ID is
/// a no-op; advancing a Completed ticket is a no-op.
pub fn advance_ticket(portfolio: &mut Portfolio, ticket_id: &str) {
    if let Some(ticket) = portfolio.maintenance.iter_mut().find(|t| t.id == ticket_id) {
        ticket.status = ticket.status.advanced();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TicketStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_ticket_prepends_with_open_status() {
        let mut p = Portfolio::default_dataset();
        let id = add_ticket(
            &mut p,
            "Harborline Lofts".into(),
            "Elevator inspection".into(),
            Priority::Low,
            "Sep 20".into(),
        );
        assert_eq!(p.maintenance[0].id, id);
        assert_eq!(p.maintenance[0].status, TicketStatus::Open);
        assert_eq!(p.maintenance.len(), 3);
    }

    #[test]
    fn advance_unknown_id_is_a_no_op() {
        let mut p = Portfolio::default_dataset();
        let before = p.clone();
        advance_ticket(&mut p, "M-00");
        assert_eq!(p, before);
    }

    #[test]
    fn advance_walks_open_to_completed_and_saturates() {
        let mut p = Portfolio::default_dataset();
        // M-77 starts Open
        advance_ticket(&mut p, "M-77");
        assert_eq!(p.maintenance[0].status, TicketStatus::Scheduled);
        advance_ticket(&mut p, "M-77");
        assert_eq!(p.maintenance[0].status, TicketStatus::Completed);

        // Completed is terminal: repeated advances change nothing
        let before = p.clone();
        advance_ticket(&mut p, "M-77");
        assert_eq!(p, before);
    }

    #[test]
    fn advance_touches_only_the_named_ticket() {
        let mut p = Portfolio::default_dataset();
        let other_before = p.maintenance[1].clone();
        advance_ticket(&mut p, "M-77");
        assert_eq!(p.maintenance[1], other_before);
    }
}
