use crate::model::{Portfolio, RentRecord, RentStatus};

use super::ids;

/// Add a new rent record at the front of the collection, status Due.
/// Returns the generated ID.
pub fn add_rent(
    portfolio: &mut Portfolio,
    property: String,
    tenant: String,
    amount: u32,
    due: String,
) -> String {
    let id = ids::rent_id();
    portfolio
        .rents
        .insert(0, RentRecord::new_due(id.clone(), property, tenant, amount, due));
    id
}

/// Add a vacant rent record (zero amount, no tenant).
/// Vacant is set only at creation; no operation transitions into or out
/// of it afterwards.
pub fn add_vacant_rent(portfolio: &mut Portfolio, property: String) -> String {
    let id = ids::rent_id();
    portfolio
        .rents
        .insert(0, RentRecord::new_vacant(id.clone(), property));
    id
}

/// Mark one rent record Paid. Unknown ID is a no-op, not an error.
/// The status is set unconditionally; collecting an already-Paid or
/// Vacant record also yields Paid, matching the original behavior.
pub fn collect_rent(portfolio: &mut Portfolio, rent_id: &str) {
    if let Some(rent) = portfolio.rents.iter_mut().find(|r| r.id == rent_id) {
        rent.status = RentStatus::Paid;
    }
}

/// Transition every Due record to Paid. Vacant and already-Paid records
/// are untouched in every field.
pub fn mark_all_paid(portfolio: &mut Portfolio) {
    for rent in &mut portfolio.rents {
        if rent.status == RentStatus::Due {
            rent.status = RentStatus::Paid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_rent_prepends_with_due_status() {
        let mut p = Portfolio::default_dataset();
        let id = add_rent(
            &mut p,
            "Birchwood Flats".into(),
            "Jordan Lee".into(),
            1600,
            "Oct 01".into(),
        );
        assert_eq!(p.rents[0].id, id);
        assert_eq!(p.rents[0].status, RentStatus::Due);
        assert_eq!(p.rents.len(), 4);
    }

    #[test]
    fn collect_unknown_id_is_a_no_op() {
        let mut p = Portfolio::default_dataset();
        let before = p.clone();
        collect_rent(&mut p, "R-999");
        assert_eq!(p, before);
    }

    #[test]
    fn collect_sets_paid_unconditionally() {
        let mut p = Portfolio::default_dataset();
        collect_rent(&mut p, "R-201");
        assert_eq!(p.rents[0].status, RentStatus::Paid);

        // Collecting a vacant record also forces Paid
        collect_rent(&mut p, "R-202");
        assert_eq!(p.rents[1].status, RentStatus::Paid);
    }

    #[test]
    fn mark_all_paid_clears_due_and_touches_nothing_else() {
        let mut p = Portfolio::default_dataset();
        let before = p.clone();
        mark_all_paid(&mut p);

        assert!(p.rents.iter().all(|r| r.status != RentStatus::Due));
        for (after, orig) in p.rents.iter().zip(&before.rents) {
            if orig.status == RentStatus::Due {
                assert_eq!(after.status, RentStatus::Paid);
            } else {
                assert_eq!(after.status, orig.status);
            }
            // Every other field unchanged
            assert_eq!(after.id, orig.id);
            assert_eq!(after.property, orig.property);
            assert_eq!(after.tenant, orig.tenant);
            assert_eq!(after.amount, orig.amount);
            assert_eq!(after.due, orig.due);
        }
    }

    #[test]
    fn mark_all_paid_is_idempotent() {
        let mut p = Portfolio::default_dataset();
        mark_all_paid(&mut p);
        let once = p.clone();
        mark_all_paid(&mut p);
        assert_eq!(p, once);
    }
}
