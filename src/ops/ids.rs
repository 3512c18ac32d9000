use rand::Rng;

/// Generate a listing ID: `L-` plus a random 4-digit number.
///
/// Collisions are possible and deliberately not checked; the dataset is
/// a handful of records and the original system accepts the same odds.
pub fn listing_id() -> String {
    format!("L-{}", rand::thread_rng().gen_range(1000..10000))
}

/// Generate a rent record ID: `R-` plus a random 3-digit number
pub fn rent_id() -> String {
    format!("R-{}", rand::thread_rng().gen_range(100..1000))
}

/// Generate a maintenance ticket ID: `M-` plus a random 2-digit number
pub fn ticket_id() -> String {
    format!("M-{}", rand::thread_rng().gen_range(10..100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_ids_are_l_dash_four_digits() {
        for _ in 0..100 {
            let id = listing_id();
            let digits = id.strip_prefix("L-").unwrap();
            assert_eq!(digits.len(), 4);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn rent_ids_are_r_dash_three_digits() {
        for _ in 0..100 {
            let id = rent_id();
            let digits = id.strip_prefix("R-").unwrap();
            assert_eq!(digits.len(), 3);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn ticket_ids_are_m_dash_two_digits() {
        for _ in 0..100 {
            let id = ticket_id();
            let digits = id.strip_prefix("M-").unwrap();
            assert_eq!(digits.len(), 2);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
