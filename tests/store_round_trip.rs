//! Round-trip tests for the state store: any portfolio reachable via the
//! mutation operations must survive save → load unchanged.

use harborkey::io::store;
use harborkey::model::{ListingStatus, Portfolio, Priority};
use harborkey::ops::{listing_ops, rent_ops, ticket_ops};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn round_trip(portfolio: &Portfolio) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("harborkey.json");
    store::save(&path, portfolio).unwrap();
    assert_eq!(&store::load(&path), portfolio);
}

#[test]
fn default_dataset_round_trips() {
    round_trip(&Portfolio::default_dataset());
}

#[test]
fn empty_collections_round_trip() {
    round_trip(&Portfolio {
        listings: vec![],
        rents: vec![],
        maintenance: vec![],
    });
}

#[test]
fn every_mutation_sequence_round_trips() {
    let mut portfolio = Portfolio::default_dataset();

    listing_ops::add_listing(
        &mut portfolio,
        "Birchwood Flats".into(),
        "9 Birch Ln".into(),
        ListingStatus::Available,
        1600,
    );
    round_trip(&portfolio);

    let rent_id = rent_ops::add_rent(
        &mut portfolio,
        "Birchwood Flats".into(),
        "Jordan Lee".into(),
        1600,
        "Oct 01".into(),
    );
    rent_ops::add_vacant_rent(&mut portfolio, "Elm Row".into());
    round_trip(&portfolio);

    rent_ops::collect_rent(&mut portfolio, &rent_id);
    round_trip(&portfolio);

    rent_ops::mark_all_paid(&mut portfolio);
    round_trip(&portfolio);

    let ticket_id = ticket_ops::add_ticket(
        &mut portfolio,
        "Elm Row".into(),
        "Gutter cleaning".into(),
        Priority::Low,
        "Oct 04".into(),
    );
    ticket_ops::advance_ticket(&mut portfolio, &ticket_id);
    ticket_ops::advance_ticket(&mut portfolio, &ticket_id);
    round_trip(&portfolio);
}

#[test]
fn saved_document_reloads_after_second_save() {
    // save(load(x)) followed by load must equal the state before the
    // first save
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("harborkey.json");

    let mut portfolio = Portfolio::default_dataset();
    rent_ops::mark_all_paid(&mut portfolio);
    store::save(&path, &portfolio).unwrap();

    let loaded = store::load(&path);
    store::save(&path, &loaded).unwrap();
    assert_eq!(store::load(&path), portfolio);
}

#[test]
fn unicode_free_text_survives() {
    let mut portfolio = Portfolio::default_dataset();
    ticket_ops::add_ticket(
        &mut portfolio,
        "Café Lofts \u{2014} Unit 4".into(),
        "Ventilación no funciona".into(),
        Priority::High,
        "Sep 30".into(),
    );
    round_trip(&portfolio);
}
