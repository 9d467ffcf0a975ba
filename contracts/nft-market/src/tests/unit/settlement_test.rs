use crate::tests::test_utils::*;
use crate::*;

// --- accept_ask ---

#[test]
fn accept_ask_splits_fee_royalty_and_payout() {
    // Fee 300 bps, royalty 300 bps split {60%, 40%}, price 100:
    // fee = 3, royalty pool = 3 → shares 1 + 1, seller payout = 95.
    let mut contract = new_contract_with_fee(300);
    register_single(&mut contract, 300, creators_60_40());
    setup_single_ask(&mut contract, "t1", 100);

    contract
        .internal_accept_asks(&buyer(), vec![fill(single_collection(), "t1", 0, 1)], 100)
        .unwrap();

    assert_eq!(contract.get_withdrawable(beneficiary()).0, 3);
    assert_eq!(contract.get_withdrawable(creator_a()).0, 1);
    assert_eq!(contract.get_withdrawable(creator_b()).0, 1);

    // Asset reached the buyer; entry is tombstoned.
    assert_eq!(contract.owned_quantity(&single_collection(), &buyer(), "t1"), 1);
    let asks = contract.get_asks(single_collection(), "t1".into(), None, None);
    assert!(!asks[0].active);

    // Volume and last price follow the fill.
    let collection = contract.get_collection(single_collection()).unwrap();
    assert_eq!(collection.volume_traded, 100);
    assert_eq!(collection.last_price, 100);
}

#[test]
fn accept_own_ask_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    setup_single_ask(&mut contract, "t1", 100);

    let err = contract
        .internal_accept_asks(&seller(), vec![fill(single_collection(), "t1", 0, 1)], 100)
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn accept_tombstoned_ask_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    setup_single_ask(&mut contract, "t1", 100);
    contract
        .internal_cancel_asks(&seller(), vec![order_ref(single_collection(), "t1", 0)])
        .unwrap();

    let err = contract
        .internal_accept_asks(&buyer(), vec![fill(single_collection(), "t1", 0, 1)], 100)
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
}

#[test]
fn accept_more_than_remaining_fails() {
    let mut contract = new_contract();
    register_fractional(&mut contract, 0, vec![]);
    mint_fractional(&mut contract, "f1", &seller(), 5);
    contract
        .internal_create_asks(&seller(), vec![order(fractional_collection(), "f1", 10, 5)])
        .unwrap();

    let err = contract
        .internal_accept_asks(&buyer(), vec![fill(fractional_collection(), "f1", 0, 6)], 60)
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn partial_fill_keeps_entry_active() {
    let mut contract = new_contract();
    register_fractional(&mut contract, 0, vec![]);
    mint_fractional(&mut contract, "f1", &seller(), 10);
    contract
        .internal_create_asks(&seller(), vec![order(fractional_collection(), "f1", 10, 10)])
        .unwrap();

    contract
        .internal_accept_asks(&buyer(), vec![fill(fractional_collection(), "f1", 0, 4)], 40)
        .unwrap();

    let asks = contract.get_asks(fractional_collection(), "f1".into(), None, None);
    assert!(asks[0].active);
    assert_eq!(asks[0].quantity, 6);
    assert_eq!(
        contract.owned_quantity(&fractional_collection(), &buyer(), "f1"),
        4
    );
    assert_eq!(
        contract.owned_quantity(&fractional_collection(), &market(), "f1"),
        6
    );

    // Filling the remainder tombstones the entry.
    contract
        .internal_accept_asks(&buyer(), vec![fill(fractional_collection(), "f1", 0, 6)], 60)
        .unwrap();
    let asks = contract.get_asks(fractional_collection(), "f1".into(), None, None);
    assert!(!asks[0].active);
    assert_eq!(
        contract.owned_quantity(&fractional_collection(), &buyer(), "f1"),
        10
    );
}

#[test]
fn attached_value_below_settled_total_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    setup_single_ask(&mut contract, "t1", 100);

    let err = contract
        .internal_accept_asks(&buyer(), vec![fill(single_collection(), "t1", 0, 1)], 99)
        .unwrap_err();
    assert!(matches!(err, MarketError::InsufficientDeposit(_)));
}

#[test]
fn batch_accept_sums_per_item_totals() {
    let mut contract = new_contract_with_fee(300);
    register_fractional(&mut contract, 0, vec![]);
    mint_fractional(&mut contract, "f1", &seller(), 10);
    contract
        .internal_create_asks(
            &seller(),
            vec![
                order(fractional_collection(), "f1", 10, 5),
                order(fractional_collection(), "f1", 20, 5),
            ],
        )
        .unwrap();

    contract
        .internal_accept_asks(
            &buyer(),
            vec![
                fill(fractional_collection(), "f1", 0, 5),
                fill(fractional_collection(), "f1", 1, 5),
            ],
            150,
        )
        .unwrap();

    // Fee computed per fill on the per-item gross: 50*3% = 1, 100*3% = 3.
    assert_eq!(contract.get_withdrawable(beneficiary()).0, 4);
    let collection = contract.get_collection(fractional_collection()).unwrap();
    assert_eq!(collection.volume_traded, 150);
    assert_eq!(collection.last_price, 20);
}

// --- accept_bid ---

#[test]
fn accept_bid_settles_from_escrow() {
    let mut contract = new_contract_with_fee(300);
    register_single(&mut contract, 300, creators_60_40());
    mint_single(&mut contract, "t1", &seller());
    contract
        .internal_create_bids(&buyer(), vec![order(single_collection(), "t1", 100, 1)], 100)
        .unwrap();
    assert_eq!(contract.get_escrow(buyer()).0, 100);

    contract
        .internal_accept_bids(&seller(), vec![fill(single_collection(), "t1", 0, 1)])
        .unwrap();

    // Escrow fully consumed, not newly attached value.
    assert_eq!(contract.get_escrow(buyer()).0, 0);
    assert_eq!(contract.owned_quantity(&single_collection(), &buyer(), "t1"), 1);
    assert_eq!(contract.get_withdrawable(beneficiary()).0, 3);
    assert_eq!(contract.get_withdrawable(creator_a()).0, 1);
    assert_eq!(contract.get_withdrawable(creator_b()).0, 1);

    let bids = contract.get_bids(single_collection(), "t1".into(), None, None);
    assert!(!bids[0].active);
}

#[test]
fn accept_bid_invalidates_sellers_own_asks() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    setup_single_ask(&mut contract, "t1", 120);
    contract
        .internal_create_bids(&buyer(), vec![order(single_collection(), "t1", 100, 1)], 100)
        .unwrap();

    // The seller's sole unit sits in ask custody; accepting the bid reclaims
    // it, tombstones the ask, and hands the unit to the bidder.
    contract
        .internal_accept_bids(&seller(), vec![fill(single_collection(), "t1", 0, 1)])
        .unwrap();

    let asks = contract.get_asks(single_collection(), "t1".into(), None, None);
    assert!(!asks[0].active);
    assert_eq!(contract.owned_quantity(&single_collection(), &buyer(), "t1"), 1);
    assert_eq!(contract.owned_quantity(&single_collection(), &market(), "t1"), 0);
    assert_eq!(contract.get_escrow(buyer()).0, 0);
}

#[test]
fn accept_bid_without_holding_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    mint_single(&mut contract, "t1", &seller());
    contract
        .internal_create_bids(&buyer(), vec![order(single_collection(), "t1", 100, 1)], 100)
        .unwrap();

    // creator_a holds zero units of t1.
    let err = contract
        .internal_accept_bids(&creator_a(), vec![fill(single_collection(), "t1", 0, 1)])
        .unwrap_err();
    assert!(matches!(err, MarketError::InsufficientFunds(_)));
}

#[test]
fn accept_own_bid_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    mint_single(&mut contract, "t1", &buyer());
    contract
        .internal_create_bids(&buyer(), vec![order(single_collection(), "t1", 100, 1)], 100)
        .unwrap();

    let err = contract
        .internal_accept_bids(&buyer(), vec![fill(single_collection(), "t1", 0, 1)])
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn accept_bid_partial_fill_leaves_escrow_for_remainder() {
    let mut contract = new_contract();
    register_fractional(&mut contract, 0, vec![]);
    mint_fractional(&mut contract, "f1", &seller(), 4);
    contract
        .internal_create_bids(
            &buyer(),
            vec![order(fractional_collection(), "f1", 10, 10)],
            100,
        )
        .unwrap();

    contract
        .internal_accept_bids(&seller(), vec![fill(fractional_collection(), "f1", 0, 4)])
        .unwrap();

    assert_eq!(contract.get_escrow(buyer()).0, 60);
    let bids = contract.get_bids(fractional_collection(), "f1".into(), None, None);
    assert!(bids[0].active);
    assert_eq!(bids[0].quantity, 6);
    assert_eq!(
        contract.owned_quantity(&fractional_collection(), &buyer(), "f1"),
        4
    );
}

#[test]
fn accept_bid_with_drained_escrow_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    mint_single(&mut contract, "t1", &seller());
    contract
        .internal_create_bids(&buyer(), vec![order(single_collection(), "t1", 100, 1)], 100)
        .unwrap();

    // Force the invariant violation the engine must still catch.
    contract.debit_escrow(&buyer(), 100).unwrap();
    let err = contract
        .internal_accept_bids(&seller(), vec![fill(single_collection(), "t1", 0, 1)])
        .unwrap_err();
    assert!(matches!(err, MarketError::InsufficientFunds(_)));
}

#[test]
fn sale_log_appended_per_fill() {
    let mut contract = new_contract();
    register_fractional(&mut contract, 0, vec![]);
    mint_fractional(&mut contract, "f1", &seller(), 10);
    contract
        .internal_create_asks(&seller(), vec![order(fractional_collection(), "f1", 10, 10)])
        .unwrap();

    contract
        .internal_accept_asks(&buyer(), vec![fill(fractional_collection(), "f1", 0, 4)], 40)
        .unwrap();
    contract
        .internal_accept_asks(&buyer(), vec![fill(fractional_collection(), "f1", 0, 6)], 60)
        .unwrap();

    let history = contract.get_price_history(fractional_collection(), "f1".into(), None, None);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].quantity, 4);
    assert_eq!(history[1].quantity, 6);
    assert_eq!(history[0].seller_id, seller());
    assert_eq!(history[0].buyer_id, buyer());
    assert_eq!(history[0].unit_price, 10);
}
