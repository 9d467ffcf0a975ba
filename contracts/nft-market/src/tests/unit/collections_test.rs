use crate::tests::test_utils::*;
use crate::*;

#[test]
fn register_sets_listed_at() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    let collection = contract.get_collection(single_collection()).unwrap();
    assert!(collection.listed_at > 0);
    assert!(!collection.is_fractional);
    assert_eq!(collection.royalty_rate_bps, 300);
    assert_eq!(collection.volume_traded, 0);
    assert!(collection.minted_by_platform);
}

#[test]
fn register_twice_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    let err = contract
        .internal_register_collection(
            &owner(),
            single_collection(),
            collection_params(false, 300, creators_60_40()),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn register_by_stranger_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_register_collection(
            &buyer(),
            single_collection(),
            collection_params(false, 0, vec![]),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn register_by_approved_factory_succeeds() {
    let mut contract = new_contract();
    contract.approved_factories.insert(buyer());

    contract
        .internal_register_collection(
            &buyer(),
            single_collection(),
            collection_params(false, 0, vec![]),
        )
        .unwrap();

    let collection = contract.get_collection(single_collection()).unwrap();
    assert!(!collection.minted_by_platform);
}

#[test]
fn creator_shares_must_sum_to_full_or_zero() {
    let mut contract = new_contract();

    let bad = vec![
        Creator {
            recipient: creator_a(),
            share_bps: 6_000,
        },
        Creator {
            recipient: creator_b(),
            share_bps: 3_000,
        },
    ];
    let err = contract
        .internal_register_collection(
            &owner(),
            single_collection(),
            collection_params(false, 300, bad),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));

    // Zero royalty with an empty list is fine.
    contract
        .internal_register_collection(
            &owner(),
            single_collection(),
            collection_params(false, 0, vec![]),
        )
        .unwrap();
}

#[test]
fn royalty_rate_at_or_above_denominator_fails() {
    let mut contract = new_contract();
    let err = contract
        .internal_register_collection(
            &owner(),
            single_collection(),
            collection_params(false, 10_000, creators_60_40()),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn creator_list_is_stored_in_order() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    let creators = contract.get_creators(single_collection());
    assert_eq!(creators.len(), 2);
    assert_eq!(creators[0].recipient, creator_a());
    assert_eq!(creators[0].share_bps, 6_000);
    assert_eq!(creators[1].share_bps, 4_000);
}

#[test]
fn remove_collection_deletes_record_and_creators() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    contract
        .internal_remove_collection(&owner(), &single_collection())
        .unwrap();
    assert!(contract.get_collection(single_collection()).is_none());
    assert!(contract.get_creators(single_collection()).is_empty());
}

#[test]
fn remove_collection_by_stranger_fails() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    let err = contract
        .internal_remove_collection(&buyer(), &single_collection())
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn set_collection_owner_rewrites_created_by() {
    let mut contract = new_contract();
    register_single(&mut contract, 300, creators_60_40());

    contract
        .internal_set_collection_owner(&owner(), &single_collection(), seller())
        .unwrap();
    let collection = contract.get_collection(single_collection()).unwrap();
    assert_eq!(collection.created_by, seller());
}

#[test]
fn get_collections_paginates() {
    let mut contract = new_contract();
    register_single(&mut contract, 0, vec![]);
    register_fractional(&mut contract, 0, vec![]);

    assert_eq!(contract.get_collections(None, None).len(), 2);
    assert_eq!(contract.get_collections(Some(1), None).len(), 1);
    assert_eq!(contract.get_collections(None, Some(1)).len(), 1);
}
