//! Order creation flow tests over scripted port mocks.

use std::sync::Arc;

use alloy_primitives::{address, Address, U256};
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal_macros::dec;

use storefront::domain::{TxOutcome, ORDER_TTL_SECS};
use storefront::error::{ChainError, Error};
use storefront::service::OrderService;
use storefront::testkit::chain::{ScriptedApproval, ScriptedMarketplace, StaticAccount};

const NFT: Address = address!("0xF87E31492Faf9A91B02Ee0dEAAd50d51d56D5d4d");
const MARKETPLACE: Address = address!("0x8e5660b4Ab70168b5a6fEeA0e0315cb49c8Cd539");
const SELLER: Address = address!("0x00000000000000000000000000000000000000aa");

fn service_with(
    approval: &ScriptedApproval,
    marketplace: &ScriptedMarketplace,
) -> OrderService {
    OrderService::new(
        Arc::new(StaticAccount::new(SELLER)),
        Arc::new(approval.clone()),
        Arc::new(marketplace.clone()),
    )
}

#[tokio::test]
async fn skips_approval_when_already_granted() {
    let approval = ScriptedApproval::new().with_check_results(vec![Ok(true)]);
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();

    assert_eq!(approval.check_count(), 1);
    assert_eq!(approval.set_count(), 0, "approval must not be re-granted");
    assert_eq!(marketplace.create_count(), 1);
}

#[tokio::test]
async fn grants_approval_before_order_when_missing() {
    let approval = ScriptedApproval::new().with_check_results(vec![Ok(false)]);
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();

    assert_eq!(approval.set_count(), 1);
    assert_eq!(approval.set_calls(), vec![(NFT, MARKETPLACE, true)]);
    assert_eq!(marketplace.create_count(), 1);
}

#[tokio::test]
async fn approval_grant_lands_before_order_submission() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let approval = ScriptedApproval::new()
        .with_check_results(vec![Ok(false)])
        .with_journal(journal.clone());
    let marketplace = ScriptedMarketplace::new(MARKETPLACE).with_journal(journal.clone());
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();

    assert_eq!(
        *journal.lock(),
        vec!["is_approved_for_all", "set_approval_for_all", "create_order"],
    );
}

#[tokio::test]
async fn converts_whole_price_to_wei() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();

    let requests = marketplace.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].price_wei.to_string(), "1000000000000000000");
}

#[tokio::test]
async fn converts_fractional_price_to_wei() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(42u64), dec!(0.5), None)
        .await
        .unwrap();

    assert_eq!(
        marketplace.requests()[0].price_wei.to_string(),
        "500000000000000000"
    );
}

#[tokio::test]
async fn submits_full_payload() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    service
        .create_order(NFT, U256::from(7u64), dec!(2), Some(1_900_000_000))
        .await
        .unwrap();

    let request = &marketplace.requests()[0];
    assert_eq!(request.nft_address, NFT);
    assert_eq!(request.asset_id, U256::from(7u64));
    assert_eq!(request.expires_at, 1_900_000_000);
    assert_eq!(request.sender, SELLER);
}

#[tokio::test]
async fn defaults_expiry_to_thirty_days_from_call_time() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    let before = Utc::now().timestamp() as u64;
    service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();
    let after = Utc::now().timestamp() as u64;

    let expires_at = marketplace.requests()[0].expires_at;
    assert!(expires_at >= before + ORDER_TTL_SECS);
    assert!(expires_at <= after + ORDER_TTL_SECS);
}

#[tokio::test]
async fn passes_supplied_expiry_through_unchanged() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    // Already in the past; the flow performs no validation
    service
        .create_order(NFT, U256::from(42u64), dec!(1), Some(1))
        .await
        .unwrap();

    assert_eq!(marketplace.requests()[0].expires_at, 1);
}

#[tokio::test]
async fn returns_order_outcome_unchanged() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE).with_create_results(vec![Ok(
        TxOutcome {
            tx_hash: "0xdeadbeef".into(),
        },
    )]);
    let service = service_with(&approval, &marketplace);

    let outcome = service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await
        .unwrap();

    assert_eq!(outcome.tx_hash, "0xdeadbeef");
}

#[tokio::test]
async fn approval_check_failure_aborts_before_order() {
    let approval = ScriptedApproval::new()
        .with_check_results(vec![Err(ChainError::Network("rpc down".into()).into())]);
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    let result = service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await;

    assert!(matches!(result, Err(Error::Chain(ChainError::Network(_)))));
    assert_eq!(approval.set_count(), 0);
    assert_eq!(marketplace.create_count(), 0, "order must never be submitted");
}

#[tokio::test]
async fn approval_grant_failure_aborts_before_order() {
    let approval = ScriptedApproval::new()
        .with_check_results(vec![Ok(false)])
        .with_set_results(vec![Err(ChainError::Rejected("user declined".into()).into())]);
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    let result = service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await;

    assert!(matches!(result, Err(Error::Chain(ChainError::Rejected(_)))));
    assert_eq!(marketplace.create_count(), 0, "order must never be submitted");
}

#[tokio::test]
async fn order_rejection_propagates_unchanged() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE)
        .with_create_results(vec![Err(ChainError::Rejected("reverted".into()).into())]);
    let service = service_with(&approval, &marketplace);

    let result = service
        .create_order(NFT, U256::from(42u64), dec!(1), None)
        .await;

    assert!(matches!(result, Err(Error::Chain(ChainError::Rejected(_)))));
}

#[tokio::test]
async fn sub_wei_price_fails_before_submission() {
    let approval = ScriptedApproval::new();
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    let result = service
        .create_order(NFT, U256::from(42u64), dec!(0.0000000000000000001), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Chain(ChainError::InvalidInput { field: "price", .. }))
    ));
    assert_eq!(marketplace.create_count(), 0);
}

#[tokio::test]
async fn redundant_concurrent_approvals_are_tolerated() {
    // Two calls racing past the same "not approved" read both grant the
    // flag; the flow does not coordinate them and both orders go through.
    let approval = ScriptedApproval::new().with_check_results(vec![Ok(false), Ok(false)]);
    let marketplace = ScriptedMarketplace::new(MARKETPLACE);
    let service = service_with(&approval, &marketplace);

    let (first, second) = tokio::join!(
        service.create_order(NFT, U256::from(1u64), dec!(1), None),
        service.create_order(NFT, U256::from(2u64), dec!(1), None),
    );

    first.unwrap();
    second.unwrap();
    assert_eq!(approval.set_count(), 2);
    assert_eq!(marketplace.create_count(), 2);
}
