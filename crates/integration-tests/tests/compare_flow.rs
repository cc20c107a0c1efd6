//! The comparison selection workflow.

#![allow(clippy::unwrap_used)]

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use zenith_core::ProductId;
use zenith_core::compare::{AddOutcome, CompareStage};
use zenith_integration_tests::{TestContext, product_json};
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::compare::CompareFlow;
use zenith_storefront::pages::products::add_to_compare;

#[tokio::test]
async fn selection_enforces_capacity_and_persists() {
    let mut ctx = TestContext::new().await;

    for id in [1, 2, 3] {
        let notice = add_to_compare(&mut ctx.store, ProductId::new(id)).unwrap();
        assert_eq!(notice.outcome, AddOutcome::Added);
    }

    // Duplicate
    let notice = add_to_compare(&mut ctx.store, ProductId::new(2)).unwrap();
    assert_eq!(notice.outcome, AddOutcome::AlreadyPresent);
    assert_eq!(notice.message(), "Product already in comparison list");

    // Beyond capacity: rejected, set unchanged
    let notice = add_to_compare(&mut ctx.store, ProductId::new(4)).unwrap();
    assert_eq!(notice.outcome, AddOutcome::CapacityExceeded);

    let saved = ctx.store.compare_list();
    assert_eq!(saved.len(), 3);
    assert!(!saved.contains(ProductId::new(4)));
}

#[tokio::test]
async fn one_pick_cannot_compare_and_makes_no_request() {
    let mut ctx = TestContext::new().await;
    add_to_compare(&mut ctx.store, ProductId::new(1)).unwrap();

    let mut flow = CompareFlow::from_store(&ctx.store);
    assert!(!flow.can_compare());

    let err = flow.compare(&ctx.api).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(flow.stage(), CompareStage::Selecting);
    assert_eq!(ctx.server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn two_picks_compare_and_return_to_selection() {
    let mut ctx = TestContext::new().await;
    add_to_compare(&mut ctx.store, ProductId::new(3)).unwrap();
    add_to_compare(&mut ctx.store, ProductId::new(4)).unwrap();

    Mock::given(method("GET"))
        .and(path("/products/compare"))
        .and(query_param("ids", "3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            product_json(3, "NOVA Surgical", 89000, 3, "MEDICAL"),
            product_json(4, "EPSI-9 Defense", 1_149_000, 4, "GOVERNMENT"),
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut flow = CompareFlow::from_store(&ctx.store);
    assert!(flow.can_compare());

    let view = flow.compare(&ctx.api).await.unwrap();
    assert_eq!(flow.stage(), CompareStage::Comparing);
    assert_eq!(view.cards.len(), 2);

    let requirement_row = view
        .rows
        .iter()
        .find(|row| row.label == "Buyer Requirement")
        .unwrap();
    assert_eq!(
        requirement_row.values,
        vec!["Medical Account Required", "Government Authorization Required"]
    );

    // Back keeps the picks; clear drops them
    flow.back();
    assert_eq!(flow.stage(), CompareStage::Selecting);
    assert_eq!(flow.selection().len(), 2);

    flow.clear(&mut ctx.store).unwrap();
    assert!(flow.selection().is_empty());
    assert!(ctx.store.compare_list().is_empty());
}
