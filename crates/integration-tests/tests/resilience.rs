//! Failure scenarios: the network breaks, the user's work survives.

use web_larek_core::Payment;
use web_larek_integration_tests::{loaded_storefront, sample_catalog, MockApi};
use web_larek_storefront::app::Storefront;
use web_larek_storefront::state::OrderField;
use web_larek_storefront::views::ModalScreen;

#[tokio::test]
async fn test_failed_catalog_load_leaves_storefront_empty() {
    let api = MockApi::new(sample_catalog());
    api.set_fail_list(true);

    let app = Storefront::new(api.clone());
    app.load_catalog().await;

    assert!(app.state().catalog().is_empty());
    assert!(app.page().borrow().catalog().is_empty());

    // A reload after the outage recovers.
    api.set_fail_list(false);
    app.load_catalog().await;
    assert_eq!(app.page().borrow().catalog().len(), 4);
}

#[tokio::test]
async fn test_failed_submission_keeps_everything_for_retry() {
    let (app, api) = loaded_storefront().await;
    app.click_catalog_card(0);
    app.click_preview_button();
    app.click_basket_button();
    app.click_checkout();
    app.click_payment(Payment::Card);
    app.input_field(OrderField::Address, "Main St 1");
    app.submit_order_form();
    app.input_field(OrderField::Email, "dev@example.com");
    app.input_field(OrderField::Phone, "+7 900 000 00 00");
    app.submit_contacts_form();
    assert!(app.take_submit_request());

    api.set_fail_submit(true);
    assert!(app.submit_order().await.is_none());

    // No success screen, nothing cleared, nothing recorded server-side.
    assert_eq!(app.modal().borrow().screen(), Some(ModalScreen::Contacts));
    assert_eq!(app.state().basket_count(), 1);
    assert_eq!(app.state().order().address, "Main St 1");
    assert!(api.submissions().is_empty());

    // The user clicks submit again once the outage passes.
    api.set_fail_submit(false);
    app.submit_contacts_form();
    assert!(app.take_submit_request());
    assert!(app.submit_order().await.is_some());

    assert_eq!(api.submissions().len(), 1);
    assert_eq!(app.modal().borrow().screen(), Some(ModalScreen::Success));
    assert_eq!(app.state().basket_count(), 0);
}

#[tokio::test]
async fn test_stale_gestures_after_failed_load_are_harmless() {
    let api = MockApi::new(sample_catalog());
    api.set_fail_list(true);
    let app = Storefront::new(api.clone());
    app.load_catalog().await;

    // Clicks against an empty gallery and basket go nowhere.
    app.click_catalog_card(0);
    app.click_preview_button();
    app.click_checkout();

    assert!(!app.modal().borrow().active());
    assert_eq!(app.state().basket_count(), 0);
}

#[tokio::test]
async fn test_submit_without_contacts_request_is_refused() {
    let (app, api) = loaded_storefront().await;
    app.click_catalog_card(0);
    app.click_preview_button();

    // The driver calling the async edge early gets a refusal, not a panic.
    assert!(app.submit_order().await.is_none());
    assert!(api.submissions().is_empty());
    assert_eq!(app.state().basket_count(), 1);
}
