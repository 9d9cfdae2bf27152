//! # Balance Query Flow Tests
//!
//! Drive the app headlessly through `next_event` with mock providers.

mod common;

use std::sync::Arc;

use common::*;
use tokenscope::core::error::ProviderError;
use tokenscope::ViewStatus;

#[tokio::test]
async fn test_single_positive_balance_is_loaded() {
    // Arrange
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0x1", 500), entry("0x2", 0)])
            .with_metadata("0x1", "FOO", 2),
    );
    let mut app = app_with_indexer(indexer.clone());
    app.handle_address_input(HOLDER.to_string());

    // Act
    app.handle_check_balances_click();
    assert_eq!(app.state.read().view.status(), &ViewStatus::Fetching);
    assert!(app.next_event().await);

    // Assert
    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Loaded);
    let holdings = state.visible_holdings();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].display_amount(), "5.00 FOO");
    assert_eq!(indexer.balance_calls(), 1);
    assert_eq!(indexer.metadata_calls(), 1);
}

#[tokio::test]
async fn test_invalid_address_makes_no_network_calls() {
    let indexer = Arc::new(MockIndexer::new().with_balances(vec![entry("0x1", 1)]));
    let mut app = app_with_indexer(indexer.clone());

    for input in [
        "not-an-address",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD", // bad checksum
        "0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea",   // too short
    ] {
        app.handle_address_input(input.to_string());
        app.handle_check_balances_click();
        assert_eq!(app.state.read().view.status(), &ViewStatus::Invalid, "{}", input);
    }

    assert_eq!(indexer.network_calls(), 0);
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_empty_address_is_a_no_op() {
    let indexer = Arc::new(MockIndexer::new());
    let mut app = app_with_indexer(indexer.clone());

    app.handle_check_balances_click();

    assert_eq!(app.state.read().view.status(), &ViewStatus::Idle);
    assert_eq!(indexer.network_calls(), 0);
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_no_positive_balances_is_not_found() {
    for balances in [Vec::new(), vec![entry("0x1", 0), entry("0x2", 0)]] {
        let indexer = Arc::new(MockIndexer::new().with_balances(balances));
        let mut app = app_with_indexer(indexer.clone());
        app.handle_address_input(HOLDER.to_string());

        app.handle_check_balances_click();
        app.next_event().await;

        let state = app.state.read();
        assert_eq!(state.view.status(), &ViewStatus::NotFound);
        assert!(state.view.holdings().is_empty());
        assert_eq!(indexer.metadata_calls(), 0);
    }
}

#[tokio::test]
async fn test_not_found_clears_previous_results() {
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0x1", 5)])
            .with_balances(Vec::new()),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    app.next_event().await;
    assert_eq!(app.state.read().view.holdings().len(), 1);

    app.handle_check_balances_click();
    app.next_event().await;

    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::NotFound);
    assert!(state.view.holdings().is_empty());
}

#[tokio::test]
async fn test_filtering_preserves_order_and_alignment() {
    // Arrange: 0xa resolves last
    let gate = Gate::new();
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![
                entry("0xa", 1),
                entry("0xz", 0),
                entry("0xb", 2),
                entry("0xy", 0),
                entry("0xc", 3),
            ])
            .with_gate("0xa", gate.clone()),
    );
    let mut app = app_with_indexer(indexer.clone());
    app.handle_address_input(HOLDER.to_string());

    // Act
    app.handle_check_balances_click();
    gate.wait_entered().await;
    gate.open();
    app.next_event().await;

    // Assert
    let state = app.state.read();
    let contracts: Vec<_> = state
        .visible_holdings()
        .iter()
        .map(|h| h.balance.contract_address.as_str())
        .collect();
    assert_eq!(contracts, vec!["0xa", "0xb", "0xc"]);
    for holding in state.visible_holdings() {
        assert_eq!(holding.metadata.symbol, derived_symbol(&holding.balance.contract_address));
    }
    assert_eq!(indexer.metadata_calls(), 3);
}

#[tokio::test]
async fn test_one_failing_metadata_publishes_nothing() {
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0xa", 1), entry("0xb", 2), entry("0xc", 3)])
            .with_metadata_error(
                "0xb",
                ProviderError::Rpc { code: -32000, message: "metadata unavailable".to_string() },
            ),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    app.next_event().await;

    let state = app.state.read();
    assert!(matches!(state.view.status(), ViewStatus::Failed(reason) if reason.contains("metadata unavailable")));
    assert!(state.view.holdings().is_empty());
    assert!(state.visible_holdings().is_empty());
}

#[tokio::test]
async fn test_balance_failure_is_distinct_and_keeps_prior_results() {
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0x1", 5)])
            .with_balance_error(ProviderError::Http { status: 503 }),
    );
    let mut app = app_with_indexer(indexer.clone());
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    app.next_event().await;

    app.handle_check_balances_click();
    app.next_event().await;

    let state = app.state.read();
    assert_eq!(
        state.view.status(),
        &ViewStatus::Failed("Indexer returned HTTP 503".to_string())
    );
    assert_ne!(state.view.status(), &ViewStatus::NotFound);
    assert_eq!(state.view.holdings().len(), 1);
    // The failed run stops at the balance call
    assert_eq!(indexer.metadata_calls(), 1);
}

#[tokio::test]
async fn test_failed_query_can_be_retriggered() {
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balance_error(ProviderError::Network("connection reset".to_string()))
            .with_balances(vec![entry("0x1", 7)]),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    app.next_event().await;
    assert!(matches!(app.state.read().view.status(), ViewStatus::Failed(_)));

    app.handle_check_balances_click();
    app.next_event().await;
    assert_eq!(app.state.read().view.status(), &ViewStatus::Loaded);
}

#[tokio::test]
async fn test_earlier_query_finishing_last_is_discarded() {
    // Arrange: first query's only token is held at its metadata lookup
    let gate = Gate::new();
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0xaaa", 100)])
            .with_balances(vec![entry("0xbbb", 200)])
            .with_gate("0xaaa", gate.clone()),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    gate.wait_entered().await;

    // Act: second trigger completes first
    app.handle_check_balances_click();
    app.next_event().await;
    assert_eq!(app.state.read().view.status(), &ViewStatus::Loaded);

    gate.open();
    app.next_event().await;

    // Assert
    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Loaded);
    assert_eq!(state.visible_holdings().len(), 1);
    assert_eq!(state.visible_holdings()[0].balance.contract_address, "0xbbb");
}

#[tokio::test]
async fn test_stale_result_does_not_end_newer_fetch() {
    let first_gate = Gate::new();
    let second_gate = Gate::new();
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0xaaa", 100)])
            .with_balances(vec![entry("0xbbb", 200)])
            .with_gate("0xaaa", first_gate.clone())
            .with_gate("0xbbb", second_gate.clone()),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    first_gate.wait_entered().await;
    app.handle_check_balances_click();
    second_gate.wait_entered().await;

    // First result arrives while the second is still in flight
    first_gate.open();
    app.next_event().await;
    assert_eq!(app.state.read().view.status(), &ViewStatus::Fetching);

    second_gate.open();
    app.next_event().await;

    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Loaded);
    assert_eq!(state.visible_holdings()[0].balance.contract_address, "0xbbb");
}

#[tokio::test]
async fn test_address_edit_makes_in_flight_query_stale() {
    let gate = Gate::new();
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0xaaa", 100)])
            .with_gate("0xaaa", gate.clone()),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    gate.wait_entered().await;

    app.handle_address_input(OTHER_HOLDER.to_string());
    assert_eq!(app.state.read().view.status(), &ViewStatus::Idle);

    gate.open();
    app.next_event().await;

    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Idle);
    assert!(state.visible_holdings().is_empty());
    assert_eq!(state.address, OTHER_HOLDER);
}

#[tokio::test]
async fn test_hide_returns_to_idle_and_keeps_address() {
    let indexer = Arc::new(MockIndexer::new().with_balances(vec![entry("0x1", 5)]));
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    app.next_event().await;
    assert_eq!(app.state.read().view.status(), &ViewStatus::Loaded);

    app.handle_hide_results_click();

    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Idle);
    assert!(state.visible_holdings().is_empty());
    assert_eq!(state.address, HOLDER);
}

#[tokio::test]
async fn test_input_is_stored_verbatim() {
    let mut app = app_with_indexer(Arc::new(MockIndexer::new()));

    app.handle_address_input("  0xABC ".to_string());

    assert_eq!(app.state.read().address, "  0xABC ");
    assert_eq!(app.state.read().view.status(), &ViewStatus::Idle);
}

#[tokio::test]
async fn test_truncated_listing_is_loaded_and_flagged() {
    let indexer = Arc::new(
        MockIndexer::new()
            .with_truncated_balances(vec![entry("0x1", 500)])
            .with_metadata("0x1", "FOO", 2),
    );
    let mut app = app_with_indexer(indexer);
    app.handle_address_input(HOLDER.to_string());

    app.handle_check_balances_click();
    assert!(app.next_event().await);

    let state = app.state.read();
    assert_eq!(state.view.status(), &ViewStatus::Loaded);
    assert!(state.view.is_truncated());
    assert_eq!(state.visible_holdings()[0].display_amount(), "5.00 FOO");
}

#[tokio::test]
async fn test_next_event_ends_when_work_is_done() {
    let gate = Gate::new();
    let indexer = Arc::new(
        MockIndexer::new()
            .with_balances(vec![entry("0xaaa", 100)])
            .with_balances(vec![entry("0xbbb", 200)])
            .with_gate("0xaaa", gate.clone()),
    );
    let mut app = app_with_indexer(indexer);
    assert!(!app.next_event().await);

    app.handle_address_input(HOLDER.to_string());
    app.handle_check_balances_click();
    gate.wait_entered().await;
    app.handle_check_balances_click();
    gate.open();

    // Both results are delivered, the stale one included, then the loop ends
    let mut handled = 0;
    while app.next_event().await {
        handled += 1;
    }
    assert_eq!(handled, 2);
    assert!(!app.has_pending_work());
    assert_eq!(app.state.read().visible_holdings()[0].balance.contract_address, "0xbbb");
}

#[tokio::test]
async fn test_rejected_trigger_leaves_nothing_to_wait_for() {
    let indexer = Arc::new(MockIndexer::new());
    let mut app = app_with_indexer(indexer);

    app.handle_address_input("not-an-address".to_string());
    app.handle_check_balances_click();

    assert!(!app.next_event().await);
}
