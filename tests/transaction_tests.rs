/// Transaction stack tests
///
/// Nested BEGIN/COMMIT/ROLLBACK semantics over the live store.
/// Run with: cargo test --test transaction_tests
use txkv::{Client, CommandOutcome};

fn run(client: &Client, line: &str) -> CommandOutcome {
    client
        .execute(line)
        .unwrap_or_else(|| panic!("expected an outcome for {:?}", line))
}

#[test]
fn test_set_then_get() {
    let client = Client::new();
    assert!(run(&client, "SET a 1").is_success());
    assert_eq!(run(&client, "GET a").payload(), Some("1"));
}

#[test]
fn test_get_never_inserted() {
    let client = Client::new();
    assert_eq!(run(&client, "GET ghost").message(), Some("key not set"));
}

#[test]
fn test_delete_never_inserted() {
    let client = Client::new();
    assert_eq!(run(&client, "DELETE ghost").message(), Some("key not set"));
}

#[test]
fn test_count_matches_and_zero_is_success() {
    let client = Client::new();
    run(&client, "SET a red");
    run(&client, "SET b red");
    run(&client, "SET c blue");

    assert_eq!(run(&client, "COUNT red").payload(), Some("2"));
    assert_eq!(run(&client, "COUNT blue").payload(), Some("1"));
    assert_eq!(run(&client, "COUNT green").payload(), Some("0"));
}

#[test]
fn test_commit_without_transaction() {
    let client = Client::new();
    assert_eq!(run(&client, "COMMIT").message(), Some("no transaction"));
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_rollback_without_transaction() {
    let client = Client::new();
    assert_eq!(run(&client, "ROLLBACK").message(), Some("no transaction"));
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_depth_never_goes_negative() {
    let client = Client::new();
    run(&client, "BEGIN");
    assert!(run(&client, "COMMIT").is_success());
    assert!(run(&client, "COMMIT").is_failure());
    assert!(run(&client, "ROLLBACK").is_failure());
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_rollback_restores_pre_begin_state() {
    let client = Client::new();
    run(&client, "SET a 1");
    run(&client, "BEGIN");
    run(&client, "DELETE a");
    run(&client, "SET b 2");
    run(&client, "ROLLBACK");

    assert_eq!(run(&client, "GET a").payload(), Some("1"));
    assert_eq!(run(&client, "GET b").message(), Some("key not set"));
}

#[test]
fn test_commit_retains_state() {
    let client = Client::new();
    run(&client, "BEGIN");
    run(&client, "SET a 1");
    assert!(run(&client, "COMMIT").is_success());

    assert_eq!(run(&client, "GET a").payload(), Some("1"));
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_nested_rollback_undoes_only_innermost() {
    let client = Client::new();
    run(&client, "BEGIN");
    run(&client, "SET a 1");
    run(&client, "BEGIN");
    run(&client, "SET a 2");
    run(&client, "ROLLBACK");

    assert_eq!(run(&client, "GET a").payload(), Some("1"));
    assert_eq!(client.transaction_depth(), 1);
}

#[test]
fn test_inner_commit_is_pending_in_outer_transaction() {
    let client = Client::new();
    run(&client, "BEGIN");
    run(&client, "SET a 1");
    run(&client, "BEGIN");
    run(&client, "SET a 2");
    run(&client, "COMMIT");

    // The committed inner change still belongs to the outer transaction.
    assert_eq!(run(&client, "GET a").payload(), Some("2"));
    run(&client, "ROLLBACK");
    assert_eq!(run(&client, "GET a").message(), Some("key not set"));
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_deeply_nested_rollbacks_unwind_in_order() {
    let client = Client::new();
    for depth in 1..=5 {
        run(&client, "BEGIN");
        run(&client, &format!("SET k {}", depth));
    }
    assert_eq!(client.transaction_depth(), 5);

    for depth in (1..=4).rev() {
        run(&client, "ROLLBACK");
        assert_eq!(run(&client, "GET k").payload(), Some(format!("{}", depth).as_str()));
    }
    run(&client, "ROLLBACK");
    assert_eq!(run(&client, "GET k").message(), Some("key not set"));
    assert_eq!(client.transaction_depth(), 0);
}

#[test]
fn test_count_respects_rollback() {
    let client = Client::new();
    run(&client, "SET a red");
    run(&client, "BEGIN");
    run(&client, "SET b red");
    assert_eq!(run(&client, "COUNT red").payload(), Some("2"));
    run(&client, "ROLLBACK");
    assert_eq!(run(&client, "COUNT red").payload(), Some("1"));
}

#[test]
fn test_engine_stays_usable_after_every_error() {
    let client = Client::new();
    assert!(run(&client, "COMMIT").is_failure());
    assert!(run(&client, "GET nothing").is_failure());
    assert!(run(&client, "SET a").is_failure());
    assert!(run(&client, "NONSENSE").is_failure());

    assert!(run(&client, "SET a 1").is_success());
    assert_eq!(run(&client, "GET a").payload(), Some("1"));
}
