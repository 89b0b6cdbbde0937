use restaurant_orders::config::RestaurantConfig;
use restaurant_orders::error::RestaurantError;
use restaurant_orders::lifecycle::Restaurant;
use restaurant_orders::model::AgentAction;
use std::path::Path;

fn write_inputs(dir: &Path, menu: &str, clients: &str) -> RestaurantConfig {
    let config = RestaurantConfig::in_dir(dir);
    std::fs::write(&config.menu_path, menu).expect("Failed to write menu");
    std::fs::write(&config.clients_path, clients).expect("Failed to write clients");
    config
}

fn read_agents(config: &RestaurantConfig) -> Vec<AgentAction> {
    let text = std::fs::read_to_string(&config.output_path).expect("Agents file missing");
    serde_json::from_str(&text).expect("Agents file is not valid JSON")
}

/// Soup is on the menu, Bread is not.
#[tokio::test]
async fn test_single_client_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        r#"[{"name":"Soup","price":150.0}]"#,
        r#"[{"name":"Alice","order":["Soup","Bread"]}]"#,
    );

    let summary = Restaurant::new(config.clone())
        .run_until(std::future::pending())
        .await
        .expect("Run failed");

    assert_eq!(summary.clients, 1);
    assert_eq!(summary.actions, 2);
    assert_eq!(summary.grand_total, 150.0);
    assert!(!summary.interrupted);

    let agents = read_agents(&config);
    assert_eq!(agents.len(), 2);
    assert!(agents.contains(&AgentAction::new("Cook", "Preparing", "Dish Soup")));
    assert!(agents.contains(&AgentAction::new("Cook", "Reports", "Dish Bread unavailable")));
}

#[tokio::test]
async fn test_empty_order_writes_no_actions() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        r#"[{"name":"Soup","price":150.0}]"#,
        r#"[{"name":"Bob","order":[]}]"#,
    );

    let summary = Restaurant::new(config.clone())
        .run_until(std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.actions, 0);
    assert!(read_agents(&config).is_empty());
}

/// Many clients across four workers: every action lands in the file exactly once,
/// grouped by client in input order.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_clients_in_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let clients: Vec<serde_json::Value> = (0..40)
        .map(|i| serde_json::json!({ "name": format!("guest_{i}"), "order": ["Tea", "Cake"] }))
        .collect();
    let config = write_inputs(
        dir.path(),
        r#"[{"name":"Tea","price":40.0},{"name":"Soup","price":150.0}]"#,
        &serde_json::to_string(&clients).unwrap(),
    );

    let summary = Restaurant::new(config.clone())
        .run_until(std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.clients, 40);
    assert_eq!(summary.actions, 80);
    assert_eq!(summary.grand_total, 40.0 * 40.0);

    let agents = read_agents(&config);
    assert_eq!(agents.len(), 80);
    for pair in agents.chunks(2) {
        assert_eq!(pair[0], AgentAction::preparing("Tea"));
        assert_eq!(pair[1], AgentAction::unavailable("Cake"));
    }
}

#[tokio::test]
async fn test_missing_menu_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = RestaurantConfig::in_dir(dir.path());
    std::fs::write(&config.clients_path, r#"[{"name":"Alice","order":["Soup"]}]"#).unwrap();

    let err = Restaurant::new(config.clone())
        .run_until(std::future::pending())
        .await
        .unwrap_err();

    assert!(matches!(err, RestaurantError::DataLoad { .. }));
    assert_eq!(err.path(), Some(config.menu_path.as_path()));
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn test_malformed_clients_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        r#"[{"name":"Soup","price":150.0}]"#,
        r#"[{"name":"Alice","order":"Soup"}]"#,
    );

    let err = Restaurant::new(config.clone())
        .run_until(std::future::pending())
        .await
        .unwrap_err();

    assert_eq!(err.path(), Some(config.clients_path.as_path()));
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(
        dir.path(),
        r#"[{"name":"Soup","price":150.0}]"#,
        r#"[{"name":"Alice","order":["Soup"]}]"#,
    );
    config.output_path = dir.path().join("no_such_dir").join("agents.json");

    let err = Restaurant::new(config)
        .run_until(std::future::pending())
        .await
        .unwrap_err();

    assert!(matches!(err, RestaurantError::DataWrite { .. }));
}

/// With a single worker and a one-slot queue, the clients ahead of the last one
/// finish while orders are still being submitted. An immediate shutdown signal then
/// cuts the join short and those finished clients still reach the agents file.
#[tokio::test]
async fn test_interrupted_run_still_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let clients: Vec<serde_json::Value> = (0..6)
        .map(|i| serde_json::json!({ "name": format!("guest_{i}"), "order": ["Soup"] }))
        .collect();
    let mut config = write_inputs(
        dir.path(),
        r#"[{"name":"Soup","price":150.0}]"#,
        &serde_json::to_string(&clients).unwrap(),
    )
    .with_pool_size(1);
    config.queue_capacity = 1;

    let summary = Restaurant::new(config.clone())
        .run_until(std::future::ready(()))
        .await
        .unwrap();

    assert!(summary.interrupted);
    assert!(summary.clients >= 1);
    assert!(summary.clients < 6);
    assert_eq!(summary.actions, summary.clients);
    assert_eq!(summary.grand_total, 150.0 * summary.clients as f64);

    let agents = read_agents(&config);
    assert_eq!(agents.len(), summary.actions);
    assert!(agents.iter().all(|a| *a == AgentAction::preparing("Soup")));
}
