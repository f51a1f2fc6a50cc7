//! Overlapping operations on one client run one after another.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::TestContext;
use serde_json::json;
use userdir_business::UserRecord;

#[tokio::test]
async fn test_concurrent_adds_do_not_interleave() {
    let ctx = TestContext::new().await;
    ctx.mock_status_delayed("POST", 201, Duration::from_millis(50))
        .await;
    ctx.mock_list_once(json!([{ "id": 1, "name": "B" }])).await;
    ctx.mock_list_once(json!([{ "id": 1, "name": "B" }, { "id": 2, "name": "C" }]))
        .await;

    let b = UserRecord::new().with_field("name", "B");
    let c = UserRecord::new().with_field("name", "C");
    let (first, second) = tokio::join!(ctx.client.add(&b), ctx.client.add(&c));

    first.expect("first add should succeed");
    second.expect("second add should succeed");
    assert_eq!(
        ctx.request_methods().await,
        ["POST", "GET", "POST", "GET"]
    );
    assert_eq!(
        ctx.bodies("POST").await,
        [json!({ "name": "B" }), json!({ "name": "C" })]
    );
    assert_eq!(ctx.client.users().len(), 2);
}

#[tokio::test]
async fn test_fetch_waits_for_running_mutation() {
    let ctx = TestContext::new().await;
    ctx.mock_status_delayed("DELETE", 200, Duration::from_millis(50))
        .await;
    ctx.mock_list_once(json!([])).await;
    ctx.mock_list_once(json!([{ "id": 9, "name": "Z" }])).await;

    let (removed, fetched) = tokio::join!(ctx.client.remove(1), ctx.client.fetch_all());

    removed.expect("remove should succeed");
    fetched.expect("fetch should succeed");
    assert_eq!(ctx.request_methods().await, ["DELETE", "GET", "GET"]);
    assert_eq!(
        ctx.client.users(),
        vec![UserRecord::new().with_id(9).with_field("name", "Z")]
    );
}

#[tokio::test]
async fn test_shared_client_across_tasks() {
    let ctx = TestContext::new().await;
    ctx.mock_status("POST", 201).await;
    ctx.mock_list_once(json!([{ "id": 1, "name": "A" }])).await;

    let TestContext {
        mock_server,
        client,
    } = ctx;
    let client = Arc::new(client);
    let task_client = Arc::clone(&client);

    tokio::spawn(async move {
        task_client
            .add(&UserRecord::new().with_field("name", "A"))
            .await
    })
    .await
    .expect("task should not panic")
    .expect("add should succeed");

    assert_eq!(
        client.users(),
        vec![UserRecord::new().with_id(1).with_field("name", "A")]
    );
    drop(mock_server);
}
