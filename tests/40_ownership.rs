mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

/// Two identities on the same server: every cross-owner access path must be
/// closed off.
#[tokio::test]
async fn tasks_are_invisible_and_immutable_across_owners() -> Result<()> {
    let server = common::ensure_server().await?;

    let alice = common::client();
    common::register(&alice, &server.base_url, "alice-o", "alice-o@example.com", "alices-password")
        .await?;
    let bob = common::client();
    common::register(&bob, &server.base_url, "bob-o", "bob-o@example.com", "bobs-password")
        .await?;

    let created = common::create_task(&alice, &server.base_url, "alice's secret").await?;
    let id = created["data"]["id"].as_str().unwrap();

    // Bob's list never includes Alice's task
    let list = bob
        .get(format!("{}/todos", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(list["data"].as_array().unwrap().is_empty());

    // Bob cannot update it: the id exists, so the failure is Forbidden
    let update = bob
        .put(format!("{}/todos/{}", server.base_url, id))
        .json(&json!({ "completed": true }))
        .send()
        .await?;
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    // Nor delete it
    let delete = bob
        .delete(format!("{}/todos/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    // Alice's record is untouched by the failed attempts
    let list = alice
        .get(format!("{}/todos", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let tasks = list["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "alice's secret");
    assert_eq!(tasks[0]["completed"], false);
    Ok(())
}

/// The full journey a browser client takes: register, add two tasks,
/// complete one, sign out.
#[tokio::test]
async fn end_to_end_session_lifecycle() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::client();

    common::register(&client, &server.base_url, "walker", "walker@example.com", "walkers-password")
        .await?;

    common::create_task(&client, &server.base_url, "A").await?;
    let b = common::create_task(&client, &server.base_url, "B").await?;

    let list = client
        .get(format!("{}/todos", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let titles: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["B", "A"]);

    let done = client
        .put(format!(
            "{}/todos/{}",
            server.base_url,
            b["data"]["id"].as_str().unwrap()
        ))
        .json(&json!({ "completed": true }))
        .send()
        .await?;
    assert_eq!(done.status(), StatusCode::OK);

    let logout = client
        .post(format!("{}/auth/logout", server.base_url))
        .send()
        .await?;
    assert_eq!(logout.status(), StatusCode::OK);

    let list = client.get(format!("{}/todos", server.base_url)).send().await?;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
