//! CRUD behaviour against the stateful fake server.

mod common;

use casdoor_sdk::{
    Application, Client, Entity, EntityApi, Group, Organization, Permission, Product, Role,
    SdkError, User, Webhook,
};
use common::fake_server::{FakeServer, UNAUTHORIZED_MSG};
use common::{APPLICATION, CLIENT_ID, CLIENT_SECRET, ORGANIZATION, test_client};
use serde_json::json;
use std::fmt::Debug;
use tokio_test::{assert_err, assert_ok};

async fn start() -> (FakeServer, Client) {
    let server = FakeServer::start(CLIENT_ID, CLIENT_SECRET).await;
    let client = test_client(server.base_url());
    (server, client)
}

/// Add, get, update, get, delete, get for one record of any kind.
async fn exercise_lifecycle<T, F>(api: EntityApi<'_, T>, mut record: T, change: F)
where
    T: Entity + PartialEq + Debug,
    F: Fn(&mut T),
{
    record.set_owner("someone-else");

    assert!(assert_ok!(api.add(&record).await));
    assert_eq!(record.owner(), "someone-else", "caller's record is not modified");

    let mut expected = record.clone();
    expected.set_owner(ORGANIZATION);
    let stored = assert_ok!(api.get(record.name()).await);
    assert_eq!(stored.as_ref(), Some(&expected));

    let mut changed = expected.clone();
    change(&mut changed);
    assert_ne!(changed, expected);
    assert!(assert_ok!(api.update(&changed).await));
    let stored = assert_ok!(api.get(record.name()).await);
    assert_eq!(stored.as_ref(), Some(&changed));

    assert!(assert_ok!(api.delete(&changed).await));
    let stored = assert_ok!(api.get(record.name()).await);
    assert_eq!(stored, None);
}

#[tokio::test]
async fn test_lifecycle_for_every_kind_shape() {
    let (_server, client) = start().await;

    exercise_lifecycle(
        client.users(),
        User {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            address: vec!["1 Main St".to_string()],
            ..User::default()
        },
        |user| user.display_name = "Alice".to_string(),
    )
    .await;

    exercise_lifecycle(
        client.organizations(),
        Organization {
            name: "acme".to_string(),
            website_url: "https://acme.example.com".to_string(),
            ..Organization::default()
        },
        |org| org.tags = vec!["staff".to_string()],
    )
    .await;

    exercise_lifecycle(
        client.applications(),
        Application {
            name: "portal".to_string(),
            organization: ORGANIZATION.to_string(),
            redirect_uris: vec!["http://localhost:9000/callback".to_string()],
            ..Application::default()
        },
        |app| app.expire_in_hours = 24,
    )
    .await;

    exercise_lifecycle(
        client.roles(),
        Role {
            name: "auditor".to_string(),
            users: vec!["built-in/alice".to_string()],
            ..Role::default()
        },
        |role| role.is_enabled = true,
    )
    .await;

    exercise_lifecycle(
        client.permissions(),
        Permission {
            name: "read-data".to_string(),
            resources: vec!["data1".to_string()],
            actions: vec!["Read".to_string()],
            effect: "Allow".to_string(),
            ..Permission::default()
        },
        |permission| permission.actions.push("Write".to_string()),
    )
    .await;

    exercise_lifecycle(
        client.groups(),
        Group {
            name: "staff".to_string(),
            ..Group::default()
        },
        |group| group.manager = "alice".to_string(),
    )
    .await;

    exercise_lifecycle(
        client.products(),
        Product {
            name: "pro".to_string(),
            price: 9.5,
            currency: "USD".to_string(),
            ..Product::default()
        },
        |product| product.price = 12.0,
    )
    .await;

    exercise_lifecycle(
        client.webhooks(),
        Webhook {
            name: "audit-hook".to_string(),
            url: "https://hooks.example.com".to_string(),
            events: vec!["signup".to_string()],
            ..Webhook::default()
        },
        |hook| hook.is_enabled = true,
    )
    .await;
}

#[tokio::test]
async fn test_missing_record_is_none_not_error() {
    let (_server, client) = start().await;
    let found = assert_ok!(client.users().get("nobody").await);
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_keeps_server_order_and_owner_filter() {
    let (server, client) = start().await;
    for name in ["zoe", "adam", "mia"] {
        server
            .seed("user", json!({"owner": ORGANIZATION, "name": name}))
            .await;
    }
    server
        .seed("user", json!({"owner": "other-org", "name": "bob"}))
        .await;

    let users = assert_ok!(client.users().list().await);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["zoe", "adam", "mia"]);

    let others = assert_ok!(client.users().list_in("other-org").await);
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].owner, "other-org");

    let bob = assert_ok!(client.users().get_in("other-org", "bob").await);
    assert!(bob.is_some());
}

#[tokio::test]
async fn test_empty_list() {
    let (_server, client) = start().await;
    let roles = assert_ok!(client.roles().list().await);
    assert!(roles.is_empty());
}

#[tokio::test]
async fn test_pagination_bounds_and_total() {
    let (server, client) = start().await;
    for index in 0..7 {
        server
            .seed("role", json!({"owner": ORGANIZATION, "name": format!("role-{index}")}))
            .await;
    }

    let page_size = 3;
    let mut seen = Vec::new();
    for page in 1..=3 {
        let (roles, total) = assert_ok!(client.roles().page(page, page_size, &[]).await);
        assert!(roles.len() <= page_size);
        assert_eq!(total, 7);
        seen.extend(roles.into_iter().map(|role| role.name));
    }

    assert_eq!(seen.len(), 7);
    assert_eq!(seen[0], "role-0");
    assert_eq!(seen[6], "role-6");

    let (beyond, total) = assert_ok!(client.roles().page(4, page_size, &[]).await);
    assert!(beyond.is_empty());
    assert!(total as usize >= seen.len());
}

#[tokio::test]
async fn test_pagination_filter_overrides_owner() {
    let (server, client) = start().await;
    server
        .seed("user", json!({"owner": "other-org", "name": "bob"}))
        .await;

    let (users, total) = assert_ok!(
        client
            .users()
            .page(1, 10, &[("owner", "other-org")])
            .await
    );
    assert_eq!(total, 1);
    assert_eq!(users[0].name, "bob");
}

#[tokio::test]
async fn test_update_columns_only_touches_named_fields() {
    let (_server, client) = start().await;
    let users = client.users();

    let original = User {
        name: "alice".to_string(),
        display_name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        ..User::default()
    };
    assert!(assert_ok!(users.add(&original).await));

    let patch = User {
        name: "alice".to_string(),
        display_name: "Alice L.".to_string(),
        email: "changed@example.com".to_string(),
        ..User::default()
    };
    assert!(assert_ok!(users.update_columns(&patch, &["displayName"]).await));

    let stored = assert_ok!(users.get("alice").await).unwrap();
    assert_eq!(stored.display_name, "Alice L.");
    assert_eq!(stored.email, "alice@example.com");
}

#[tokio::test]
async fn test_duplicate_add_and_missing_delete_are_unaffected() {
    let (server, client) = start().await;
    let role = Role {
        name: "auditor".to_string(),
        ..Role::default()
    };

    assert!(assert_ok!(client.roles().add(&role).await));
    assert!(!assert_ok!(client.roles().add(&role).await));
    assert_eq!(server.count("role").await, 1);

    let ghost = Role {
        name: "ghost".to_string(),
        ..Role::default()
    };
    assert!(!assert_ok!(client.roles().delete(&ghost).await));
}

#[tokio::test]
async fn test_delete_resource_by_name() {
    let (server, client) = start().await;
    server
        .seed(
            "resource",
            json!({"owner": ORGANIZATION, "name": "/avatar/alice.png", "application": APPLICATION}),
        )
        .await;

    assert!(assert_ok!(client.resources().delete_by_name("/avatar/alice.png").await));
    assert_eq!(server.count("resource").await, 0);
}

#[tokio::test]
async fn test_wrong_credentials_fail_with_server_message() {
    let server = FakeServer::start(CLIENT_ID, CLIENT_SECRET).await;
    let client = Client::new(
        server.base_url(),
        CLIENT_ID,
        "wrong-secret",
        "",
        ORGANIZATION,
        APPLICATION,
    );

    let error = assert_err!(client.users().list().await);
    assert!(matches!(error, SdkError::Status { .. }));
    assert_eq!(error.to_string(), UNAUTHORIZED_MSG);

    let role = Role {
        name: "auditor".to_string(),
        ..Role::default()
    };
    let error = assert_err!(client.roles().add(&role).await);
    assert_eq!(error.to_string(), UNAUTHORIZED_MSG);
}

#[tokio::test]
async fn test_clients_share_state_across_tasks() {
    let (_server, client) = start().await;

    let tasks: Vec<_> = (0..8)
        .map(|index| {
            let client = client.clone();
            tokio::spawn(async move {
                let role = Role {
                    name: format!("role-{index}"),
                    ..Role::default()
                };
                client.roles().add(&role).await
            })
        })
        .collect();

    for task in tasks {
        assert!(assert_ok!(task.await.unwrap()));
    }
    assert_eq!(assert_ok!(client.roles().list().await).len(), 8);
}
