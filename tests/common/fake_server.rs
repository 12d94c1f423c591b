//! A stateful stand-in for the identity server.
//!
//! Records live in memory, grouped by kind and kept in insertion order. The
//! server understands the generic CRUD actions for every kind, pagination,
//! column-restricted updates and `enforce`/`batch-enforce` against a list of
//! `p` rules matched by exact equality. Requests without the expected basic
//! auth credentials are rejected the way the real server rejects them.

use super::basic_auth_for;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const UNAUTHORIZED_MSG: &str = "Unauthorized operation";

#[derive(Default)]
struct Store {
    // kind (singular) -> records in insertion order
    records: HashMap<String, Vec<Value>>,
    policies: Vec<Vec<Value>>,
}

#[derive(Clone)]
struct AppState {
    store: Arc<RwLock<Store>>,
    expected_auth: String,
}

/// Handle to a running fake server. The server stops when dropped.
pub struct FakeServer {
    base_url: String,
    store: Arc<RwLock<Store>>,
    handle: JoinHandle<()>,
}

impl FakeServer {
    /// Start a server accepting `client_id`/`client_secret`.
    pub async fn start(client_id: &str, client_secret: &str) -> Self {
        let store = Arc::new(RwLock::new(Store::default()));
        let state = AppState {
            store: store.clone(),
            expected_auth: basic_auth_for(client_id, client_secret),
        };

        let app = Router::new()
            .route("/api/:action", get(handle_get).post(handle_post))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{address}"),
            store,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Allow `request` for `enforce`.
    pub async fn allow(&self, request: &[&str]) {
        let rule = request.iter().map(|v| json!(v)).collect();
        self.store.write().await.policies.push(rule);
    }

    /// Store a record directly, bypassing the API.
    pub async fn seed(&self, kind: &str, record: Value) {
        let mut store = self.store.write().await;
        store.records.entry(kind.to_string()).or_default().push(record);
    }

    /// Number of stored records of `kind`.
    pub async fn count(&self, kind: &str) -> usize {
        let store = self.store.read().await;
        store.records.get(kind).map_or(0, Vec::len)
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"status": "ok", "msg": "", "data": data, "data2": null}))
}

fn error(msg: &str) -> Json<Value> {
    Json(json!({"status": "error", "msg": msg, "data": null, "data2": null}))
}

fn affected(changed: bool) -> Json<Value> {
    ok(json!(if changed { "Affected" } else { "Unaffected" }))
}

fn identity(record: &Value) -> (String, String) {
    let field = |name: &str| record[name].as_str().unwrap_or_default().to_string();
    (field("owner"), field("name"))
}

fn split_id(id: &str) -> (String, String) {
    match id.split_once('/') {
        Some((owner, name)) => (owner.to_string(), name.to_string()),
        None => (String::new(), id.to_string()),
    }
}

async fn handle_get(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    if !authorized(&state, &headers) {
        return error(UNAUTHORIZED_MSG);
    }

    let Some(stem) = action.strip_prefix("get-") else {
        return error(&format!("unknown action: {action}"));
    };

    let store = state.store.read().await;

    if let Some(kind) = stem.strip_suffix('s') {
        if !params.contains_key("id") {
            let items: Vec<Value> = store
                .records
                .get(kind)
                .into_iter()
                .flatten()
                .filter(|record| match params.get("owner") {
                    Some(owner) => record["owner"].as_str() == Some(owner.as_str()),
                    None => true,
                })
                .cloned()
                .collect();

            let page = params.get("p").and_then(|p| p.parse::<usize>().ok());
            let page_size = params.get("pageSize").and_then(|s| s.parse::<usize>().ok());
            return match (page, page_size) {
                (Some(page), Some(size)) if page >= 1 => {
                    let total = items.len();
                    let slice: Vec<Value> = items
                        .into_iter()
                        .skip((page - 1) * size)
                        .take(size)
                        .collect();
                    Json(json!({"status": "ok", "msg": "", "data": slice, "data2": total}))
                }
                _ => ok(json!(items)),
            };
        }
    }

    let Some(id) = params.get("id") else {
        return error("missing id");
    };
    let key = split_id(id);
    let found = store
        .records
        .get(stem)
        .and_then(|records| records.iter().find(|record| identity(record) == key))
        .cloned()
        .unwrap_or(Value::Null);
    ok(found)
}

async fn handle_post(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    if !authorized(&state, &headers) {
        return error(UNAUTHORIZED_MSG);
    }

    let Ok(payload) = serde_json::from_slice::<Value>(&body) else {
        return error("request body is not JSON");
    };

    let mut store = state.store.write().await;

    match action.as_str() {
        "enforce" => {
            let request = payload.as_array().cloned().unwrap_or_default();
            return ok(json!([store.policies.contains(&request)]));
        }
        "batch-enforce" => {
            let decisions: Vec<Value> = payload
                .as_array()
                .into_iter()
                .flatten()
                .map(|request| {
                    let request = request.as_array().cloned().unwrap_or_default();
                    json!([store.policies.contains(&request)])
                })
                .collect();
            return ok(json!(decisions));
        }
        _ => {}
    }

    let Some((verb, kind)) = action.split_once('-') else {
        return error(&format!("unknown action: {action}"));
    };
    let records = store.records.entry(kind.to_string()).or_default();

    match verb {
        "add" => {
            let key = identity(&payload);
            if records.iter().any(|record| identity(record) == key) {
                return affected(false);
            }
            records.push(payload);
            affected(true)
        }
        "update" => {
            let key = params.get("id").map(|id| split_id(id)).unwrap_or_default();
            let Some(record) = records.iter_mut().find(|record| identity(record) == key) else {
                return affected(false);
            };
            match params.get("columns") {
                Some(columns) => {
                    for column in columns.split(',') {
                        record[column] = payload[column].clone();
                    }
                }
                None => *record = payload,
            }
            affected(true)
        }
        "delete" => {
            let key = identity(&payload);
            let before = records.len();
            records.retain(|record| identity(record) != key);
            affected(records.len() != before)
        }
        _ => error(&format!("unknown action: {action}")),
    }
}

fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == state.expected_auth)
}
