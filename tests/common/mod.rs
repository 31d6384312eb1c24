#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use regdash::config::ServiceAccess;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
/// `admin:secret`, base64-encoded.
const BASIC: &str = "Basic YWRtaW46c2VjcmV0";
const JWT: &str = "token-1";

/// Digest the fake registry refuses to delete.
pub const LOCKED_DIGEST: &str = "sha256:locked";

/// Requests observed by the fake servers.
#[derive(Default)]
pub struct Recorded {
    pub deletes: Mutex<Vec<(String, String, String)>>,
    pub queries: Mutex<Vec<HashMap<String, String>>>,
    pub user_agents: Mutex<Vec<String>>,
    pub auth_calls: AtomicUsize,
    pub container_calls: Mutex<Vec<i64>>,
    pub failing_endpoint: Mutex<Option<i64>>,
}

pub struct FakeServices {
    pub registry_url: String,
    pub fleet_url: String,
    pub recorded: Arc<Recorded>,
}

impl FakeServices {
    pub fn registry_access(&self) -> ServiceAccess {
        access(&self.registry_url, USERNAME, PASSWORD)
    }

    pub fn fleet_access(&self) -> ServiceAccess {
        access(&self.fleet_url, USERNAME, PASSWORD)
    }

    pub fn deletes(&self) -> Vec<(String, String, String)> {
        self.recorded.deletes.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.recorded.queries.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.recorded
            .user_agents
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    pub fn auth_calls(&self) -> usize {
        self.recorded.auth_calls.load(Ordering::SeqCst)
    }

    pub fn container_calls(&self) -> Vec<i64> {
        self.recorded
            .container_calls
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    pub fn fail_endpoint(&self, id: i64) {
        if let Ok(mut slot) = self.recorded.failing_endpoint.lock() {
            *slot = Some(id);
        }
    }
}

pub fn access(base_url: &str, username: &str, password: &str) -> ServiceAccess {
    ServiceAccess {
        base_url: base_url.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Boots an in-process registry and fleet manager on ephemeral ports.
pub async fn spawn_services() -> Result<FakeServices> {
    let recorded = Arc::new(Recorded::default());

    let registry = Router::new()
        .route("/api/v2.0/projects", get(projects))
        .route("/api/v2.0/projects/:project/repositories", get(repositories))
        .route(
            "/api/v2.0/projects/:project/repositories/:repo/artifacts",
            get(artifacts),
        )
        .route(
            "/api/v2.0/projects/:project/repositories/:repo/artifacts/:digest",
            delete(delete_artifact),
        )
        .with_state(recorded.clone());

    let fleet = Router::new()
        .route("/api/auth", post(auth))
        .route("/api/endpoints", get(endpoints))
        .route("/api/endpoints/:id/docker/containers/json", get(containers))
        .with_state(recorded.clone());

    Ok(FakeServices {
        registry_url: serve(registry).await?,
        fleet_url: serve(fleet).await?,
        recorded,
    })
}

async fn serve(router: Router) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind fake server")?;
    let addr = listener.local_addr().context("fake server addr")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Records the request and checks basic auth.
fn registry_gate(
    rec: &Recorded,
    headers: &HeaderMap,
    query: HashMap<String, String>,
) -> Option<Response> {
    if let Some(ua) = header_value(headers, header::USER_AGENT) {
        if let Ok(mut v) = rec.user_agents.lock() {
            v.push(ua);
        }
    }
    if let Ok(mut v) = rec.queries.lock() {
        v.push(query);
    }
    if header_value(headers, header::AUTHORIZATION).as_deref() != Some(BASIC) {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }
    None
}

async fn projects(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = registry_gate(&rec, &headers, query) {
        return denied;
    }
    Json(json!([
        {"project_id": 1, "name": "alpha", "repo_count": 2},
        {"project_id": 2, "name": "beta", "repo_count": 0},
    ]))
    .into_response()
}

async fn repositories(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Path(project): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = registry_gate(&rec, &headers, query) {
        return denied;
    }
    match project.as_str() {
        "alpha" => Json(json!([
            {"name": "alpha/web", "artifact_count": 2},
            {"name": "alpha/team/api", "artifact_count": 1},
            {"name": "alpha", "artifact_count": 0},
        ]))
        .into_response(),
        "beta" => Json(json!([])).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn artifacts(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Path((project, repo)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = registry_gate(&rec, &headers, query) {
        return denied;
    }
    let body: Value = match (project.as_str(), repo.as_str()) {
        ("alpha", "web") => json!([
            {
                "digest": "sha256:aaa",
                "size": 5242880,
                "pull_time": "0001-01-01T00:00:00.000Z",
                "push_time": "2026-03-01T10:00:00.000Z",
                "tags": [{"name": "v1"}, {"name": "latest"}]
            },
            {
                "digest": "sha256:bbb",
                "size": 1048576,
                "pull_time": "2026-03-02T08:30:00.000Z",
                "push_time": "2026-02-01T10:00:00.000Z",
                "tags": null
            },
        ]),
        // Nested path arrives with one escape level removed.
        ("alpha", "team%2Fapi") => json!([
            {"digest": "sha256:ccc", "size": 2048, "tags": [{"name": "1.0.0"}]},
        ]),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    Json(body).into_response()
}

async fn delete_artifact(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Path((project, repo, digest)): Path<(String, String, String)>,
) -> Response {
    if let Some(denied) = registry_gate(&rec, &headers, HashMap::new()) {
        return denied;
    }
    if digest == LOCKED_DIGEST {
        return (
            StatusCode::PRECONDITION_FAILED,
            Json(json!({"errors": [{"code": "PRECONDITION", "message": "immutable"}]})),
        )
            .into_response();
    }
    if let Ok(mut v) = rec.deletes.lock() {
        v.push((project, repo, digest));
    }
    StatusCode::OK.into_response()
}

async fn auth(State(rec): State<Arc<Recorded>>, Json(body): Json<Value>) -> Response {
    rec.auth_calls.fetch_add(1, Ordering::SeqCst);
    if body["username"] == USERNAME && body["password"] == PASSWORD {
        return Json(json!({"jwt": JWT})).into_response();
    }
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"message": "Invalid credentials"})),
    )
        .into_response()
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    header_value(headers, header::AUTHORIZATION).as_deref() == Some(format!("Bearer {}", JWT).as_str())
}

async fn endpoints(headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {"Id": 1, "Name": "local", "Type": 1},
        {"Id": 2, "Name": "edge", "Type": 4},
    ]))
    .into_response()
}

async fn containers(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if !bearer_ok(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if let Ok(mut v) = rec.container_calls.lock() {
        v.push(id);
    }
    let failing = rec.failing_endpoint.lock().ok().and_then(|slot| *slot);
    if failing == Some(id) {
        return StatusCode::BAD_GATEWAY.into_response();
    }
    let body = match id {
        1 => json!([
            {"Id": "c1", "Image": "nginx:1.25", "State": "running"},
            {"Id": "c2", "Image": "registry.local/alpha/web@sha256:bbb", "State": "exited"},
            {"Id": "c4", "Image": "registry.local/alpha/web@sha256:ddd", "State": "restarting"},
        ]),
        2 => json!([
            {"Id": "c3", "Image": "registry.local/alpha/web:v1@sha256:aaa", "State": "running"},
        ]),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    Json(body).into_response()
}
