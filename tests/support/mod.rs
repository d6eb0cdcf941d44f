//! In-process stand-in for the casefile backend.
//!
//! Implements the REST surface the client consumes with in-memory state, on
//! an ephemeral port, and counts every request it receives so tests can prove
//! that a workflow short-circuited before touching the network.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use casefile::{ApiClient, AppConfig, MemoryTokenStore, TokenStore};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::net::TcpListener;
use uuid::Uuid;

struct User {
    password: String,
    verified: bool,
}

#[derive(Clone, Serialize)]
struct EvidenceRecord {
    #[serde(rename = "_id")]
    id: String,
    description: String,
    date: String,
}

#[derive(Clone, Serialize)]
struct WitnessRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    statement: String,
    date: String,
}

#[derive(Clone, Serialize)]
struct CaseRecord {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: String,
    evidence: Vec<EvidenceRecord>,
    #[serde(rename = "witnessStatements")]
    witness_statements: Vec<WitnessRecord>,
    suspects: Vec<String>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuspectRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alibi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_known_location: Option<String>,
}

#[derive(Default)]
struct Db {
    users: HashMap<String, User>,
    verification: HashMap<String, String>,
    sessions: HashSet<String>,
    cases: Vec<CaseRecord>,
    suspects: Vec<SuspectRecord>,
}

#[derive(Default)]
struct Backend {
    db: Mutex<Db>,
    requests: AtomicUsize,
}

type Shared = Arc<Backend>;

pub struct FakeBackend {
    pub base_url: String,
    backend: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let backend = Shared::default();

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/auth/verify-email", get(verify_email))
            .route("/api/cases", get(list_cases).post(create_case))
            .route(
                "/api/cases/:id",
                get(get_case).put(update_case).delete(delete_case),
            )
            .route("/api/cases/:id/evidence", post(add_evidence))
            .route("/api/cases/:id/evidence/:eid", delete(delete_evidence))
            .route("/api/cases/:id/witness", post(add_witness))
            .route("/api/cases/:id/witness/:wid", delete(delete_witness))
            .route("/api/suspects", get(list_suspects).post(create_suspect))
            .route("/api/suspects/:id", get(get_suspect).delete(delete_suspect))
            .route("/api/plain-text", get(plain_text).post(plain_text))
            .layer(middleware::from_fn_with_state(
                backend.clone(),
                count_requests,
            ))
            .with_state(backend.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fake backend");
        let addr = listener.local_addr().expect("fake backend address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app.into_make_service()).await;
        });

        Self {
            base_url: format!("http://{addr}/api"),
            backend,
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::default().with_base_url(&self.base_url)
    }

    pub fn client(&self, tokens: Arc<dyn TokenStore>) -> ApiClient {
        ApiClient::new(&self.config(), tokens).expect("failed to build client")
    }

    /// Client holding a token the backend accepts.
    pub fn signed_in_client(&self) -> ApiClient {
        let token = self.issue_token();
        self.client(Arc::new(MemoryTokenStore::with_token(&token)))
    }

    pub fn signed_out_client(&self) -> ApiClient {
        self.client(Arc::new(MemoryTokenStore::new()))
    }

    pub fn request_count(&self) -> usize {
        self.backend.requests.load(Ordering::SeqCst)
    }

    pub fn seed_user(&self, username: &str, password: &str) {
        let mut db = self.backend.db.lock().unwrap();
        db.users.insert(
            username.to_string(),
            User {
                password: password.to_string(),
                verified: true,
            },
        );
    }

    pub fn issue_token(&self) -> String {
        let token = format!("tok-{}", Uuid::new_v4());
        self.backend
            .db
            .lock()
            .unwrap()
            .sessions
            .insert(token.clone());
        token
    }

    pub fn revoke_sessions(&self) {
        self.backend.db.lock().unwrap().sessions.clear();
    }

    pub fn verification_token(&self, username: &str) -> Option<String> {
        let db = self.backend.db.lock().unwrap();
        db.verification
            .iter()
            .find(|(_, user)| user.as_str() == username)
            .map(|(token, _)| token.clone())
    }

    pub fn suspect_count(&self) -> usize {
        self.backend.db.lock().unwrap().suspects.len()
    }

    pub fn link_suspect(&self, case_id: &str, suspect_id: &str) {
        let mut db = self.backend.db.lock().unwrap();
        if let Some(case) = db.cases.iter_mut().find(|case| case.id == case_id) {
            case.suspects.push(suspect_id.to_string());
        }
    }
}

/// Base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

async fn count_requests(State(backend): State<Shared>, request: Request, next: Next) -> Response {
    backend.requests.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn authorize(backend: &Backend, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let db = backend.db.lock().unwrap();

    match token {
        Some(token) if db.sessions.contains(token) => Ok(()),
        _ => Err(message(
            StatusCode::UNAUTHORIZED,
            "Not authorized, token failed",
        )),
    }
}

#[derive(Deserialize)]
struct LoginBody {
    username: Option<String>,
    password: Option<String>,
}

async fn login(State(backend): State<Shared>, Json(body): Json<LoginBody>) -> Response {
    let mut db = backend.db.lock().unwrap();
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let valid = db
        .users
        .get(&username)
        .is_some_and(|user| user.password == password);
    if !valid {
        return message(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    if !db.users.get(&username).is_some_and(|user| user.verified) {
        return message(StatusCode::FORBIDDEN, "Please verify your email first");
    }

    let token = format!("tok-{}", Uuid::new_v4());
    db.sessions.insert(token.clone());
    Json(json!({ "token": token, "message": "Login successful" })).into_response()
}

#[derive(Deserialize)]
struct RegisterBody {
    email: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

async fn register(State(backend): State<Shared>, Json(body): Json<RegisterBody>) -> Response {
    let (Some(_email), Some(username), Some(password)) = (body.email, body.username, body.password)
    else {
        return message(StatusCode::BAD_REQUEST, "All fields are required");
    };

    let mut db = backend.db.lock().unwrap();
    if db.users.contains_key(&username) {
        return message(StatusCode::BAD_REQUEST, "User already exists");
    }

    db.users.insert(
        username.clone(),
        User {
            password,
            verified: false,
        },
    );
    db.verification.insert(new_id(), username);

    message(
        StatusCode::CREATED,
        "User registered. Please verify your email.",
    )
}

#[derive(Deserialize)]
struct VerifyQuery {
    token: Option<String>,
}

async fn verify_email(State(backend): State<Shared>, Query(query): Query<VerifyQuery>) -> Response {
    let mut db = backend.db.lock().unwrap();
    let Some(username) = query
        .token
        .and_then(|token| db.verification.remove(&token))
    else {
        return message(StatusCode::BAD_REQUEST, "Invalid or expired token");
    };

    if let Some(user) = db.users.get_mut(&username) {
        user.verified = true;
    }
    message(StatusCode::OK, "Email verified")
}

async fn list_cases(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let db = backend.db.lock().unwrap();
    Json(db.cases.clone()).into_response()
}

async fn get_case(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };

    let suspects: Vec<SuspectRecord> = case
        .suspects
        .iter()
        .filter_map(|suspect_id| db.suspects.iter().find(|s| &s.id == suspect_id))
        .cloned()
        .collect();
    let mut value = serde_json::to_value(case).unwrap();
    value["suspects"] = serde_json::to_value(suspects).unwrap();

    Json(value).into_response()
}

#[derive(Deserialize)]
struct CaseBody {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

async fn create_case(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<CaseBody>,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let Some(title) = body.title else {
        return message(StatusCode::BAD_REQUEST, "Title is required");
    };

    let case = CaseRecord {
        id: new_id(),
        title,
        description: body.description,
        status: body.status.unwrap_or_else(|| "Open".to_string()),
        evidence: Vec::new(),
        witness_statements: Vec::new(),
        suspects: Vec::new(),
    };
    backend.db.lock().unwrap().cases.push(case.clone());

    (StatusCode::CREATED, Json(case)).into_response()
}

#[derive(Deserialize)]
struct StatusBody {
    status: Option<String>,
}

async fn update_case(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<StatusBody>,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter_mut().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };
    if let Some(status) = body.status {
        case.status = status;
    }
    Json(case.clone()).into_response()
}

async fn delete_case(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let before = db.cases.len();
    db.cases.retain(|case| case.id != id);
    if db.cases.len() == before {
        return message(StatusCode::NOT_FOUND, "Case not found");
    }
    message(StatusCode::OK, "Case removed")
}

#[derive(Deserialize)]
struct EvidenceBody {
    description: Option<String>,
}

async fn add_evidence(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<EvidenceBody>,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter_mut().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };
    case.evidence.push(EvidenceRecord {
        id: new_id(),
        description: body.description.unwrap_or_default(),
        date: now(),
    });
    (StatusCode::CREATED, Json(case.clone())).into_response()
}

async fn delete_evidence(
    State(backend): State<Shared>,
    Path((id, evidence_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter_mut().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };
    case.evidence.retain(|evidence| evidence.id != evidence_id);
    Json(case.clone()).into_response()
}

#[derive(Deserialize)]
struct WitnessBody {
    name: Option<String>,
    statement: Option<String>,
}

async fn add_witness(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<WitnessBody>,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter_mut().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };
    case.witness_statements.push(WitnessRecord {
        id: new_id(),
        name: body.name.unwrap_or_default(),
        statement: body.statement.unwrap_or_default(),
        date: now(),
    });
    (StatusCode::CREATED, Json(case.clone())).into_response()
}

async fn delete_witness(
    State(backend): State<Shared>,
    Path((id, witness_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let Some(case) = db.cases.iter_mut().find(|case| case.id == id) else {
        return message(StatusCode::NOT_FOUND, "Case not found");
    };
    case.witness_statements.retain(|witness| witness.id != witness_id);
    Json(case.clone()).into_response()
}

async fn list_suspects(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let db = backend.db.lock().unwrap();
    Json(db.suspects.clone()).into_response()
}

async fn get_suspect(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let db = backend.db.lock().unwrap();
    match db.suspects.iter().find(|suspect| suspect.id == id) {
        Some(suspect) => Json(suspect.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "Suspect not found"),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuspectBody {
    name: Option<String>,
    description: Option<String>,
    alibi: Option<String>,
    last_known_location: Option<String>,
}

async fn create_suspect(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<SuspectBody>,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let Some(name) = body.name else {
        return message(StatusCode::BAD_REQUEST, "Name is required");
    };

    let suspect = SuspectRecord {
        id: new_id(),
        name,
        description: body.description,
        alibi: body.alibi,
        last_known_location: body.last_known_location,
    };
    backend.db.lock().unwrap().suspects.push(suspect.clone());

    (StatusCode::CREATED, Json(suspect)).into_response()
}

/// Authenticated endpoint that answers `200 text/plain`.
async fn plain_text(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    (StatusCode::OK, "Saved").into_response()
}

/// Answers 204 with no body, like backends that do not echo deletions.
async fn delete_suspect(
    State(backend): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&backend, &headers) {
        return response;
    }
    let mut db = backend.db.lock().unwrap();
    let before = db.suspects.len();
    db.suspects.retain(|suspect| suspect.id != id);
    if db.suspects.len() == before {
        return message(StatusCode::NOT_FOUND, "Suspect not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
