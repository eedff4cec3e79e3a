use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockMode {
    Json,
    ServerError,
    InvalidJson,
}

struct MockState {
    bootstrap: RwLock<Value>,
    fixtures: RwLock<Value>,
    mode: RwLock<MockMode>,
    hits: AtomicUsize,
}

/// In-process stand-in for the FPL API, serving whatever payloads the test sets.
pub struct MockFplApi {
    pub base_url: String,
    state: Arc<MockState>,
    handle: ServerHandle,
}

impl MockFplApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState {
            bootstrap: RwLock::new(json!({ "teams": [] })),
            fixtures: RwLock::new(json!([])),
            mode: RwLock::new(MockMode::Json),
            hits: AtomicUsize::new(0),
        });

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock FPL port");
        let port = listener.local_addr().unwrap().port();

        let data = web::Data::from(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/api/bootstrap-static/", web::get().to(bootstrap_static))
                .route("/api/fixtures/", web::get().to(fixtures))
        })
        .workers(1)
        .listen(listener)
        .expect("Failed to listen on mock FPL port")
        .run();

        let handle = server.handle();
        let _ = tokio::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{}/api/", port),
            state,
            handle,
        }
    }

    pub fn set_teams(&self, teams: Value) {
        *self.state.bootstrap.write().unwrap() = json!({ "events": [], "teams": teams });
    }

    pub fn set_bootstrap(&self, body: Value) {
        *self.state.bootstrap.write().unwrap() = body;
    }

    pub fn set_fixtures(&self, fixtures: Value) {
        *self.state.fixtures.write().unwrap() = fixtures;
    }

    pub fn set_mode(&self, mode: MockMode) {
        *self.state.mode.write().unwrap() = mode;
    }

    /// Number of requests served so far, across both endpoints.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Closes the listener; later requests see a refused connection.
    pub async fn stop(&self) {
        self.handle.stop(false).await;
    }
}

fn respond(state: &MockState, body: &RwLock<Value>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match *state.mode.read().unwrap() {
        MockMode::Json => HttpResponse::Ok().json(body.read().unwrap().clone()),
        MockMode::ServerError => HttpResponse::InternalServerError().body("upstream exploded"),
        MockMode::InvalidJson => HttpResponse::Ok()
            .content_type("application/json")
            .body("{ this is not json"),
    }
}

async fn bootstrap_static(state: web::Data<MockState>) -> HttpResponse {
    respond(&state, &state.bootstrap)
}

async fn fixtures(state: web::Data<MockState>) -> HttpResponse {
    respond(&state, &state.fixtures)
}

pub fn fpl_team(id: i32, name: &str, short_name: &str, code: i32, position: i32, points: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "short_name": short_name,
        "code": code,
        "played": 10,
        "win": points / 3,
        "draw": points % 3,
        "loss": 10 - points / 3 - points % 3,
        "points": points,
        "position": position,
        "form": null
    })
}

pub fn fpl_fixture(
    id: i32,
    team_h: i32,
    team_a: i32,
    kickoff_time: Option<&str>,
    event: Option<i32>,
    started: bool,
    finished: bool,
) -> Value {
    json!({
        "id": id,
        "team_h": team_h,
        "team_a": team_a,
        "kickoff_time": kickoff_time,
        "team_h_score": if started || finished { json!(1) } else { Value::Null },
        "team_a_score": if started || finished { json!(0) } else { Value::Null },
        "event": event,
        "started": started,
        "finished_provisional": finished,
        "finished": finished
    })
}

/// Three clubs, enough for fixtures between distinct teams.
pub fn sample_teams() -> Value {
    json!([
        fpl_team(1, "Arsenal", "ARS", 3, 1, 25),
        fpl_team(2, "Aston Villa", "AVL", 7, 3, 19),
        fpl_team(3, "Chelsea", "CHE", 8, 2, 21),
    ])
}
