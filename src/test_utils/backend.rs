use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};
use reqwest::{Client, Url};
use rusqlite::Connection;
use tokio::net::TcpListener;

use crate::{
    AppState, ApiState, Category, ResourceService, build_api_router, initialize_db,
};

type RequestLog = Arc<Mutex<Vec<String>>>;

/// A REST API served on an ephemeral port for the duration of a test.
pub(crate) struct TestBackend {
    pub url: Url,
    pub db_connection: Arc<Mutex<Connection>>,
    requests: RequestLog,
}

impl TestBackend {
    /// The requests the API has received so far, e.g. "GET /api/categories/5".
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Forget the requests received so far.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    pub fn category_service(&self) -> ResourceService<Category> {
        ResourceService::new(Client::new(), &self.url).expect("Could not create category service")
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.url.as_str()).expect("Could not create app state")
    }
}

/// Serve the REST API backed by a fresh in-memory database.
pub(crate) async fn spawn_backend() -> TestBackend {
    let connection = Connection::open_in_memory().expect("Could not open in-memory database");
    initialize_db(&connection).expect("Could not initialize database");
    let state = ApiState::new(connection);
    let db_connection = state.db_connection.clone();

    let requests = RequestLog::default();
    let router = build_api_router(state)
        .layer(middleware::from_fn_with_state(requests.clone(), record_request));

    TestBackend {
        url: spawn_router(router).await,
        db_connection,
        requests,
    }
}

/// Serve `router` on an ephemeral port and return its base URL.
pub(crate) async fn spawn_router(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener.local_addr().expect("Could not get local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    Url::parse(&format!("http://{address}")).expect("Could not parse test server URL")
}

async fn record_request(State(requests): State<RequestLog>, request: Request, next: Next) -> Response {
    requests
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri().path()));

    next.run(request).await
}
