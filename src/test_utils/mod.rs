#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{parse_json, post_category, post_product};

use std::sync::{Arc, Mutex};

use axum_test::TestServer;

use crate::{AppState, build_router, db::get_test_db_connection};

pub(crate) fn get_test_app_state() -> AppState {
    AppState {
        db_connection: Arc::new(Mutex::new(get_test_db_connection())),
    }
}

/// A server for the full router plus the state behind it, for checking the
/// database directly.
pub(crate) fn get_test_server() -> (TestServer, AppState) {
    let state = get_test_app_state();
    let server = TestServer::try_new(build_router(state.clone())).expect("Could not create test server.");

    (server, state)
}
