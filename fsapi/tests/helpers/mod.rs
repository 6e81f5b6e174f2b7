//! Test helpers for fixture-based integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use fsapi::{Transport, TransportError};

/// Load a captured response body from the fixtures directory
pub fn load_fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

/// A transport that answers every request with the same fixture and keeps
/// the request URLs for inspection
pub struct FixtureTransport {
    body: String,
    pub requests: RefCell<Vec<String>>,
}

impl FixtureTransport {
    pub fn new(filename: &str) -> Self {
        Self {
            body: load_fixture(filename),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<String> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for FixtureTransport {
    fn get(&self, path_and_query: &str) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(path_and_query.to_string());
        Ok(self.body.clone())
    }
}

/// A session that already holds an id, as after CREATE_SESSION
pub fn active_session() -> fsapi::Session {
    let transport = FixtureTransport::new("create_session.xml");
    let mut session = fsapi::Session::new(1234);
    fsapi::Communicator::new(&transport)
        .create_session(&mut session)
        .expect("fixture session");
    session
}
