//! In-process repositories used when no database is configured.
//!
//! State lives in a `BTreeMap` behind a mutex so listings come back in id
//! order. Identifiers start at 1 and are never reused, matching `SERIAL`.

mod person_repository;
mod user_repository;

pub use person_repository::InMemoryPersonRepository;
pub use user_repository::InMemoryUserRepository;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// Lock a table, mapping poisoning through the port's `query` constructor.
fn lock<'a, T, E>(
    table: &'a Mutex<Table<T>>,
    query: impl FnOnce(&'static str) -> E,
) -> Result<MutexGuard<'a, Table<T>>, E> {
    table.lock().map_err(|_| query("in-memory table lock poisoned"))
}
