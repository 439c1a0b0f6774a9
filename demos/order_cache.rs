//! Order lookup service in miniature.
//!
//! Run with `RUST_LOG=debug CACHE_CAPACITY=3 cargo run --example order_cache`.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::error::Error;
use std::sync::Mutex;

use ringcache::aside::{Backing, read_through, warm, write_through};
use ringcache::config::CacheConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rendered order views keyed by order uid; the sequence number orders them by creation.
#[derive(Default)]
struct OrderTable {
    rows: Mutex<BTreeMap<u64, (String, String)>>,
}

impl OrderTable {
    fn insert(&self, seq: u64, uid: &str, view: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert(seq, (uid.to_string(), view.to_string()));
    }
}

impl Backing<String, String> for OrderTable {
    type Error = Infallible;

    fn fetch(&self, key: &String) -> Result<Option<String>, Infallible> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|(uid, _)| uid == key)
            .map(|(_, view)| view.clone()))
    }

    fn store(&self, key: &String, value: &String) -> Result<(), Infallible> {
        let mut rows = self.rows.lock().unwrap();
        let seq = rows.keys().next_back().map_or(1, |last| last + 1);
        rows.insert(seq, (key.clone(), value.clone()));
        Ok(())
    }

    fn latest(&self, limit: usize) -> Result<Vec<(String, String)>, Infallible> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().rev().take(limit).cloned().collect())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CacheConfig::from_env()?;
    let cache = config.into_builder::<String>().build::<String>();

    let table = OrderTable::default();
    for seq in 1..=5u64 {
        table.insert(seq, &format!("b563feb7b2b84b6t{seq}"), &format!("order {seq}: 2 items"));
    }

    let loaded = warm(&cache, &table)?;
    info!(loaded, "startup warm-up done");

    write_through(&cache, &table, "fresh-order".to_string(), "order 6: 1 item".to_string())?;

    let uid = "b563feb7b2b84b6t1".to_string();
    match read_through(&cache, &table, &uid)? {
        Some(view) => println!("{uid} -> {view}"),
        None => println!("{uid} not found"),
    }

    println!("cache holds {} of {} orders, most recent first:", cache.size(), cache.capacity());
    for (uid, view) in cache.iter() {
        println!("  {uid}: {view}");
    }
    Ok(())
}
