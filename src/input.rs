use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::eligibility::{Event, Membership};

/// Read a JSON document from disk
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Load a roster file: a JSON array of memberships
pub fn load_roster(path: &Path) -> Result<Vec<Membership>> {
    read_json(path)
}

/// Load a single event
pub fn load_event(path: &Path) -> Result<Event> {
    read_json(path)
}

/// Load a JSON array of events
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    read_json(path)
}
