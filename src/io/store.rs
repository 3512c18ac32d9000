use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{Listing, Portfolio, RentRecord, Ticket};

/// Default state file name, looked up in the working directory
pub const DEFAULT_STATE_FILE: &str = "harborkey.json";

/// Env var overriding the state file path
pub const STATE_FILE_ENV: &str = "HARBORKEY_STATE";

/// Error type for store writes. Reads never fail; they fall back to the
/// default dataset instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Partial saved document: any of the three collections may be absent,
/// in which case the default dataset's collection is kept.
#[derive(Deserialize)]
struct SavedState {
    listings: Option<Vec<Listing>>,
    rents: Option<Vec<RentRecord>>,
    maintenance: Option<Vec<Ticket>>,
}

/// Resolve the state file path: explicit flag > env var > default name
/// in the working directory.
pub fn resolve_state_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(STATE_FILE_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_STATE_FILE)
}

/// Load the portfolio from the state file.
///
/// Missing file → default dataset. Unparseable or schema-violating file →
/// default dataset, with a diagnostic on stderr. A parseable file is
/// shallow-merged over the defaults: each top-level collection that is
/// present replaces the default's collection wholesale; absent ones keep
/// the defaults. Per-record merging is deliberately not done.
pub fn load(path: &Path) -> Portfolio {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Portfolio::default_dataset(),
    };

    let saved: SavedState = match serde_json::from_str(&raw) {
        Ok(saved) => saved,
        Err(e) => {
            eprintln!(
                "harborkey: state file {} is unreadable ({}); starting from defaults",
                path.display(),
                e
            );
            return Portfolio::default_dataset();
        }
    };

    let mut portfolio = Portfolio::default_dataset();
    if let Some(listings) = saved.listings {
        portfolio.listings = listings;
    }
    if let Some(rents) = saved.rents {
        portfolio.rents = rents;
    }
    if let Some(maintenance) = saved.maintenance {
        portfolio.maintenance = maintenance;
    }
    portfolio
}

/// Save the full portfolio to the state file.
///
/// Writes to a temp file in the same directory, then renames over the
/// target so a crash mid-write never leaves a truncated document.
pub fn save(path: &Path, portfolio: &Portfolio) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(portfolio).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    tmp.write_all(content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tmp.persist(path).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn state_path(dir: &TempDir) -> PathBuf {
        dir.path().join(DEFAULT_STATE_FILE)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load(&state_path(&dir));
        assert_eq!(loaded, Portfolio::default_dataset());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        fs::write(&path, "not json {{{").unwrap();
        assert_eq!(load(&path), Portfolio::default_dataset());
    }

    #[test]
    fn schema_violating_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        // `listings` present but the wrong shape
        fs::write(&path, r#"{"listings": [{"id": 42}]}"#).unwrap();
        assert_eq!(load(&path), Portfolio::default_dataset());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        let mut portfolio = Portfolio::default_dataset();
        portfolio.rents[0].status = crate::model::RentStatus::Paid;

        save(&path, &portfolio).unwrap();
        assert_eq!(load(&path), portfolio);
    }

    #[test]
    fn partial_document_replaces_only_present_collections() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        // Only `rents`, and only one record — listings/maintenance must
        // fall back to the defaults, and rents must be fully replaced
        // (not merged per-record against the default rents).
        fs::write(
            &path,
            r#"{"rents": [{"id": "R-900", "property": "Solo", "tenant": "A", "amount": 5, "due": "Oct 01", "status": "Due"}]}"#,
        )
        .unwrap();

        let loaded = load(&path);
        let defaults = Portfolio::default_dataset();
        assert_eq!(loaded.listings, defaults.listings);
        assert_eq!(loaded.maintenance, defaults.maintenance);
        assert_eq!(loaded.rents.len(), 1);
        assert_eq!(loaded.rents[0].id, "R-900");
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let path = state_path(&dir);
        let defaults = Portfolio::default_dataset();
        save(&path, &defaults).unwrap();

        let mut changed = defaults.clone();
        changed.maintenance.clear();
        save(&path, &changed).unwrap();
        assert_eq!(load(&path), changed);
    }

    #[test]
    fn resolve_prefers_flag_over_default() {
        let resolved = resolve_state_path(Some("/tmp/custom.json"));
        assert_eq!(resolved, PathBuf::from("/tmp/custom.json"));
    }
}
