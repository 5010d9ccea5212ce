// Event catalog: the data source for the board. Loaded from events.json next
// to the binary; falls back to the embedded sample catalog so the app always
// starts with something to show.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const SAMPLE_EVENTS: &str = include_str!("catalog/sample_events.json");
const CATALOG_FILE: &str = "events.json";

/// One event as the catalog describes it. Display fields are taken verbatim;
/// nothing here is parsed or validated beyond JSON shape.
#[derive(Debug, Clone, Deserialize)]
pub struct EventItem {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub requires_auth: bool,
    /// Registration already recorded upstream (in the catalog itself).
    #[serde(default)]
    pub registered: bool,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_from_file(path: &Path) -> Result<Vec<EventItem>, CatalogError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Catalog used when no events.json is present.
pub fn embedded_sample() -> Vec<EventItem> {
    serde_json::from_str(SAMPLE_EVENTS).expect("embedded sample catalog is valid")
}

/// Loads events.json from the working directory, falling back to the
/// embedded sample. Never fails; the board always has a catalog.
pub fn load_or_default() -> Vec<EventItem> {
    let path = Path::new(CATALOG_FILE);
    match load_from_file(path) {
        Ok(events) => {
            log::info!("Loaded {} events from {}", events.len(), path.display());
            events
        }
        Err(e) => {
            log::info!(
                "Using embedded sample catalog; cannot load {}: {}",
                path.display(),
                e
            );
            embedded_sample()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sample_parses_and_covers_registration_flows() {
        let events = embedded_sample();
        assert!(!events.is_empty());
        // Sample is curated to exercise every registration branch.
        assert!(events
            .iter()
            .any(|e| e.registered && e.meeting_link.is_some()));
        assert!(events
            .iter()
            .any(|e| e.registered && e.meeting_link.is_none()));
        assert!(events.iter().any(|e| e.external_link.is_some()));
        assert!(events.iter().any(|e| e.requires_auth));
        assert!(events.iter().any(|e| {
            !e.registered && !e.requires_auth && e.external_link.is_none()
        }));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"[{"id": 7, "title": "T", "date": "D", "time": "H"}]"#;
        let events: Vec<EventItem> = serde_json::from_str(json).unwrap();
        let e = &events[0];
        assert!(e.tags.is_empty());
        assert_eq!(e.description, "");
        assert_eq!(e.image_url, "");
        assert!(!e.requires_auth);
        assert!(!e.registered);
        assert!(e.external_link.is_none());
        assert!(e.meeting_link.is_none());
        assert!(e.price.is_none());
    }

    #[test]
    fn malformed_catalog_is_a_parse_error() {
        let dir = std::env::temp_dir().join("event-deck-test-catalog");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        match load_from_file(&path) {
            Err(CatalogError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn missing_catalog_is_an_io_error() {
        let path = Path::new("definitely-not-here-events.json");
        assert!(matches!(load_from_file(path), Err(CatalogError::Io(_))));
    }
}
