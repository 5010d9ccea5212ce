// Attendee session and registration records, persisted as a small JSON file
// beside the binary.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Connected attendee; present means the session is authenticated.
    #[serde(default)]
    pub attendee: Option<String>,
    /// Event ids registered from this machine.
    #[serde(default)]
    pub registered_events: Vec<u64>,
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

fn config_file_path() -> PathBuf {
    // Allow override for tests via env var
    if let Ok(p) = std::env::var("EVENT_DECK_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("event_deck.json")
}

impl AppConfig {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(cfg)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_config_from_disk() {
    let path = config_file_path();
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            *APP_CONFIG.write().unwrap() = cfg;
            log::info!("Loaded config from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_config_to_disk() {
    let path = config_file_path();
    let cfg = APP_CONFIG.read().unwrap().clone();
    if let Err(e) = cfg.save_to_file(&path) {
        log::error!("Failed to save config to {}: {}", path.to_string_lossy(), e);
    }
}

/// A connected attendee means the session counts as authenticated.
pub fn is_authenticated() -> bool {
    APP_CONFIG
        .read()
        .map(|c| c.attendee.is_some())
        .unwrap_or(false)
}

pub fn attendee_name() -> Option<String> {
    APP_CONFIG.read().ok().and_then(|c| c.attendee.clone())
}

/// Stores the attendee name and persists immediately.
pub fn connect_attendee(name: &str) {
    {
        APP_CONFIG.write().unwrap().attendee = Some(name.to_string());
    }
    save_config_to_disk();
    log::info!("Attendee connected: {name}");
}

pub fn is_event_registered(event_id: u64) -> bool {
    APP_CONFIG
        .read()
        .map(|c| c.registered_events.contains(&event_id))
        .unwrap_or(false)
}

/// Records a registration; idempotent, persists immediately.
pub fn record_registration(event_id: u64) {
    {
        let mut cfg = APP_CONFIG.write().unwrap();
        if !cfg.registered_events.contains(&event_id) {
            cfg.registered_events.push(event_id);
        }
    }
    save_config_to_disk();
    log::info!("Registered for event {event_id}");
}

/// Open URL in the system default browser
pub fn open_in_browser(url: &str) {
    #[cfg(target_os = "windows")]
    {
        // Use explorer to open the default browser without invoking a shell
        if let Err(e) = std::process::Command::new("explorer").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Err(e) = std::process::Command::new("open").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Err(e) = std::process::Command::new("xdg-open").arg(url).spawn() {
            log::error!("Failed to open browser for {}: {}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = std::env::temp_dir().join("event-deck-test-config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.json");

        let cfg = AppConfig {
            attendee: Some("ada".to_string()),
            registered_events: vec![3, 5],
        };
        cfg.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.attendee.as_deref(), Some("ada"));
        assert_eq!(loaded.registered_events, vec![3, 5]);
    }

    #[test]
    fn missing_fields_default() {
        let dir = std::env::temp_dir().join("event-deck-test-config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert!(loaded.attendee.is_none());
        assert!(loaded.registered_events.is_empty());
    }

    #[test]
    fn invalid_json_is_invalid_data() {
        let dir = std::env::temp_dir().join("event-deck-test-config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "oops").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
