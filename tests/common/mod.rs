use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use interactif::config::ServiceConfig;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Service config pointing both endpoints at `base`
#[allow(dead_code)]
pub fn service_config(base: &str) -> ServiceConfig {
    ServiceConfig {
        structured_url: base.to_string(),
        assistant_url: base.to_string(),
        timeout_seconds: 5,
    }
}

/// `/structured-chat` body with the given action tuples `(task, priority)`
#[allow(dead_code)]
pub fn structured_body(actions: &[(&str, &str)], considerations: &[&str]) -> Value {
    let action_points: Vec<Value> = actions
        .iter()
        .map(|(task, priority)| json!({ "task": task, "priority": priority }))
        .collect();
    let consider_points: Vec<Value> = considerations
        .iter()
        .map(|note| json!({ "note": note }))
        .collect();
    json!({
        "structured_data": {
            "action_points": action_points,
            "consider_points": consider_points
        },
        "session_id": "remote-session"
    })
}
