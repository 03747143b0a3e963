//! End-to-end tests for `agentdesk config` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_config_path_uses_env_override() {
    let env = CliEnv::new();
    let stdout = env.run_ok(&["config", "path"]);
    assert_eq!(
        stdout.trim(),
        env.config_dir().join("config.toml").to_string_lossy()
    );
}

#[test]
fn test_config_show_json_defaults() {
    let env = CliEnv::new();
    let stdout = env.run_ok(&["config", "show", "--json"]);
    let config: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(config["ui"]["default_role"], "agent");
    assert_eq!(config["config_file_exists"], false);
    assert_eq!(config["storage"]["data_dir"], env.store_dir().to_str().unwrap());
}

#[test]
fn test_config_show_human_readable() {
    let env = CliEnv::new();
    let stdout = env.run_ok(&["config", "show"]);
    assert!(stdout.contains("AgentDesk Configuration"));
    assert!(stdout.contains("Default Role: agent"));
}

#[test]
fn test_config_set_requires_an_option() {
    let env = CliEnv::new();
    let output = env.run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_set_data_dir_moves_store() {
    let env = CliEnv::new();
    let data_dir = env.path().join("elsewhere");
    env.run_ok(&["config", "set", "--data-dir", data_dir.to_str().unwrap()]);

    assert!(env.config_dir().join("config.toml").exists());
    let stdout = env.run_ok(&["config", "show", "--json"]);
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["config_file_exists"], true);

    env.run_ok(&["theme", "mode", "dark"]);
    assert!(data_dir.join("theme-mode.json").exists());
    assert!(!env.store_dir().join("theme-mode.json").exists());
}

#[test]
fn test_config_set_rejects_unknown_role() {
    let env = CliEnv::new();
    let output = env.run(&["config", "set", "--default-role", "owner"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!env.config_dir().join("config.toml").exists());
}

#[test]
fn test_invalid_config_file_is_reported() {
    let env = CliEnv::new();
    std::fs::create_dir_all(env.config_dir()).unwrap();
    std::fs::write(env.config_dir().join("config.toml"), "[ui]\ndefault_role = 5\n").unwrap();

    let output = env.run(&["layout", "show"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
