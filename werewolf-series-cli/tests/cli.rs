use std::process::Command;

const SAMPLE_LOG: &str = r#"{
  "games": [
    { "id": "G1", "date": "2024-06-01", "players": [
      { "player_name": "Ana", "role": "Loup", "victorious": true },
      { "player_name": "Bo", "role": "Villageois", "died": true }
    ] },
    { "id": "G2", "date": "2024-06-02", "players": [
      { "player_name": "Ana", "role": "Loup", "victorious": true },
      { "player_name": "Bo", "role": "Voyante", "victorious": true }
    ] },
    { "id": "G3", "date": "2024-06-03", "players": [
      { "player_name": "Ana", "camp": "wolf" },
      { "player_name": "Bo", "role": "La Bête", "lover": true }
    ] }
  ]
}"#;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "werewolf-series-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn write_fixture(label: &str, content: &str) -> std::path::PathBuf {
    let path = temp_path(label);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn cli_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_werewolf-series-cli");
    let games = write_fixture("games", SAMPLE_LOG);
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .arg("--games")
        .arg(&games)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["total_games_analyzed"], 3);
    assert_eq!(report["total_players_count"], 2);
    let wolf = &report["channels"]["wolf"]["best"][0];
    assert_eq!(wolf["player_name"], "Ana");
    assert_eq!(wolf["series_length"], 3);
    assert_eq!(wolf["is_ongoing"], true);
}

#[test]
fn cli_applies_top_and_markdown() {
    let exe = env!("CARGO_BIN_EXE_werewolf-series-cli");
    let games = write_fixture("games-md", SAMPLE_LOG);
    let output_path = temp_path("md");
    let status = Command::new(exe)
        .arg("--games")
        .arg(&games)
        .args(["--report", "markdown", "--top", "1", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.starts_with("# Werewolf Series Report"));
    assert!(content.contains("## Longest survival series"));
    assert!(content.lines().any(|line| line.starts_with("| 1 |")));
    assert!(!content.lines().any(|line| line.starts_with("| 2 |")));
}

#[test]
fn cli_reports_no_data_for_empty_log() {
    let exe = env!("CARGO_BIN_EXE_werewolf-series-cli");
    let games = write_fixture("empty", r#"{ "games": [] }"#);
    let output = Command::new(exe)
        .arg("--games")
        .arg(&games)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No data"));
}

#[test]
fn cli_rejects_invalid_config() {
    let exe = env!("CARGO_BIN_EXE_werewolf-series-cli");
    let games = write_fixture("games-cfg", SAMPLE_LOG);
    let config = write_fixture("config", r#"{ "thresholds": { "wolf": 0 } }"#);
    let output = Command::new(exe)
        .arg("--games")
        .arg(&games)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse"));
}
