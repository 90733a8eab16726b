//! Default configuration values

use super::schema::Config;

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}

/// Commented template written by `config init`
pub const CONFIG_TEMPLATE: &str = r#"# argocd-tui configuration
server:
  url: http://localhost:8080
  insecure: true
  timeoutSecs: 10
  usernameEnv: ARGOCD_USERNAME
  passwordEnv: ARGOCD_PASSWORD
ui:
  enableMouse: false
  escapeClearsFilter: true
  pageSize: 10
# Colour names, hex values (#87ceeb) or "default"
colors:
  text: white
  border: darkslategray
  header: gray
  foreground: whitesmoke
  selected: skyblue
  background: default
  progressing: lightblue
  missing: lightyellow
  healthy: lightgreen
  degraded: red
  unknown: darkgray
"#;
