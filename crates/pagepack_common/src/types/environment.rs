use pagepack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Opaque configuration values sourced from a dotenv-format file and the
/// process environment. Values are never parsed or validated beyond
/// existence; they are handed to the bundler as-is.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Environment {
  vars: FxIndexMap<String, String>,
}

impl Environment {
  /// Parses dotenv-format source: `KEY=VALUE` lines, `#` comments and blank
  /// lines, an optional `export ` prefix, optional single or double quotes
  /// around the value. A non-comment line without `=` is an error.
  pub fn parse(source: &str) -> anyhow::Result<Self> {
    let mut vars = FxIndexMap::default();

    for (index, line) in source.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let Some((key, value)) = line.split_once('=') else {
        anyhow::bail!("Malformed line {} in environment file: {line:?}", index + 1);
      };

      let key = key.trim();
      let key = key.strip_prefix("export ").map_or(key, str::trim);
      let value = value.trim();
      let value = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')))
        .unwrap_or(value);

      vars.insert(key.to_string(), value.to_string());
    }

    Ok(Self { vars })
  }

  /// Layers `vars` on top of the current entries. Used to give the live
  /// process environment precedence over env-file entries of the same name.
  pub fn overlay(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
    for (key, value) in vars {
      self.vars.insert(key, value);
    }
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.vars.get(key).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.vars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vars.is_empty()
  }
}

#[test]
fn test_parse_dotenv_source() {
  let env = Environment::parse(
    "# comment\n\nPORT=3000\nexport API_BASE=\"https://example.test\"\nTITLE='My Site'\n",
  )
  .unwrap();

  assert_eq!(env.len(), 3);
  assert_eq!(env.get("PORT"), Some("3000"));
  assert_eq!(env.get("API_BASE"), Some("https://example.test"));
  assert_eq!(env.get("TITLE"), Some("My Site"));
}

#[test]
fn test_parse_rejects_malformed_lines() {
  assert!(Environment::parse("PORT\n").is_err());
}

#[test]
fn test_overlay_prefers_later_entries() {
  let mut env = Environment::parse("PORT=3000\n").unwrap();
  env.overlay([("PORT".to_string(), "8080".to_string())]);
  assert_eq!(env.get("PORT"), Some("8080"));
}
