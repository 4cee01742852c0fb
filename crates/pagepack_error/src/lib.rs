use std::fmt;
use std::ops::{Deref, DerefMut};

/// Aggregate of every failure found while resolving a build configuration.
/// Startup resolution is one-shot, so callers receive all collected errors at
/// once instead of the first one hit.
#[derive(Debug)]
pub struct BuildError(Vec<anyhow::Error>);

impl BuildError {
  pub fn into_vec(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<std::io::Error> for BuildError {
  fn from(error: std::io::Error) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_joins_collected_errors() {
  let error = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(error.len(), 2);
  assert_eq!(error.to_string(), "first\nsecond");
}

#[test]
fn test_single_error_conversions() {
  let error = BuildError::from(anyhow::anyhow!("boom"));
  assert_eq!(error.into_vec().len(), 1);

  let error = BuildError::from(std::io::Error::other("io boom"));
  assert!(error[0].to_string().contains("io boom"));
}
