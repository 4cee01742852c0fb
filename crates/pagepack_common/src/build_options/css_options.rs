use serde::Serialize;

/// Stylesheet-pipeline switches. Declarative passthrough: the bundler does
/// the actual preprocessing.
#[derive(Debug, Default, Clone)]
pub struct CssOptions {
  pub dev_sourcemap: Option<bool>,
  pub autoprefixer_grid: Option<bool>,
  /// Snippet prepended to every stylesheet before compilation, typically an
  /// import of shared variables and mixins.
  pub additional_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizedCssOptions {
  pub dev_sourcemap: bool,
  pub autoprefixer_grid: bool,
  pub additional_data: Option<String>,
}
