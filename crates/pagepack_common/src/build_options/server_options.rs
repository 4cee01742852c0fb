use serde::Serialize;

/// Dev-server switches. The port stays an opaque string, taken from explicit
/// options or the `PORT` environment variable, never parsed here.
#[derive(Debug, Default, Clone)]
pub struct ServerOptions {
  pub open: Option<bool>,
  pub host: Option<bool>,
  pub port: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizedServerOptions {
  pub open: bool,
  pub host: bool,
  pub port: Option<String>,
}
