use anyhow::anyhow;
use pagepack_common::{Environment, NormalizedBuildOptions};
use pagepack_error::BuildResult;
use pagepack_fs::FileSystem;

/// Loads the dotenv file named by the options, then overlays the live process
/// environment so already-exported variables win over file entries. A missing
/// or malformed file aborts the build before any scanning starts.
pub fn load_env<F: FileSystem>(
  fs: &F,
  options: &NormalizedBuildOptions,
) -> BuildResult<Environment> {
  let source = fs.read_to_string(&options.env_file).map_err(|error| {
    anyhow!("Failed to read environment file {}: {error}", options.env_file.display())
  })?;

  let mut environment = Environment::parse(&source)
    .map_err(|error| anyhow!("{}: {error}", options.env_file.display()))?;
  environment.overlay(std::env::vars());

  Ok(environment)
}
