/// Replaces characters that are unsafe in an output file name. ASCII
/// alphanumerics, `-` and `_` pass through; everything else becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
  name
    .chars()
    .map(|char| {
      if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') {
        char
      } else {
        '_'
      }
    })
    .collect()
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("vendor/react"), "vendor_react");
  assert_eq!(sanitize_file_name("shared chunk?"), "shared_chunk_");
  assert_eq!(sanitize_file_name("a-Z_0"), "a-Z_0");
}
