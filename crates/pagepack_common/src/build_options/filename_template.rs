use memchr::memchr;
use serde::Serialize;

/// A file-name pattern with `[name]`, `[stamp]`, `[ext]` and `[extname]`
/// placeholders. `[ext]` is the bare extension (used for bucket directories),
/// `[extname]` includes the leading dot and renders empty when the file has
/// no extension.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'me> {
  pub name: Option<&'me str>,
  pub stamp: Option<&'me str>,
  pub ext: Option<&'me str>,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut rendered = String::with_capacity(self.template.len());
    let mut rest = self.template.as_str();

    while let Some(open) = memchr(b'[', rest.as_bytes()) {
      rendered.push_str(&rest[..open]);
      rest = &rest[open..];

      let Some(close) = memchr(b']', rest.as_bytes()) else {
        break;
      };

      match &rest[..=close] {
        "[name]" => rendered.push_str(options.name.unwrap_or_default()),
        "[stamp]" => rendered.push_str(options.stamp.unwrap_or_default()),
        "[ext]" => rendered.push_str(options.ext.unwrap_or_default()),
        "[extname]" => {
          if let Some(ext) = options.ext {
            rendered.push('.');
            rendered.push_str(ext);
          }
        }
        // Unknown placeholders pass through untouched.
        unknown => rendered.push_str(unknown),
      }

      rest = &rest[close + 1..];
    }

    rendered.push_str(rest);
    rendered
  }
}

#[test]
fn test_render_fills_placeholders() {
  let template = FilenameTemplate::new("assets/js/[name].[stamp].js".to_string());
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("foo-bar"),
    stamp: Some("202687"),
    ext: None,
  });
  assert_eq!(rendered, "assets/js/foo-bar.202687.js");
}

#[test]
fn test_render_extension_buckets() {
  let template = FilenameTemplate::new("assets/[ext]/[name].[stamp][extname]".to_string());
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("img-logo"),
    stamp: Some("202687"),
    ext: Some("png"),
  });
  assert_eq!(rendered, "assets/png/img-logo.202687.png");
}

#[test]
fn test_render_keeps_unknown_placeholders() {
  let template = FilenameTemplate::new("[name]-[hash]".to_string());
  assert_eq!(template.template(), "[name]-[hash]");

  let rendered =
    template.render(&FileNameRenderOptions { name: Some("a"), stamp: None, ext: None });
  assert_eq!(rendered, "a-[hash]");
}
