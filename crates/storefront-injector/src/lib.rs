/* crates/storefront-injector/src/lib.rs */

mod escape;

use std::fmt;

pub use escape::ascii_escape_json;

/// Markup slot in the HTML shell.
pub const HTML_MARKER: &str = "<!--app-html-->";
/// Head slot: receives the hydration script and a `<title>` tag.
pub const HEAD_MARKER: &str = "<!--app-head-->";
/// Optional bare-title slot.
pub const TITLE_MARKER: &str = "<!--app-title-->";

/// The well-known global the client reads back during hydration.
pub const STATE_GLOBAL: &str = "__INITIAL_DATA__";

const EMPTY_ROOT: &str = r#"<div id="root"></div>"#;
const DEFAULT_TITLE: &str = "쇼핑몰";

/// A broken shell is a configuration error, not a data error: the response
/// must abort with a diagnostic instead of degrading silently.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
  /// The shell never contained the markup slot.
  MissingMarker(&'static str),
  /// A marker survived injection (it appeared somewhere substitution could
  /// not have produced, e.g. duplicated inside injected content).
  ResidualMarker(&'static str),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingMarker(marker) => write!(f, "template is missing the {marker} placeholder"),
      Self::ResidualMarker(marker) => {
        write!(f, "template still contains {marker} after injection")
      }
    }
  }
}

impl std::error::Error for TemplateError {}

/// Substitute markup, hydration state and title into the HTML shell.
///
/// Every occurrence of each marker is replaced. The state JSON is compact
/// (`serde_json::to_string`) and ASCII-escaped, so two calls with the same
/// inputs produce byte-identical output. After substitution no marker may
/// remain anywhere in the document.
pub fn inject(
  template: &str,
  html: &str,
  initial_state: &serde_json::Value,
  title: &str,
) -> Result<String, TemplateError> {
  if !template.contains(HTML_MARKER) {
    return Err(TemplateError::MissingMarker(HTML_MARKER));
  }

  let markup = if html.trim().is_empty() { EMPTY_ROOT } else { html };
  let title = if title.is_empty() { DEFAULT_TITLE } else { title };

  let state_json = serde_json::to_string(initial_state)
    .map(|json| ascii_escape_json(&json))
    .unwrap_or_else(|_| "{}".to_string());
  let head = format!("<script>window.{STATE_GLOBAL} = {state_json};</script><title>{title}</title>");

  let out = template
    .replace(HTML_MARKER, markup)
    .replace(HEAD_MARKER, &head)
    .replace(TITLE_MARKER, title);

  for marker in [HTML_MARKER, HEAD_MARKER, TITLE_MARKER] {
    if out.contains(marker) {
      return Err(TemplateError::ResidualMarker(marker));
    }
  }
  Ok(out)
}
