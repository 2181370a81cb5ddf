extern crate self as sanitizer;

pub mod error;
pub mod escape;
pub mod safe;
pub mod steamspy;
pub mod template;

pub use error::{Error, Result};
pub use escape::{escape_value, Escape, Html};
pub use safe::{unwrap_safe_html, wrap_as_safe_html, SafeHtml};
pub use sanitizer_macros::{escape_html, safe_html};
pub use template::{render_template, render_template_with};
