use crate::template::render_template;
use crate::Result;
use serde::Serialize;
use std::fmt::{self, Display};

/// Markup whose interpolated values have all been HTML-escaped.
///
/// The only constructors are [`wrap_as_safe_html`] and the `safe_html!` macro,
/// so holding one is proof the markup went through escaping. Formatting it
/// with `{}` prints [`SafeHtml::MARKER`] rather than the markup; use
/// [`unwrap_safe_html`] at the point where the markup is inserted.
///
/// Serializes as `{"__html": "..."}`, the field name frameworks look for on
/// trusted HTML objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeHtml {
    #[serde(rename = "__html")]
    html: String,
}

impl SafeHtml {
    pub const MARKER: &'static str = "[object WrappedHTMLObject]";

    pub const INFO: &'static str = "This is a wrapped HTML object. Its markup was built from \
        literal template fragments with every interpolated value HTML-escaped, so it can be \
        inserted into a document as is. Call unwrap_safe_html at the insertion point to get the \
        markup back.";

    pub fn info(&self) -> &'static str {
        Self::INFO
    }
}

impl Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MARKER)
    }
}

/// Renders the template with [`render_template`] and wraps the result.
pub fn wrap_as_safe_html(fragments: &[&str], values: &[&dyn Display]) -> Result<SafeHtml> {
    let html = render_template(fragments, values)?;
    Ok(SafeHtml { html })
}

/// Concatenates the markup of `handles` in order.
pub fn unwrap_safe_html(handles: &[&SafeHtml]) -> String {
    handles.iter().map(|handle| handle.html.as_str()).collect()
}
