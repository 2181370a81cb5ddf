use crate::escape::{Escape, Escaper, Html};
use crate::{Error, Result};
use std::fmt::{Display, Write};
use tracing::trace;

/// Writes `fragments[0]`, `values[0]`, `fragments[1]`, ... `fragments[n]` to `to`.
///
/// Literal fragments are written as they are; every value is escaped with
/// `escape` while it is formatted. There must be exactly one more fragment
/// than values, otherwise nothing is written.
pub fn render_into(
    to: &mut impl Write,
    escape: &impl Escape,
    fragments: &[&str],
    values: &[&dyn Display],
) -> Result<()> {
    if fragments.len() != values.len() + 1 {
        return Err(Error::Arity {
            fragments: fragments.len(),
            values: values.len(),
        });
    }
    trace!(fragments = fragments.len(), values = values.len(), "rendering template");
    for (fragment, value) in fragments.iter().zip(values) {
        to.write_str(fragment)?;
        write!(Escaper::new(escape, &mut *to), "{}", value)?;
    }
    if let Some(last) = fragments.last() {
        to.write_str(last)?;
    }
    Ok(())
}

pub fn render_template_with(
    escape: &impl Escape,
    fragments: &[&str],
    values: &[&dyn Display],
) -> Result<String> {
    let mut out = String::with_capacity(fragments.iter().map(|f| f.len()).sum());
    render_into(&mut out, escape, fragments, values)?;
    Ok(out)
}

/// Interleaves literal `fragments` with HTML-escaped `values`.
pub fn render_template(fragments: &[&str], values: &[&dyn Display]) -> Result<String> {
    render_template_with(&Html, fragments, values)
}
