use crate::Result;
use std::fmt::{self, Display, Write};

/// Characters an HTML parser treats specially, with the entity each one becomes.
/// Everything else passes through untouched.
pub const ENTITIES: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
    ('/', "&#x2F;"),
];

pub fn entity(c: char) -> Option<&'static str> {
    ENTITIES.iter().find(|(reserved, _)| *reserved == c).map(|(_, entity)| *entity)
}

pub trait Escape {
    fn write(&self, to: &mut impl Write, val: &str) -> fmt::Result;
}

/// Replaces the characters in [`ENTITIES`] with their entity references.
pub struct Html;

impl Escape for Html {
    fn write(&self, to: &mut impl Write, val: &str) -> fmt::Result {
        let mut rem = val;
        while let Some((idx, entity)) = rem
            .char_indices()
            .find_map(|(i, c)| entity(c).map(|e| (i, e)))
        {
            to.write_str(&rem[..idx])?;
            to.write_str(entity)?;
            // every reserved character is ASCII
            rem = &rem[idx + 1..];
        }
        to.write_str(rem)
    }
}

/// `fmt::Write` adapter passing everything written to it through an [`Escape`].
///
/// Lets a value's `Display` output be escaped while it is formatted, without
/// an unescaped intermediate copy.
pub struct Escaper<'a, E, W> {
    escape: &'a E,
    inner: &'a mut W,
}

impl<'a, E: Escape, W: Write> Escaper<'a, E, W> {
    pub fn new(escape: &'a E, inner: &'a mut W) -> Self {
        Escaper { escape, inner }
    }
}

impl<E: Escape, W: Write> Write for Escaper<'_, E, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.escape.write(&mut *self.inner, s)
    }
}

/// Formats `value` through the [`Html`] escaper.
///
/// Fails only when the value's `Display` implementation does.
pub fn escape_value(value: impl Display) -> Result<String> {
    let mut out = String::new();
    write!(Escaper::new(&Html, &mut out), "{}", value)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(escaped: &str) -> String {
        let mut out = String::new();
        let mut rem = escaped;
        'scan: while !rem.is_empty() {
            for (reserved, entity) in ENTITIES {
                if let Some(rest) = rem.strip_prefix(entity) {
                    out.push(reserved);
                    rem = rest;
                    continue 'scan;
                }
            }
            let c = rem.chars().next().expect("non-empty");
            out.push(c);
            rem = &rem[c.len_utf8()..];
        }
        out
    }

    #[test]
    fn test_html_escape() {
        let mut buf = String::new();
        Html.write(&mut buf, "<i>Sample & \"test@example.com\"</a>").expect("write");
        assert_eq!(buf, "&lt;i&gt;Sample &amp; &quot;test@example.com&quot;&lt;&#x2F;a&gt;");
    }

    #[test]
    fn test_entity_table() {
        assert_eq!(entity('&'), Some("&amp;"));
        assert_eq!(entity('/'), Some("&#x2F;"));
        assert_eq!(entity('\''), Some("&apos;"));
        assert_eq!(entity('@'), None);
        assert_eq!(entity('`'), None);
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_value("5'10\"").expect("escape"), "5&apos;10&quot;");
    }

    #[test]
    fn test_escape_every_occurrence() {
        assert_eq!(escape_value("a&&b//c").expect("escape"), "a&amp;&amp;b&#x2F;&#x2F;c");
    }

    #[test]
    fn test_escape_non_string_values() {
        assert_eq!(escape_value(42).expect("escape"), "42");
        assert_eq!(escape_value(1.5).expect("escape"), "1.5");
        assert_eq!(escape_value('<').expect("escape"), "&lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        for text in ["", "plain text", "±ünïcödé 漢字", "a=b; c:d @e #f"] {
            assert_eq!(escape_value(text).expect("escape"), text);
        }
    }

    #[test]
    fn test_escape_removes_reserved_and_decodes_back() {
        let texts = [
            "<script>alert('x')</script>",
            "&amp;",
            "a/b\"c'd",
            "1 < 2 && 3 > 2",
            "&&&<<<",
        ];
        for text in texts {
            let escaped = escape_value(text).expect("escape");
            assert!(!escaped.contains(['<', '>', '"', '\'', '/']), "{escaped}");
            let at_entities = escaped
                .match_indices('&')
                .all(|(i, _)| ENTITIES.iter().any(|(_, e)| escaped[i..].starts_with(e)));
            assert!(at_entities);
            assert_eq!(decode(&escaped), text);
        }
    }

    #[test]
    fn test_writer_matches_escape_value() {
        let text = "Tom & Jerry's <show> / 2";
        let mut buf = String::new();
        Html.write(&mut buf, text).expect("write");
        assert_eq!(buf, escape_value(text).expect("escape"));
    }

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_escape_failing_value() {
        assert!(matches!(escape_value(Broken), Err(crate::Error::Format(_))));
    }

    #[test]
    fn test_escaper_adapter() {
        let mut buf = String::from("<p>");
        write!(Escaper::new(&Html, &mut buf), "{} & {}", "<a>", 3).expect("write");
        assert_eq!(buf, "<p>&lt;a&gt; &amp; 3");
    }
}
