//! Span markup helpers for rich command output.
//!
//! Rich results carry inline tags of the form `[[class]]text[[/]]`. The
//! rendering surface decides what a class means (color, glitch animation,
//! blink); the core only produces and strips the tags. Classes in use:
//! `cyan`, `green`, `yellow`, `red`, `purple`, `gray`, `glitch`,
//! `typing`, `blink`, `alert`.

/// Wrap text in a span of the given class.
pub fn span(class: &str, text: &str) -> String {
    format!("[[{class}]]{text}[[/]]")
}

/// Glitch-styled heading text.
pub fn glitch(text: &str) -> String {
    span("glitch", text)
}

/// Typewriter-revealed text.
pub fn typing(text: &str) -> String {
    span("typing", text)
}

/// Alarm styling for theatrical non-errors (`rm -rf /` and friends).
pub fn alert(text: &str) -> String {
    span("alert", text)
}

/// Remove every markup tag, leaving the plain text.
///
/// Unterminated or stray tags are left as-is; stripping never fails.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("[[") {
        let after = &rest[start + 2..];
        match after.find("]]") {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &after[end + 2..];
            }
            None => {
                // No closing marker; keep the remainder literally.
                out.push_str(rest);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_wraps_with_class() {
        assert_eq!(span("cyan", "hi"), "[[cyan]]hi[[/]]");
    }

    #[test]
    fn strip_removes_tags() {
        assert_eq!(strip_markup(&span("cyan", "hi")), "hi");
        assert_eq!(strip_markup(&glitch("SCAN")), "SCAN");
    }

    #[test]
    fn strip_handles_nested_and_adjacent_spans() {
        let s = format!("{} and {}", span("red", "a"), span("green", "b"));
        assert_eq!(strip_markup(&s), "a and b");
    }

    #[test]
    fn strip_plain_text_is_identity() {
        let plain = "no tags here [single] brackets ok";
        assert_eq!(strip_markup(plain), plain);
    }

    #[test]
    fn strip_leaves_unterminated_tag() {
        assert_eq!(strip_markup("before [[cyan unterminated"), "before [[cyan unterminated");
    }

    #[test]
    fn strip_empty_is_empty() {
        assert_eq!(strip_markup(""), "");
    }
}
