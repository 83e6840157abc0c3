//! ANSI rendering surface for rich command results.
//!
//! The core tags rich output with `[[class]]...[[/]]` spans; this module
//! is the collaborator that decides what a class looks like in a real
//! terminal. Plain results pass through untouched; error results are
//! painted red.

use termfolio_types::CommandResult;

const RESET: &str = "\x1b[0m";

/// SGR sequence for a markup class. Unknown classes render unstyled.
fn class_code(class: &str) -> &'static str {
    match class {
        "cyan" => "\x1b[36m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "red" => "\x1b[31m",
        "purple" => "\x1b[35m",
        "gray" => "\x1b[90m",
        "glitch" => "\x1b[1;35m",
        "typing" => "\x1b[3m",
        "blink" => "\x1b[5;31m",
        "alert" => "\x1b[1;5;31m",
        _ => "",
    }
}

/// Translate markup spans into ANSI escapes.
fn markup_to_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut stack: Vec<&str> = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find("[[") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("]]") else {
            // Unterminated tag: keep the remainder literally.
            out.push_str(&rest[start..]);
            return out;
        };
        let tag = &after[..end];
        if tag == "/" {
            stack.pop();
            out.push_str(RESET);
            // Re-apply the enclosing span, if any.
            if let Some(enclosing) = stack.last() {
                out.push_str(class_code(enclosing));
            }
        } else {
            stack.push(tag);
            out.push_str(class_code(tag));
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    if !stack.is_empty() {
        out.push_str(RESET);
    }
    out
}

/// Paint a command result for the terminal.
pub fn render(result: &CommandResult) -> String {
    if result.error {
        return format!("\x1b[31m{}{RESET}", result.output);
    }
    if result.rich {
        return markup_to_ansi(&result.output);
    }
    result.output.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_passes_through() {
        let r = CommandResult::text("hello");
        assert_eq!(render(&r), "hello");
    }

    #[test]
    fn error_output_is_red() {
        let r = CommandResult::error_text("nope");
        let painted = render(&r);
        assert!(painted.starts_with("\x1b[31m"));
        assert!(painted.ends_with(RESET));
        assert!(painted.contains("nope"));
    }

    #[test]
    fn rich_span_maps_to_sgr() {
        let r = CommandResult::rich("[[cyan]]hi[[/]]");
        assert_eq!(render(&r), "\x1b[36mhi\x1b[0m");
    }

    #[test]
    fn nested_spans_restore_enclosing_style() {
        let r = CommandResult::rich("[[green]]a[[red]]b[[/]]c[[/]]");
        let painted = render(&r);
        assert_eq!(painted, "\x1b[32ma\x1b[31mb\x1b[0m\x1b[32mc\x1b[0m");
    }

    #[test]
    fn unknown_class_renders_text_unstyled() {
        let r = CommandResult::rich("[[mystery]]x[[/]]");
        assert_eq!(render(&r), "x\x1b[0m");
    }

    #[test]
    fn unterminated_tag_is_kept_literally() {
        let r = CommandResult::rich("before [[cyan");
        assert_eq!(render(&r), "before [[cyan");
    }
}
