//! Inline colour tokens and HTML rendering of the line log.
//!
//! Static text may embed `\x1b[COLOR:<class>]` to colour the rest of the line
//! (or up to the next token). `\x1b[COLOR:reset]` ends the span. Only the
//! classes in [`SAFE_CLASSES`] survive; anything else is dropped.

use crate::buffer::{LineKind, TerminalLine};

const TOKEN_START: &str = "\x1b[COLOR:";
pub const SAFE_CLASSES: [&str; 6] = ["success", "info", "warning", "error", "command", "prompt"];

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Text(&'a str),
    Open(&'a str),
    Reset,
}

/// Wraps `text` in a colour token pair.
pub fn paint(class: &str, text: &str) -> String {
    format!("{}{}]{}{}reset]", TOKEN_START, class, text, TOKEN_START)
}

fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find(TOKEN_START) {
        let after = &rest[start + TOKEN_START.len()..];
        let Some(end) = after.find(']') else {
            break;
        };
        if start > 0 {
            out.push(Segment::Text(&rest[..start]));
        }
        let class = &after[..end];
        if class == "reset" {
            out.push(Segment::Reset);
        } else if SAFE_CLASSES.contains(&class) {
            out.push(Segment::Open(class));
        }
        rest = &after[end + 1..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

pub fn strip_color_tokens(s: &str) -> String {
    segments(s)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Text(t) => Some(t),
            _ => None,
        })
        .collect()
}

/// Width in characters once tokens are removed.
pub fn visible_width(s: &str) -> usize {
    strip_color_tokens(s).chars().count()
}

/// Typed input is echoed as plain text: tokens and control characters go.
/// Whitespace controls such as tabs become a plain space.
pub fn sanitize_input(s: &str) -> String {
    strip_color_tokens(s)
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text and turns safelisted tokens into `<span>`s. Spans never
/// cross a newline.
pub fn to_html(s: &str) -> String {
    let mut html = String::new();
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            html.push('\n');
        }
        let mut open = false;
        for seg in segments(line) {
            match seg {
                Segment::Text(t) => html.push_str(&escape_html(t)),
                Segment::Open(class) => {
                    if open {
                        html.push_str("</span>");
                    }
                    html.push_str(&format!("<span class=\"{}\">", class));
                    open = true;
                }
                Segment::Reset => {
                    if open {
                        html.push_str("</span>");
                        open = false;
                    }
                }
            }
        }
        if open {
            html.push_str("</span>");
        }
    }
    html
}

fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input => "input",
        LineKind::Output => "output",
        LineKind::Error => "error",
        LineKind::System => "system",
    }
}

pub fn render_lines<'a>(lines: impl Iterator<Item = &'a TerminalLine>) -> String {
    lines
        .map(|line| {
            format!(
                "<div class=\"terminal-line {}\" data-id=\"{}\">{}</div>",
                kind_class(line.kind),
                line.id,
                to_html(&line.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_and_width() {
        let s = format!("{}Tux", paint("info", "OS:"));
        assert_eq!(strip_color_tokens(&s), "OS:Tux");
        assert_eq!(visible_width("├── ok"), 6);
    }

    #[test]
    fn test_unknown_class_is_dropped() {
        assert_eq!(to_html("\x1b[COLOR:#ff0000]red"), "red");
        assert_eq!(
            to_html("\x1b[COLOR:info]a\x1b[COLOR:reset]b"),
            "<span class=\"info\">a</span>b"
        );
    }

    #[test]
    fn test_to_html_escapes() {
        assert_eq!(
            to_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_span_closes_at_newline() {
        assert_eq!(
            to_html("\x1b[COLOR:success]one\ntwo"),
            "<span class=\"success\">one</span>\ntwo"
        );
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(sanitize_input("echo \x1b[COLOR:error]hi\u{7}"), "echo hi");
        assert_eq!(sanitize_input("cat about.md"), "cat about.md");
    }

    #[test]
    fn test_sanitize_keeps_tab_as_separator() {
        assert_eq!(sanitize_input("cat\tabout.md"), "cat about.md");
        assert_eq!(sanitize_input("echo a\tb\r"), "echo a b ");
    }

    #[test]
    fn test_render_lines() {
        let line = TerminalLine {
            id: 7,
            kind: LineKind::Error,
            text: "a & b".into(),
            command: None,
        };
        assert_eq!(
            render_lines(std::iter::once(&line)),
            "<div class=\"terminal-line error\" data-id=\"7\">a &amp; b</div>"
        );
    }
}
