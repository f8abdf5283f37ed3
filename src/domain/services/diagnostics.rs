//! Compiler diagnostic reformatting
//!
//! Transformers typically report failures as
//! `SyntaxError: /abs/project/src/a.js: Unexpected token (3:4)` followed by a
//! code frame. `legible` turns the headline into a clickable
//! `src/a.js:3:4: SyntaxError: Unexpected token` and makes every path in the
//! message project-relative. Anything it does not recognise passes through.

use std::path::Path;

/// Reformat a raw transformer diagnostic for display
pub fn legible(raw: &str, project_root: &Path) -> String {
    let root = project_root.to_string_lossy();
    let relative = if root.is_empty() {
        raw.to_string()
    } else {
        let prefix = format!("{}/", root.trim_end_matches('/'));
        raw.replace(&prefix, "")
    };

    let trimmed = relative.trim_matches('\n');
    let (headline, rest) = match trimmed.split_once('\n') {
        Some((head, rest)) => (head, Some(rest)),
        None => (trimmed, None),
    };

    let headline = rewrite_headline(headline).unwrap_or_else(|| headline.to_string());
    match rest {
        Some(rest) => format!("{}\n{}", headline, rest),
        None => headline,
    }
}

fn rewrite_headline(line: &str) -> Option<String> {
    let (kind, rest) = line.split_once(": ")?;
    if !kind.ends_with("Error") || kind.contains(char::is_whitespace) {
        return None;
    }

    let (file, message) = rest.split_once(": ")?;
    if file.contains(char::is_whitespace) {
        return None;
    }

    match split_location(message) {
        Some((message, line_no, column)) => Some(format!(
            "{}:{}:{}: {}: {}",
            file, line_no, column, kind, message
        )),
        None => Some(format!("{}: {}: {}", file, kind, message)),
    }
}

/// Split `message (line:column)` into its parts
fn split_location(message: &str) -> Option<(&str, &str, &str)> {
    let body = message.strip_suffix(')')?;
    let open = body.rfind(" (")?;
    let (line_no, column) = body[open + 2..].split_once(':')?;
    let is_number = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !is_number(line_no) || !is_number(column) {
        return None;
    }
    Some((&body[..open], line_no, column))
}
