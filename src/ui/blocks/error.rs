use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::error(self.title.as_str())
            .bold()
            .render(supports_color);
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            title
        ));
        let rule = theme::rule(supports_unicode, self.title.len() + 2);
        out.push_str(&ColoredText::dim(rule).render(supports_color));
        out.push('\n');

        if let Some(file) = &self.file {
            let location = ColoredText::info(file.display().to_string());
            out.push_str(&format!("  {}\n\n", location.render(supports_color)));
        }

        for line in self.message.lines() {
            out.push_str(&format!("  {}\n", line));
        }

        if let Some(fix) = &self.fix {
            out.push('\n');
            out.push_str(&format!("  FIX: {}\n", fix));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_file_and_message() {
        let rendered = ErrorBlock::new("compile failed", "src/a.js:3:4: SyntaxError: Unexpected token\n> 3 | let = ;")
            .with_file("src/a.js")
            .render(false, false);

        assert!(rendered.starts_with("[FAIL] compile failed\n----------------\n"));
        assert!(rendered.contains("  src/a.js\n\n"));
        assert!(rendered.contains("  > 3 | let = ;\n"));
    }

    #[test]
    fn renders_without_file() {
        let rendered = ErrorBlock::new("error", "disk full").render(false, true);
        assert!(rendered.starts_with(&format!("{} error\n", Icon::Error.render(true))));
        assert!(rendered.ends_with("  disk full\n"));
    }

    #[test]
    fn renders_fix_hint() {
        let rendered = ErrorBlock::new("t", "m")
            .with_fix("run `esmc --force`")
            .render(false, false);
        assert!(rendered.contains("FIX: run `esmc --force`"));
    }
}
