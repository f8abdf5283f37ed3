use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// A block of lines at the bottom of the terminal that can be redrawn in
/// place
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        let mut content = content.to_string();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }

        let lines_to_clear = self.last_lines.min(u16::MAX as usize) as u16;
        if lines_to_clear > 0 {
            out.queue(cursor::MoveUp(lines_to_clear))?;
        }

        for _ in 0..lines_to_clear {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            out.queue(cursor::MoveDown(1))?;
        }

        if lines_to_clear > 0 {
            out.queue(cursor::MoveUp(lines_to_clear))?;
        }

        out.write_all(content.as_bytes())?;
        out.flush()?;

        self.last_lines = content.chars().filter(|&c| c == '\n').count();
        Ok(())
    }

    /// Stop tracking the current content so it stays on screen
    pub fn commit(&mut self) {
        self.last_lines = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_writes_plain_content() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "- Code style linting...").unwrap();
        assert_eq!(out, b"- Code style linting...\n");
    }

    #[test]
    fn redraw_moves_cursor_back_over_previous_lines() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "one").unwrap();
        out.clear();
        region.update(&mut out, "two").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with("two\n"));
    }

    #[test]
    fn committed_content_is_not_cleared() {
        let mut region = LiveRegion::new();
        let mut out = Vec::new();
        region.update(&mut out, "done").unwrap();
        region.commit();
        out.clear();
        region.update(&mut out, "next").unwrap();
        assert_eq!(out, b"next\n");
    }
}
