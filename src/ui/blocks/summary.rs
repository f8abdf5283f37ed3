use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            infos: Vec::new(),
        }
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown dimmed under the stats)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (Icon::Error, ColoredText::error(self.title.as_str()).bold())
        };

        let mut out = format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        let width = self
            .stats
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, count) in &self.stats {
            out.push_str(&format!("  {:<width$}  {}\n", label, count, width = width));
        }
        for info in &self.infos {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(info.as_str()).render(supports_color)
            ));
        }
        out
    }
}
