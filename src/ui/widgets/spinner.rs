use crate::ui::primitives::icon::Icon;

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    pub fn succeed(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            self.message
        )
    }

    pub fn fail(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            self.message
        )
    }
}

fn frames(supports_unicode: bool) -> &'static [char] {
    if supports_unicode {
        SPINNER_FRAMES_BRAILLE
    } else {
        SPINNER_FRAMES_ASCII
    }
}
