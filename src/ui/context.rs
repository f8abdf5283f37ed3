use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use esmc::config::{AnimationMode, ColorMode, Config};
use esmc::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_no_animation, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let animation = if json || cli_no_animation || caps.is_ci {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always | AnimationMode::Auto => caps.is_tty,
            }
        };

        Self {
            json,
            verbose,
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }
}
