use crossterm::style::Stylize;
use esmc::domain::ports::CollaboratorError;
use esmc::EsmcError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::primitives::text::ColoredText;

pub fn format_esmc_error(err: &EsmcError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_esmc_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_esmc_error_with(err: &EsmcError, supports_color: bool, supports_unicode: bool) -> String {
    match err {
        EsmcError::InvalidFlags { .. } => {
            let message = err.to_string();
            let message = if supports_color {
                format!("{}", message.as_str().bold())
            } else {
                message
            };
            format!(
                "{}: {}\n",
                ColoredText::error("fatal").render(supports_color),
                message
            )
        }
        EsmcError::Stage { stage, source } => {
            let block = ErrorBlock::new(format!("{} failed", stage), source.to_string());
            let block = match source {
                CollaboratorError::Diagnostic { file, .. } => block.with_file(file),
                CollaboratorError::NotConfigured(_) => block.with_fix(
                    "set the command under [collaborators] in esmc.toml",
                ),
                _ => block,
            };
            block.render(supports_color, supports_unicode)
        }
        EsmcError::CacheLocked { .. } => ErrorBlock::new("cache locked", err.to_string())
            .with_fix("wait for the other esmc process to finish")
            .render(supports_color, supports_unicode),
        EsmcError::SourceRootNotFound { path } => {
            ErrorBlock::new("source directory not found", err.to_string())
                .with_file(path)
                .with_fix("create it or set [layout] source in esmc.toml")
                .render(supports_color, supports_unicode)
        }
        EsmcError::InvalidConfig { file, .. } => ErrorBlock::new("invalid config", err.to_string())
            .with_file(file)
            .render(supports_color, supports_unicode),
        EsmcError::Manifest(_) => ErrorBlock::new("manifest error", err.to_string())
            .with_fix("run `esmc --force` to rebuild from scratch")
            .render(supports_color, supports_unicode),
        other => ErrorBlock::new("error", other.to_string()).render(supports_color, supports_unicode),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(esmc) = err.downcast_ref::<EsmcError>() {
        return format_esmc_error(esmc);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    if json {
        let stage = err
            .downcast_ref::<EsmcError>()
            .and_then(EsmcError::stage)
            .map(|stage| stage.id());
        let event = crate::ui::json::ErrorEvent::new(command, format!("{:#}", err))
            .with_stage(stage);
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err));
}
