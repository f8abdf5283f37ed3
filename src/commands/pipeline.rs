//! Pipeline command: full pipeline, `lint` and `build`

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use esmc::config;
use esmc::domain::ports::PipelineEventSink;
use esmc::domain::value_objects::PipelinePlan;
use esmc::infrastructure::events::command_name;
use esmc::infrastructure::JsonEventSink;
use esmc::presentation::{create_pipeline_use_case, Cli};

use super::discover_project_root;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, CompleteEvent};
use crate::ui::output::print_config_warnings;
use crate::ui::progress::ConsoleEventSink;
use crate::ui::views::pipeline::render_pipeline_summary;

pub fn cmd_pipeline(cli: &Cli) -> Result<()> {
    let command = cli.pipeline_command();
    let pipeline = cli.pipeline_config();

    // Invalid flag combinations are fatal before config or sources are read
    PipelinePlan::for_command(command, &pipeline)?;

    let project_root = discover_project_root(&std::env::current_dir()?);
    let (config, warnings) = config::load_or_default(&project_root)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.no_animation, &config);
    if !ui.json {
        print_config_warnings(&warnings, ui.unicode);
    }
    debug!(root = %project_root.display(), ?command, ?pipeline, "starting run");

    let use_case = create_pipeline_use_case(&project_root, &config, &pipeline);
    let events: Arc<dyn PipelineEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let report = use_case.execute_with_events(command, &pipeline, events)?;

    if ui.json {
        emit_event(&CompleteEvent::new(
            command_name(command),
            report.changed.len(),
            report.total,
            report.manifest_entries,
        ))?;
    } else {
        print!(
            "{}",
            render_pipeline_summary(&report, &project_root, ui.color, ui.unicode)
        );
    }

    Ok(())
}
