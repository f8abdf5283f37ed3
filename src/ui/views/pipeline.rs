use std::path::Path;

use esmc::application::PipelineReport;
use esmc::PipelineCommand;

use crate::ui::blocks::summary::ResultSummary;

fn command_label(command: PipelineCommand) -> &'static str {
    match command {
        PipelineCommand::Full => "Pipeline",
        PipelineCommand::Lint => "Lint",
        PipelineCommand::Build => "Build",
    }
}

pub fn render_pipeline_summary(
    report: &PipelineReport,
    project_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let label = command_label(report.command);
    let title = if report.is_up_to_date() {
        format!("{label} up to date")
    } else {
        format!("{label} complete")
    };

    let mut summary = ResultSummary::success(title);
    summary.add_stat("changed files", report.changed.len());
    summary.add_stat("source files", report.total);
    summary.add_stat("stages run", report.invoked_stages().count());

    let manifest = report
        .manifest_path
        .strip_prefix(project_root)
        .unwrap_or(&report.manifest_path);
    summary.add_info(format!("manifest: {}", manifest.display()));

    summary.render(supports_color, supports_unicode)
}
