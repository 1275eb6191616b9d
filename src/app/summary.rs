//! Post-conversion summary.

use ghostty_ghost::convert::ConversionReport;
use ghostty_ghost::ui::Renderer;

pub(crate) fn render_report(renderer: &Renderer, report: &ConversionReport) {
    for warning in &report.diagnostics.warnings {
        renderer.warn(warning);
    }
    renderer.success("Configuration converted successfully");
    for (key, value) in report_fields(report) {
        renderer.field(key, &value);
    }
    if report.unmapped > 0 {
        renderer.detail("unmapped settings are kept as comments for manual review");
    }
    renderer.detail("You can now use this configuration with Ghostty");
}

/// `key: value` rows describing what was written.
pub(crate) fn report_fields(report: &ConversionReport) -> Vec<(&'static str, String)> {
    let mut fields = vec![("saved to", report.target.display().to_string())];
    if let Some(backup) = &report.backup {
        fields.push(("backup", backup.display().to_string()));
    }
    fields.push(("mapped", report.mapped.to_string()));
    fields.push(("unmapped", report.unmapped.to_string()));
    fields
}
