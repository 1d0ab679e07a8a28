use crate::report::FootprintReport;

/// Markdown formatter for footprint reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(report: &FootprintReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Your Carbon Footprint\n\n");
        md.push_str(&format!(
            "**{} tonnes CO₂e/year** ({:.2} kg)\n\n",
            report.total_carbon_tonnes, report.total_emissions
        ));
        md.push_str(&format!(
            "Rating: **{}** ({})\n\n",
            report.rating_label, report.rating_message
        ));

        md.push_str("## Breakdown by Category\n\n");
        md.push_str("| Category | Emissions | Share |\n");
        md.push_str("|----------|-----------|-------|\n");
        for line in &report.breakdown {
            md.push_str(&format!(
                "| {} | {:.2} | {}% |\n",
                line.label, line.emissions, line.share_percent
            ));
        }
        md.push('\n');

        md.push_str("## Personalized Recommendations\n\n");
        for tip in &report.tips {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push('\n');

        md.push_str(&format!("---\n\n*Generated {}*\n", report.generated_at));

        md
    }
}
