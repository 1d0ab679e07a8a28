use serde_json::{json, Map, Value};

use crate::report::FootprintReport;

/// JSON formatter for footprint reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Full report as pretty-printed JSON
    pub fn format(report: &FootprintReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// One-line record in the calculator's result shape: rounded tonnes,
    /// rating, shares keyed by category and tip text. Drops labels, the
    /// unrounded emissions and the echoed input.
    pub fn format_summary(report: &FootprintReport) -> Result<String, serde_json::Error> {
        let shares: Map<String, Value> = report
            .breakdown
            .iter()
            .map(|line| (line.category.clone(), Value::from(line.share_percent)))
            .collect();

        serde_json::to_string(&json!({
            "totalCarbonTonnes": report.total_carbon_tonnes,
            "rating": report.rating,
            "categoryShares": shares,
            "tips": report.tips,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::compute_with_rng;
    use crate::model::LifestyleInput;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_report() -> FootprintReport {
        let input = LifestyleInput::default();
        let result = compute_with_rng(&input, &mut StdRng::seed_from_u64(9));
        FootprintReport::new(&input, &result)
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample_report()).unwrap();

        assert!(json.contains("\"total_carbon_tonnes\": 6"));
        assert!(json.contains("\"rating\": \"good\""));
        assert!(json.contains("\"label\": \"Goods & Services\""));
        assert!(json.contains("\"vehicleType\": \"hybrid\""));
    }

    #[test]
    fn test_format_summary() {
        let report = sample_report();
        let json = JsonFormatter::format_summary(&report).unwrap();
        assert!(!json.contains('\n'));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["totalCarbonTonnes"], 6);
        assert_eq!(parsed["rating"], "good");
        assert_eq!(parsed["categoryShares"]["electricity"], 2);
        assert_eq!(parsed["categoryShares"]["transportation"], 51);
        assert_eq!(parsed["categoryShares"]["food"], 30);
        assert_eq!(parsed["categoryShares"]["goods"], 17);
        assert_eq!(parsed["tips"], json!(report.tips));
        assert!(parsed.get("input").is_none());
    }
}
