use crate::types::report::HealthReport;
use crate::types::scoring::HealthStatus;
use crate::types::weights::WeightVector;

pub fn to_markdown(report: &HealthReport) -> String {
    let mut output = String::new();
    output.push_str("# Ocean Health Report\n\n");
    match report.mean_overall_score {
        Some(mean) => output.push_str(&format!(
            "Observations: {} (mean overall score {:.1})\n\n",
            report.observations.len(),
            mean
        )),
        None => output.push_str("Observations: 0\n\n"),
    }

    output.push_str("## Weights\n\n");
    output.push_str(&weights_markdown(&report.weights));
    output.push('\n');

    output.push_str("## Scores\n\n");
    if report.observations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str(
            "| Location | pH | SST (°C) | Species | pH Score | SST Score | Bio. Score | Overall | Status |\n",
        );
        output.push_str("|---|---|---|---|---|---|---|---|---|\n");
        for row in &report.observations {
            output.push_str(&format!(
                "| {} | {:.2} | {:.1} | {} | {} | {} | {} | {} | {} |\n",
                row.observation.location,
                row.observation.ph,
                row.observation.sst_celsius,
                row.observation.species_observed,
                row.norm_ph,
                row.norm_sst,
                row.norm_bio,
                row.overall_score,
                row.classification
            ));
        }
        output.push('\n');
    }

    output.push_str("## Summary\n\n");
    for status in HealthStatus::ALL {
        output.push_str(&format!(
            "- {}: {}\n",
            status,
            report.status_counts.get(status)
        ));
    }
    output.push('\n');

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
        output.push('\n');
    }

    let params = &report.params;
    let thresholds = &params.thresholds;
    output.push_str("## Scoring Legend\n\n");
    output.push_str(&format!("- Healthy ({}-100)\n", thresholds.healthy));
    output.push_str(&format!(
        "- Moderate ({}-{})\n",
        thresholds.moderate,
        thresholds.healthy.saturating_sub(1)
    ));
    output.push_str(&format!(
        "- Poor ({}-{})\n",
        thresholds.poor,
        thresholds.moderate.saturating_sub(1)
    ));
    output.push_str(&format!(
        "- Critical (0-{})\n\n",
        thresholds.poor.saturating_sub(1)
    ));
    output.push_str(&format!(
        "Optimal ranges: pH {} (±{}), SST {}-{}°C (±{}), biodiversity up to {} species.\n",
        params.optimal_ph,
        params.max_ph_deviation,
        params.optimal_sst_min,
        params.optimal_sst_max,
        params.max_sst_deviation,
        params.max_expected_species
    ));

    output
}

pub fn weights_markdown(weights: &WeightVector) -> String {
    format!(
        "- ph: {:.1}%\n- sst: {:.1}%\n- biodiversity: {:.1}%\n",
        weights.ph() * 100.0,
        weights.sst() * 100.0,
        weights.biodiversity() * 100.0
    )
}
