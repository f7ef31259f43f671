use super::ph::{PH_MAX, PH_MIN};
use crate::types::observation::Observation;
use crate::types::report::Finding;
use std::collections::HashSet;

/// Data-quality findings for a set of observations. Out-of-range readings are
/// still scored (clamped), so only non-finite readings are blocking.
pub fn input_findings(observations: &[Observation]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if observations.is_empty() {
        findings.push(Finding {
            id: "input.empty".to_string(),
            title: "No observations".to_string(),
            body: "The dataset contains no observations; nothing was scored.".to_string(),
            blocking: false,
            location: None,
        });
        return findings;
    }

    let mut seen = HashSet::new();
    for observation in observations {
        let label = format!("{} ({})", observation.location, observation.date);

        if !observation.ph.is_finite() || !observation.sst_celsius.is_finite() {
            findings.push(Finding {
                id: "input.non_finite".to_string(),
                title: "Non-finite reading".to_string(),
                body: format!(
                    "{label} has a non-finite reading (pH {}, SST {}); affected metrics score 0.",
                    observation.ph, observation.sst_celsius
                ),
                blocking: true,
                location: Some(observation.location.clone()),
            });
        } else if !(PH_MIN..=PH_MAX).contains(&observation.ph) {
            findings.push(Finding {
                id: "input.ph_out_of_range".to_string(),
                title: "pH outside 0-14".to_string(),
                body: format!(
                    "{label} reports pH {:.2}; it was clamped to the 0-14 scale.",
                    observation.ph
                ),
                blocking: false,
                location: Some(observation.location.clone()),
            });
        }

        if observation.species_observed < 0 {
            findings.push(Finding {
                id: "input.negative_species".to_string(),
                title: "Negative species count".to_string(),
                body: format!(
                    "{label} reports {} species; it was treated as 0.",
                    observation.species_observed
                ),
                blocking: false,
                location: Some(observation.location.clone()),
            });
        }

        if !seen.insert((observation.location.as_str(), observation.date)) {
            findings.push(Finding {
                id: "input.duplicate_record".to_string(),
                title: "Duplicate record".to_string(),
                body: format!("{label} appears more than once in the dataset."),
                blocking: false,
                location: Some(observation.location.clone()),
            });
        }
    }

    findings
}
