//! Health-risk to specialty resolution.

use crate::models::Specialty;

/// Keyword to specialty table. Order matters: the first keyword found in a
/// risk phrase wins, so entries must stay in this exact sequence.
pub const RISK_SPECIALTY_MAP: &[(&str, Specialty)] = &[
    ("anemia", Specialty::Hematology),
    ("polycythemia", Specialty::Hematology),
    ("leukemia", Specialty::Hematology),
    ("thrombocytopenia", Specialty::Hematology),
    ("thrombocytosis", Specialty::Hematology),
    ("hepatitis", Specialty::Hepatology),
    ("cirrhosis", Specialty::Hepatology),
    ("fatty liver disease", Specialty::Hepatology),
    ("cholestasis", Specialty::Hepatology),
    ("liver dysfunction", Specialty::Hepatology),
    ("diabetes", Specialty::Endocrinology),
    ("thyroid disorders", Specialty::Endocrinology),
    ("metabolic syndrome", Specialty::Endocrinology),
    ("hyperlipidemia", Specialty::Cardiology),
    ("atherosclerosis", Specialty::Cardiology),
    ("hypertension", Specialty::Cardiology),
    ("kidney disease", Specialty::Nephrology),
    ("renal", Specialty::Nephrology),
    ("creatinine", Specialty::Nephrology),
];

/// Resolve a list of detected health risks to the required specialty.
///
/// Risks are scanned in input order, keywords in table order; the first
/// keyword occurring as a substring of a risk decides. Returns `None` when
/// nothing matches or the input is empty.
pub fn resolve_specialty<S: AsRef<str>>(risks: &[S]) -> Option<Specialty> {
    for risk in risks {
        let risk_lower = risk.as_ref().to_lowercase();
        let risk_lower = risk_lower.trim();
        for (keyword, specialty) in RISK_SPECIALTY_MAP {
            if risk_lower.contains(keyword) {
                return Some(*specialty);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_keywords() {
        assert_eq!(
            resolve_specialty(&["Anemia (low iron)"]),
            Some(Specialty::Hematology)
        );
        assert_eq!(
            resolve_specialty(&["Fatty Liver Disease"]),
            Some(Specialty::Hepatology)
        );
        assert_eq!(
            resolve_specialty(&["Type 2 Diabetes"]),
            Some(Specialty::Endocrinology)
        );
        assert_eq!(
            resolve_specialty(&["Hypertension stage 1"]),
            Some(Specialty::Cardiology)
        );
        assert_eq!(
            resolve_specialty(&["Elevated creatinine"]),
            Some(Specialty::Nephrology)
        );
    }

    #[test]
    fn test_empty_and_unknown_inputs() {
        assert_eq!(resolve_specialty::<&str>(&[]), None);
        assert_eq!(resolve_specialty(&["Perfectly healthy"]), None);
        assert_eq!(resolve_specialty(&["", "  "]), None);
    }

    #[test]
    fn test_first_risk_wins() {
        let risks = ["Hypertension", "Anemia"];
        assert_eq!(resolve_specialty(&risks), Some(Specialty::Cardiology));
    }

    #[test]
    fn test_keyword_table_order_wins_within_a_risk() {
        // "anemia" precedes "renal" in the table, so it decides even though
        // both occur in the phrase
        let risks = ["Anemia secondary to renal impairment"];
        assert_eq!(resolve_specialty(&risks), Some(Specialty::Hematology));
    }

    #[test]
    fn test_unrecognized_risks_are_skipped() {
        let risks = ["Mild dehydration", "hepatitis B surface antigen positive"];
        assert_eq!(resolve_specialty(&risks), Some(Specialty::Hepatology));
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        assert_eq!(
            resolve_specialty(&["  LEUKEMIA suspected  "]),
            Some(Specialty::Hematology)
        );
    }
}
