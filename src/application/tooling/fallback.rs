//! Illustrative datasets served when no EMR credential is configured.

use crate::domain::{
    PatientAllergies, PatientDemographics, PatientLabs, PatientMedications, PatientProblems,
    PatientVitals,
};

const VITALS: &[(&str, &str)] = &[
    ("BP", "120/80"),
    ("Heart Rate", "98"),
    ("Temperature", "98.6"),
    ("Respiratory Rate", "16"),
    ("Oxygen Saturation", "98"),
    ("Weight", "100"),
];

const LABS: &[(&str, &str)] = &[
    ("CBC", "Normal"),
    ("CMP", "Normal"),
    ("Lipid Profile", "Normal"),
    ("Urine Analysis", "Normal"),
    ("HbA1c", "5.2"),
    ("WBC", "12.5"),
];

const MEDICATIONS: &[(&str, &str)] = &[
    ("Metformin", "500mg"),
    ("Lisinopril", "10mg"),
    ("Atorvastatin", "20mg"),
    ("Aspirin", "81mg"),
    ("Levothyroxine", "50mcg"),
];

const ALLERGIES: &[(&str, &str)] = &[
    ("Penicillin", "Mild"),
    ("Sulfa", "Severe"),
    ("Codeine", "Mild"),
    ("Aspirin", "Severe"),
    ("Latex", "Mild"),
];

const PROBLEMS: &[(&str, &str)] = &[
    ("Hypertension", "Mild"),
    ("Diabetes", "Severe"),
    ("Hyperlipidemia", "Mild"),
    ("Obesity", "Severe"),
    ("Asthma", "Mild"),
];

pub fn vitals(visit_id: &str) -> Vec<PatientVitals> {
    VITALS
        .iter()
        .map(|(name, result)| PatientVitals {
            visit_id: visit_id.to_string(),
            vital_name: name.to_string(),
            vital_result: result.to_string(),
        })
        .collect()
}

/// Looks up one vital by name, ignoring case and surrounding whitespace.
pub fn vital_by_name(visit_id: &str, vital_name: &str) -> Option<PatientVitals> {
    let wanted = vital_name.trim();
    vitals(visit_id)
        .into_iter()
        .find(|vital| vital.vital_name.eq_ignore_ascii_case(wanted))
}

pub fn labs(visit_id: &str) -> Vec<PatientLabs> {
    LABS.iter()
        .map(|(name, result)| PatientLabs {
            visit_id: visit_id.to_string(),
            lab_test_name: name.to_string(),
            lab_result: result.to_string(),
        })
        .collect()
}

pub fn medications(visit_id: &str) -> Vec<PatientMedications> {
    MEDICATIONS
        .iter()
        .map(|(name, dose)| PatientMedications {
            visit_id: visit_id.to_string(),
            medication_name: name.to_string(),
            medication_dose: dose.to_string(),
        })
        .collect()
}

pub fn allergies(visit_id: &str) -> Vec<PatientAllergies> {
    ALLERGIES
        .iter()
        .map(|(name, severity)| PatientAllergies {
            visit_id: visit_id.to_string(),
            allergy_name: name.to_string(),
            allergy_severity: severity.to_string(),
        })
        .collect()
}

pub fn demographics(visit_id: &str) -> PatientDemographics {
    PatientDemographics {
        visit_id: visit_id.to_string(),
        patient_name: "John Doe".into(),
        patient_age: "45".into(),
        patient_gender: "F".into(),
        patient_race: "White".into(),
        patient_ethnicity: "Non-Hispanic".into(),
    }
}

pub fn problems(visit_id: &str) -> Vec<PatientProblems> {
    PROBLEMS
        .iter()
        .map(|(name, severity)| PatientProblems {
            visit_id: visit_id.to_string(),
            problem_name: name.to_string(),
            problem_severity: severity.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_is_tagged_with_the_visit() {
        for visit in ["V-1", "", "visit with spaces", "ÄÖÜ-42"] {
            assert!(!vitals(visit).is_empty());
            assert!(vitals(visit).iter().all(|r| r.visit_id == visit));
            assert!(labs(visit).iter().all(|r| r.visit_id == visit));
            assert!(medications(visit).iter().all(|r| r.visit_id == visit));
            assert!(allergies(visit).iter().all(|r| r.visit_id == visit));
            assert!(problems(visit).iter().all(|r| r.visit_id == visit));
            assert_eq!(demographics(visit).visit_id, visit);
        }
    }

    #[test]
    fn vital_lookup_ignores_case() {
        let weight = vital_by_name("V-1", "weight").expect("weight exists");
        assert_eq!(weight.vital_result, "100");
        let hr = vital_by_name("V-1", " heart rate ").expect("heart rate exists");
        assert_eq!(hr.vital_result, "98");
        assert!(vital_by_name("V-1", "Blood Glucose").is_none());
    }
}
