//! Wire shapes for the agent endpoint and for each clinical data category.
//!
//! Field names follow the EMR service's camelCase JSON; every record carries
//! the visit it was fetched for.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /cdsagent/run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CdsAgentInput {
    pub visit_id: String,
    pub cdss_query: String,
    pub model_name: String,
}

/// Structured verdict the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CdsAgentOutput {
    /// Whether the required criteria have been met.
    pub criteria_met: bool,
    /// How each criterion was evaluated, one entry per reason.
    pub explanation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub visit_id: String,
    pub vital_name: String,
    pub vital_result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientLabs {
    pub visit_id: String,
    pub lab_test_name: String,
    pub lab_result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientMedications {
    pub visit_id: String,
    pub medication_name: String,
    pub medication_dose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientAllergies {
    pub visit_id: String,
    pub allergy_name: String,
    pub allergy_severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDemographics {
    pub visit_id: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_gender: String,
    pub patient_race: String,
    pub patient_ethnicity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientProblems {
    pub visit_id: String,
    pub problem_name: String,
    pub problem_severity: String,
}
