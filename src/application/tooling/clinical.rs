//! Patient-data retrieval tools exposed to the agent.

use super::deps::AgentDeps;
use super::error::ToolError;
use super::fallback;
use super::registry::{AgentTool, ToolOutcome, ToolRegistry, ToolSpec};
use crate::infrastructure::emr::{EmrCategory, is_empty_payload};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const GET_VITALS: &str = "get_vitals";
pub const GET_VITAL_BY_NAME: &str = "get_vital_by_name";
pub const GET_LAB_RESULT: &str = "get_lab_result";
pub const GET_MEDICATIONS: &str = "get_medications";
pub const GET_ALLERGIES: &str = "get_allergies";
pub const GET_DEMOGRAPHICS: &str = "get_demographics";
pub const GET_PROBLEMS_LIST: &str = "get_problems_list";

const VITAL_NOT_FOUND: &str = "Could not find the vitals, use get_vitals method to get all vitals";

type Fallback = fn(&str) -> Result<Value, serde_json::Error>;

#[derive(Debug, Deserialize)]
struct VisitArgs {
    #[serde(alias = "visitId")]
    visit_id: String,
}

#[derive(Debug, Deserialize)]
struct VitalArgs {
    #[serde(alias = "visitId")]
    visit_id: String,
    #[serde(alias = "vitalName")]
    vital_name: String,
}

/// Builds the registry holding every clinical retrieval tool.
pub fn clinical_tools() -> ToolRegistry {
    ToolRegistry::new()
        .with(Arc::new(CategoryTool::vitals()))
        .with(Arc::new(VitalByNameTool::new()))
        .with(Arc::new(CategoryTool::labs()))
        .with(Arc::new(CategoryTool::medications()))
        .with(Arc::new(CategoryTool::allergies()))
        .with(Arc::new(CategoryTool::demographics()))
        .with(Arc::new(CategoryTool::problems()))
}

fn visit_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "visit_id": {"type": "string", "description": "The visit id of the patient."}
        },
        "required": ["visit_id"]
    })
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, String> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|err| format!("invalid arguments for {tool}: {err}"))
}

/// A tool that fetches every record of one category for a visit.
pub struct CategoryTool {
    spec: ToolSpec,
    category: EmrCategory,
    fallback: Fallback,
    empty_message: &'static str,
}

impl CategoryTool {
    fn new(
        name: &str,
        description: &str,
        category: EmrCategory,
        fallback: Fallback,
        empty_message: &'static str,
    ) -> Self {
        Self {
            spec: ToolSpec {
                name: name.to_string(),
                description: description.to_string(),
                parameters: visit_schema(),
            },
            category,
            fallback,
            empty_message,
        }
    }

    pub fn vitals() -> Self {
        Self::new(
            GET_VITALS,
            "Get all vitals of a patient.",
            EmrCategory::Vitals,
            |visit| serde_json::to_value(fallback::vitals(visit)),
            "Could not find the vitals, skip using vitals",
        )
    }

    pub fn labs() -> Self {
        Self::new(
            GET_LAB_RESULT,
            "Get the lab results of a patient.",
            EmrCategory::Labs,
            |visit| serde_json::to_value(fallback::labs(visit)),
            "Could not find the lab results",
        )
    }

    pub fn medications() -> Self {
        Self::new(
            GET_MEDICATIONS,
            "Get the medications of a patient.",
            EmrCategory::Medications,
            |visit| serde_json::to_value(fallback::medications(visit)),
            "Could not find the medications",
        )
    }

    pub fn allergies() -> Self {
        Self::new(
            GET_ALLERGIES,
            "Get the allergies of a patient.",
            EmrCategory::Allergies,
            |visit| serde_json::to_value(fallback::allergies(visit)),
            "Could not find the allergies",
        )
    }

    pub fn demographics() -> Self {
        Self::new(
            GET_DEMOGRAPHICS,
            "Get the demographics of a patient.",
            EmrCategory::Demographics,
            |visit| serde_json::to_value(fallback::demographics(visit)),
            "Could not find the demographics",
        )
    }

    pub fn problems() -> Self {
        Self::new(
            GET_PROBLEMS_LIST,
            "Get the problems list of a patient.",
            EmrCategory::Problems,
            |visit| serde_json::to_value(fallback::problems(visit)),
            "Could not find the problems list",
        )
    }
}

#[async_trait]
impl AgentTool for CategoryTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn call(&self, deps: &AgentDeps, arguments: Value) -> Result<ToolOutcome, ToolError> {
        let args: VisitArgs = match parse_args(&self.spec.name, arguments) {
            Ok(args) => args,
            Err(reason) => return Ok(ToolOutcome::InvalidArguments(reason)),
        };

        let Some(emr) = deps.emr() else {
            debug!(tool = %self.spec.name, visit_id = %args.visit_id, "No EMR credential, serving fallback data");
            let data = (self.fallback)(&args.visit_id).map_err(|source| ToolError::Encode {
                tool: self.spec.name.clone(),
                source,
            })?;
            return Ok(ToolOutcome::Data(data));
        };

        info!(tool = %self.spec.name, visit_id = %args.visit_id, "Fetching from EMR");
        let data = emr
            .fetch(self.category, &json!({ "visitId": args.visit_id }))
            .await
            .map_err(|source| ToolError::Upstream {
                tool: self.spec.name.clone(),
                source,
            })?;

        if is_empty_payload(&data) {
            warn!(tool = %self.spec.name, visit_id = %args.visit_id, "EMR returned no data");
            return Ok(ToolOutcome::Retryable(self.empty_message.to_string()));
        }
        Ok(ToolOutcome::Data(data))
    }
}

/// Fetches a single named vital for a visit.
pub struct VitalByNameTool {
    spec: ToolSpec,
}

impl VitalByNameTool {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec {
                name: GET_VITAL_BY_NAME.to_string(),
                description: "Get one vital of a patient by its name (BP, Heart Rate, Temperature, Respiratory Rate, Oxygen Saturation, Weight).".to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "visit_id": {"type": "string", "description": "The visit id of the patient."},
                        "vital_name": {"type": "string", "description": "The name of the vital to be retrieved."}
                    },
                    "required": ["visit_id", "vital_name"]
                }),
            },
        }
    }
}

impl Default for VitalByNameTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentTool for VitalByNameTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn call(&self, deps: &AgentDeps, arguments: Value) -> Result<ToolOutcome, ToolError> {
        let args: VitalArgs = match parse_args(&self.spec.name, arguments) {
            Ok(args) => args,
            Err(reason) => return Ok(ToolOutcome::InvalidArguments(reason)),
        };

        let Some(emr) = deps.emr() else {
            return match fallback::vital_by_name(&args.visit_id, &args.vital_name) {
                Some(vital) => serde_json::to_value(vital)
                    .map(ToolOutcome::Data)
                    .map_err(|source| ToolError::Encode {
                        tool: self.spec.name.clone(),
                        source,
                    }),
                None => {
                    warn!(vital = %args.vital_name, "Unknown vital requested in fallback mode");
                    Ok(ToolOutcome::Retryable(VITAL_NOT_FOUND.to_string()))
                }
            };
        };

        info!(tool = %self.spec.name, visit_id = %args.visit_id, vital = %args.vital_name, "Fetching from EMR");
        let data = emr
            .fetch(
                EmrCategory::Vitals,
                &json!({ "visitId": args.visit_id, "vitalName": args.vital_name }),
            )
            .await
            .map_err(|source| ToolError::Upstream {
                tool: self.spec.name.clone(),
                source,
            })?;

        if is_empty_payload(&data) {
            return Ok(ToolOutcome::Retryable(VITAL_NOT_FOUND.to_string()));
        }
        Ok(ToolOutcome::Data(data))
    }
}
