//! Tool registry and the clinical retrieval tools the agent may call.

mod clinical;
mod deps;
mod error;
mod fallback;
mod registry;

pub use clinical::{
    CategoryTool, GET_ALLERGIES, GET_DEMOGRAPHICS, GET_LAB_RESULT, GET_MEDICATIONS,
    GET_PROBLEMS_LIST, GET_VITAL_BY_NAME, GET_VITALS, VitalByNameTool, clinical_tools,
};
pub use deps::AgentDeps;
pub use error::ToolError;
pub use registry::{AgentTool, ToolOutcome, ToolRegistry, ToolSpec};
