pub mod records;
pub mod types;
pub mod verdict;

pub use records::{
    CdsAgentInput, CdsAgentOutput, PatientAllergies, PatientDemographics, PatientLabs,
    PatientMedications, PatientProblems, PatientVitals,
};
pub use types::{ChatMessage, MessageRole};
pub use verdict::VerdictError;
