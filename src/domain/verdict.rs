use super::records::CdsAgentOutput;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerdictError {
    #[error("agent response does not contain a JSON verdict")]
    MissingJson,
    #[error("agent verdict is missing the '{0}' field")]
    MissingField(&'static str),
    #[error("agent verdict has an unrecognised CriteriaMet value: {0}")]
    InvalidCriteria(String),
}

impl CdsAgentOutput {
    /// Parses the fenced verdict block the system prompt asks the model for.
    ///
    /// Accepts the block as raw JSON, inside a ```json fence, or embedded in
    /// surrounding prose. `CriteriaMet` may be "Yes"/"No" or a boolean.
    pub fn from_response(content: &str) -> Result<Self, VerdictError> {
        let value = extract_json(content).ok_or(VerdictError::MissingJson)?;
        let Value::Object(map) = value else {
            return Err(VerdictError::MissingJson);
        };

        let criteria = field(&map, "criteriaMet").ok_or(VerdictError::MissingField("CriteriaMet"))?;
        let criteria_met = parse_criteria(criteria)?;

        let explanation = match field(&map, "explanation") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(Value::String(text)) => vec![text.clone()],
            _ => return Err(VerdictError::MissingField("explanation")),
        };

        Ok(Self {
            criteria_met,
            explanation,
        })
    }
}

fn field<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn parse_criteria(value: &Value) -> Result<bool, VerdictError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "y" => Ok(true),
            "no" | "false" | "n" => Ok(false),
            _ => Err(VerdictError::InvalidCriteria(text.clone())),
        },
        other => Err(VerdictError::InvalidCriteria(other.to_string())),
    }
}

pub(crate) fn extract_json(content: &str) -> Option<Value> {
    let trimmed = content.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    if let Some(start) = trimmed.find("```") {
        let fenced = &trimmed[start + 3..];
        let fenced = fenced
            .strip_prefix("json")
            .or_else(|| fenced.strip_prefix("JSON"))
            .unwrap_or(fenced);
        if let Some(end) = fenced.find("```") {
            if let Ok(value) = serde_json::from_str::<Value>(fenced[..end].trim()) {
                return Some(value);
            }
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                return Some(value);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_yes_verdict() {
        let content = "Here is my answer:\n```json\n{\n  \"CriteriaMet\": \"Yes\",\n  \"explanation\": [\"Heart rate 98 > 90\", \"WBC 12.5 > 12\"]\n}\n```";
        let verdict = CdsAgentOutput::from_response(content).expect("parses");
        assert!(verdict.criteria_met);
        assert_eq!(verdict.explanation.len(), 2);
        assert_eq!(verdict.explanation[1], "WBC 12.5 > 12");
    }

    #[test]
    fn accepts_boolean_criteria_and_bare_json() {
        let verdict =
            CdsAgentOutput::from_response(r#"{"criteriaMet": false, "explanation": ["none"]}"#)
                .expect("parses");
        assert!(!verdict.criteria_met);
    }

    #[test]
    fn rejects_text_without_json() {
        assert_eq!(
            CdsAgentOutput::from_response("The patient looks fine."),
            Err(VerdictError::MissingJson)
        );
    }

    #[test]
    fn rejects_unknown_criteria_value() {
        let err = CdsAgentOutput::from_response(r#"{"CriteriaMet": "Maybe", "explanation": []}"#)
            .expect_err("invalid");
        assert_eq!(err, VerdictError::InvalidCriteria("Maybe".into()));
    }

    #[test]
    fn requires_explanation() {
        let err = CdsAgentOutput::from_response(r#"{"CriteriaMet": "No"}"#).expect_err("invalid");
        assert_eq!(err, VerdictError::MissingField("explanation"));
    }
}
