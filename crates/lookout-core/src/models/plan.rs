//! Research plan model and its normalization from raw model output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ExecutionError, normalize::FieldSpec};

/// A structured research plan derived from a free-text goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Short display name for the research project
    pub project_name: String,

    /// Communities to scan, prefix-stripped and deduplicated
    pub targets: Vec<String>,

    /// Search terms, combined disjunctively per target
    pub keywords: Vec<String>,

    /// Steering goal handed to the report synthesizer
    pub instruction: String,
}

impl Plan {
    pub const DEFAULT_PROJECT_NAME: &'static str = "Reddit Research";
    pub const DEFAULT_INSTRUCTION: &'static str = "Summarize findings";

    /// Builds a plan from an arbitrarily shaped decoded value.
    ///
    /// This is the only way model output or a user-edited plan becomes a
    /// [`Plan`]; an edit is a full replacement and is normalized again.
    /// Missing cosmetic fields fall back to defaults, missing structural
    /// fields leave the lists empty for [`Plan::validate`] to reject.
    pub fn from_raw(value: &Value) -> Self {
        let value = unwrap_listed_rows(value);

        let project_name = FieldSpec::PROJECT_NAME
            .resolve(value)
            .into_iter()
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PROJECT_NAME.to_string());

        let mut instructions: Vec<String> = Vec::new();
        for instruction in FieldSpec::INSTRUCTION.resolve(value) {
            let instruction = instruction.trim().to_string();
            if !instruction.is_empty() && !instructions.contains(&instruction) {
                instructions.push(instruction);
            }
        }
        let instruction = if instructions.is_empty() {
            Self::DEFAULT_INSTRUCTION.to_string()
        } else {
            instructions.join("; ")
        };

        let mut targets: Vec<String> = Vec::new();
        for target in FieldSpec::TARGETS.resolve(value) {
            let target = strip_target_prefix(&target);
            if !target.is_empty() && !targets.iter().any(|t| t.eq_ignore_ascii_case(&target)) {
                targets.push(target);
            }
        }

        let keywords = FieldSpec::KEYWORDS
            .resolve(value)
            .into_iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Self {
            project_name,
            targets,
            keywords,
            instruction,
        }
    }

    /// Checks the structural invariants required before execution.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        if self.targets.is_empty() {
            return Err(ExecutionError::EmptyTargetList);
        }
        if self.keywords.is_empty() {
            return Err(ExecutionError::EmptyKeywordList);
        }
        Ok(())
    }

    /// The disjunctive search expression built from all keywords.
    pub fn query(&self) -> String {
        self.keywords.join(" OR ")
    }
}

/// Unwraps `{"strategy": [..rows..]}` style output: when none of the target
/// aliases is a direct key, the first list of records among the values is
/// the plan. Lists of scalars or of positional rows (a table's `columns` and
/// `data`) are left alone.
fn unwrap_listed_rows(value: &Value) -> &Value {
    match value {
        Value::Object(map) if !FieldSpec::TARGETS.present_in(map) => map
            .values()
            .find(|v| is_record_list(v))
            .unwrap_or(value),
        _ => value,
    }
}

fn is_record_list(value: &Value) -> bool {
    matches!(value, Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object))
}

/// Removes the `r/` (or `/r/`) community prefix, case-insensitively.
fn strip_target_prefix(target: &str) -> String {
    let target = target.trim();
    let target = target.strip_prefix('/').unwrap_or(target);
    let stripped = match target.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("r/") => &target[2..],
        _ => target,
    };
    stripped.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strip_target_prefix_variants() {
        assert_eq!(strip_target_prefix("r/recruiting"), "recruiting");
        assert_eq!(strip_target_prefix("R/Sales"), "Sales");
        assert_eq!(strip_target_prefix(" /r/humanresources/ "), "humanresources");
        assert_eq!(strip_target_prefix("recruiting"), "recruiting");
        assert_eq!(strip_target_prefix("rust"), "rust");
        assert_eq!(strip_target_prefix("r/"), "");
    }

    #[test]
    fn test_unwrap_only_when_targets_absent() {
        let wrapped = json!({"strategy": [{"target_subreddit": "a"}], "note": "x"});
        assert!(unwrap_listed_rows(&wrapped).is_array());

        let direct = json!({"targets": ["a"], "keywords": ["k"]});
        assert!(unwrap_listed_rows(&direct).is_object());
    }
}
