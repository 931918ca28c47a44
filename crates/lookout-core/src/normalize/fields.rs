//! Accepted names for each canonical plan field.
//!
//! Models rename fields from run to run. Every synonym seen in practice is
//! listed here once; resolution walks the list in order and keeps the first
//! alias that yields values.

use serde_json::{Map, Value};

use super::{has_field, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    pub const PROJECT_NAME: FieldSpec = FieldSpec {
        canonical: "project_name",
        aliases: &["project_name", "project", "projectname"],
    };

    pub const TARGETS: FieldSpec = FieldSpec {
        canonical: "targets",
        aliases: &[
            "targets",
            "target_subreddits",
            "target_subreddit",
            "subreddits",
            "subreddit",
            "target",
        ],
    };

    pub const KEYWORDS: FieldSpec = FieldSpec {
        canonical: "keywords",
        aliases: &[
            "keywords",
            "search_keywords",
            "search_keyword",
            "keyword",
            "search_terms",
        ],
    };

    pub const INSTRUCTION: FieldSpec = FieldSpec {
        canonical: "instruction",
        aliases: &["instruction", "ai_instruction", "instructions", "analysis_goal"],
    };

    /// Values for the first alias that yields any.
    pub fn resolve(&self, value: &Value) -> Vec<String> {
        self.aliases
            .iter()
            .map(|alias| normalize(value, alias))
            .find(|values| !values.is_empty())
            .unwrap_or_default()
    }

    /// Whether any alias is a direct key of `map`.
    pub fn present_in(&self, map: &Map<String, Value>) -> bool {
        self.aliases.iter().any(|alias| has_field(map, alias))
    }
}
