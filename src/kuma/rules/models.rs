//! Correlation rule data models

use serde::{Deserialize, Serialize};

use crate::kuma::lenient;
use crate::kuma::traits::CsvRecord;

/// Correlation rule as listed by `/resources` or embedded in a correlator
#[derive(Deserialize, Debug, Clone)]
pub struct Rule {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub kind: String,
}

/// Correlator resource document; only the attached rules are read
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CorrelatorResource {
    #[serde(default)]
    pub payload: CorrelatorPayload,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CorrelatorPayload {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Flattened rule, in export column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRow {
    pub name: String,
    pub kind: String,
    pub id: String,
}

impl From<Rule> for RuleRow {
    fn from(rule: Rule) -> Self {
        Self {
            name: rule.name,
            kind: rule.kind,
            id: rule.id,
        }
    }
}

impl CsvRecord for RuleRow {
    const HEADER: &'static [&'static str] = &["name", "kind", "id"];

    fn fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.as_str(), self.id.as_str()]
    }
}
