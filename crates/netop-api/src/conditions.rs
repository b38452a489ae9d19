//! Status conditions
//!
//! Every status that reports conditions stores plain `meta/v1` conditions.
//! The schema is written by hand so k8s-openapi does not need its schemars
//! feature. The list carries no list-type marker, so it stays atomic.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use schemars::json_schema;

pub(crate) fn conditions(_: &mut schemars::generate::SchemaGenerator) -> schemars::Schema {
    json_schema!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "lastTransitionTime": { "format": "date-time", "type": "string" },
                "message": { "type": "string", "maxLength": 32768 },
                "observedGeneration": { "type": "integer", "format": "int64", "minimum": 0 },
                "reason": { "type": "string", "maxLength": 1024, "minLength": 1 },
                "status": { "type": "string", "enum": ["True", "False", "Unknown"] },
                "type": { "type": "string", "maxLength": 316 }
            },
            "required": [
                "lastTransitionTime",
                "message",
                "reason",
                "status",
                "type"
            ],
        },
    })
}

/// Lookups over a list of status conditions.
pub trait ConditionsExt {
    /// Returns the condition with the given type, if present
    fn find(&self, condition_type: &str) -> Option<&Condition>;

    /// True when the condition is present and its status is "True"
    fn is_true(&self, condition_type: &str) -> bool {
        self.find(condition_type)
            .is_some_and(|c| c.status == "True")
    }
}

impl ConditionsExt for [Condition] {
    fn find(&self, condition_type: &str) -> Option<&Condition> {
        self.iter().find(|c| c.type_ == condition_type)
    }
}

impl ConditionsExt for Vec<Condition> {
    fn find(&self, condition_type: &str) -> Option<&Condition> {
        self.as_slice().find(condition_type)
    }
}
