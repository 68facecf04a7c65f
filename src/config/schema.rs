use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "database": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "path": { "type": "string", "minLength": 1 },
                    "schema": { "type": "string", "minLength": 1 }
                }
            },
            "training": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "target_scans": { "type": "integer", "minimum": 1 }
                }
            }
        }
    })
});
