use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Deserialize a validated tree into typed records, with JSON-path context
/// on failure. A failure here means the type map and the record definitions
/// have drifted apart, so the path matters more than the value.
pub(crate) fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    match serde_path_to_error::deserialize::<_, T>(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(Error::Model(format!("at {path}: {}", err.into_inner())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Rec {
        #[allow(dead_code)]
        id: String,
    }

    #[test]
    fn failures_name_the_offending_path() {
        let err = from_value_with_path::<Vec<Rec>>(serde_json::json!([{"id": "a"}, {"id": 7}]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("[1].id"), "{msg}");
    }
}
