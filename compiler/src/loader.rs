use std::fs;
use std::path::Path;

use proto2c_schema::DescriptorSet;

use crate::error::GenError;

/// Read a JSON descriptor set produced by the external schema parser.
pub fn load_descriptor_set(path: &Path) -> Result<DescriptorSet, GenError> {
    let text = fs::read_to_string(path)?;
    let set = serde_json::from_str(&text)?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto2c_schema::FileDescriptor;

    #[test]
    fn test_load_descriptor_set_round_trip() {
        let set = DescriptorSet {
            files: vec![FileDescriptor {
                name:     "trace.proto".to_owned(),
                package:  None,
                messages: vec![],
                enums:    vec![],
            }],
        };
        let dir = std::env::temp_dir().join("proto2c-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("set.json");
        fs::write(&path, serde_json::to_string(&set).unwrap()).unwrap();

        let loaded = load_descriptor_set(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let dir = std::env::temp_dir().join("proto2c-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_descriptor_set(&path).unwrap_err();
        assert!(matches!(err, GenError::Json(_)));
    }
}
