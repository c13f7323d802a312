use serde::Deserialize;

use crate::key_options::KeyOptions;

pub const DEFAULT_SECURE_AREA: &str = "SecureEnclave";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecureAreaConfig {
    /// Secure area used when key options do not name one.
    pub default_secure_area: String,
    pub default_key_options: KeyOptions,
}

impl Default for SecureAreaConfig {
    fn default() -> Self {
        Self {
            default_secure_area: DEFAULT_SECURE_AREA.to_string(),
            default_key_options: KeyOptions::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::key_options::model::{KeyAccessProtection, KeyPurpose};

    #[test]
    fn test_default_config() {
        let config = SecureAreaConfig::default();
        assert_eq!("SecureEnclave", config.default_secure_area);
        assert_eq!(KeyOptions::default(), config.default_key_options);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SecureAreaConfig =
            serde_json::from_value(json!({ "defaultSecureArea": "Software" })).unwrap();
        assert_eq!("Software", config.default_secure_area);
        assert_eq!(KeyOptions::default(), config.default_key_options);
    }

    #[test]
    fn test_config_with_key_options() {
        let config: SecureAreaConfig = serde_json::from_value(json!({
            "defaultKeyOptions": {
                "keyPurposes": ["Signing"],
                "keychain": { "accessProtection": "afterFirstUnlockThisDeviceOnly" }
            }
        }))
        .unwrap();

        assert_eq!("SecureEnclave", config.default_secure_area);
        let options = config.default_key_options;
        assert_eq!(Some(vec![KeyPurpose::Signing]), options.key_purposes);
        assert_eq!(
            Some(KeyAccessProtection::AfterFirstUnlockThisDeviceOnly),
            options.access_protection()
        );
        assert_eq!(None, options.access_control());
    }
}
