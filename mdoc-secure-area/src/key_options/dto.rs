use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use super::model::KeyPurpose;

#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct KeyOptionsDTO {
    pub curve: Option<String>,
    pub secure_area_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keychain: Option<KeychainFeaturesDTO>,
    #[serde(default = "all_key_purposes")]
    pub key_purposes: Option<Vec<String>>,
    #[serde_as(as = "Option<Base64>")]
    pub additional_options: Option<Vec<u8>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct KeychainFeaturesDTO {
    pub access_protection: Option<String>,
    pub access_control: Option<u32>,
}

fn all_key_purposes() -> Option<Vec<String>> {
    Some(
        KeyPurpose::all()
            .iter()
            .map(|purpose| purpose.to_string())
            .collect(),
    )
}
