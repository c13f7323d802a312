//! Options a caller passes to a secure area when requesting a key.
//!
//! [`KeyOptions`] is pure data. It performs no validation: an unsupported
//! curve or a secure area name nobody registered is only rejected by the
//! secure area that receives the options (see
//! [`crate::secure_area::SecureArea::check_key_options`]).

use serde::{Deserialize, Serialize};

use crate::common_models::curve::CoseEcCurve;

use dto::KeyOptionsDTO;
use model::{KeyAccessControl, KeyAccessProtection, KeyPurpose, PlatformFeatures};

pub mod error;
pub mod model;
pub mod platform;

mod dto;
mod mapper;


/// How a key should be created and protected.
///
/// `key_purposes` distinguishes absent from empty:
/// * `None` requests no restriction, the secure area applies its own policy;
/// * `Some(vec![])` allows no purpose at all.
///
/// Both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyOptionsDTO", into = "KeyOptionsDTO")]
pub struct KeyOptions {
    pub curve: CoseEcCurve,
    /// Secure area that should honor the options, `None` for the caller's default.
    pub secure_area_name: Option<String>,
    pub platform_features: PlatformFeatures,
    pub key_purposes: Option<Vec<KeyPurpose>>,
    /// Secure area specific extensions, opaque to this crate.
    pub additional_options: Option<Vec<u8>>,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            curve: CoseEcCurve::default(),
            secure_area_name: None,
            platform_features: PlatformFeatures::None,
            key_purposes: Some(KeyPurpose::all()),
            additional_options: None,
        }
    }
}

impl KeyOptions {
    pub fn access_protection(&self) -> Option<KeyAccessProtection> {
        self.platform_features
            .keychain()
            .and_then(|features| features.access_protection)
    }

    pub fn access_control(&self) -> Option<KeyAccessControl> {
        self.platform_features
            .keychain()
            .and_then(|features| features.access_control)
    }

    /// Sets the keychain accessibility, switching to keychain features if needed.
    pub fn with_access_protection(mut self, access_protection: KeyAccessProtection) -> Self {
        let mut features = self
            .platform_features
            .keychain()
            .copied()
            .unwrap_or_default();
        features.access_protection = Some(access_protection);
        self.platform_features = PlatformFeatures::Keychain(features);
        self
    }

    /// Sets the keychain access control, switching to keychain features if needed.
    pub fn with_access_control(mut self, access_control: KeyAccessControl) -> Self {
        let mut features = self
            .platform_features
            .keychain()
            .copied()
            .unwrap_or_default();
        features.access_control = Some(access_control);
        self.platform_features = PlatformFeatures::Keychain(features);
        self
    }

    /// Whether the options allow `purpose`. Absent purposes allow everything.
    pub fn permits(&self, purpose: KeyPurpose) -> bool {
        match &self.key_purposes {
            None => true,
            Some(purposes) => purposes.contains(&purpose),
        }
    }
}
