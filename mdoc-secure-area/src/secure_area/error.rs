//! Enumerates errors related to secure areas.

use thiserror::Error;

use crate::{common_models::curve::CoseEcCurve, key_options::model::KeyPurpose};

#[derive(Debug, Error)]
pub enum SecureAreaProviderError {
    #[error("Unknown secure area `{0}`")]
    UnknownSecureArea(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecureAreaError {
    #[error("Unsupported curve: `{0}`")]
    UnsupportedCurve(CoseEcCurve),
    #[error("Unsupported key purpose: `{0}`")]
    UnsupportedKeyPurpose(KeyPurpose),
    #[error("Curve `{curve}` cannot be used for `{purpose}`")]
    CurvePurposeMismatch {
        curve: CoseEcCurve,
        purpose: KeyPurpose,
    },
    #[error("Key purposes are empty")]
    NoKeyPurposes,
    #[error("Keychain access settings not supported")]
    KeychainNotSupported,
}
