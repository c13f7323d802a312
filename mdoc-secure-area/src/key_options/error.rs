//! Enumerates errors related to key options.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyOptionsError {
    #[error("Unknown access control bits: `{0:#x}`")]
    UnknownAccessControlBits(u32),
    #[error("Invalid curve: `{0}`")]
    InvalidCurve(String),
    #[error("Invalid key purpose: `{0}`")]
    InvalidKeyPurpose(String),
    #[error("Invalid access protection: `{0}`")]
    InvalidAccessProtection(String),
}
