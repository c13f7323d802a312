//! `struct`s and `enum`s for secure areas.

use crate::{common_models::curve::CoseEcCurve, key_options::model::KeyPurpose};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySecurity {
    Hardware,
    Software,
}

#[derive(Clone, Debug, Default)]
pub struct SecureAreaCapabilities {
    pub curves: Vec<CoseEcCurve>,
    pub purposes: Vec<KeyPurpose>,
    pub security: Vec<KeySecurity>,
    /// Honors keychain accessibility and access control.
    pub keychain: bool,
}
