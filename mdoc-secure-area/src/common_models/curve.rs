//! Elliptic curve identifiers from the COSE registry (RFC 9053).

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, FromRepr};

/// Curve a secure area generates the key on.
///
/// The discriminant is the COSE `crv` value, the string form is the JWK
/// `crv` name.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[repr(i64)]
pub enum CoseEcCurve {
    #[default]
    #[strum(serialize = "P-256")]
    P256 = 1,
    #[strum(serialize = "P-384")]
    P384 = 2,
    #[strum(serialize = "P-521")]
    P521 = 3,
    #[strum(serialize = "X25519")]
    X25519 = 4,
    #[strum(serialize = "X448")]
    X448 = 5,
    #[strum(serialize = "Ed25519")]
    Ed25519 = 6,
    #[strum(serialize = "Ed448")]
    Ed448 = 7,
    #[strum(serialize = "brainpoolP256r1")]
    BrainpoolP256r1 = 256,
    #[strum(serialize = "brainpoolP320r1")]
    BrainpoolP320r1 = 257,
    #[strum(serialize = "brainpoolP384r1")]
    BrainpoolP384r1 = 258,
    #[strum(serialize = "brainpoolP512r1")]
    BrainpoolP512r1 = 259,
}

impl CoseEcCurve {
    pub fn cose_id(&self) -> i64 {
        *self as i64
    }

    pub fn from_cose_id(id: i64) -> Option<Self> {
        Self::from_repr(id)
    }

    /// Montgomery curves, usable for ECDH only.
    pub fn is_key_agreement_only(&self) -> bool {
        matches!(self, Self::X25519 | Self::X448)
    }

    /// Edwards curves, usable for EdDSA only.
    pub fn is_signature_only(&self) -> bool {
        matches!(self, Self::Ed25519 | Self::Ed448)
    }
}
