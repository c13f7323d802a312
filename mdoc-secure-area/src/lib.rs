//! Key creation options for mdoc secure areas.
//!
//! A secure area is a backend that generates, stores and operates keys,
//! possibly inside a hardware-protected keystore. This crate defines the
//! options a caller hands to such a backend when it requests key material:
//!
//! * the elliptic curve ([`common_models::curve::CoseEcCurve`]),
//! * the intended key purposes ([`key_options::model::KeyPurpose`]),
//! * keychain accessibility and access control on platforms that have a
//!   keychain ([`key_options::model::PlatformFeatures`]),
//! * an opaque blob of backend-specific extensions.
//!
//! The [`secure_area`] module holds the seam a backend implements to check
//! the options it receives, plus a registry that resolves
//! [`key_options::KeyOptions::secure_area_name`] to a backend.
//!
//! ```ignore rust
//! let options = KeyOptions {
//!     key_purposes: Some(vec![KeyPurpose::Signing]),
//!     ..Default::default()
//! }
//! .with_access_protection(KeyAccessProtection::WhenUnlockedThisDeviceOnly);
//!
//! let secure_area = provider.get_secure_area_for(&options)?;
//! secure_area.check_key_options(&options)?;
//! ```

pub mod common_models;
pub mod config;
pub mod key_options;
pub mod secure_area;
