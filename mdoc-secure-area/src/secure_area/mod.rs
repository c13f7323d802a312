//! Seam between key options and the secure areas that honor them.
//!
//! Key generation and storage live in the secure area implementations; this
//! module only describes what a secure area supports and checks key options
//! against it.

use crate::key_options::{model::KeyPurpose, KeyOptions};

use error::SecureAreaError;
use model::SecureAreaCapabilities;

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

#[cfg(test)]
mod test;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SecureArea: Send + Sync {
    fn get_capabilities(&self) -> SecureAreaCapabilities;

    /// Rejects options this secure area cannot honor.
    ///
    /// An explicitly empty purpose list is rejected, absent purposes are
    /// left to the secure area's own policy.
    fn check_key_options(&self, options: &KeyOptions) -> Result<(), SecureAreaError> {
        check_against_capabilities(&self.get_capabilities(), options).inspect_err(|err| {
            tracing::warn!(%err, curve = %options.curve, "Key options rejected");
        })
    }
}

fn check_against_capabilities(
    capabilities: &SecureAreaCapabilities,
    options: &KeyOptions,
) -> Result<(), SecureAreaError> {
    let curve = options.curve;
    if !capabilities.curves.contains(&curve) {
        return Err(SecureAreaError::UnsupportedCurve(curve));
    }

    if let Some(purposes) = &options.key_purposes {
        if purposes.is_empty() {
            return Err(SecureAreaError::NoKeyPurposes);
        }

        for &purpose in purposes {
            if !capabilities.purposes.contains(&purpose) {
                return Err(SecureAreaError::UnsupportedKeyPurpose(purpose));
            }

            let compatible = match purpose {
                KeyPurpose::Signing => !curve.is_key_agreement_only(),
                KeyPurpose::KeyAgreement => !curve.is_signature_only(),
            };
            if !compatible {
                return Err(SecureAreaError::CurvePurposeMismatch { curve, purpose });
            }
        }
    }

    if options.platform_features.keychain().is_some() && !capabilities.keychain {
        return Err(SecureAreaError::KeychainNotSupported);
    }

    Ok(())
}
