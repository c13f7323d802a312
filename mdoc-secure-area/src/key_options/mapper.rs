use std::str::FromStr;

use super::{
    dto::{KeyOptionsDTO, KeychainFeaturesDTO},
    error::KeyOptionsError,
    model::{
        KeyAccessControl, KeyAccessProtection, KeyPurpose, KeychainFeatures, PlatformFeatures,
    },
    KeyOptions,
};
use crate::common_models::curve::CoseEcCurve;

impl TryFrom<KeyOptionsDTO> for KeyOptions {
    type Error = KeyOptionsError;

    fn try_from(value: KeyOptionsDTO) -> Result<Self, Self::Error> {
        let curve = value
            .curve
            .map(|curve| parse::<CoseEcCurve>(curve, KeyOptionsError::InvalidCurve))
            .transpose()?
            .unwrap_or_default();

        let key_purposes = value
            .key_purposes
            .map(|purposes| {
                purposes
                    .into_iter()
                    .map(|purpose| {
                        parse::<KeyPurpose>(purpose, KeyOptionsError::InvalidKeyPurpose)
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let platform_features = match value.keychain {
            None => PlatformFeatures::None,
            Some(keychain) => PlatformFeatures::Keychain(keychain.try_into()?),
        };

        Ok(Self {
            curve,
            secure_area_name: value.secure_area_name,
            platform_features,
            key_purposes,
            additional_options: value.additional_options,
        })
    }
}

impl TryFrom<KeychainFeaturesDTO> for KeychainFeatures {
    type Error = KeyOptionsError;

    fn try_from(value: KeychainFeaturesDTO) -> Result<Self, Self::Error> {
        let access_protection = value
            .access_protection
            .map(|protection| {
                parse::<KeyAccessProtection>(protection, KeyOptionsError::InvalidAccessProtection)
            })
            .transpose()?;

        let access_control = value
            .access_control
            .map(|bits| {
                KeyAccessControl::from_bits(bits)
                    .ok_or(KeyOptionsError::UnknownAccessControlBits(bits))
            })
            .transpose()?;

        Ok(Self {
            access_protection,
            access_control,
        })
    }
}

impl From<KeyOptions> for KeyOptionsDTO {
    fn from(value: KeyOptions) -> Self {
        Self {
            curve: Some(value.curve.to_string()),
            secure_area_name: value.secure_area_name,
            keychain: value.platform_features.keychain().map(|features| {
                KeychainFeaturesDTO {
                    access_protection: features
                        .access_protection
                        .map(|protection| protection.to_string()),
                    access_control: features.access_control.map(|flags| flags.bits()),
                }
            }),
            key_purposes: value.key_purposes.map(|purposes| {
                purposes
                    .iter()
                    .map(|purpose| purpose.to_string())
                    .collect()
            }),
            additional_options: value.additional_options,
        }
    }
}

fn parse<T: FromStr>(
    value: String,
    error: fn(String) -> KeyOptionsError,
) -> Result<T, KeyOptionsError> {
    T::from_str(&value).map_err(|_| error(value))
}
