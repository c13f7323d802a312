use super::{
    error::SecureAreaError,
    model::{KeySecurity, SecureAreaCapabilities},
    SecureArea,
};
use crate::{
    common_models::curve::CoseEcCurve,
    key_options::{
        model::{KeyAccessControl, KeyAccessProtection, KeyPurpose},
        KeyOptions,
    },
};

struct TestSecureArea {
    capabilities: SecureAreaCapabilities,
}

impl SecureArea for TestSecureArea {
    fn get_capabilities(&self) -> SecureAreaCapabilities {
        self.capabilities.clone()
    }
}

fn enclave() -> TestSecureArea {
    TestSecureArea {
        capabilities: SecureAreaCapabilities {
            curves: vec![CoseEcCurve::P256],
            purposes: KeyPurpose::all(),
            security: vec![KeySecurity::Hardware],
            keychain: true,
        },
    }
}

fn software() -> TestSecureArea {
    TestSecureArea {
        capabilities: SecureAreaCapabilities {
            curves: vec![
                CoseEcCurve::P256,
                CoseEcCurve::P384,
                CoseEcCurve::X25519,
                CoseEcCurve::Ed25519,
            ],
            purposes: KeyPurpose::all(),
            security: vec![KeySecurity::Software],
            keychain: false,
        },
    }
}

#[test]
fn test_default_options_accepted() {
    assert_eq!(Ok(()), enclave().check_key_options(&KeyOptions::default()));
    assert_eq!(Ok(()), software().check_key_options(&KeyOptions::default()));
}

#[test]
fn test_unsupported_curve() {
    let options = KeyOptions {
        curve: CoseEcCurve::P384,
        ..Default::default()
    };

    assert_eq!(
        Err(SecureAreaError::UnsupportedCurve(CoseEcCurve::P384)),
        enclave().check_key_options(&options)
    );
    assert_eq!(Ok(()), software().check_key_options(&options));
}

#[test]
fn test_unsupported_purpose() {
    let secure_area = TestSecureArea {
        capabilities: SecureAreaCapabilities {
            curves: vec![CoseEcCurve::P256],
            purposes: vec![KeyPurpose::Signing],
            ..Default::default()
        },
    };

    assert_eq!(
        Err(SecureAreaError::UnsupportedKeyPurpose(KeyPurpose::KeyAgreement)),
        secure_area.check_key_options(&KeyOptions::default())
    );

    let signing_only = KeyOptions {
        key_purposes: Some(vec![KeyPurpose::Signing]),
        ..Default::default()
    };
    assert_eq!(Ok(()), secure_area.check_key_options(&signing_only));
}

#[test]
fn test_empty_purposes_rejected_absent_accepted() {
    let empty = KeyOptions {
        key_purposes: Some(vec![]),
        ..Default::default()
    };
    let absent = KeyOptions {
        key_purposes: None,
        ..Default::default()
    };

    assert_eq!(
        Err(SecureAreaError::NoKeyPurposes),
        software().check_key_options(&empty)
    );
    assert_eq!(Ok(()), software().check_key_options(&absent));
}

#[test]
fn test_curve_purpose_mismatch() {
    let x25519_signing = KeyOptions {
        curve: CoseEcCurve::X25519,
        key_purposes: Some(vec![KeyPurpose::Signing]),
        ..Default::default()
    };
    assert_eq!(
        Err(SecureAreaError::CurvePurposeMismatch {
            curve: CoseEcCurve::X25519,
            purpose: KeyPurpose::Signing,
        }),
        software().check_key_options(&x25519_signing)
    );

    let ed25519_agreement = KeyOptions {
        curve: CoseEcCurve::Ed25519,
        key_purposes: Some(vec![KeyPurpose::KeyAgreement]),
        ..Default::default()
    };
    assert_eq!(
        Err(SecureAreaError::CurvePurposeMismatch {
            curve: CoseEcCurve::Ed25519,
            purpose: KeyPurpose::KeyAgreement,
        }),
        software().check_key_options(&ed25519_agreement)
    );

    let x25519_agreement = KeyOptions {
        curve: CoseEcCurve::X25519,
        key_purposes: Some(vec![KeyPurpose::KeyAgreement]),
        ..Default::default()
    };
    assert_eq!(Ok(()), software().check_key_options(&x25519_agreement));
}

#[test]
fn test_keychain_settings_need_keychain_support() {
    let options = KeyOptions::default()
        .with_access_protection(KeyAccessProtection::WhenUnlockedThisDeviceOnly)
        .with_access_control(KeyAccessControl::REQUIRE_USER_PRESENCE);

    assert_eq!(Ok(()), enclave().check_key_options(&options));
    assert_eq!(
        Err(SecureAreaError::KeychainNotSupported),
        software().check_key_options(&options)
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        "Curve `X25519` cannot be used for `Signing`",
        SecureAreaError::CurvePurposeMismatch {
            curve: CoseEcCurve::X25519,
            purpose: KeyPurpose::Signing,
        }
        .to_string()
    );
    assert_eq!(
        "Unsupported key purpose: `Key Agreement`",
        SecureAreaError::UnsupportedKeyPurpose(KeyPurpose::KeyAgreement).to_string()
    );
}
