//! `struct`s and `enum`s for key options.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

use super::platform::{self, SecAccessControlCreateFlags};

/// Tasks for which keys can be used.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum KeyPurpose {
    #[strum(serialize = "Signing")]
    Signing,
    #[strum(serialize = "Key Agreement")]
    KeyAgreement,
}

impl KeyPurpose {
    /// Every purpose, in declaration order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Accessibility of a keychain item relative to the device lock state.
///
/// Stored in the item's `kSecAttrAccessible` attribute when the key is created.
#[derive(
    Debug,
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
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum KeyAccessProtection {
    WhenUnlocked = 0,
    AfterFirstUnlock = 1,
    WhenUnlockedThisDeviceOnly = 2,
    AfterFirstUnlockThisDeviceOnly = 3,
    WhenPasscodeSetThisDeviceOnly = 4,
}

impl KeyAccessProtection {
    /// Value for the `kSecAttrAccessible` attribute.
    pub fn constant(&self) -> &'static str {
        match self {
            Self::WhenUnlocked => platform::SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED,
            Self::AfterFirstUnlock => platform::SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK,
            Self::WhenUnlockedThisDeviceOnly => {
                platform::SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED_THIS_DEVICE_ONLY
            }
            Self::AfterFirstUnlockThisDeviceOnly => {
                platform::SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK_THIS_DEVICE_ONLY
            }
            Self::WhenPasscodeSetThisDeviceOnly => {
                platform::SEC_ATTR_ACCESSIBLE_WHEN_PASSCODE_SET_THIS_DEVICE_ONLY
            }
        }
    }

    pub fn raw_value(&self) -> u8 {
        *self as u8
    }

    /// Items never migrate to another device through backups.
    pub fn is_this_device_only(&self) -> bool {
        !matches!(self, Self::WhenUnlocked | Self::AfterFirstUnlock)
    }
}

bitflags::bitflags! {
    /// Key access control settings.
    ///
    /// Checked at the very last moment before the private key is used, so the
    /// key stays protected even if the unlocked device is handed to someone
    /// else.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyAccessControl: u32 {
        /// Require user presence, through biometry or the device passcode.
        const REQUIRE_USER_PRESENCE = 1 << 0;
        /// Require an application provided password as additional entropy
        /// for the data protection key.
        const REQUIRE_APPLICATION_PASSWORD = 1 << 1;
    }
}

impl KeyAccessControl {
    /// Equivalent `SecAccessControlCreateFlags`.
    pub fn flags(&self) -> SecAccessControlCreateFlags {
        let mut result = SecAccessControlCreateFlags::empty();
        if self.contains(Self::REQUIRE_USER_PRESENCE) {
            result.insert(SecAccessControlCreateFlags::USER_PRESENCE);
        }
        if self.contains(Self::REQUIRE_APPLICATION_PASSWORD) {
            result.insert(SecAccessControlCreateFlags::APPLICATION_PASSWORD);
        }
        result
    }
}

/// Settings only meaningful to a keychain-backed secure area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeychainFeatures {
    pub access_protection: Option<KeyAccessProtection>,
    pub access_control: Option<KeyAccessControl>,
}

/// Platform specific part of the key options.
///
/// Present on every target; `None` means the caller asked for nothing
/// platform specific.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFeatures {
    #[default]
    None,
    Keychain(KeychainFeatures),
}

impl PlatformFeatures {
    /// Empty features matching the build target.
    pub fn native() -> Self {
        if platform::has_keychain() {
            Self::Keychain(KeychainFeatures::default())
        } else {
            Self::None
        }
    }

    pub fn keychain(&self) -> Option<&KeychainFeatures> {
        match self {
            Self::None => None,
            Self::Keychain(features) => Some(features),
        }
    }
}
