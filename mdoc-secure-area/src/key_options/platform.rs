//! Keychain Services values the access settings map onto.
//!
//! Values match the Security framework so a backend can pass them through
//! to `SecItemAdd` and `SecAccessControlCreateWithFlags` unchanged.

/// Value of `kSecAttrAccessibleWhenUnlocked`.
pub const SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED: &str = "ak";
/// Value of `kSecAttrAccessibleAfterFirstUnlock`.
pub const SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK: &str = "ck";
/// Value of `kSecAttrAccessibleWhenUnlockedThisDeviceOnly`.
pub const SEC_ATTR_ACCESSIBLE_WHEN_UNLOCKED_THIS_DEVICE_ONLY: &str = "aku";
/// Value of `kSecAttrAccessibleAfterFirstUnlockThisDeviceOnly`.
pub const SEC_ATTR_ACCESSIBLE_AFTER_FIRST_UNLOCK_THIS_DEVICE_ONLY: &str = "cku";
/// Value of `kSecAttrAccessibleWhenPasscodeSetThisDeviceOnly`.
pub const SEC_ATTR_ACCESSIBLE_WHEN_PASSCODE_SET_THIS_DEVICE_ONLY: &str = "akpu";

bitflags::bitflags! {
    /// `SecAccessControlCreateFlags`.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SecAccessControlCreateFlags: u32 {
        const USER_PRESENCE = 1 << 0;
        const BIOMETRY_ANY = 1 << 1;
        const BIOMETRY_CURRENT_SET = 1 << 3;
        const DEVICE_PASSCODE = 1 << 4;
        const WATCH = 1 << 5;
        const OR = 1 << 14;
        const AND = 1 << 15;
        const PRIVATE_KEY_USAGE = 1 << 30;
        const APPLICATION_PASSWORD = 1 << 31;
    }
}

/// Whether the build target has Keychain Services.
pub const fn has_keychain() -> bool {
    cfg!(any(
        target_os = "ios",
        target_os = "macos",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos"
    ))
}
