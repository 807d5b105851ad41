use crate::adapter::DeviceFeatures;
use crate::proto::messages_management as proto_management;
use crate::Vendor;

/// Project the Trezor `Features` record into the neutral description.
pub fn features(message: proto_management::Features) -> DeviceFeatures {
    DeviceFeatures {
        family: Vendor::Trezor,
        vendor: message.vendor,
        version: (
            message.major_version.unwrap_or_default(),
            message.minor_version.unwrap_or_default(),
            message.patch_version.unwrap_or_default(),
        ),
        bootloader_mode: message.bootloader_mode.unwrap_or_default(),
        device_id: message.device_id,
        pin_protection: message.pin_protection.unwrap_or_default(),
        passphrase_protection: message.passphrase_protection.unwrap_or_default(),
        language: message.language,
        label: message.label,
        initialized: message.initialized.unwrap_or_default(),
        imported: message.imported.unwrap_or_default(),
        policies: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trezor_features_have_no_policies() {
        let wire = proto_management::Features {
            vendor: Some("bitcointrezor.com".to_owned()),
            major_version: Some(1),
            minor_version: Some(3),
            patch_version: Some(4),
            bootloader_mode: None,
            device_id: Some("A1".to_owned()),
            pin_protection: Some(true),
            passphrase_protection: Some(false),
            language: Some("english".to_owned()),
            label: Some("my trezor".to_owned()),
            coins: Vec::new(),
            initialized: Some(true),
            revision: None,
            bootloader_hash: None,
            imported: Some(false),
        };
        let neutral = features(wire);
        assert_eq!(neutral.family, Vendor::Trezor);
        assert_eq!(neutral.version, (1, 3, 4));
        assert!(neutral.initialized);
        assert!(neutral.policies.is_empty());
    }
}
