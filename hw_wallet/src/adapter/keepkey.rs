use crate::adapter::{DeviceFeatures, DevicePolicy};
use crate::proto::messages_keepkey as proto_keepkey;
use crate::Vendor;

/// Project the KeepKey `Features` record into the neutral description.
/// KeepKey extends the first-generation schema with policy switches.
pub fn features(message: proto_keepkey::Features) -> DeviceFeatures {
    let policies = message
        .policies
        .into_iter()
        .map(|policy| DevicePolicy {
            name: policy.policy_name.unwrap_or_default(),
            enabled: policy.enabled.unwrap_or_default(),
        })
        .collect();

    DeviceFeatures {
        family: Vendor::KeepKey,
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
        policies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::messages_keepkey::PolicyType;

    #[test]
    fn keepkey_features_carry_policies() {
        let wire = proto_keepkey::Features {
            vendor: Some("keepkey.com".to_owned()),
            major_version: Some(3),
            minor_version: Some(0),
            patch_version: Some(17),
            bootloader_mode: None,
            device_id: Some("KK1".to_owned()),
            pin_protection: Some(true),
            passphrase_protection: Some(true),
            language: None,
            label: None,
            coins: Vec::new(),
            initialized: Some(false),
            revision: None,
            bootloader_hash: None,
            imported: None,
            policies: vec![PolicyType {
                policy_name: Some("ShapeShift".to_owned()),
                enabled: Some(true),
            }],
        };
        let neutral = features(wire);
        assert_eq!(neutral.family, Vendor::KeepKey);
        assert_eq!(neutral.policies.len(), 1);
        assert!(neutral.policies[0].enabled);
        assert!(!neutral.initialized);
    }
}
