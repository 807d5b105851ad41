//! AddressN chain-code construction: BIP-44 account paths and SLIP-0013
//! identity paths, expressed as the raw `u32` lists the wire wants.

use bitcoin::hashes::{sha256, Hash};
use byteorder::{BigEndian, ByteOrder};
use hw_common::primitives::{DerivationPath, HARDENED_PATH};

/// What an address is used for; selects the external (0) or internal (1)
/// chain of the account.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPurpose {
    ReceiveFunds,
    Change,
    Refund,
    Authentication,
}

impl KeyPurpose {
    fn chain(self) -> u32 {
        match self {
            KeyPurpose::ReceiveFunds | KeyPurpose::Refund => 0,
            KeyPurpose::Change | KeyPurpose::Authentication => 1,
        }
    }
}

/// `m/44'/0'/account'/chain/index` as raw AddressN.
/// The account levels are hardened, the leaf levels are not.
pub fn bip44_address_n(account: u32, purpose: KeyPurpose, index: u32) -> Vec<u32> {
    vec![
        44 | HARDENED_PATH,
        HARDENED_PATH,
        account | HARDENED_PATH,
        purpose.chain(),
        index,
    ]
}

/// Forward a deterministic path as AddressN, hardened bits as-is.
pub fn address_n(path: &DerivationPath) -> Vec<u32> { path.iter().map(|child| child.0).collect() }

/// SLIP-0013 identity path: `m/13'/A'/B'/C'/D'` where A..D are the first
/// four big-endian words of `SHA-256(LE32(index) || uri)`.
/// Only the first 16 bytes of the digest participate.
pub fn identity_address_n(identity_uri: &str, index: u32) -> Vec<u32> {
    let mut canonical = Vec::with_capacity(4 + identity_uri.len());
    canonical.extend_from_slice(&index.to_le_bytes());
    canonical.extend_from_slice(identity_uri.as_bytes());

    let digest = sha256::Hash::hash(&canonical);
    let truncated = &digest[..16];

    vec![
        13 | HARDENED_PATH,
        BigEndian::read_u32(&truncated[0..4]) | HARDENED_PATH,
        BigEndian::read_u32(&truncated[4..8]) | HARDENED_PATH,
        BigEndian::read_u32(&truncated[8..12]) | HARDENED_PATH,
        BigEndian::read_u32(&truncated[12..16]) | HARDENED_PATH,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bip44_hardens_account_levels_only() {
        assert_eq!(bip44_address_n(0, KeyPurpose::ReceiveFunds, 0), vec![
            44 | HARDENED_PATH,
            HARDENED_PATH,
            HARDENED_PATH,
            0,
            0
        ]);
        assert_eq!(bip44_address_n(2, KeyPurpose::Change, 7), vec![
            44 | HARDENED_PATH,
            HARDENED_PATH,
            2 | HARDENED_PATH,
            1,
            7
        ]);
        // Refund addresses live on the external chain, authentication on the internal one.
        assert_eq!(bip44_address_n(0, KeyPurpose::Refund, 1)[3], 0);
        assert_eq!(bip44_address_n(0, KeyPurpose::Authentication, 1)[3], 1);
    }

    #[test]
    fn deterministic_paths_forward_hardened_bits() {
        let path: DerivationPath = "m/44'/0'/0'/1/3".parse().unwrap();
        assert_eq!(address_n(&path), vec![
            44 | HARDENED_PATH,
            HARDENED_PATH,
            HARDENED_PATH,
            1,
            3
        ]);
    }

    #[test]
    fn slip0013_reads_exactly_sixteen_digest_bytes() {
        const URI: &str = "https://satoshi@bitcoin.org/login";

        let path = identity_address_n(URI, 0);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], 13 | HARDENED_PATH);
        for level in &path {
            assert!(level & HARDENED_PATH != 0);
        }

        // Independently assemble A..D from the digest of LE32(0) || uri.
        let mut canonical = vec![0, 0, 0, 0];
        canonical.extend_from_slice(URI.as_bytes());
        let digest = sha256::Hash::hash(&canonical);
        for (level, word) in path[1..].iter().zip(digest[..16].chunks(4)) {
            let expected = u32::from_be_bytes([word[0], word[1], word[2], word[3]]) | HARDENED_PATH;
            assert_eq!(*level, expected);
        }
    }

    #[test]
    fn slip0013_index_is_little_endian() {
        // The same URI with different indices must land on different accounts.
        let a = identity_address_n("https://example.com", 0);
        let b = identity_address_n("https://example.com", 1);
        assert_ne!(a[1..], b[1..]);
    }
}
