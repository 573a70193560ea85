//! Deterministic Ethereum-style message signer on secp256k1.
//!
//! Signatures use the `personal_sign` convention: the message is
//! prefixed with `"\x19Ethereum Signed Message:\n" + byte-length`,
//! hashed with Keccak-256, and signed with a recoverable ECDSA
//! signature rendered as 65-byte `r || s || v` hex (v in {27, 28}).

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest as _, Keccak256};

use etchbook_core::keccak256;

/// A deterministic signing identity for tests.
pub struct EthSigner {
    key: SigningKey,
}

impl EthSigner {
    /// Build a signer from a fixed 32-byte seed.
    ///
    /// The seed must be a valid nonzero secp256k1 scalar; the fixed
    /// seeds used in tests all are.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let key = SigningKey::from_slice(seed).expect("seed is a valid secp256k1 scalar");
        Self { key }
    }

    /// The signer's lowercase `0x`-prefixed Ethereum address.
    pub fn address(&self) -> String {
        address_of(self.key.verifying_key())
    }

    /// Sign a message, returning `0x`-prefixed 65-byte signature hex.
    pub fn sign(&self, message: &str) -> String {
        let (signature, recovery_id) = self
            .key
            .sign_digest_recoverable(personal_message_digest(message))
            .expect("recoverable signing");

        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        format!("0x{}", hex::encode(bytes))
    }
}

/// Keccak-256 digest of the `personal_sign`-prefixed message.
pub fn personal_message_digest(message: &str) -> Keccak256 {
    let prefixed = format!("\x19Ethereum Signed Message:\n{}{}", message.len(), message);
    Keccak256::new_with_prefix(prefixed.as_bytes())
}

/// Derive the lowercase address from a verifying key:
/// the last 20 bytes of keccak(uncompressed public key minus its tag).
pub fn address_of(verifying_key: &k256::ecdsa::VerifyingKey) -> String {
    let point = verifying_key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(&digest.as_bytes()[12..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signer_deterministic_from_seed() {
        let a = EthSigner::from_seed(&[0x42; 32]);
        let b = EthSigner::from_seed(&[0x42; 32]);
        assert_eq!(a.address(), b.address());
        assert_eq!(a.sign("hello"), b.sign("hello"));
    }

    #[test]
    fn test_distinct_seeds_distinct_addresses() {
        let a = EthSigner::from_seed(&[0x42; 32]);
        let b = EthSigner::from_seed(&[0x43; 32]);
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_address_shape() {
        let signer = EthSigner::from_seed(&[0x42; 32]);
        let address = signer.address();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
        assert_eq!(address, address.to_lowercase());
    }

    #[test]
    fn test_signature_shape() {
        let signer = EthSigner::from_seed(&[0x42; 32]);
        let signature = signer.sign("hello world");
        assert!(signature.starts_with("0x"));
        // 65 bytes -> 130 hex chars.
        assert_eq!(signature.len(), 132);
        let v = u8::from_str_radix(&signature[130..], 16).unwrap();
        assert!(v == 27 || v == 28);
    }
}
