//! Ethereum-style identity recovery over `personal_sign` signatures.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use etchbook::{IdentityRecovery, RecoveryError};

use crate::signer::{address_of, personal_message_digest};

/// Concrete [`IdentityRecovery`]: recovers the lowercase address that
/// produced a 65-byte `r || s || v` signature (v in {0, 1, 27, 28},
/// optional `0x` prefix) over the `personal_sign` form of the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct EthereumRecovery;

impl IdentityRecovery for EthereumRecovery {
    fn recover(&self, message: &str, signature: &str) -> Result<String, RecoveryError> {
        let hex_str = signature.trim();
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

        let bytes =
            hex::decode(hex_str).map_err(|e| RecoveryError(format!("signature is not hex: {}", e)))?;
        if bytes.len() != 65 {
            return Err(RecoveryError(format!(
                "expected 65 signature bytes, got {}",
                bytes.len()
            )));
        }

        let v = bytes[64];
        let recovery_byte = if v >= 27 { v - 27 } else { v };
        let recovery_id = RecoveryId::from_byte(recovery_byte)
            .ok_or_else(|| RecoveryError(format!("invalid recovery id {}", v)))?;

        let sig = Signature::from_slice(&bytes[..64])
            .map_err(|e| RecoveryError(format!("malformed signature: {}", e)))?;

        let verifying_key =
            VerifyingKey::recover_from_digest(personal_message_digest(message), &sig, recovery_id)
                .map_err(|e| RecoveryError(format!("recovery failed: {}", e)))?;

        Ok(address_of(&verifying_key))
    }
}
