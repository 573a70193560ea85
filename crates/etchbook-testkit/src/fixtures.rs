//! Prebuilt, genuinely signed chain fixtures.

use etchbook_core::{normalize_message, Block, BlockDraft, Digest};

use crate::signer::EthSigner;

/// Build a valid linked chain where every block carries a real
/// signature from `signer` over its normalized message.
///
/// Indexes, previous-hash links, and self-hashes all hold, so the
/// result passes the validator as-is. Timestamps and sequence numbers
/// are synthetic but consistent.
pub fn build_signed_chain(signer: &EthSigner, messages: &[&str]) -> Vec<Block> {
    let address = signer.address();
    let mut chain: Vec<Block> = Vec::with_capacity(messages.len());

    for (index, raw) in messages.iter().enumerate() {
        let message = normalize_message(raw);
        let signature = signer.sign(&message);
        let previous_hash = chain.last().map(|b| b.hash).unwrap_or(Digest::ZERO);

        let block = BlockDraft {
            index: index as u64,
            message,
            timestamp: format!("2026-03-01T09:30:{:02}", index % 60),
            eth_block_number: 19_500_000 + index as u64,
            eth_address: address.clone(),
            signature,
            previous_hash,
        }
        .seal();
        chain.push(block);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use etchbook_core::validate_chain;

    use crate::recovery::EthereumRecovery;
    use etchbook::IdentityRecovery;

    #[test]
    fn test_fixture_chain_is_valid() {
        let signer = EthSigner::from_seed(&[0x42; 32]);
        let chain = build_signed_chain(&signer, &["one", "two", "three"]);

        assert_eq!(chain.len(), 3);
        assert!(validate_chain(&chain).is_valid());
        assert_eq!(chain[0].previous_hash, Digest::ZERO);
        assert_eq!(chain[2].previous_hash, chain[1].hash);
    }

    #[test]
    fn test_fixture_signatures_recover_to_signer() {
        let signer = EthSigner::from_seed(&[0x42; 32]);
        let chain = build_signed_chain(&signer, &["  padded message  "]);

        let block = &chain[0];
        assert_eq!(block.message, "padded message");
        let recovered = EthereumRecovery
            .recover(&block.message, &block.signature)
            .unwrap();
        assert_eq!(recovered, signer.address());
        assert_eq!(recovered, block.eth_address);
    }
}
