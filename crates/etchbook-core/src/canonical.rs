//! Canonical serialization of a block's hashable fields.
//!
//! The canonical form is a compact JSON document (no whitespace) whose
//! keys appear in a fixed lexicographic order, with the `hash` field
//! excluded. It is the unique byte string fed to Keccak-256, so the same
//! logical block always produces identical bytes regardless of how its
//! fields were assembled.
//!
//! The message must already be normalized before a block reaches this
//! module; canonicalization never rewrites field values.

use serde_json::{Map, Value};

use crate::block::{Block, BlockDraft};
use crate::hash::Digest;

/// Wire field names, listed in canonical (lexicographic) order.
mod fields {
    pub const ETH_ADDRESS: &str = "eth_address";
    pub const ETH_BLOCK_NUMBER: &str = "eth_block_number";
    pub const INDEX: &str = "index";
    pub const MESSAGE: &str = "message";
    pub const PREVIOUS_HASH: &str = "previous_hash";
    pub const SIGNATURE: &str = "signature";
    pub const TIMESTAMP: &str = "timestamp";
}

/// Encode a sealed block's canonical bytes (the `hash` field excluded).
pub fn canonical_bytes(block: &Block) -> Vec<u8> {
    encode_fields(
        block.index,
        &block.message,
        &block.timestamp,
        block.eth_block_number,
        &block.eth_address,
        &block.signature,
        &block.previous_hash,
    )
}

/// Encode an unsealed draft's canonical bytes.
///
/// Identical to [`canonical_bytes`] for the block the draft seals into.
pub fn draft_bytes(draft: &BlockDraft) -> Vec<u8> {
    encode_fields(
        draft.index,
        &draft.message,
        &draft.timestamp,
        draft.eth_block_number,
        &draft.eth_address,
        &draft.signature,
        &draft.previous_hash,
    )
}

#[allow(clippy::too_many_arguments)]
fn encode_fields(
    index: u64,
    message: &str,
    timestamp: &str,
    eth_block_number: u64,
    eth_address: &str,
    signature: &str,
    previous_hash: &Digest,
) -> Vec<u8> {
    // serde_json's Map is BTreeMap-backed, so keys serialize in sorted
    // order no matter what order they are inserted in. Insertion below
    // follows the canonical order anyway.
    let mut map = Map::new();
    map.insert(
        fields::ETH_ADDRESS.to_string(),
        Value::String(eth_address.to_string()),
    );
    map.insert(
        fields::ETH_BLOCK_NUMBER.to_string(),
        Value::from(eth_block_number),
    );
    map.insert(fields::INDEX.to_string(), Value::from(index));
    map.insert(
        fields::MESSAGE.to_string(),
        Value::String(message.to_string()),
    );
    map.insert(
        fields::PREVIOUS_HASH.to_string(),
        Value::String(previous_hash.to_hex()),
    );
    map.insert(
        fields::SIGNATURE.to_string(),
        Value::String(signature.to_string()),
    );
    map.insert(
        fields::TIMESTAMP.to_string(),
        Value::String(timestamp.to_string()),
    );

    serde_json::to_vec(&Value::Object(map)).expect("canonical JSON encoding")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_block() -> Block {
        BlockDraft {
            index: 0,
            message: "hello world".to_string(),
            timestamp: "2026-01-01T00:00:00".to_string(),
            eth_block_number: 7,
            eth_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
            previous_hash: Digest::ZERO,
        }
        .seal()
    }

    #[test]
    fn test_canonical_bytes_exact_form() {
        let block = make_block();
        let expected = format!(
            "{{\"eth_address\":\"0xabc\",\"eth_block_number\":7,\"index\":0,\
             \"message\":\"hello world\",\"previous_hash\":\"{}\",\
             \"signature\":\"0xsig\",\"timestamp\":\"2026-01-01T00:00:00\"}}",
            "0".repeat(64)
        );
        assert_eq!(canonical_bytes(&block), expected.into_bytes());
    }

    #[test]
    fn test_hash_field_excluded() {
        let block = make_block();
        let bytes = String::from_utf8(canonical_bytes(&block)).unwrap();
        assert!(!bytes.contains(&block.hash.to_hex()));
        assert!(!bytes.contains("\"hash\""));
    }

    #[test]
    fn test_draft_and_block_agree() {
        let draft = BlockDraft {
            index: 3,
            message: "agreement".to_string(),
            timestamp: "2026-02-02T12:00:00".to_string(),
            eth_block_number: 42,
            eth_address: "0xdef".to_string(),
            signature: "0xother".to_string(),
            previous_hash: crate::hash::keccak256(b"prev"),
        };
        let bytes_before = draft_bytes(&draft);
        let block = draft.seal();
        assert_eq!(canonical_bytes(&block), bytes_before);
    }

    #[test]
    fn test_no_whitespace() {
        let bytes = canonical_bytes(&make_block());
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains(": "));
        assert!(!text.contains(", "));
    }

    proptest! {
        #[test]
        fn prop_canonical_injective_over_message(a in "\\PC{0,40}", b in "\\PC{0,40}") {
            let mut draft_a = BlockDraft {
                index: 1,
                message: a.clone(),
                timestamp: "2026-01-01T00:00:00".to_string(),
                eth_block_number: 1,
                eth_address: "0xabc".to_string(),
                signature: "0xsig".to_string(),
                previous_hash: Digest::ZERO,
            };
            let mut draft_b = draft_a.clone();
            draft_a.message = a.clone();
            draft_b.message = b.clone();

            let bytes_a = draft_bytes(&draft_a);
            let bytes_b = draft_bytes(&draft_b);
            prop_assert_eq!(bytes_a == bytes_b, a == b);
        }

        #[test]
        fn prop_canonical_deterministic(msg in "\\PC{0,60}", seq in 0u64..1_000_000) {
            let draft = BlockDraft {
                index: 2,
                message: msg,
                timestamp: "2026-01-01T00:00:00".to_string(),
                eth_block_number: seq,
                eth_address: "0xabc".to_string(),
                signature: "0xsig".to_string(),
                previous_hash: Digest::ZERO,
            };
            prop_assert_eq!(draft_bytes(&draft), draft_bytes(&draft.clone()));
        }
    }
}
