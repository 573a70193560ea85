//! File-backed ledger scenarios: durability across restarts, round-trip
//! fidelity, and rollback detection against real files.

use etchbook::{
    IdentityRecovery, Ledger, LedgerConfig, LedgerError, OracleError, RecoveryError, TimeOracle,
    TimeReference,
};
use etchbook_core::Block;
use etchbook_store::{ChainStore, FileStore};

struct StaticRecovery;

impl IdentityRecovery for StaticRecovery {
    fn recover(&self, _message: &str, _signature: &str) -> Result<String, RecoveryError> {
        Ok("0x00a329c0648769a73afac7f9381e08fb43dbea72".to_string())
    }
}

struct TickingOracle(std::sync::atomic::AtomicU64);

impl TimeOracle for TickingOracle {
    fn observe(&self) -> Result<TimeReference, OracleError> {
        let seq = self
            .0
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(TimeReference {
            timestamp: format!("2026-03-01T09:30:{:02}", seq % 60),
            sequence: 19_500_000 + seq,
        })
    }
}

fn open_ledger(dir: &std::path::Path) -> Ledger<FileStore> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Ledger::new(
        FileStore::open(dir).unwrap(),
        Box::new(StaticRecovery),
        Box::new(TickingOracle(std::sync::atomic::AtomicU64::new(0))),
        LedgerConfig::default(),
    )
}

#[test]
fn test_chain_survives_restart_field_for_field() {
    let dir = tempfile::tempdir().unwrap();

    let written: Vec<Block> = {
        let ledger = open_ledger(dir.path());
        vec![
            ledger.append("the first entry", "0xsig1").unwrap(),
            ledger.append("the second entry", "0xsig2").unwrap(),
            ledger.append("the third entry", "0xsig3").unwrap(),
        ]
    };

    // A fresh ledger over the same directory sees the identical chain.
    let reopened = open_ledger(dir.path());
    let chain = reopened.read().unwrap();
    assert_eq!(chain, written);
    assert!(reopened.verify().unwrap().is_valid());
}

#[test]
fn test_appends_continue_across_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ledger = open_ledger(dir.path());
        ledger.append("before restart", "0xsig1").unwrap();
    }

    let ledger = open_ledger(dir.path());
    let block = ledger.append("after restart", "0xsig2").unwrap();
    assert_eq!(block.index, 1);

    let chain = ledger.read().unwrap();
    assert_eq!(chain[1].previous_hash, chain[0].hash);
}

#[test]
fn test_deleting_chain_file_after_commit_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ledger = open_ledger(dir.path());
        ledger.append("committed entry", "0xsig1").unwrap();
    }

    std::fs::remove_file(dir.path().join("chain.json")).unwrap();

    let ledger = open_ledger(dir.path());
    assert!(matches!(ledger.read(), Err(LedgerError::Integrity(_))));
    assert!(matches!(
        ledger.append("should not land", "0xsig2"),
        Err(LedgerError::Integrity(_))
    ));
}

#[test]
fn test_replacing_chain_with_older_prefix_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let snapshot_after_one: Vec<u8>;
    {
        let ledger = open_ledger(dir.path());
        ledger.append("entry one", "0xsig1").unwrap();
        snapshot_after_one = std::fs::read(dir.path().join("chain.json")).unwrap();
        ledger.append("entry two", "0xsig2").unwrap();
    }

    // Roll the chain file back to the one-block snapshot; the pinned
    // fingerprint still refers to block two.
    std::fs::write(dir.path().join("chain.json"), &snapshot_after_one).unwrap();

    let ledger = open_ledger(dir.path());
    assert!(matches!(ledger.read(), Err(LedgerError::Integrity(_))));
}

#[test]
fn test_verify_reports_on_disk_tampering() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ledger = open_ledger(dir.path());
        ledger.append("authentic entry", "0xsig1").unwrap();
    }

    // Edit the message in place on disk.
    let store = FileStore::open(dir.path()).unwrap();
    let mut chain = store.load_chain().unwrap().unwrap();
    chain[0].message = "forged entry".to_string();
    let pinned = chain.last().unwrap().hash;
    store.commit(&chain, &pinned).unwrap();

    let ledger = open_ledger(dir.path());
    let report = ledger.verify().unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.violations[0].position, 0);
}
