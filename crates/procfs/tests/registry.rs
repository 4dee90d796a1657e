//! Custom decoder registration over a fake tree.

use std::sync::Arc;

use procfs::decoders::{DecodeError, DecodeResult};
use procfs::{DecoderRegistry, FixedOps, ProcError, ProcFs, Value, lookup};
use test_support::FakeProc;
use test_support::mock::proc::{SELF_PID, USER_UID};

fn shout(content: &str) -> DecodeResult {
    Ok(Value::from(content.trim().to_uppercase()))
}

fn reject(_: &str) -> DecodeResult {
    Err(DecodeError::new("unsupported layout"))
}

fn procfs(proc: &FakeProc, registry: DecoderRegistry) -> Arc<ProcFs> {
    ProcFs::with_registry(
        proc.root(),
        Arc::new(FixedOps::new(SELF_PID, USER_UID)),
        Arc::new(registry),
    )
}

#[test]
fn test_system_namespace_follows_directories() {
    let proc = FakeProc::standard();
    let mut registry = DecoderRegistry::builtin();
    registry.register("proc.sys.kernel", "hostname", shout);
    let fs = procfs(&proc, registry);

    assert_eq!(lookup(&fs, "sys/kernel/hostname").unwrap(), Value::from("FAKEHOST"));
}

#[test]
fn test_process_namespace_strips_pid() {
    let proc = FakeProc::standard();
    proc.file("1/comm", "systemd\n").file("42/comm", "bash\n");
    let mut registry = DecoderRegistry::new();
    registry.register("process", "comm", shout);
    let fs = procfs(&proc, registry);

    assert_eq!(lookup(&fs, "1/comm").unwrap(), Value::from("SYSTEMD"));
    assert_eq!(lookup(&fs, "self/parent/comm").unwrap(), Value::from("BASH"));
    // Nothing registered for status in this registry.
    assert!(matches!(lookup(&fs, "1/status").unwrap(), Value::Str(_)));
}

#[test]
fn test_decoder_failure_is_malformed() {
    let proc = FakeProc::standard();
    let mut registry = DecoderRegistry::new();
    registry.register("proc", "version", reject);
    let fs = procfs(&proc, registry);

    match lookup(&fs, "version").unwrap_err() {
        ProcError::Malformed { path, reason } => {
            assert!(path.ends_with("/version"));
            assert_eq!(reason, "unsupported layout");
        }
        other => panic!("unexpected error {}", other),
    }
}
