#![allow(dead_code)]

use std::sync::Arc;

use procfs::{FixedOps, ProcFs};
use test_support::FakeProc;
use test_support::mock::proc::{SELF_PID, USER_UID};

/// Context over a fake tree, seen from the `procq` process (pid 4242, uid 1000).
pub fn procfs(proc: &FakeProc) -> Arc<ProcFs> {
    procfs_with(proc, FixedOps::new(SELF_PID, USER_UID))
}

pub fn procfs_with(proc: &FakeProc, ops: FixedOps) -> Arc<ProcFs> {
    ProcFs::mounted_at(proc.root(), Arc::new(ops))
}
