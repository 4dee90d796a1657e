//! Single-query execution as the `procq` binary performs it.

use std::sync::Arc;

use procfs::{FixedOps, ProcFs};
use procq::cli::{Failure, execute};
use test_support::FakeProc;
use test_support::mock::proc::{SELF_PID, USER_UID};

fn procfs(proc: &FakeProc) -> Arc<ProcFs> {
    ProcFs::mounted_at(proc.root(), Arc::new(FixedOps::new(SELF_PID, USER_UID)))
}

#[test]
fn test_value_mode_prints_json() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(execute(&fs, "1/status/Uid/effective", false).unwrap(), "0");
    assert_eq!(execute(&fs, "loadavg/average/15", false).unwrap(), "0.12");
    assert_eq!(execute(&fs, "self/status/Name", false).unwrap(), r#""procq""#);
}

#[test]
fn test_list_mode_prints_names() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(execute(&fs, "loadavg/average", true).unwrap(), r#"["1","5","15"]"#);
    assert_eq!(execute(&fs, "cpuinfo", true).unwrap(), r#"["0","1"]"#);
}

#[test]
fn test_failures_carry_exit_code_and_path() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(
        execute(&fs, "doesnotexist", false).unwrap_err(),
        Failure {
            code: 1,
            message: "couldn't find path doesnotexist".into(),
        }
    );
    assert_eq!(
        execute(&fs, "loadavg/average/15", true).unwrap_err(),
        Failure {
            code: 2,
            message: "loadavg/average/15 is not a list!".into(),
        }
    );

    let failure = execute(&fs, "999/status", false).unwrap_err();
    assert_eq!(failure.code, 3);
    assert_eq!(failure.message, "999/status: unknown process 999");
}
