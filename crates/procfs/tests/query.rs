//! Path resolution against a fake `/proc` tree.

mod common;

use common::procfs;
use procfs::{Key, Mode, Node, ProcError, Value, find, list, lookup, resolve, resolve_from};
use test_support::{FakeProc, samples};

#[test]
fn test_root_listing_is_closed() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    let names = list(&fs, "").unwrap();
    assert!(names.contains(&"cpuinfo".to_string()));
    assert!(names.contains(&"self".to_string()));
    for name in names {
        match lookup(&fs, &name) {
            Ok(_) => {}
            Err(e) => panic!("{} failed to resolve: {}", name, e),
        }
    }
}

#[test]
fn test_empty_path_is_root_listing() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);
    let value = lookup(&fs, "").unwrap();
    let names: Vec<&str> = value.as_list().unwrap().iter().filter_map(Value::as_str).collect();
    assert!(names.contains(&"loadavg"));
    assert!(names.contains(&"4242"));
}

#[test]
fn test_pid_prefix_matches_process_collection() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    let direct = lookup(&fs, "1/status/Uid/effective").unwrap();
    let process = fs.processes().get(1).unwrap();
    let via = resolve_from(&fs, Node::Process(process), "status/Uid/effective").unwrap();

    assert_eq!(direct, Value::Int(0));
    assert!(matches!(via, Node::Value(ref v) if *v == direct));
}

#[test]
fn test_integer_key_via_integer_attribute() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(lookup(&fs, "loadavg/average/15").unwrap(), Value::Float(0.12));
    assert_eq!(list(&fs, "loadavg/average").unwrap(), vec!["1", "5", "15"]);
    assert_eq!(
        lookup(&fs, "cpuinfo/1/model_name").unwrap(),
        lookup(&fs, "cpuinfo/0/model_name").unwrap()
    );
}

#[test]
fn test_listing_a_scalar_fails() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    let err = list(&fs, "loadavg/average/15").unwrap_err();
    assert!(matches!(err, ProcError::NotListable(ref p) if p == "loadavg/average/15"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_missing_path_reports_full_path() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    let err = lookup(&fs, "doesnotexist").unwrap_err();
    assert!(matches!(err, ProcError::PathNotFound(ref p) if p == "doesnotexist"));
    assert_eq!(err.exit_code(), 1);

    let err = lookup(&fs, "loadavg/average/2").unwrap_err();
    assert!(matches!(err, ProcError::PathNotFound(ref p) if p == "loadavg/average/2"));
}

#[test]
fn test_dot_segments_never_resolve() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    for path in ["sys/..", "sys/kernel/../kernel", "1/..", "."] {
        let err = lookup(&fs, path).unwrap_err();
        assert!(matches!(err, ProcError::PathNotFound(_)), "{}: {}", path, err);
    }
}

#[test]
fn test_file_without_decoder_is_raw_text() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(lookup(&fs, "version").unwrap(), Value::from(samples::VERSION));
    assert_eq!(lookup(&fs, "sys/kernel/hostname").unwrap(), Value::from("fakehost\n"));
}

#[test]
fn test_directory_resolves_to_child_names() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);
    assert_eq!(list(&fs, "sys").unwrap(), vec!["kernel"]);
    assert!(matches!(resolve(&fs, "sys/kernel").unwrap(), Node::Directory(_)));
}

#[test]
fn test_durations_serialize_as_whole_seconds() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(find(&fs, "uptime/uptime", Mode::Value).unwrap(), "350735");
    proc.file("uptime", "90.999999 12.00\n");
    assert_eq!(find(&fs, "uptime/uptime", Mode::Value).unwrap(), "90");
    proc.file("uptime", "91.000000 12.00\n");
    assert_eq!(find(&fs, "uptime/uptime", Mode::Value).unwrap(), "91");
}

#[test]
fn test_find_renders_json() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    assert_eq!(
        find(&fs, "loadavg/average", Mode::List).unwrap(),
        r#"["1","5","15"]"#
    );
    assert_eq!(find(&fs, "1/cmdline", Mode::Value).unwrap(), r#"["/lib/systemd/systemd","--system"]"#);
    assert_eq!(find(&fs, "1/cmdline/-1", Mode::Value).unwrap(), r#""--system""#);
}

#[test]
fn test_decoded_files_in_process_subtree() {
    let proc = FakeProc::standard();
    let fs = procfs(&proc);

    let address = lookup(&fs, "4242/net/tcp/0/local_address").unwrap();
    assert_eq!(address, Value::List(vec![Value::from("127.0.0.1"), Value::Int(53)]));
    assert_eq!(lookup(&fs, "42/status/Name").unwrap(), Value::from("bash"));
    assert!(lookup(&fs, "42/net/rpc/nfsd").unwrap().get(&Key::from("th")).is_some());
}

#[test]
fn test_malformed_file_names_the_path() {
    let proc = FakeProc::standard();
    proc.file("loadavg", "garbage\n");
    let fs = procfs(&proc);

    let err = lookup(&fs, "loadavg/average").unwrap_err();
    match err {
        ProcError::Malformed { path, .. } => assert!(path.ends_with("/loadavg")),
        other => panic!("unexpected error {}", other),
    }
}
