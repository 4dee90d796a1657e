//! `/proc/<pid>/net/rpc/nfs` 与 `/proc/<pid>/net/rpc/nfsd`
//!
//! 每行以类型名开头，后跟数值（含 `.` 的为浮点数）。已知类型按列名展开为映射，
//! 列数与预期不符或类型未知时保留为列表。

use super::super::super::{DecodeResult, float, named, number};
use crate::value::{Key, Map, Value};

const NET: &[&str] = &["netcnt", "netudpcnt", "nettcpcnt", "nettcpconn"];

const PROC2: &[&str] = &[
    "null", "getattr", "setattr", "root", "lookup", "readlink", "read", "writecache", "write",
    "create", "remove", "rename", "link", "symlink", "mkdir", "rmdir", "readdir", "statfs",
];

const PROC3: &[&str] = &[
    "null", "getattr", "setattr", "lookup", "access", "readlink", "read", "write", "create",
    "mkdir", "symlink", "mknod", "remove", "rmdir", "rename", "link", "readdir", "readdirplus",
    "fsstat", "fsinfo", "pathconf", "commit",
];

const NFSD_RC: &[&str] = &["hits", "misses", "nocache"];

const NFSD_FH: &[&str] = &[
    "stale",
    "total_lookups",
    "anonlookups",
    "dir_not_in_cache",
    "nondir_not_in_cache",
];

const NFSD_IO: &[&str] = &["read", "written"];

const NFSD_RPC: &[&str] = &["cnt", "badcnt", "badfmt", "badauth", "badclnt"];

const NFSD_PROC4: &[&str] = &["null", "compound"];

const NFS_RPC: &[&str] = &["cnt", "retrans", "authrefresh"];

/// 线程忙碌时间直方图的区间名
const BUSY_BUCKETS: [&str; 9] = [
    "10-20", "20-30", "30-40", "40-50", "50-60", "60-70", "70-80", "80-90", "90-100",
];

#[derive(Clone, Copy)]
enum Side {
    Client,
    Server,
}

/// 解码 `nfs`（客户端统计）
pub fn decode_nfs(content: &str) -> DecodeResult {
    decode(content, Side::Client)
}

/// 解码 `nfsd`（服务端统计）
pub fn decode_nfsd(content: &str) -> DecodeResult {
    decode(content, Side::Server)
}

fn decode(content: &str, side: Side) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(kind) = fields.next() else {
            continue;
        };
        let values = fields
            .map(|raw| {
                if raw.contains('.') {
                    float(raw).map(Value::Float)
                } else {
                    number(raw)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let value = expand(kind, &values, side).unwrap_or(Value::List(values));
        result.insert(Key::from(kind), value);
    }
    Ok(Value::Map(result))
}

fn expand(kind: &str, values: &[Value], side: Side) -> Option<Value> {
    match (side, kind) {
        (_, "net") => named(NET, values),
        // 首列是后续列数
        (_, "proc2") => named(PROC2, values.get(1..)?),
        (_, "proc3") => named(PROC3, values.get(1..)?),
        (Side::Client, "rpc") => named(NFS_RPC, values),
        (Side::Server, "rpc") => named(NFSD_RPC, values),
        (Side::Server, "rc") => named(NFSD_RC, values),
        (Side::Server, "fh") => named(NFSD_FH, values),
        (Side::Server, "io") => named(NFSD_IO, values),
        (Side::Server, "proc4") => named(NFSD_PROC4, values.get(1..)?),
        (Side::Server, "th") => threads(values),
        (Side::Server, "ra") => read_ahead(values),
        _ => None,
    }
}

/// `th <threads> <fullcnt> <busy...>`
fn threads(values: &[Value]) -> Option<Value> {
    let [threads, fullcnt, busy @ ..] = values else {
        return None;
    };
    if busy.len() < BUSY_BUCKETS.len() {
        return None;
    }
    Some(Value::map([
        ("threads", threads.clone()),
        ("fullcnt", fullcnt.clone()),
        (
            "busy",
            Value::map(BUSY_BUCKETS.into_iter().zip(busy.iter().cloned())),
        ),
    ]))
}

/// `ra <cache_size> <depth 10%..100%> <not_found>`
fn read_ahead(values: &[Value]) -> Option<Value> {
    let [cache_size, depths @ .., not_found] = values else {
        return None;
    };
    if depths.len() != 10 {
        return None;
    }
    let depth = depths
        .iter()
        .enumerate()
        .map(|(i, v)| (Key::Int((i as i64 + 1) * 10), v.clone()));
    Some(Value::map([
        ("cache_size", cache_size.clone()),
        ("depth", Value::map(depth)),
        ("not_found", not_found.clone()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_nfsd() {
        let value = decode_nfsd(samples::NET_RPC_NFSD).unwrap();
        let rc = value.get(&Key::from("rc")).unwrap();
        assert_eq!(rc.get(&Key::from("nocache")), Some(&Value::Int(1212)));
        let io = value.get(&Key::from("io")).unwrap();
        assert_eq!(io.get(&Key::from("written")), Some(&Value::Int(8192)));
        let proc3 = value.get(&Key::from("proc3")).unwrap();
        assert_eq!(proc3.get(&Key::from("null")), Some(&Value::Int(6)));
        assert_eq!(proc3.get(&Key::from("getattr")), Some(&Value::Int(1)));
        let proc4 = value.get(&Key::from("proc4")).unwrap();
        assert_eq!(proc4.get(&Key::from("compound")), Some(&Value::Int(1210)));
    }

    #[test]
    fn test_nfsd_threads_and_read_ahead() {
        let value = decode_nfsd(samples::NET_RPC_NFSD).unwrap();
        let th = value.get(&Key::from("th")).unwrap();
        assert_eq!(th.get(&Key::from("threads")), Some(&Value::Int(8)));
        let busy = th.get(&Key::from("busy")).unwrap();
        assert_eq!(busy.get(&Key::from("90-100")), Some(&Value::Float(0.0)));
        let ra = value.get(&Key::from("ra")).unwrap();
        let depth = ra.get(&Key::from("depth")).unwrap();
        assert_eq!(depth.get(&Key::Int(10)), Some(&Value::Int(1)));
        assert_eq!(depth.get(&Key::Int(100)), Some(&Value::Int(10)));
        assert_eq!(ra.get(&Key::from("not_found")), Some(&Value::Int(11)));
    }

    #[test]
    fn test_nfs_client() {
        let value = decode_nfs(samples::NET_RPC_NFS).unwrap();
        let rpc = value.get(&Key::from("rpc")).unwrap();
        assert_eq!(rpc.get(&Key::from("retrans")), Some(&Value::Int(0)));
        assert_eq!(rpc.get(&Key::from("authrefresh")), Some(&Value::Int(1234)));
    }

    #[test]
    fn test_unexpected_arity_stays_a_list() {
        let value = decode_nfs("net 1 2\nxprt 3\n").unwrap();
        assert_eq!(
            value.get(&Key::from("net")),
            Some(&Value::List(vec![Value::Int(1), Value::Int(2)]))
        );
        assert_eq!(
            value.get(&Key::from("xprt")),
            Some(&Value::List(vec![Value::Int(3)]))
        );
    }
}
