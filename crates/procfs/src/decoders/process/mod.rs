//! `/proc/<pid>` 下的文件

use crate::registry::DecoderRegistry;

pub mod cmdline;
pub mod io;
pub mod mounts;
pub mod net;
pub mod smaps;
pub mod stat;
pub mod status;

/// 注册进程级解码器
pub fn register(registry: &mut DecoderRegistry, namespace: &str) {
    registry
        .register(namespace, "status", status::decode)
        .register(namespace, "stat", stat::decode)
        .register(namespace, "statm", stat::decode_statm)
        .register(namespace, "cmdline", cmdline::decode)
        .register(namespace, "environ", cmdline::decode_environ)
        .register(namespace, "io", io::decode)
        .register(namespace, "mounts", mounts::decode)
        .register(namespace, "smaps", smaps::decode);

    net::register(registry, &format!("{}.net", namespace));
}
