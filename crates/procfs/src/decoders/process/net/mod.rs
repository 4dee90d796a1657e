//! `/proc/<pid>/net` 下的文件

use crate::registry::DecoderRegistry;

pub mod dev;
pub mod route;
pub mod rpc;
pub mod sockets;
pub mod stats;

/// 注册网络解码器
pub fn register(registry: &mut DecoderRegistry, namespace: &str) {
    registry
        .register(namespace, "dev", dev::decode)
        .register(namespace, "dev_mcast", dev::decode_mcast)
        .register(namespace, "route", route::decode)
        .register(namespace, "snmp", stats::decode_paired)
        .register(namespace, "netstat", stats::decode_paired)
        .register(namespace, "sockstat", stats::decode_sockstat)
        .register(namespace, "tcp", sockets::decode_tcp)
        .register(namespace, "udp", sockets::decode_udp);

    let rpc_namespace = format!("{}.rpc", namespace);
    registry
        .register(&rpc_namespace, "nfs", rpc::decode_nfs)
        .register(&rpc_namespace, "nfsd", rpc::decode_nfsd);
}
