//! `/proc/<pid>/net/tcp` 与 `/proc/<pid>/net/udp`
//!
//! 每个套接字按槽位号（整数键）索引，字段名取自表头（去掉 `sl`）。
//! 地址编码为 `[ip, port]`，IPv4 地址在文件中是小端十六进制。

use std::net::Ipv4Addr;

use super::super::super::{DecodeError, DecodeResult, int, split_pair, zip_keys};
use crate::value::{Key, Map, Value};

/// TCP 状态名（`include/net/tcp_states.h`）
const TCP_STATES: &[(&str, &str)] = &[
    ("01", "ESTABLISHED"),
    ("02", "SYN_SENT"),
    ("03", "SYN_RECV"),
    ("04", "FIN_WAIT1"),
    ("05", "FIN_WAIT2"),
    ("06", "TIME_WAIT"),
    ("07", "CLOSE"),
    ("08", "CLOSE_WAIT"),
    ("09", "LAST_ACK"),
    ("0A", "LISTEN"),
    ("0B", "CLOSING"),
];

/// 解码 `tcp`：状态转换为名字，多余的列收集到 `other`
pub fn decode_tcp(content: &str) -> DecodeResult {
    decode_sockets(content, Protocol::Tcp)
}

/// 解码 `udp`：状态保留为十六进制文本
pub fn decode_udp(content: &str) -> DecodeResult {
    decode_sockets(content, Protocol::Udp)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Protocol {
    Tcp,
    Udp,
}

fn decode_sockets(content: &str, protocol: Protocol) -> DecodeResult {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| DecodeError::new("missing header"))?;
    let mut keys: Vec<&str> = header.split_whitespace().skip(1).collect();
    if protocol == Protocol::Tcp {
        keys.push("other");
    }

    let mut result = Map::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 10 {
            return Err(DecodeError::new(format!("short socket line {:?}", line)));
        }
        let slot = int(fields[0].trim_end_matches(':'))?;
        let (tx_queue, rx_queue) = split_pair(fields[4], ":")?;
        let (timer, when) = split_pair(fields[5], ":")?;
        let state = match protocol {
            Protocol::Tcp => TCP_STATES
                .iter()
                .find(|(code, _)| *code == fields[3])
                .map_or(fields[3], |(_, name)| *name),
            Protocol::Udp => fields[3],
        };

        let mut values = vec![
            address(fields[1])?,
            address(fields[2])?,
            Value::from(state),
            Value::from(tx_queue),
            Value::from(rx_queue),
            Value::from(timer),
            Value::from(when),
            Value::from(fields[6]),
            Value::Int(int(fields[7])?),
            Value::Int(int(fields[8])?),
            Value::Int(int(fields[9])?),
        ];
        match protocol {
            Protocol::Tcp => values.push(Value::strings(fields[10..].iter().copied())),
            Protocol::Udp => {
                let tail = keys.get(11..).unwrap_or_default();
                for (key, raw) in tail.iter().zip(&fields[10..]) {
                    values.push(match *key {
                        "pointer" => Value::from(*raw),
                        _ => socket_field(raw),
                    });
                }
            }
        }

        result.insert(Key::Int(slot), Value::Map(zip_keys(&keys, values)));
    }
    Ok(Value::Map(result))
}

fn socket_field(raw: &str) -> Value {
    raw.parse::<i64>().map_or_else(|_| Value::from(raw), Value::Int)
}

/// `0100007F:0035` → `["127.0.0.1", 53]`
fn address(raw: &str) -> DecodeResult {
    let (ip, port) = split_pair(raw, ":")?;
    let ip = u32::from_str_radix(ip, 16)?;
    let port = i64::from_str_radix(port, 16)?;
    let ip = Ipv4Addr::from(ip.swap_bytes());
    Ok(Value::List(vec![Value::from(ip.to_string()), Value::Int(port)]))
}
