//! `/proc/<pid>/net/dev` 与 `/proc/<pid>/net/dev_mcast`

use super::super::super::{DecodeError, DecodeResult, int, number, split_pair, zip_keys};
use crate::value::{Key, Map, Value};

/// 解码 `dev`：按接口索引的 `receive`/`transmit` 计数
///
/// 第二行表头以 `|` 分为三段，后两段分别是接收和发送的列名。
pub fn decode(content: &str) -> DecodeResult {
    let mut lines = content.lines().skip(1);
    let header = lines
        .next()
        .ok_or_else(|| DecodeError::new("missing column header"))?;
    let sections: Vec<&str> = header.split('|').collect();
    let [_, receive, transmit] = sections.as_slice() else {
        return Err(DecodeError::new(format!("unexpected header {:?}", header)));
    };
    let receive: Vec<&str> = receive.split_whitespace().collect();
    let transmit: Vec<&str> = transmit.split_whitespace().collect();

    let mut result = Map::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let (interface, counters) = split_pair(line, ":")?;
        let counters = counters
            .split_whitespace()
            .map(number)
            .collect::<Result<Vec<_>, _>>()?;
        if counters.len() < receive.len() {
            return Err(DecodeError::new(format!("short counter line {:?}", line)));
        }
        let (rx, tx) = counters.split_at(receive.len());
        result.insert(
            Key::from(interface.trim()),
            Value::map([
                ("receive", Value::Map(zip_keys(&receive, rx.iter().cloned()))),
                ("transmit", Value::Map(zip_keys(&transmit, tx.iter().cloned()))),
            ]),
        );
    }
    Ok(Value::Map(result))
}

/// 解码 `dev_mcast`：按接口索引的编号、引用计数与组播地址列表
pub fn decode_mcast(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [index, interface, users, gusers, address] = fields.as_slice() else {
            return Err(DecodeError::new(format!("malformed dev_mcast line {:?}", line)));
        };
        let entry = result.entry(Key::from(*interface)).or_insert_with(|| {
            Value::map([
                ("addresses", Value::List(Vec::new())),
                ("index", Value::Int(0)),
                ("users", Value::Int(0)),
                ("gusers", Value::Int(0)),
            ])
        });
        if let Value::Map(entry) = entry {
            entry.insert(Key::from("index"), Value::Int(int(index)?));
            entry.insert(Key::from("users"), Value::Int(int(users)?));
            entry.insert(Key::from("gusers"), Value::Int(int(gusers)?));
            if let Some(Value::List(addresses)) = entry.get_mut(&Key::from("addresses")) {
                addresses.push(Value::from(*address));
            }
        }
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_dev() {
        let value = decode(samples::NET_DEV).unwrap();
        assert_eq!(value.keys().unwrap(), vec!["eth0", "lo"]);
        let eth0 = value.get(&Key::from("eth0")).unwrap();
        let receive = eth0.get(&Key::from("receive")).unwrap();
        assert_eq!(receive.get(&Key::from("bytes")), Some(&Value::Int(5862410)));
        assert_eq!(receive.get(&Key::from("multicast")), Some(&Value::Int(0)));
        let transmit = eth0.get(&Key::from("transmit")).unwrap();
        assert_eq!(transmit.get(&Key::from("packets")), Some(&Value::Int(5433)));
        assert_eq!(transmit.get(&Key::from("carrier")), Some(&Value::Int(0)));
    }

    #[test]
    fn test_dev_mcast_groups_addresses() {
        let value = decode_mcast(samples::NET_DEV_MCAST).unwrap();
        let eth0 = value.get(&Key::from("eth0")).unwrap();
        assert_eq!(
            eth0.get(&Key::from("addresses")),
            Some(&Value::strings(["333300000001", "01005e000001"]))
        );
        assert_eq!(eth0.get(&Key::from("index")), Some(&Value::Int(2)));
        let wlan0 = value.get(&Key::from("wlan0")).unwrap();
        assert_eq!(wlan0.get(&Key::from("index")), Some(&Value::Int(3)));
    }
}
