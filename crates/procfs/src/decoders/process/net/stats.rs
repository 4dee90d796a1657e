//! `/proc/<pid>/net/snmp`、`netstat` 与 `sockstat`

use super::super::super::{DecodeError, DecodeResult, number, split_pair, zip_keys};
use crate::value::{Key, Map, Value};

/// 解码 `snmp`/`netstat`：表头行与数值行成对出现，按协议名分组
pub fn decode_paired(content: &str) -> DecodeResult {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() % 2 != 0 {
        return Err(DecodeError::new("header line without values"));
    }

    let mut result = Map::new();
    for pair in lines.chunks(2) {
        let (kind, header) = split_pair(pair[0], ": ")?;
        let (value_kind, values) = split_pair(pair[1], ": ")?;
        if kind != value_kind {
            return Err(DecodeError::new(format!(
                "value line {:?} does not match header {:?}",
                value_kind, kind
            )));
        }
        let keys: Vec<&str> = header.split_whitespace().collect();
        let values = values
            .split_whitespace()
            .map(number)
            .collect::<Result<Vec<_>, _>>()?;
        result.insert(Key::from(kind), Value::Map(zip_keys(&keys, values)));
    }
    Ok(Value::Map(result))
}

/// 解码 `sockstat`：每行是协议名与若干 `名字 数值` 对
pub fn decode_sockstat(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let (kind, data) = split_pair(line, ": ")?;
        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() % 2 != 0 {
            return Err(DecodeError::new(format!("unpaired field in {:?}", line)));
        }
        let mut counters = Map::new();
        for pair in fields.chunks(2) {
            counters.insert(Key::from(pair[0]), number(pair[1])?);
        }
        result.insert(Key::from(kind), Value::Map(counters));
    }
    Ok(Value::Map(result))
}
