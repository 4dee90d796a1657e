//! `/proc/diskstats`
//!
//! 每个设备的计数按 `read`/`write`/`io`（较新内核还有 `discard`/`flush`）分组。

use super::{DecodeError, DecodeResult, number};
use crate::value::{Key, Map, Value};

/// 设备名之后各列的 (分组, 字段)
const COLUMNS: &[(&str, &str)] = &[
    ("read", "completed"),
    ("read", "merged"),
    ("read", "sectors"),
    ("read", "milliseconds"),
    ("write", "completed"),
    ("write", "merged"),
    ("write", "sectors"),
    ("write", "milliseconds"),
    ("io", "in_progress"),
    ("io", "milliseconds"),
    ("io", "weighted_milliseconds"),
    ("discard", "completed"),
    ("discard", "merged"),
    ("discard", "sectors"),
    ("discard", "milliseconds"),
    ("flush", "completed"),
    ("flush", "milliseconds"),
];

/// 解码
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [_major, _minor, device, counters @ ..] = fields.as_slice() else {
            return Err(DecodeError::new(format!("malformed diskstats line {:?}", line)));
        };

        let mut groups: Map = ["read", "write", "io"]
            .into_iter()
            .map(|g| (Key::from(g), Value::Map(Map::new())))
            .collect();
        for ((group, field), raw) in COLUMNS.iter().zip(counters.iter()) {
            let entry = groups
                .entry(Key::from(*group))
                .or_insert_with(|| Value::Map(Map::new()));
            if let Value::Map(map) = entry {
                map.insert(Key::from(*field), number(raw)?);
            }
        }
        result.insert(Key::from(*device), Value::Map(groups));
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::DISKSTATS).unwrap();
        let sda = value.get(&Key::from("sda")).unwrap();
        assert_eq!(sda.keys().unwrap(), vec!["io", "read", "write"]);
        let read = sda.get(&Key::from("read")).unwrap();
        assert_eq!(read.get(&Key::from("completed")), Some(&Value::Int(108250)));
        let io = sda.get(&Key::from("io")).unwrap();
        assert_eq!(
            io.get(&Key::from("weighted_milliseconds")),
            Some(&Value::Int(274628))
        );
    }

    #[test]
    fn test_short_line() {
        assert!(decode("8 0\n").is_err());
    }
}
