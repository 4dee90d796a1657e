//! `/proc/partitions`

use super::{DecodeError, DecodeResult, int};
use crate::value::{Key, Map, Value};

/// 解码：按分区名索引的主/次设备号与块数
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] | ["major", ..] => continue,
            [major, minor, blocks, name] => {
                result.insert(
                    Key::from(*name),
                    Value::map([
                        ("major", Value::Int(int(major)?)),
                        ("minor", Value::Int(int(minor)?)),
                        ("block_count", Value::Int(int(blocks)?)),
                    ]),
                );
            }
            _ => return Err(DecodeError::new(format!("malformed partition line {:?}", line))),
        }
    }
    Ok(Value::Map(result))
}
