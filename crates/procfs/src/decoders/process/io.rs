//! `/proc/<pid>/io`

use super::super::{DecodeResult, number};
use crate::value::{Key, Map, Value};

/// 解码：计数器名到字节数/调用次数
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for (key, value) in content.lines().filter_map(|l| l.split_once(": ")) {
        result.insert(Key::from(key.trim()), number(value)?);
    }
    Ok(Value::Map(result))
}
