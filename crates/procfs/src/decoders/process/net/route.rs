//! `/proc/<pid>/net/route`

use super::super::super::{DecodeError, DecodeResult, zip_keys};
use crate::value::{Key, Map, Value};

/// 默认路由的目的地址
pub const DEFAULT_DESTINATION: &str = "00000000";

/// 解码：按目的地址（十六进制文本）索引的路由项
///
/// 默认路由可能有多条，因此 `00000000` 对应一个列表，其余目的地址对应单个路由项。
pub fn decode(content: &str) -> DecodeResult {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| DecodeError::new("missing header"))?
        .to_lowercase();
    let mut keys: Vec<&str> = header.split_whitespace().collect();
    if keys.len() < 2 {
        return Err(DecodeError::new("header without destination column"));
    }
    keys.remove(1);

    let mut result = Map::new();
    for line in lines {
        let mut values: Vec<&str> = line.split_whitespace().collect();
        if values.is_empty() {
            continue;
        }
        if values.len() < 2 {
            return Err(DecodeError::new(format!("malformed route line {:?}", line)));
        }
        let destination = values.remove(1);
        let entry = Value::Map(zip_keys(&keys, values.into_iter().map(Value::from)));

        if destination == DEFAULT_DESTINATION {
            let defaults = result
                .entry(Key::from(destination))
                .or_insert_with(|| Value::List(Vec::new()));
            if let Value::List(defaults) = defaults {
                defaults.push(entry);
            }
        } else {
            result.insert(Key::from(destination), entry);
        }
    }
    Ok(Value::Map(result))
}
