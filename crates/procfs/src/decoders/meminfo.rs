//! `/proc/meminfo`

use super::{DecodeResult, kb, split_pair};
use crate::value::{Key, Map, Value};

/// 解码：字段名到数值（`kB` 单位去掉）
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let (key, value) = split_pair(line, ":")?;
        result.insert(Key::from(key.trim()), Value::Int(kb(value)?));
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::MEMINFO).unwrap();
        assert_eq!(value.get(&Key::from("MemTotal")), Some(&Value::Int(16314480)));
        assert_eq!(value.get(&Key::from("HugePages_Total")), Some(&Value::Int(0)));
    }

    #[test]
    fn test_missing_separator() {
        assert!(decode("MemTotal 1 kB\n").is_err());
    }
}
