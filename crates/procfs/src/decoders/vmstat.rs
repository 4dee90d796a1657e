//! `/proc/vmstat`

use super::{DecodeError, DecodeResult, number};
use crate::value::{Key, Map, Value};

/// 解码：计数器名到数值
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let mut fields = line.split_whitespace();
        let (Some(key), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(DecodeError::new(format!("malformed vmstat line {:?}", line)));
        };
        result.insert(Key::from(key), number(value)?);
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::VMSTAT).unwrap();
        assert_eq!(value.get(&Key::from("pgfault")), Some(&Value::Int(123456789)));
        assert_eq!(value.keys().unwrap().len(), 3);
    }
}
