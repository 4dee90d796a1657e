//! `/proc/loadavg`

use super::{DecodeError, DecodeResult, float, int, split_pair};
use crate::value::Value;

/// 解码：1/5/15 分钟平均负载（整数键）、调度实体数与最近的进程号
pub fn decode(content: &str) -> DecodeResult {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [la1, la5, la15, entities, last_pid] = fields.as_slice() else {
        return Err(DecodeError::new(format!("expected 5 fields, got {}", fields.len())));
    };
    let (current, total) = split_pair(entities, "/")?;

    Ok(Value::map([
        (
            "average",
            Value::map([
                (1i64, Value::Float(float(la1)?)),
                (5i64, Value::Float(float(la5)?)),
                (15i64, Value::Float(float(la15)?)),
            ]),
        ),
        (
            "entities",
            Value::map([
                ("current", Value::Int(int(current)?)),
                ("total", Value::Int(int(total)?)),
            ]),
        ),
        ("last_pid", Value::Int(int(last_pid)?)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Key;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::LOADAVG).unwrap();
        let average = value.get(&Key::from("average")).unwrap();
        assert_eq!(average.get(&Key::Int(15)), Some(&Value::Float(0.12)));
        assert_eq!(average.keys().unwrap(), vec!["1", "5", "15"]);
        let entities = value.get(&Key::from("entities")).unwrap();
        assert_eq!(entities.get(&Key::from("total")), Some(&Value::Int(80)));
        assert_eq!(value.get(&Key::from("last_pid")), Some(&Value::Int(11206)));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(decode("0.1 0.2 0.3").is_err());
    }
}
