//! `/proc/cpuinfo`
//!
//! 以空行分隔的 CPU 块按出现顺序编号（整数键），块内键名小写并以 `_` 代替空格。

use std::mem;

use super::{DecodeError, DecodeResult, float, int, split_pair};
use crate::value::{Key, Map, Value};

/// 整数字段
const INT_FIELDS: &[&str] = &[
    "apicid",
    "cache_alignment",
    "clflush_size",
    "core_id",
    "cpu_cores",
    "cpu_family",
    "cpuid_level",
    "initial_apicid",
    "model",
    "physical_id",
    "siblings",
    "stepping",
];

/// `yes`/`no` 字段
const BOOL_FIELDS: &[&str] = &["fpu", "fpu_exception", "wp"];

/// 解码
pub fn decode(content: &str) -> DecodeResult {
    let mut cpus = Map::new();
    let mut current = Map::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                let index = cpus.len();
                cpus.insert(Key::from(index), Value::Map(mem::take(&mut current)));
            }
            continue;
        }
        let (key, value) = split_pair(line, ":")?;
        let key = key.trim().replace(' ', "_").to_lowercase();
        if key == "processor" {
            continue;
        }
        let value = field(&key, value.trim())?;
        current.insert(Key::from(key), value);
    }
    if !current.is_empty() {
        let index = cpus.len();
        cpus.insert(Key::from(index), Value::Map(current));
    }

    Ok(Value::Map(cpus))
}

fn field(key: &str, value: &str) -> DecodeResult {
    if INT_FIELDS.contains(&key) {
        // 非 x86 平台上部分字段是文本
        return Ok(int(value).map_or_else(|_| Value::from(value), Value::Int));
    }
    if BOOL_FIELDS.contains(&key) {
        return Ok(Value::Bool(value.eq_ignore_ascii_case("yes")));
    }
    match key {
        "flags" | "bugs" => Ok(Value::strings(value.split_whitespace())),
        "bogomips" | "cpu_mhz" => Ok(Value::Float(float(value)?)),
        "cache_size" => Ok(Value::Int(int(value.trim_end_matches("KB"))?)),
        "address_sizes" => address_sizes(value),
        _ => Ok(Value::from(value)),
    }
}

/// `39 bits physical, 48 bits virtual`
fn address_sizes(value: &str) -> DecodeResult {
    let (physical, virt) = split_pair(value, ",")?;
    let bits = |part: &str| -> Result<i64, DecodeError> {
        let n = part
            .split_whitespace()
            .next()
            .ok_or_else(|| DecodeError::new(format!("invalid address sizes {:?}", value)))?;
        int(n)
    };
    Ok(Value::map([
        ("physical", Value::Int(bits(physical)?)),
        ("virtual", Value::Int(bits(virt)?)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    fn cpu(value: &Value, index: i64) -> &Value {
        value.get(&Key::Int(index)).unwrap()
    }

    #[test]
    fn test_cpus_are_keyed_by_index() {
        let value = decode(samples::CPUINFO).unwrap();
        assert_eq!(value.keys().unwrap(), vec!["0", "1"]);
        assert_eq!(
            cpu(&value, 0).get(&Key::from("model_name")),
            Some(&Value::from("Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz"))
        );
        assert!(cpu(&value, 0).get(&Key::from("processor")).is_none());
    }

    #[test]
    fn test_field_types() {
        let value = decode(samples::CPUINFO).unwrap();
        let first = cpu(&value, 0);
        assert_eq!(first.get(&Key::from("cpu_family")), Some(&Value::Int(6)));
        assert_eq!(first.get(&Key::from("cpu_mhz")), Some(&Value::Float(1992.0)));
        assert_eq!(first.get(&Key::from("cache_size")), Some(&Value::Int(8192)));
        assert_eq!(first.get(&Key::from("fpu")), Some(&Value::Bool(true)));
        assert_eq!(cpu(&value, 1).get(&Key::from("wp")), Some(&Value::Bool(false)));
        assert_eq!(
            first.get(&Key::from("flags")),
            Some(&Value::strings(["fpu", "vme", "de", "pse", "tsc"]))
        );
        let sizes = first.get(&Key::from("address_sizes")).unwrap();
        assert_eq!(sizes.get(&Key::from("physical")), Some(&Value::Int(39)));
        assert_eq!(sizes.get(&Key::from("virtual")), Some(&Value::Int(48)));
    }

    #[test]
    fn test_textual_model_is_kept() {
        let value = decode("processor\t: 0\nmodel\t\t: ARMv8 Processor\n").unwrap();
        assert_eq!(
            cpu(&value, 0).get(&Key::from("model")),
            Some(&Value::from("ARMv8 Processor"))
        );
    }
}
