//! `/proc/interrupts` 与 `/proc/softirqs`
//!
//! 两者的首行都是 `CPU0 CPU1 ...` 表头，之后每行以 `名字:` 开头、按 CPU 给出计数。

use super::{DecodeError, DecodeResult, int};
use crate::value::{Key, Map, Value};

fn cpu_header(line: Option<&str>) -> Result<Vec<i64>, DecodeError> {
    let line = line.ok_or_else(|| DecodeError::new("missing CPU header"))?;
    line.split_whitespace()
        .map(|cpu| {
            let index = cpu
                .strip_prefix("CPU")
                .ok_or_else(|| DecodeError::new(format!("unexpected header column {:?}", cpu)))?;
            int(index)
        })
        .collect()
}

fn label(field: &str) -> Key {
    let name = field.trim_end_matches(':');
    match name.parse::<i64>() {
        Ok(n) => Key::Int(n),
        Err(_) => Key::from(name),
    }
}

/// 解码 `/proc/interrupts`：按中断号（数字为整数键）索引的逐 CPU 计数、`total` 与 `info`
pub fn decode(content: &str) -> DecodeResult {
    let mut lines = content.lines();
    let cpus = cpu_header(lines.next())?;
    let mut result = Map::new();

    for line in lines {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let key = label(name);
        let rest: Vec<&str> = fields.collect();

        if matches!(&key, Key::Str(s) if s == "ERR" || s == "MIS") {
            let count = rest
                .first()
                .ok_or_else(|| DecodeError::new(format!("missing count for {}", key)))?;
            result.insert(key, Value::Int(int(count)?));
            continue;
        }

        let mut map = Map::new();
        let mut total = 0i64;
        let mut consumed = 0;
        for (cpu, raw) in cpus.iter().zip(&rest) {
            let Ok(count) = raw.parse::<i64>() else {
                break;
            };
            total += count;
            consumed += 1;
            map.insert(Key::Int(*cpu), Value::Int(count));
        }
        map.insert(Key::from("total"), Value::Int(total));
        map.insert(Key::from("info"), Value::from(rest[consumed..].join(" ")));
        result.insert(key, Value::Map(map));
    }

    Ok(Value::Map(result))
}

/// 解码 `/proc/softirqs`：按处理器名索引的逐 CPU 计数与 `total`
pub fn decode_softirqs(content: &str) -> DecodeResult {
    let mut lines = content.lines();
    let cpus = cpu_header(lines.next())?;
    let mut result = Map::new();

    for line in lines {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let mut map = Map::new();
        let mut total = 0i64;
        for (cpu, raw) in cpus.iter().zip(fields) {
            let count = int(raw)?;
            total += count;
            map.insert(Key::Int(*cpu), Value::Int(count));
        }
        map.insert(Key::from("total"), Value::Int(total));
        result.insert(Key::from(name.trim_end_matches(':')), Value::Map(map));
    }

    Ok(Value::Map(result))
}
