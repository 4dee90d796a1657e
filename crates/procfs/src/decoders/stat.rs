//! `/proc/stat`
//!
//! - `cpu`/`cpuN` 行：各状态耗时（时长）外加 `total`
//! - `intr`/`softirq` 行：首个值为总数，其余按 1 起编号
//! - `btime`：启动时间戳
//! - 其他行：单值为整数，多值为整数列表

use chrono::{Local, TimeZone};

use super::{DecodeError, DecodeResult, int, number, ticks_to_duration};
use crate::value::{Key, Map, Value};

/// cpu 行的字段名（按内核输出顺序）
const CPU_FIELDS: &[&str] = &[
    "user",
    "nice",
    "system",
    "idle",
    "iowait",
    "irq",
    "softirq",
    "steal",
    "guest",
    "guest_nice",
];

/// 解码
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let values: Vec<&str> = fields.collect();

        let value = if name.starts_with("cpu") {
            cpu(&values)?
        } else {
            match name {
                "intr" | "softirq" => numbered_with_total(&values)?,
                "btime" => boot_time(&values)?,
                _ => plain(&values)?,
            }
        };
        result.insert(Key::from(name), value);
    }

    Ok(Value::Map(result))
}

fn cpu(values: &[&str]) -> DecodeResult {
    let mut map = Map::new();
    let mut total: u64 = 0;
    for (key, raw) in CPU_FIELDS.iter().zip(values) {
        let ticks = raw.parse::<u64>()?;
        total = total.saturating_add(ticks);
        map.insert(Key::from(*key), Value::Duration(ticks_to_duration(ticks)));
    }
    map.insert(Key::from("total"), Value::Duration(ticks_to_duration(total)));
    Ok(Value::Map(map))
}

fn numbered_with_total(values: &[&str]) -> DecodeResult {
    let Some((total, rest)) = values.split_first() else {
        return Err(DecodeError::new("missing total"));
    };
    let mut map = Map::new();
    for (index, raw) in rest.iter().enumerate() {
        map.insert(Key::from(index + 1), number(raw)?);
    }
    map.insert(Key::from("total"), number(total)?);
    Ok(Value::Map(map))
}

fn boot_time(values: &[&str]) -> DecodeResult {
    let [secs] = values else {
        return Err(DecodeError::new("expected a single btime value"));
    };
    let secs = int(secs)?;
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(Value::Time)
        .ok_or_else(|| DecodeError::new(format!("invalid boot time {}", secs)))
}

fn plain(values: &[&str]) -> DecodeResult {
    match values {
        [single] => number(single),
        many => Ok(Value::List(
            many.iter().map(|v| number(v)).collect::<Result<_, _>>()?,
        )),
    }
}
