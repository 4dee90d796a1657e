//! `/proc/<pid>/status`

use super::super::{DecodeError, DecodeResult, int, kb, split_pair};
use crate::value::{Key, Map, Value};

/// `Uid`/`Gid` 四个字段的名字
pub const ID_FIELDS: [&str; 4] = ["real", "effective", "saved_set", "fs"];

/// 整数字段
const INT_FIELDS: &[&str] = &[
    "Tgid",
    "Ngid",
    "Pid",
    "PPid",
    "TracerPid",
    "FDSize",
    "Threads",
    "voluntary_ctxt_switches",
    "nonvoluntary_ctxt_switches",
];

/// 解码
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let (name, value) = split_pair(line, ":")?;
        let value = value.trim();
        result.insert(Key::from(name), field(name, value)?);
    }
    Ok(Value::Map(result))
}

fn field(name: &str, value: &str) -> DecodeResult {
    if name.starts_with("Vm") || value.ends_with(" kB") {
        return Ok(Value::Int(kb(value)?));
    }
    if INT_FIELDS.contains(&name) {
        return Ok(Value::Int(int(value)?));
    }
    match name {
        "Uid" | "Gid" => {
            let ids = value
                .split_whitespace()
                .map(|v| int(v).map(Value::Int))
                .collect::<Result<Vec<_>, _>>()?;
            if ids.len() != ID_FIELDS.len() {
                return Err(DecodeError::new(format!("expected 4 ids in {}", name)));
            }
            Ok(Value::map(ID_FIELDS.into_iter().zip(ids)))
        }
        "SigQ" => {
            let (queued, max) = split_pair(value, "/")?;
            Ok(Value::map([
                ("queued", Value::Int(int(queued)?)),
                ("max", Value::Int(int(max)?)),
            ]))
        }
        "Groups" => Ok(Value::List(
            value
                .split_whitespace()
                .map(|g| int(g).map(Value::Int))
                .collect::<Result<_, _>>()?,
        )),
        _ => Ok(Value::from(value)),
    }
}
