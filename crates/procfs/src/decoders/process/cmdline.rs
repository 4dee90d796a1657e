//! `/proc/<pid>/cmdline` 与 `/proc/<pid>/environ`
//!
//! 两者都是以 NUL 分隔的字符串序列。

use super::super::DecodeResult;
use crate::value::{Key, Map, Value};

fn entries(content: &str) -> impl Iterator<Item = &str> {
    content.split('\0').filter(|s| !s.is_empty())
}

/// 解码 `cmdline`：参数向量（内核线程为空列表）
pub fn decode(content: &str) -> DecodeResult {
    Ok(Value::strings(entries(content)))
}

/// 解码 `environ`：变量名到值
pub fn decode_environ(content: &str) -> DecodeResult {
    let env: Map = entries(content)
        .map(|entry| {
            let (name, value) = entry.split_once('=').unwrap_or((entry, ""));
            (Key::from(name), Value::from(value))
        })
        .collect();
    Ok(Value::Map(env))
}
