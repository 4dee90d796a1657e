//! `/proc/<pid>/stat` 与 `/proc/<pid>/statm`

use super::super::{DecodeError, DecodeResult, number, ticks};
use crate::value::{Key, Map, Value};

/// `stat` 中 `state` 之后各列的名字，`_` 为保留列
const STAT_FIELDS: &[&str] = &[
    "state",
    "ppid",
    "pgrp",
    "sid",
    "tty_nr",
    "tty_pgrp",
    "flags",
    "min_flt",
    "cmin_flt",
    "maj_flt",
    "cmaj_flt",
    "utime",
    "stime",
    "cutime",
    "cstime",
    "priority",
    "nice",
    "num_threads",
    "_",
    "start_time",
    "vsize",
    "rss",
    "rsslim",
    "start_code",
    "end_code",
    "start_stack",
    "esp",
    "eip",
    "pending",
    "blocked",
    "sigign",
    "sigcatch",
    "wchan",
    "_",
    "_",
    "exit_signal",
    "task_cpu",
    "rt_priority",
    "policy",
    "blkio_ticks",
    "gtime",
    "cgtime",
];

/// `statm` 各列的名字
const STATM_FIELDS: &[&str] = &["size", "resident", "shared", "trs", "_", "drs", "_"];

/// 解码 `stat`
///
/// 命令名可能包含空格和括号，因此取第一个 `(` 与最后一个 `)` 之间的内容。
/// 以 `time` 结尾的字段是时钟滴答数，转换为时长。
pub fn decode(content: &str) -> DecodeResult {
    let content = content.trim();
    let (Some(open), Some(close)) = (content.find('('), content.rfind(')')) else {
        return Err(DecodeError::new("missing command name"));
    };
    if close < open {
        return Err(DecodeError::new("unbalanced command name"));
    }

    let mut result = Map::new();
    result.insert(Key::from("pid"), number(&content[..open])?);
    result.insert(Key::from("tcomm"), Value::from(&content[open + 1..close]));

    for (name, raw) in STAT_FIELDS.iter().zip(content[close + 1..].split_whitespace()) {
        let value = match *name {
            "_" => continue,
            "state" => Value::from(raw),
            name if name.ends_with("time") => Value::Duration(ticks(raw)?),
            _ => number(raw)?,
        };
        result.insert(Key::from(*name), value);
    }

    Ok(Value::Map(result))
}

/// 解码 `statm`（单位为页）
pub fn decode_statm(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for (name, raw) in STATM_FIELDS.iter().zip(content.split_whitespace()) {
        if *name != "_" {
            result.insert(Key::from(*name), number(raw)?);
        }
    }
    Ok(Value::Map(result))
}
