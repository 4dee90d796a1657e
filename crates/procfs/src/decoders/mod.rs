//! 内置解码器
//!
//! 每个解码器把一个伪文件的原始文本转换为 [`Value`]。解码器只做格式层面的校验，
//! 失败时返回 [`DecodeError`]，由文件节点包装为带路径的 `Malformed` 错误。
//!
//! 时钟滴答字段按 `USER_HZ = 100` 转换为时长。

use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use thiserror::Error;

use crate::registry::{DecoderRegistry, PROCESS_NAMESPACE, SYSTEM_NAMESPACE};
use crate::value::{Key, Map, Value};

pub mod cpuinfo;
pub mod diskstats;
pub mod interrupts;
pub mod loadavg;
pub mod meminfo;
pub mod nfsd;
pub mod partitions;
pub mod process;
pub mod slabinfo;
pub mod stat;
pub mod uptime;
pub mod vmstat;

/// 每秒时钟滴答数
pub const USER_HZ: u64 = 100;

/// 解码失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    /// 以描述创建
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl From<ParseIntError> for DecodeError {
    fn from(e: ParseIntError) -> Self {
        Self(format!("invalid integer: {}", e))
    }
}

impl From<ParseFloatError> for DecodeError {
    fn from(e: ParseFloatError) -> Self {
        Self(format!("invalid float: {}", e))
    }
}

/// 解码结果类型
pub type DecodeResult = Result<Value, DecodeError>;

/// 注册全部内置解码器
pub fn register_builtin(registry: &mut DecoderRegistry) {
    let nfsd_namespace = format!("{}.fs.nfsd", SYSTEM_NAMESPACE);

    registry
        .register(SYSTEM_NAMESPACE, "cpuinfo", cpuinfo::decode)
        .register(SYSTEM_NAMESPACE, "uptime", uptime::decode)
        .register(SYSTEM_NAMESPACE, "stat", stat::decode)
        .register(SYSTEM_NAMESPACE, "loadavg", loadavg::decode)
        .register(SYSTEM_NAMESPACE, "partitions", partitions::decode)
        .register(SYSTEM_NAMESPACE, "softirqs", interrupts::decode_softirqs)
        .register(SYSTEM_NAMESPACE, "interrupts", interrupts::decode)
        .register(SYSTEM_NAMESPACE, "meminfo", meminfo::decode)
        .register(SYSTEM_NAMESPACE, "diskstats", diskstats::decode)
        .register(SYSTEM_NAMESPACE, "slabinfo", slabinfo::decode)
        .register(SYSTEM_NAMESPACE, "vmstat", vmstat::decode)
        .register(&nfsd_namespace, "pool_stats", nfsd::decode_pool_stats);

    process::register(registry, PROCESS_NAMESPACE);
}

// ========== 字段解析辅助 ==========

/// 有符号整数
pub(crate) fn int(s: &str) -> Result<i64, DecodeError> {
    Ok(s.trim().parse::<i64>()?)
}

/// 整数，超出 `i64` 时保留为无符号数
pub(crate) fn number(s: &str) -> DecodeResult {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(n) => Ok(Value::Int(n)),
        Err(_) => Ok(Value::from(s.parse::<u64>()?)),
    }
}

/// 十六进制无符号数
pub(crate) fn hex(s: &str) -> DecodeResult {
    Ok(Value::from(u64::from_str_radix(s.trim(), 16)?))
}

/// 浮点数
pub(crate) fn float(s: &str) -> Result<f64, DecodeError> {
    Ok(s.trim().parse::<f64>()?)
}

/// `"123 kB"` 形式的大小，取前面的数字
pub(crate) fn kb(s: &str) -> Result<i64, DecodeError> {
    let digits = s
        .split_whitespace()
        .next()
        .ok_or_else(|| DecodeError::new("empty size field"))?;
    int(digits)
}

/// 时钟滴答数转换为时长
pub(crate) fn ticks(s: &str) -> Result<Duration, DecodeError> {
    let ticks = s.trim().parse::<u64>()?;
    Ok(ticks_to_duration(ticks))
}

pub(crate) fn ticks_to_duration(ticks: u64) -> Duration {
    Duration::from_micros(ticks.saturating_mul(1_000_000 / USER_HZ))
}

/// 浮点秒数转换为时长
pub(crate) fn seconds(s: &str) -> Result<Duration, DecodeError> {
    let secs = float(s)?;
    Duration::try_from_secs_f64(secs)
        .map_err(|e| DecodeError::new(format!("invalid duration {}: {}", s.trim(), e)))
}

/// 按分隔符切成两半
pub(crate) fn split_pair<'a>(line: &'a str, sep: &str) -> Result<(&'a str, &'a str), DecodeError> {
    line.split_once(sep)
        .ok_or_else(|| DecodeError::new(format!("expected {:?} in line {:?}", sep, line)))
}

/// 以名字列表为键，逐个配对
pub(crate) fn zip_keys<K, I>(keys: &[K], values: I) -> Map
where
    K: AsRef<str>,
    I: IntoIterator<Item = Value>,
{
    keys.iter()
        .zip(values)
        .map(|(k, v)| (Key::from(k.as_ref()), v))
        .collect()
}

/// 值的个数必须与名字个数一致
pub(crate) fn named(keys: &[&str], values: &[Value]) -> Option<Value> {
    if keys.len() != values.len() {
        return None;
    }
    Some(Value::Map(zip_keys(keys, values.iter().cloned())))
}
