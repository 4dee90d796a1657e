//! 结构化值
//!
//! 解码器与解析器之间交换的数据形态。映射的键既可以是整数也可以是字符串，
//! 因此 `cpuinfo/0` 与 `loadavg/average/15` 都能按整数键命中。
//!
//! 序列化规则：
//!
//! - 时长序列化为整秒数：`floor(微秒数 / 1_000_000)`
//! - 时间戳序列化为 RFC 3339 字符串
//! - 映射序列化为对象（整数键会被转换为字符串）

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// 映射类型
pub type Map = BTreeMap<Key, Value>;

/// 映射键
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// 整数键（例如 CPU 编号、套接字槽位）
    Int(i64),
    /// 字符串键
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::Int(i64::from(n))
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// 结构化值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 布尔值
    Bool(bool),
    /// 有符号整数
    Int(i64),
    /// 超出 `i64` 范围的无符号整数
    UInt(u64),
    /// 浮点数
    Float(f64),
    /// 文本（未解码文件的原始内容也是文本）
    Str(String),
    /// 时长
    Duration(Duration),
    /// 时间戳
    Time(DateTime<Local>),
    /// 序列
    List(Vec<Value>),
    /// 映射
    Map(Map),
}

impl Value {
    /// 从键值对构造映射
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// 从字符串序列构造列表
    pub fn strings<S, I>(items: I) -> Value
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Value::List(items.into_iter().map(|s| Value::Str(s.into())).collect())
    }

    /// 按键取映射中的值
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// 按下标取序列中的值，负数从末尾开始计数
    pub fn index(&self, index: i64) -> Option<&Value> {
        let Value::List(items) = self else {
            return None;
        };
        let len = items.len() as i64;
        let index = if index < 0 { len + index } else { index };
        if index < 0 {
            return None;
        }
        items.get(index as usize)
    }

    /// 映射的键名列表（按键顺序）
    pub fn keys(&self) -> Option<Vec<String>> {
        match self {
            Value::Map(map) => Some(map.keys().map(Key::to_string).collect()),
            _ => None,
        }
    }

    /// 作为有符号整数读取
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// 作为浮点数读取
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// 作为文本读取
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// 作为映射读取
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// 作为序列读取
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// 作为时长读取
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// 渲染为 JSON 文本
    pub fn to_json(&self) -> String {
        // Value 的序列化不会失败：所有键都是整数或字符串
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// 时长的对外编码：整秒数
pub fn whole_seconds(duration: Duration) -> u64 {
    (duration.as_micros() / 1_000_000) as u64
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::UInt(n) => serializer.serialize_u64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Duration(d) => serializer.serialize_u64(whole_seconds(*d)),
            Value::Time(t) => serializer.collect_str(&t.to_rfc3339()),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::UInt(n),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_serializes_as_whole_seconds() {
        let almost = Value::Duration(Duration::from_micros(90_999_999));
        let exact = Value::Duration(Duration::from_micros(91_000_000));
        assert_eq!(almost.to_json(), "90");
        assert_eq!(exact.to_json(), "91");
    }

    #[test]
    fn test_integer_keys_become_object_keys() {
        let average = Value::map([(1i64, Value::Float(0.5)), (15i64, Value::Float(0.25))]);
        assert_eq!(average.to_json(), r#"{"1":0.5,"15":0.25}"#);
    }

    #[test]
    fn test_nested_durations_use_the_same_rule() {
        let uptime = Value::map([
            ("uptime", Value::Duration(Duration::from_millis(12_345))),
            ("idle", Value::Duration(Duration::from_millis(999))),
        ]);
        assert_eq!(uptime.to_json(), r#"{"idle":0,"uptime":12}"#);
    }

    #[test]
    fn test_negative_index_counts_from_end() {
        let list = Value::strings(["a", "b", "c"]);
        assert_eq!(list.index(0), Some(&Value::from("a")));
        assert_eq!(list.index(-1), Some(&Value::from("c")));
        assert_eq!(list.index(3), None);
        assert_eq!(list.index(-4), None);
    }

    #[test]
    fn test_keys_mix_integers_and_strings() {
        let map = Value::map([
            (Key::Int(0), Value::Int(1)),
            (Key::from("total"), Value::Int(2)),
        ]);
        assert_eq!(map.keys().unwrap(), vec!["0".to_string(), "total".to_string()]);
        assert!(Value::Int(3).keys().is_none());
    }

    #[test]
    fn test_large_unsigned_stays_unsigned() {
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::UInt(u64::MAX).to_json(), "18446744073709551615");
    }
}
