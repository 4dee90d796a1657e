//! `/proc/uptime`

use super::{DecodeError, DecodeResult, seconds};
use crate::value::Value;

/// 解码：系统运行时长与空闲时长
pub fn decode(content: &str) -> DecodeResult {
    let mut fields = content.split_whitespace();
    let (Some(uptime), Some(idle)) = (fields.next(), fields.next()) else {
        return Err(DecodeError::new("expected two fields"));
    };
    Ok(Value::map([
        ("uptime", Value::Duration(seconds(uptime)?)),
        ("idle", Value::Duration(seconds(idle)?)),
    ]))
}
