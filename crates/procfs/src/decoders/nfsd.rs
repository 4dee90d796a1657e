//! `/proc/fs/nfsd` 下的文件

use super::{DecodeError, DecodeResult, number, zip_keys};
use crate::value::Value;

/// 解码 `pool_stats`：表头列名（`-` 换成 `_`）到第一个线程池的数值
pub fn decode_pool_stats(content: &str) -> DecodeResult {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());
    let (Some(header), Some(values)) = (lines.next(), lines.next()) else {
        return Err(DecodeError::new("expected a header and a value line"));
    };
    let keys: Vec<String> = header
        .trim_start_matches('#')
        .split_whitespace()
        .map(|k| k.replace('-', "_"))
        .collect();
    let values = values
        .split_whitespace()
        .map(number)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Map(zip_keys(&keys, values)))
}
