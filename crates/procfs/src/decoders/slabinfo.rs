//! `/proc/slabinfo`

use super::{DecodeError, DecodeResult, number};
use crate::value::{Key, Map, Value};

/// 各数值列在行内的位置与名字（跳过 `: tunables` 与 `: slabdata` 标记）
const COLUMNS: &[(usize, &str)] = &[
    (1, "active_objs"),
    (2, "num_objs"),
    (3, "objsize"),
    (4, "objperslab"),
    (5, "pagesperslab"),
    (8, "limit"),
    (9, "batchcount"),
    (10, "sharedfactor"),
    (13, "active_slabs"),
    (14, "num_slabs"),
    (15, "sharedavail"),
];

/// 解码：按 slab 名索引
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        if line.starts_with("slabinfo") || line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 16 {
            return Err(DecodeError::new(format!("malformed slabinfo line {:?}", line)));
        }
        let mut slab = Map::new();
        for (index, name) in COLUMNS {
            slab.insert(Key::from(*name), number(fields[*index])?);
        }
        result.insert(Key::from(fields[0]), Value::Map(slab));
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::SLABINFO).unwrap();
        let dentry = value.get(&Key::from("dentry")).unwrap();
        assert_eq!(dentry.get(&Key::from("num_objs")), Some(&Value::Int(41139)));
        assert_eq!(dentry.get(&Key::from("active_slabs")), Some(&Value::Int(1959)));
        assert_eq!(dentry.get(&Key::from("sharedavail")), Some(&Value::Int(0)));
    }
}
