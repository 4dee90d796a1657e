//! `/proc/<pid>/mounts`

use super::super::{DecodeError, DecodeResult, int};
use crate::value::{Key, Map, Value};

/// 解码：按挂载点索引的设备、类型、选项、dump 与 passno
///
/// 无值选项（如 `rw`）映射为 `true`，`key=value` 选项映射为文本。
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [device, mount_point, fs_type, options, dump, passno] = fields.as_slice() else {
            return Err(DecodeError::new(format!("malformed mount line {:?}", line)));
        };
        let options: Map = options
            .split(',')
            .map(|option| match option.split_once('=') {
                Some((name, value)) => (Key::from(name), Value::from(value)),
                None => (Key::from(option), Value::Bool(true)),
            })
            .collect();
        result.insert(
            Key::from(*mount_point),
            Value::map([
                ("device", Value::from(*device)),
                ("type", Value::from(*fs_type)),
                ("options", Value::Map(options)),
                ("dump", Value::Int(int(dump)?)),
                ("passno", Value::Int(int(passno)?)),
            ]),
        );
    }
    Ok(Value::Map(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::samples;

    #[test]
    fn test_decode() {
        let value = decode(samples::MOUNTS).unwrap();
        assert_eq!(value.keys().unwrap(), vec!["/", "/proc", "/sys"]);
        let root = value.get(&Key::from("/")).unwrap();
        assert_eq!(root.get(&Key::from("device")), Some(&Value::from("/dev/sda1")));
        assert_eq!(root.get(&Key::from("passno")), Some(&Value::Int(1)));
        let options = root.get(&Key::from("options")).unwrap();
        assert_eq!(options.get(&Key::from("rw")), Some(&Value::Bool(true)));
        assert_eq!(
            options.get(&Key::from("errors")),
            Some(&Value::from("remount-ro"))
        );
    }

    #[test]
    fn test_short_line() {
        assert!(decode("proc /proc proc rw\n").is_err());
    }
}
