//! `/proc/<pid>/smaps`
//!
//! 只收集特殊映射（`[heap]`、`[stack]`、`[vdso]`、`[vsyscall]`），其余映射的统计行被跳过。

use lazy_static::lazy_static;
use regex::Regex;

use super::super::{DecodeError, DecodeResult, hex, kb, number, split_pair};
use crate::value::{Key, Map, Value};

/// 被收集的特殊映射名
const TRACKED: &[&str] = &["heap", "stack", "vdso", "vsyscall"];

lazy_static! {
    static ref SECTION: Regex = Regex::new(
        r"^(?P<start>[0-9a-f]+)-(?P<end>[0-9a-f]+) (?P<perms>[r-][w-][x-][sp]) (?P<offset>[0-9a-f]+) (?P<major>[0-9a-f]+):(?P<minor>[0-9a-f]+) (?P<inode>\d+)(?:\s+(?P<pathname>.*))?$"
    )
    .expect("smaps section pattern");
}

/// 解码
pub fn decode(content: &str) -> DecodeResult {
    let mut result = Map::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        if let Some(caps) = SECTION.captures(line) {
            let pathname = caps.name("pathname").map_or("", |m| m.as_str()).trim();
            let name = pathname
                .strip_prefix('[')
                .and_then(|p| p.strip_suffix(']'))
                .filter(|p| TRACKED.contains(p));
            current = name.map(str::to_string);

            if let Some(name) = name {
                let mut section = Map::new();
                section.insert(Key::from("start"), hex(&caps["start"])?);
                section.insert(Key::from("end"), hex(&caps["end"])?);
                section.insert(Key::from("offset"), hex(&caps["offset"])?);
                section.insert(Key::from("perms"), Value::from(&caps["perms"]));
                section.insert(
                    Key::from("device"),
                    Value::map([
                        ("major", hex(&caps["major"])?),
                        ("minor", hex(&caps["minor"])?),
                    ]),
                );
                section.insert(Key::from("inode"), number(&caps["inode"])?);
                result.insert(Key::from(name), Value::Map(section));
            }
            continue;
        }

        let Some(name) = &current else {
            continue;
        };
        let (key, value) = split_pair(line, ":")?;
        let value = value.trim();
        let value = if value.ends_with("kB") {
            Value::Int(kb(value)?)
        } else {
            number(value).unwrap_or_else(|_| Value::from(value))
        };
        if let Some(Value::Map(section)) = result.get_mut(&Key::from(name.as_str())) {
            section.insert(Key::from(key.trim()), value);
        } else {
            return Err(DecodeError::new(format!("orphan smaps line {:?}", line)));
        }
    }

    Ok(Value::Map(result))
}
