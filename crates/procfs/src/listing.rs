//! 列表投影
//!
//! 把解析结果转换为有序的子项名集合，用于“发现”模式。

use crate::error::{ProcError, Result};
use crate::node::Node;
use crate::value::Value;

/// 列出节点的子项名
///
/// - 映射：键名（按键顺序）
/// - 目录/进程：排序后的直接子项名
/// - 其他：`NotListable`
pub fn project(node: &Node, path: &str) -> Result<Vec<String>> {
    match node {
        Node::Directory(dir) => dir.entries(),
        Node::Process(process) => process.directory().entries(),
        Node::File(file) => project_value(&file.materialize()?, path),
        Node::Value(value) => project_value(value, path),
    }
}

fn project_value(value: &Value, path: &str) -> Result<Vec<String>> {
    value
        .keys()
        .ok_or_else(|| ProcError::NotListable(path.to_string()))
}

/// 取值模式下的终值：目录/进程替换为其子项名列表
pub fn into_value(node: Node) -> Result<Value> {
    match node {
        Node::Directory(dir) => Ok(Value::strings(dir.entries()?)),
        Node::Process(process) => Ok(Value::strings(process.directory().entries()?)),
        Node::File(file) => file.materialize(),
        Node::Value(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_lists_keys() {
        let node = Node::Value(Value::map([("b", Value::Int(1)), ("a", Value::Int(2))]));
        assert_eq!(project(&node, "x").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_scalar_is_not_listable() {
        let node = Node::Value(Value::Float(0.05));
        let err = project(&node, "loadavg/average/15").unwrap_err();
        assert!(matches!(err, ProcError::NotListable(ref p) if p == "loadavg/average/15"));
    }

    #[test]
    fn test_list_is_not_listable() {
        let node = Node::Value(Value::strings(["a"]));
        assert!(project(&node, "1/cmdline").is_err());
    }

    #[test]
    fn test_value_passes_through() {
        let value = into_value(Node::Value(Value::Int(7))).unwrap();
        assert_eq!(value, Value::Int(7));
    }
}
