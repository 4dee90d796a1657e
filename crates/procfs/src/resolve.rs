//! 路径解析器
//!
//! 把查询路径切分为 token，对每个 token 依次尝试 [`RESOLUTION_ORDER`] 中的策略，
//! 第一个命中者胜出：
//!
//! 1. 首个 token 为纯数字且当前节点是根目录：从进程集合中选取该进程
//! 2. 属性访问，字面 token
//! 3. 属性访问，token 解析为整数
//! 4. 键/下标访问，字面 token
//! 5. 键/下标访问，token 解析为整数
//!
//! 全部未命中时返回 `PathNotFound`，携带完整的原始路径。
//! 每次命中后，文件节点都会先物化再处理下一个 token。

use std::sync::Arc;

use crate::error::{ProcError, Result};
use crate::node::{Access, Node};
use crate::path::{is_pid_token, tokenize};
use crate::proc::ProcFs;
use crate::value::Key;

/// token 的解释方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyForm {
    /// 原样作为字符串键
    Literal,
    /// 解析为整数键
    Integer,
}

/// 单个解析策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    /// 访问方式
    pub access: Access,
    /// token 的解释方式
    pub form: KeyForm,
}

/// 策略的尝试顺序
pub const RESOLUTION_ORDER: [Strategy; 4] = [
    Strategy {
        access: Access::Attribute,
        form: KeyForm::Literal,
    },
    Strategy {
        access: Access::Attribute,
        form: KeyForm::Integer,
    },
    Strategy {
        access: Access::Item,
        form: KeyForm::Literal,
    },
    Strategy {
        access: Access::Item,
        form: KeyForm::Integer,
    },
];

impl Strategy {
    /// 对节点应用本策略
    ///
    /// `Ok(None)` 表示未命中（token 不是整数、键不存在、容器类型不对、
    /// 查找结果为“找不到”），其余错误对解析是终止性的。
    pub fn apply(&self, node: &Node, token: &str) -> Result<Option<Node>> {
        let key = match self.form {
            KeyForm::Literal => Key::from(token),
            KeyForm::Integer => match token.parse::<i64>() {
                Ok(n) => Key::Int(n),
                Err(_) => return Ok(None),
            },
        };
        match node.access(self.access, &key) {
            Ok(hit) => Ok(hit),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// 从挂载点根目录解析路径
pub fn resolve(fs: &Arc<ProcFs>, path: &str) -> Result<Node> {
    resolve_from(fs, Node::Directory(fs.root()?), path)
}

/// 从给定节点解析路径，空路径原样返回该节点
pub fn resolve_from(fs: &Arc<ProcFs>, root: Node, path: &str) -> Result<Node> {
    let mut node = root;

    for (index, token) in tokenize(path).into_iter().enumerate() {
        if index == 0 && is_pid_token(token) && node.is_root() {
            let pid = token
                .parse::<u32>()
                .map_err(|_| ProcError::UnknownProcess(token.to_string()))?;
            node = Node::Process(fs.processes().get(pid)?);
            continue;
        }

        let mut hit = None;
        for strategy in RESOLUTION_ORDER {
            if let Some(next) = strategy.apply(&node, token)? {
                hit = Some(next);
                break;
            }
        }
        let Some(next) = hit else {
            log::debug!("no strategy resolved {:?} in {}", token, path);
            return Err(ProcError::PathNotFound(path.to_string()));
        };
        node = if next.is_materializer() {
            next.materialize()?
        } else {
            next
        };
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn fs() -> Arc<ProcFs> {
        ProcFs::mounted_at(
            "/nonexistent-procq-mount",
            Arc::new(crate::ops::FixedOps::new(1, 0)),
        )
    }

    fn loadavg() -> Node {
        Node::Value(Value::map([
            (
                Key::from("average"),
                Value::map([
                    (1i64, Value::Float(0.5)),
                    (5i64, Value::Float(0.25)),
                    (15i64, Value::Float(0.125)),
                ]),
            ),
            (Key::from("last_pid"), Value::Int(4242)),
        ]))
    }

    #[test]
    fn test_order_is_attribute_then_item() {
        assert_eq!(RESOLUTION_ORDER[0].access, Access::Attribute);
        assert_eq!(RESOLUTION_ORDER[0].form, KeyForm::Literal);
        assert_eq!(RESOLUTION_ORDER[1].form, KeyForm::Integer);
        assert_eq!(RESOLUTION_ORDER[2].access, Access::Item);
        assert_eq!(RESOLUTION_ORDER[3].form, KeyForm::Integer);
    }

    #[test]
    fn test_integer_key_resolves_through_integer_strategy() {
        let node = resolve_from(&fs(), loadavg(), "average/15").unwrap();
        assert!(matches!(node, Node::Value(Value::Float(f)) if f == 0.125));
    }

    #[test]
    fn test_empty_path_returns_root_unchanged() {
        let node = resolve_from(&fs(), loadavg(), "").unwrap();
        assert!(matches!(node, Node::Value(Value::Map(_))));
        let node = resolve_from(&fs(), loadavg(), "///").unwrap();
        assert!(matches!(node, Node::Value(Value::Map(_))));
    }

    #[test]
    fn test_miss_reports_full_path() {
        let err = resolve_from(&fs(), loadavg(), "average/16").unwrap_err();
        assert!(matches!(err, ProcError::PathNotFound(ref p) if p == "average/16"));
    }

    #[test]
    fn test_list_index_requires_item_access() {
        let list = Node::Value(Value::strings(["init", "--system"]));
        let node = resolve_from(&fs(), list, "-1").unwrap();
        assert!(matches!(node, Node::Value(Value::Str(ref s)) if s == "--system"));
    }

    #[test]
    fn test_non_integer_token_is_a_miss() {
        let strategy = RESOLUTION_ORDER[1];
        assert!(strategy.apply(&loadavg(), "average").unwrap().is_none());
    }

    #[test]
    fn test_numeric_token_on_value_is_not_a_process() {
        let node = Node::Value(Value::map([(1i64, Value::from("first"))]));
        let node = resolve_from(&fs(), node, "1").unwrap();
        assert!(matches!(node, Node::Value(Value::Str(ref s)) if s == "first"));
    }
}
