//! 符号链接解析规则
//!
//! 链接不会成为节点：查找命中符号链接时，按下面的顺序求值：
//!
//! 1. 规则表（[`LINK_RULES`]）中与作用域和名字匹配的条目
//! 2. 进程子树中的链接（`exe`、`cwd`、`fd/N`、`ns/*`）求值为目标文本
//! 3. 系统级链接按所在目录规范化目标；仍在挂载点之下的从根目录重新遍历，
//!    否则求值为目标文本

use std::fs;
use std::path::{Component, Path};

use crate::error::{ProcError, Result};
use crate::node::{DirectoryNode, Node, Scope, display};
use crate::path::link_target;
use crate::process::ProcessNode;
use crate::value::Value;

/// 单次查找最多跟随的链接层数
pub const MAX_SYMLINK_DEPTH: usize = 8;

/// 链接规则：在给定作用域下按名字匹配，忽略链接本身的目标文本
pub struct LinkRule {
    /// 生效的作用域
    pub scope: Scope,
    /// 链接名
    pub name: &'static str,
    /// 求值函数
    pub resolve: fn(&DirectoryNode) -> Result<Node>,
}

/// 内置规则表
pub static LINK_RULES: &[LinkRule] = &[LinkRule {
    scope: Scope::Root,
    name: "self",
    resolve: current_process,
}];

fn current_process(dir: &DirectoryNode) -> Result<Node> {
    let fs = dir.fs();
    ProcessNode::open(fs, fs.ops().current_pid()).map(Node::Process)
}

/// 对 `dir` 下名为 `name` 的符号链接求值
pub(crate) fn follow(dir: &DirectoryNode, name: &str, path: &Path, depth: usize) -> Result<Node> {
    if depth >= MAX_SYMLINK_DEPTH {
        return Err(ProcError::TooManySymlinks(display(path)));
    }

    if let Some(rule) = LINK_RULES
        .iter()
        .find(|rule| rule.scope == dir.scope() && rule.name == name)
    {
        log::debug!("link {} matched rule table", display(path));
        return (rule.resolve)(dir);
    }

    let target = fs::read_link(path).map_err(|e| ProcError::io(display(path), e))?;
    let text = target.to_string_lossy().into_owned();

    if let Scope::Process(_) = dir.scope() {
        return Ok(Node::Value(Value::Str(text)));
    }

    let normalized = link_target(dir.path(), &target);
    let mount = dir.fs().mount();

    match normalized.strip_prefix(mount) {
        Ok(relative) => {
            log::debug!("link {} -> {} (inside mount)", display(path), text);
            walk_from_root(dir, relative, &text, depth + 1)
        }
        Err(_) => {
            log::debug!("link {} -> {} (outside mount)", display(path), text);
            Ok(Node::Value(Value::Str(text)))
        }
    }
}

fn walk_from_root(dir: &DirectoryNode, relative: &Path, target: &str, depth: usize) -> Result<Node> {
    let mut node = Node::Directory(dir.fs().root()?);

    for component in relative.components() {
        let Component::Normal(name) = component else {
            continue;
        };
        let name = name.to_string_lossy();
        let current = match &node {
            Node::Directory(d) => d,
            Node::Process(p) => p.directory(),
            _ => return Err(ProcError::NotADirectory(target.to_string())),
        };
        node = current
            .lookup_at_depth(&name, depth)?
            .ok_or_else(|| ProcError::PathNotFound(target.to_string()))?;
    }

    Ok(node)
}
