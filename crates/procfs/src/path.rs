//! 路径切分与规范化
//!
//! - 查询路径按 `/` 切分为非空 token，不做转义
//! - 首个 token 全部由十进制数字组成时视为进程号
//! - 链接目标按所在目录规范化（处理 `.` 和 `..`）后再判断是否仍在挂载点之下

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// 计算链接目标的规范化绝对路径
///
/// 相对目标以链接所在目录 `dir` 为基准；`.` 被丢弃，`..` 弹出上一级且不会越过 `/`。
/// 纯文本运算，不访问文件系统，因此悬空链接也能判断是否仍在挂载点之下。
pub fn link_target(dir: &Path, target: &Path) -> PathBuf {
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        dir.join(target)
    };

    let mut stack: Vec<&OsStr> = Vec::new();
    for component in joined.components() {
        match component {
            Component::Normal(name) => stack.push(name),
            Component::ParentDir => {
                stack.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut normalized = PathBuf::from("/");
    normalized.extend(stack);
    normalized
}

/// 将查询路径切分为非空 token
pub fn tokenize(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// token 是否全部由十进制数字组成
pub fn is_pid_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// 是否为单个普通目录项名（排除 `.`、`..` 和含 `/` 的名字）
pub fn is_entry_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}
