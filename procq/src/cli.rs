//! 单次查询

use std::sync::Arc;

use procfs::{Mode, ProcError, ProcFs};

/// 查询失败：退出码与诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// 进程退出码
    pub code: u8,
    /// 写到标准错误的诊断信息
    pub message: String,
}

/// 执行一次查询，成功时返回 JSON 文本
pub fn execute(fs: &Arc<ProcFs>, path: &str, list: bool) -> Result<String, Failure> {
    let mode = if list { Mode::List } else { Mode::Value };
    procfs::find(fs, path, mode).map_err(|e| Failure {
        code: e.exit_code(),
        message: diagnostic(path, &e),
    })
}

/// 诊断信息总是带上请求的路径
pub fn diagnostic(path: &str, error: &ProcError) -> String {
    match error {
        ProcError::PathNotFound(_) => format!("couldn't find path {}", path),
        ProcError::NotListable(_) => format!("{} is not a list!", path),
        other => format!("{}: {}", path, other),
    }
}
