//! procfs 错误类型
//!
//! 所有错误对当前一次解析都是终止性的：核心层不做本地恢复或重试。
//! 前端通过 [`ProcError::exit_code()`] 把错误映射为进程退出码。

use std::io;

use thiserror::Error;

/// procfs 错误类型
#[derive(Debug, Error)]
pub enum ProcError {
    // 路径相关
    /// 没有任何解析策略能解析某个路径段，或目标路径不存在
    #[error("couldn't find path {0}")]
    PathNotFound(String),
    /// 构造目录节点时路径不是目录
    #[error("{0} is not a directory")]
    NotADirectory(String),
    /// 构造文件节点时路径不是普通文件
    #[error("{0} is not a file")]
    NotAFile(String),
    /// 符号链接层级过多
    #[error("too many levels of symbolic links at {0}")]
    TooManySymlinks(String),

    // 进程相关
    /// 进程号不对应任何存活进程
    #[error("unknown process {0}")]
    UnknownProcess(String),
    /// 父进程号为 0
    #[error("process {0} has no parent process")]
    NoParentProcess(u32),

    // 列表/过滤相关
    /// 对标量请求列表
    #[error("{0} is not a list!")]
    NotListable(String),
    /// 用户名无法转换为 uid
    #[error("unknown account {0}")]
    AccountLookupFailed(String),
    /// 命令行过滤表达式无法编译
    #[error("invalid command line pattern {pattern}: {source}")]
    InvalidPattern {
        /// 原始表达式
        pattern: String,
        /// 编译错误
        #[source]
        source: regex::Error,
    },

    // 内容相关
    /// 解码器无法解析文件内容
    #[error("failed to decode {path}: {reason}")]
    Malformed {
        /// 文件绝对路径
        path: String,
        /// 解码器给出的原因
        reason: String,
    },
    /// 底层读取失败
    #[error("I/O error on {path}: {source}")]
    Io {
        /// 出错的绝对路径
        path: String,
        /// 原始错误
        #[source]
        source: io::Error,
    },
}

/// procfs 结果类型
pub type Result<T> = core::result::Result<T, ProcError>;

impl ProcError {
    /// 转换为命令行退出码
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcError::PathNotFound(_) => 1,
            ProcError::NotListable(_) => 2,
            _ => 3,
        }
    }

    /// 是否属于“找不到”一类错误（解析器把它们视为策略未命中）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ProcError::PathNotFound(_) | ProcError::NotADirectory(_) | ProcError::NotAFile(_)
        )
    }

    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return ProcError::PathNotFound(path.into());
        }
        ProcError::Io {
            path: path.into(),
            source,
        }
    }
}
