//! procq 前端公共部分
//!
//! 命令行与 HTTP 两个二进制共享的配置、日志初始化与请求处理：
//!
//! - [`Config`] - 挂载点与日志级别（命令行参数，可由环境变量提供）
//! - [`cli`] - 单次查询的执行与诊断信息
//! - [`http`] - axum 路由

pub mod cli;
pub mod http;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use klog::LogLevel;
use procfs::{HostOps, ProcFs};

/// 两个前端共用的配置
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Mount point of the proc filesystem
    #[arg(long, env = "PROCQ_ROOT", default_value = procfs::DEFAULT_MOUNT)]
    pub root: PathBuf,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, env = "PROCQ_LOG", default_value = "warn")]
    pub log_level: LogLevel,
}

impl Config {
    /// 按配置的挂载点创建 procfs 上下文
    pub fn procfs(&self) -> Arc<ProcFs> {
        ProcFs::mounted_at(self.root.clone(), Arc::new(HostOps))
    }

    /// 安装日志后端
    pub fn init_logging(&self) {
        if klog::init(self.log_level).is_err() {
            // 已有全局 logger，只更新级别
            klog::set_global_level(self.log_level);
        }
        log::debug!("procfs mounted at {}", self.root.display());
    }
}
