//! 控制台日志后端
//!
//! 为 `log` 门面提供实现：库代码只使用 `log::debug!` 等宏，
//! 二进制在启动时调用 [`init`] 安装本后端。
//!
//! # 组件
//!
//! - [`LogLevel`] - 日志级别定义（Off 到 Trace）
//! - [`LogCore`] - 核心日志实现，带原子级别阈值
//! - [`format_log_entry`] - 统一的输出格式
//!
//! # 架构解耦
//!
//! 日志系统通过 trait 抽象与运行环境解耦：
//!
//! - **LogContextProvider**：提供时间戳、进程号
//! - **LogOutput**：提供输出能力（默认写标准错误）
//!
//! 测试可以通过 `register_*` 替换这两者。

mod level;
mod log_core;

#[cfg(test)]
mod tests;

pub use level::{LogLevel, ParseLevelError};
pub use log_core::{LogCore, format_log_entry};

// ========== Trait 定义 ==========

/// 日志上下文提供者 trait
pub trait LogContextProvider: Send + Sync {
    /// 获取当前时间戳
    fn timestamp(&self) -> String;
    /// 获取当前进程号
    fn pid(&self) -> u32;
}

/// 日志输出 trait
pub trait LogOutput: Send + Sync {
    /// 输出一行（不含换行符）
    fn write_str(&self, s: &str);
}

/// 宿主上下文：本地时间与自身进程号
pub struct HostContext;

impl LogContextProvider for HostContext {
    fn timestamp(&self) -> String {
        chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f")
            .to_string()
    }

    fn pid(&self) -> u32 {
        std::process::id()
    }
}

/// 标准错误输出
pub struct StderrOutput;

impl LogOutput for StderrOutput {
    fn write_str(&self, s: &str) {
        use std::io::Write;

        // 日志输出失败时无处可报，直接丢弃
        let _ = writeln!(std::io::stderr().lock(), "{}", s);
    }
}

// ========== 全局单例 ==========

/// 全局日志系统实例
static GLOBAL_LOG: LogCore = LogCore::default();

// ========== 公共 API ==========

/// 安装全局日志后端并设置级别阈值
///
/// 只能成功一次；重复调用返回 `log` 的 `SetLoggerError`，但级别仍会更新。
pub fn init(level: LogLevel) -> Result<(), log::SetLoggerError> {
    set_global_level(level);
    log::set_logger(&GLOBAL_LOG)
}

/// 注册日志上下文提供者
pub fn register_context_provider(provider: &'static dyn LogContextProvider) {
    GLOBAL_LOG.set_context(provider);
}

/// 注册日志输出
pub fn register_log_output(output: &'static dyn LogOutput) {
    GLOBAL_LOG.set_output(output);
}

/// 设置全局日志级别阈值
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG.set_level(level);
    log::set_max_level(level.to_level_filter());
}

/// 获取当前全局日志级别
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG.level()
}
