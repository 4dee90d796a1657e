//! 日志系统核心实现
//!
//! 该模块将所有日志状态封装到一个单独的 `LogCore` 结构体中，
//! 可以独立实例化用于测试。

use std::sync::RwLock;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::LogLevel;
use crate::{HostContext, LogContextProvider, LogOutput, StderrOutput};

/// 默认级别阈值
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warning;

/// 核心日志系统
///
/// # 线程安全性
///
/// 级别阈值是原子量；输出与上下文只在注册时写入，记录时只读。
pub struct LogCore {
    /// 级别阈值
    level: AtomicU8,
    /// 输出
    output: RwLock<&'static dyn LogOutput>,
    /// 上下文提供者
    context: RwLock<&'static dyn LogContextProvider>,
}

impl LogCore {
    /// 使用默认级别、标准错误输出和宿主上下文创建
    ///
    /// ```rust
    /// use klog::LogCore;
    ///
    /// static GLOBAL_LOG: LogCore = LogCore::default();
    /// let _ = &GLOBAL_LOG;
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub const fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, &StderrOutput, &HostContext)
    }

    /// 使用自定义级别、输出和上下文创建
    pub const fn new(
        level: LogLevel,
        output: &'static dyn LogOutput,
        context: &'static dyn LogContextProvider,
    ) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            output: RwLock::new(output),
            context: RwLock::new(context),
        }
    }

    /// 设置级别阈值
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// 当前级别阈值
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire))
    }

    /// 替换输出
    pub fn set_output(&self, output: &'static dyn LogOutput) {
        let mut slot = self.output.write().unwrap_or_else(|e| e.into_inner());
        *slot = output;
    }

    /// 替换上下文提供者
    pub fn set_context(&self, context: &'static dyn LogContextProvider) {
        let mut slot = self.context.write().unwrap_or_else(|e| e.into_inner());
        *slot = context;
    }

    /// 检查日志级别是否启用
    #[inline(always)]
    fn is_level_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level as u8 <= self.level.load(Ordering::Acquire)
    }
}

impl log::Log for LogCore {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_level_enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = LogLevel::from(record.level());
        if !self.is_level_enabled(level) {
            return;
        }

        let context = *self.context.read().unwrap_or_else(|e| e.into_inner());
        let line = format_log_entry(
            level,
            &context.timestamp(),
            context.pid(),
            record.target(),
            &record.args().to_string(),
        );

        let output = *self.output.read().unwrap_or_else(|e| e.into_inner());
        output.write_str(&line);
    }

    fn flush(&self) {}
}

/// 格式化日志条目（带 ANSI 颜色和上下文信息）
///
/// # 格式
/// ```text
/// <color_code>[LEVEL] [timestamp] [P<pid>] target: message<reset>
/// ```
pub fn format_log_entry(
    level: LogLevel,
    timestamp: &str,
    pid: u32,
    target: &str,
    message: &str,
) -> String {
    format!(
        "{}[{}] [{}] [P{}] {}: {}{}",
        level.color_code(),
        level.as_str(),
        timestamp,
        pid,
        target,
        message,
        level.reset_color_code()
    )
}
