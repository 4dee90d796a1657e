//! 宿主运行时操作
//!
//! procfs 需要的“环境状态”（当前进程号、有效 uid、账户数据库、时钟）都通过
//! [`ProcOps`] 显式传入，而不是在解析过程中隐式读取进程全局状态，
//! 这样测试可以用 [`FixedOps`] 替换宿主实现。

use std::collections::HashMap;
use std::ffi::CString;
use std::ptr;

use chrono::{DateTime, Local};

/// procfs 运行时操作
pub trait ProcOps: Send + Sync {
    // ========== 任务上下文 ==========

    /// 获取调用方自身的进程号（用于 `self` 链接）
    fn current_pid(&self) -> u32;

    /// 获取调用方的有效 uid（进程过滤的默认值）
    fn effective_uid(&self) -> u32;

    // ========== 账户数据库 ==========

    /// 将用户名转换为 uid
    fn user_uid(&self, name: &str) -> Option<u32>;

    // ========== 时间 ==========

    /// 获取当前时间
    fn now(&self) -> DateTime<Local>;
}

/// 基于 libc 的宿主实现
#[derive(Debug, Default, Clone, Copy)]
pub struct HostOps;

/// `getpwnam_r` 缓冲区上限
const MAX_PASSWD_BUFFER: usize = 1 << 20;

impl ProcOps for HostOps {
    fn current_pid(&self) -> u32 {
        std::process::id()
    }

    fn effective_uid(&self) -> u32 {
        // SAFETY: geteuid 总是成功且无副作用
        unsafe { libc::geteuid() }
    }

    fn user_uid(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        // SAFETY: passwd 是纯 C 结构体，全零是合法的初始值
        let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = ptr::null_mut();
        let mut buf: Vec<libc::c_char> = vec![0; 1024];

        loop {
            // SAFETY: 所有指针在调用期间有效，buf 长度与传入的长度一致
            let rc = unsafe {
                libc::getpwnam_r(
                    name.as_ptr(),
                    &mut entry,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buf.len() < MAX_PASSWD_BUFFER {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 {
                log::debug!("getpwnam_r failed with {}", rc);
                return None;
            }
            break;
        }

        if result.is_null() {
            None
        } else {
            Some(entry.pw_uid)
        }
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// 固定值实现，用于测试或以“他人视角”查询
#[derive(Debug, Clone)]
pub struct FixedOps {
    pid: u32,
    euid: u32,
    users: HashMap<String, u32>,
    now: Option<DateTime<Local>>,
}

impl FixedOps {
    /// 以给定进程号和有效 uid 创建
    pub fn new(pid: u32, euid: u32) -> Self {
        Self {
            pid,
            euid,
            users: HashMap::new(),
            now: None,
        }
    }

    /// 添加一个账户
    pub fn with_user(mut self, name: &str, uid: u32) -> Self {
        self.users.insert(name.to_string(), uid);
        self
    }

    /// 固定“当前时间”（不设置时使用真实时钟）
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = Some(now);
        self
    }
}

impl ProcOps for FixedOps {
    fn current_pid(&self) -> u32 {
        self.pid
    }

    fn effective_uid(&self) -> u32 {
        self.euid
    }

    fn user_uid(&self, name: &str) -> Option<u32> {
        self.users.get(name).copied()
    }

    fn now(&self) -> DateTime<Local> {
        self.now.unwrap_or_else(Local::now)
    }
}
