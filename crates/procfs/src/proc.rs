//! ProcFs 上下文
//!
//! 保存挂载点、宿主操作与解码器注册表。上下文本身不可变，可以在线程间共享；
//! 节点则在每次解析时按需创建，互不共享。

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::node::{DirectoryNode, Scope};
use crate::ops::{HostOps, ProcOps};
use crate::process::{ProcessNode, Processes};
use crate::registry::{BUILTIN_DECODERS, DecoderRegistry};

/// 默认挂载点
pub const DEFAULT_MOUNT: &str = "/proc";

/// procfs 上下文（提供 `/proc` 目录树的入口）
pub struct ProcFs {
    mount: PathBuf,
    ops: Arc<dyn ProcOps>,
    registry: Arc<DecoderRegistry>,
}

impl ProcFs {
    /// 以 `/proc`、宿主操作和内置解码器创建
    pub fn new() -> Arc<Self> {
        Self::mounted_at(DEFAULT_MOUNT, Arc::new(HostOps))
    }

    /// 以指定挂载点和宿主操作创建，使用内置解码器
    pub fn mounted_at(mount: impl Into<PathBuf>, ops: Arc<dyn ProcOps>) -> Arc<Self> {
        Self::with_registry(mount, ops, BUILTIN_DECODERS.clone())
    }

    /// 完全自定义的构造
    pub fn with_registry(
        mount: impl Into<PathBuf>,
        ops: Arc<dyn ProcOps>,
        registry: Arc<DecoderRegistry>,
    ) -> Arc<Self> {
        Arc::new(Self {
            mount: mount.into(),
            ops,
            registry,
        })
    }

    /// 挂载点
    pub fn mount(&self) -> &Path {
        &self.mount
    }

    /// 宿主操作
    pub fn ops(&self) -> &dyn ProcOps {
        self.ops.as_ref()
    }

    /// 解码器注册表
    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// 根目录节点
    pub fn root(self: &Arc<Self>) -> Result<DirectoryNode> {
        DirectoryNode::open(self, self.mount.clone(), Scope::Root)
    }

    /// 进程集合（每次调用都是一个新的、未过滤的集合）
    pub fn processes(self: &Arc<Self>) -> Processes {
        Processes::new(self)
    }

    /// 指定进程
    pub fn process(self: &Arc<Self>, pid: u32) -> Result<ProcessNode> {
        ProcessNode::open(self, pid)
    }

    /// 调用方自身的进程
    pub fn current_process(self: &Arc<Self>) -> Result<ProcessNode> {
        ProcessNode::open(self, self.ops.current_pid())
    }
}

impl fmt::Debug for ProcFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcFs")
            .field("mount", &self.mount)
            .field("decoders", &self.registry.len())
            .finish()
    }
}
