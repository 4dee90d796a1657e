//! 解码器注册表
//!
//! 约定式查找：去掉挂载点前缀，进程文件再去掉开头的进程号段，剩余目录段以 `.`
//! 连接在作用域前缀之后构成命名空间，文件名作为叶子名：
//!
//! | 文件                          | 命名空间        | 叶子名       |
//! |-------------------------------|-----------------|--------------|
//! | `/proc/cpuinfo`               | `proc`          | `cpuinfo`    |
//! | `/proc/fs/nfsd/pool_stats`    | `proc.fs.nfsd`  | `pool_stats` |
//! | `/proc/42/status`             | `process`       | `status`     |
//! | `/proc/42/net/tcp`            | `process.net`   | `tcp`        |
//!
//! 查找对未知组合永远不会失败：找不到解码器就按原始文本处理。
//! 注册表在启动时构建一次，之后只读。

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::decoders::{self, DecodeError};
use crate::node::Scope;
use crate::value::Value;

/// 解码函数：原始文本 → 结构化值
pub type Decoder = fn(&str) -> Result<Value, DecodeError>;

/// 系统级文件的命名空间前缀
pub const SYSTEM_NAMESPACE: &str = "proc";
/// 进程级文件的命名空间前缀
pub const PROCESS_NAMESPACE: &str = "process";

lazy_static! {
    /// 内置解码器注册表
    pub static ref BUILTIN_DECODERS: Arc<DecoderRegistry> = Arc::new(DecoderRegistry::builtin());
}

/// 解码器命名空间
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// 以点分名称创建
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// 点分名称
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 由文件绝对路径推导 (命名空间, 叶子名)
    ///
    /// 文件不在挂载点之下时返回 `None`。
    pub fn derive(mount: &Path, file: &Path, scope: Scope) -> Option<(Namespace, String)> {
        let relative = file.strip_prefix(mount).ok()?;
        let mut parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let leaf = parts.pop()?;

        let prefix = match scope {
            Scope::Process(_) => {
                if !parts.is_empty() {
                    parts.remove(0);
                }
                PROCESS_NAMESPACE
            }
            Scope::Root | Scope::System => SYSTEM_NAMESPACE,
        };

        let mut name = String::from(prefix);
        for part in parts {
            name.push('.');
            name.push_str(&part);
        }
        Some((Namespace(name), leaf))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 解码器注册表
#[derive(Default, Clone)]
pub struct DecoderRegistry {
    decoders: BTreeMap<(Namespace, String), Decoder>,
}

impl DecoderRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含全部内置解码器的注册表
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        decoders::register_builtin(&mut registry);
        registry
    }

    /// 注册解码器（同名注册会覆盖旧值）
    pub fn register(&mut self, namespace: &str, leaf: &str, decoder: Decoder) -> &mut Self {
        self.decoders
            .insert((Namespace::new(namespace), leaf.to_string()), decoder);
        self
    }

    /// 按 (命名空间, 叶子名) 查找
    pub fn get(&self, namespace: &Namespace, leaf: &str) -> Option<Decoder> {
        self.decoders
            .get(&(namespace.clone(), leaf.to_string()))
            .copied()
    }

    /// 按文件路径查找
    pub fn lookup(&self, mount: &Path, file: &Path, scope: Scope) -> Option<Decoder> {
        let (namespace, leaf) = Namespace::derive(mount, file, scope)?;
        let decoder = self.get(&namespace, &leaf);
        log::debug!(
            "decoder lookup {}:{} -> {}",
            namespace,
            leaf,
            if decoder.is_some() { "hit" } else { "raw" }
        );
        decoder
    }

    /// 枚举已注册的 (命名空间, 叶子名)
    pub fn entries(&self) -> impl Iterator<Item = (&Namespace, &str)> + '_ {
        self.decoders.keys().map(|(ns, leaf)| (ns, leaf.as_str()))
    }

    /// 已注册解码器数量
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries().map(|(ns, leaf)| format!("{}:{}", ns, leaf)))
            .finish()
    }
}
