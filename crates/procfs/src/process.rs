//! 进程节点与进程集合
//!
//! [`ProcessNode`] 是以进程号为根的目录，附带按需计算的派生属性：
//! `id`、`parent`、`started_at`、`uptime`。
//!
//! [`Processes`] 是对所有存活进程的可链式过滤视图。过滤操作会覆盖实例记住的集合，
//! 之后对同一实例的 `all`/`len`/`nth` 都只看到过滤后的结果。

use std::fmt;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use bitflags::bitflags;
use chrono::{DateTime, Local};
use regex::Regex;

use crate::decoders::process::{cmdline, status};
use crate::error::{ProcError, Result};
use crate::node::{DirectoryNode, FileNode, Node, Scope, display};
use crate::path::is_pid_token;
use crate::proc::ProcFs;
use crate::registry::Decoder;
use crate::value::{Key, Value};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// 参与 uid 过滤的 status 字段
    pub struct UidMatch: u8 {
        /// 真实 uid
        const REAL      = 1 << 0;
        /// 有效 uid
        const EFFECTIVE = 1 << 1;
        /// 保存的 set-uid
        const SAVED_SET = 1 << 2;
        /// 文件系统 uid
        const FS        = 1 << 3;
    }
}

impl UidMatch {
    fn keys(self) -> impl Iterator<Item = &'static str> {
        [
            (UidMatch::REAL, "real"),
            (UidMatch::EFFECTIVE, "effective"),
            (UidMatch::SAVED_SET, "saved_set"),
            (UidMatch::FS, "fs"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, key)| key)
    }
}

/// 进程节点
#[derive(Clone)]
pub struct ProcessNode {
    pid: u32,
    dir: DirectoryNode,
}

impl ProcessNode {
    /// 打开进程节点，进程目录不存在时返回 `UnknownProcess`
    pub fn open(fs: &Arc<ProcFs>, pid: u32) -> Result<Self> {
        let path = fs.mount().join(pid.to_string());
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(Self {
                pid,
                dir: DirectoryNode::from_parts(fs.clone(), path, Scope::Process(pid)),
            }),
            _ => Err(ProcError::UnknownProcess(pid.to_string())),
        }
    }

    /// 进程号
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// 进程目录
    pub fn directory(&self) -> &DirectoryNode {
        &self.dir
    }

    fn read(&self, leaf: &str, decoder: Decoder) -> Result<Value> {
        FileNode::open(self.dir.path().join(leaf), Some(decoder))?.materialize()
    }

    /// 解码后的 `status`
    pub fn status(&self) -> Result<Value> {
        self.read("status", status::decode)
    }

    /// 参数向量
    pub fn cmdline(&self) -> Result<Vec<String>> {
        let value = self.read("cmdline", cmdline::decode)?;
        Ok(value
            .as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(|arg| arg.as_str().map(str::to_string))
            .collect())
    }

    /// `status` 中的 `Name`
    pub fn name(&self) -> Result<String> {
        let status = self.status()?;
        Ok(status
            .get(&Key::from("Name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// `status` 中选定的 uid 字段是否有一个等于 `uid`
    pub fn uid_matches(&self, uid: u32, fields: UidMatch) -> Result<bool> {
        let status = self.status()?;
        let Some(uids) = status.get(&Key::from("Uid")) else {
            return Err(self.malformed("status", "missing Uid"));
        };
        Ok(fields
            .keys()
            .filter_map(|key| uids.get(&Key::from(key)).and_then(Value::as_i64))
            .any(|value| value == i64::from(uid)))
    }

    /// 父进程
    pub fn parent(&self) -> Result<ProcessNode> {
        let status = self.status()?;
        let ppid = status
            .get(&Key::from("PPid"))
            .and_then(Value::as_i64)
            .ok_or_else(|| self.malformed("status", "missing PPid"))?;
        if ppid == 0 {
            return Err(ProcError::NoParentProcess(self.pid));
        }
        let ppid = u32::try_from(ppid)
            .map_err(|_| ProcError::UnknownProcess(ppid.to_string()))?;
        ProcessNode::open(self.dir.fs(), ppid)
    }

    /// 启动时间（取进程目录的访问时间）
    pub fn started_at(&self) -> Result<DateTime<Local>> {
        let path = self.dir.path();
        let meta = fs::metadata(path).map_err(|e| ProcError::io(display(path), e))?;
        let time = meta
            .accessed()
            .or_else(|_| meta.modified())
            .map_err(|e| ProcError::io(display(path), e))?;
        Ok(DateTime::<Local>::from(time))
    }

    /// 运行时长，时钟回拨时为零
    pub fn uptime(&self) -> Result<Duration> {
        let started = self.started_at()?;
        let now = self.dir.fs().ops().now();
        Ok((now - started).to_std().unwrap_or(Duration::ZERO))
    }

    /// 派生属性，非派生属性名返回 `Ok(None)`
    pub fn attribute(&self, name: &str) -> Result<Option<Node>> {
        let node = match name {
            "id" => Node::Value(Value::from(self.pid)),
            "parent" => Node::Process(self.parent()?),
            "started_at" => Node::Value(Value::Time(self.started_at()?)),
            "uptime" => Node::Value(Value::Duration(self.uptime()?)),
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    fn malformed(&self, leaf: &str, reason: &str) -> ProcError {
        ProcError::Malformed {
            path: display(&self.dir.path().join(leaf)),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Debug for ProcessNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process({})", self.pid)
    }
}

/// 进程集合
#[derive(Debug, Clone)]
pub struct Processes {
    fs: Arc<ProcFs>,
    selected: Option<Vec<ProcessNode>>,
}

impl Processes {
    /// 创建未过滤的集合
    pub fn new(fs: &Arc<ProcFs>) -> Self {
        Self {
            fs: fs.clone(),
            selected: None,
        }
    }

    /// 按进程号取单个进程
    pub fn get(&self, pid: u32) -> Result<ProcessNode> {
        ProcessNode::open(&self.fs, pid)
    }

    /// 当前集合：过滤过则为过滤结果，否则枚举所有数字根目录项
    pub fn all(&self) -> Result<Vec<ProcessNode>> {
        if let Some(selected) = &self.selected {
            return Ok(selected.clone());
        }

        let root = self.fs.root()?;
        let mut pids: Vec<u32> = root
            .entries()?
            .iter()
            .filter(|name| is_pid_token(name))
            .filter_map(|name| name.parse().ok())
            .collect();
        pids.sort_unstable();

        let mut processes = Vec::with_capacity(pids.len());
        for pid in pids {
            match ProcessNode::open(&self.fs, pid) {
                Ok(process) => processes.push(process),
                Err(e) => log::debug!("skipping process {}: {}", pid, e),
            }
        }
        Ok(processes)
    }

    /// 集合大小
    pub fn len(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// 按位置取进程
    pub fn nth(&self, index: usize) -> Result<Option<ProcessNode>> {
        Ok(self.all()?.into_iter().nth(index))
    }

    /// 集合中的进程号
    pub fn ids(&self) -> Result<Vec<u32>> {
        Ok(self.all()?.iter().map(ProcessNode::pid).collect())
    }

    /// 按真实或有效 uid 过滤，`None` 取调用方的有效 uid
    pub fn by_uid(&mut self, uid: Option<u32>) -> Result<&mut Self> {
        self.by_uid_fields(uid, UidMatch::REAL | UidMatch::EFFECTIVE)
    }

    /// 按选定的 uid 字段过滤
    pub fn by_uid_fields(&mut self, uid: Option<u32>, fields: UidMatch) -> Result<&mut Self> {
        let uid = uid.unwrap_or_else(|| self.fs.ops().effective_uid());
        self.retain(|process| process.uid_matches(uid, fields))
    }

    /// 按用户名过滤，`None` 取调用方的有效 uid
    pub fn by_user(&mut self, name: Option<&str>) -> Result<&mut Self> {
        let uid = match name {
            Some(name) => Some(
                self.fs
                    .ops()
                    .user_uid(name)
                    .ok_or_else(|| ProcError::AccountLookupFailed(name.to_string()))?,
            ),
            None => None,
        };
        self.by_uid(uid)
    }

    /// 按命令行正则过滤
    pub fn by_cmdline(&mut self, pattern: &str) -> Result<&mut Self> {
        let regex = Regex::new(pattern).map_err(|source| ProcError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.by_cmdline_regex(&regex)
    }

    /// 按已编译的正则过滤（以空格连接参数向量后搜索匹配）
    pub fn by_cmdline_regex(&mut self, regex: &Regex) -> Result<&mut Self> {
        self.retain(|process| Ok(regex.is_match(&process.cmdline()?.join(" "))))
    }

    fn retain<F>(&mut self, mut keep: F) -> Result<&mut Self>
    where
        F: FnMut(&ProcessNode) -> Result<bool>,
    {
        let mut kept = Vec::new();
        for process in self.all()? {
            match keep(&process) {
                Ok(true) => kept.push(process),
                Ok(false) => {}
                Err(e) => log::debug!("dropping process {} from filter: {}", process.pid(), e),
            }
        }
        self.selected = Some(kept);
        Ok(self)
    }
}
