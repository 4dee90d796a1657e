//! 节点模型
//!
//! 节点是解析过程中按需创建的虚拟目录树实体：
//!
//! - [`DirectoryNode`]：镜像一个真实目录，子项查找时按约定绑定解码器
//! - [`FileNode`]：零参数的物化器，每次物化都重新读取底层内容
//! - [`ProcessNode`]：以进程号为根的目录，附带派生属性
//! - 链接不是节点，而是一条解析规则（见 [`crate::link`]）
//!
//! 所有节点通过 [`Node::access`] 这一个多态操作被解析器统一使用。

use std::cell::RefCell;
use std::fmt;
use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ProcError, Result};
use crate::link;
use crate::path::{is_entry_name, is_pid_token};
use crate::proc::ProcFs;
use crate::process::ProcessNode;
use crate::registry::Decoder;
use crate::value::{Key, Value};

/// 目录所处的作用域，决定后代文件的解码器命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// 挂载点根目录
    Root,
    /// 根目录之下的系统级子目录
    System,
    /// 某个进程的子树
    Process(u32),
}

impl Scope {
    fn child(self) -> Scope {
        match self {
            Scope::Root => Scope::System,
            other => other,
        }
    }
}

/// 访问方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 属性式访问（进程节点的派生属性只能这样访问）
    Attribute,
    /// 键/下标式访问
    Item,
}

/// 解析过程中的节点
#[derive(Debug)]
pub enum Node {
    /// 目录
    Directory(DirectoryNode),
    /// 进程目录
    Process(ProcessNode),
    /// 未物化的文件
    File(FileNode),
    /// 已物化的值
    Value(Value),
}

impl Node {
    /// 按访问方式和键解析一个子项
    ///
    /// 返回 `Ok(None)` 表示未命中；其余错误对本次解析是终止性的。
    pub fn access(&self, access: Access, key: &Key) -> Result<Option<Node>> {
        match self {
            Node::Directory(dir) => dir.lookup(&key.to_string()),
            Node::Process(process) => {
                if let (Access::Attribute, Key::Str(name)) = (access, key) {
                    if let Some(node) = process.attribute(name)? {
                        return Ok(Some(node));
                    }
                }
                process.directory().lookup(&key.to_string())
            }
            Node::File(file) => {
                let value = file.materialize()?;
                Ok(access_value(&value, access, key).map(Node::Value))
            }
            Node::Value(value) => Ok(access_value(value, access, key).map(Node::Value)),
        }
    }

    /// 是否需要先物化才能继续索引
    pub fn is_materializer(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// 物化文件节点，其余节点原样返回
    pub fn materialize(self) -> Result<Node> {
        match self {
            Node::File(file) => file.materialize().map(Node::Value),
            other => Ok(other),
        }
    }

    /// 是否为挂载点根目录
    pub fn is_root(&self) -> bool {
        matches!(self, Node::Directory(dir) if dir.scope() == Scope::Root)
    }
}

fn access_value(value: &Value, access: Access, key: &Key) -> Option<Value> {
    match (value, access, key) {
        (Value::Map(map), _, key) => map.get(key).cloned(),
        (Value::List(_), Access::Item, Key::Int(index)) => value.index(*index).cloned(),
        _ => None,
    }
}

/// 目录节点
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    fs: Arc<ProcFs>,
    path: PathBuf,
    scope: Scope,
}

impl DirectoryNode {
    /// 打开一个目录节点，路径必须存在且是目录
    pub(crate) fn open(fs: &Arc<ProcFs>, path: PathBuf, scope: Scope) -> Result<Self> {
        let meta = fs::metadata(&path).map_err(|e| ProcError::io(display(&path), e))?;
        if !meta.is_dir() {
            return Err(ProcError::NotADirectory(display(&path)));
        }
        Ok(Self::from_parts(fs.clone(), path, scope))
    }

    pub(crate) fn from_parts(fs: Arc<ProcFs>, path: PathBuf, scope: Scope) -> Self {
        Self { fs, path, scope }
    }

    /// 对应的绝对路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 作用域
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// 所属上下文
    pub fn fs(&self) -> &Arc<ProcFs> {
        &self.fs
    }

    /// 查找子项，不存在时返回 `Ok(None)`
    pub fn lookup(&self, name: &str) -> Result<Option<Node>> {
        self.lookup_at_depth(name, 0)
    }

    pub(crate) fn lookup_at_depth(&self, name: &str, depth: usize) -> Result<Option<Node>> {
        if !is_entry_name(name) {
            return Ok(None);
        }

        let path = self.path.join(name);
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProcError::io(display(&path), e)),
        };
        let file_type = meta.file_type();

        if file_type.is_symlink() {
            return link::follow(self, name, &path, depth).map(Some);
        }

        if file_type.is_dir() {
            // 根目录下的数字目录就是进程
            if self.scope == Scope::Root && is_pid_token(name) {
                if let Ok(pid) = name.parse::<u32>() {
                    return ProcessNode::open(&self.fs, pid).map(|p| Some(Node::Process(p)));
                }
            }
            return Ok(Some(Node::Directory(Self::from_parts(
                self.fs.clone(),
                path,
                self.scope.child(),
            ))));
        }

        if file_type.is_file() {
            let decoder = self
                .fs
                .registry()
                .lookup(self.fs.mount(), &path, self.scope);
            return Ok(Some(Node::File(FileNode::from_parts(path, decoder))));
        }

        Err(ProcError::NotAFile(display(&path)))
    }

    /// 直接子项名（已排序）
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let dir = fs::read_dir(&self.path).map_err(|e| ProcError::io(display(&self.path), e))?;
        for entry in dir {
            let entry = entry.map_err(|e| ProcError::io(display(&self.path), e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

/// 文件节点
///
/// 持有一个可复位的打开句柄，因此不能跨线程共享，也不应在请求之间复用。
pub struct FileNode {
    path: PathBuf,
    decoder: Option<Decoder>,
    handle: RefCell<Option<File>>,
}

impl FileNode {
    /// 打开一个文件节点，路径必须存在且是普通文件
    pub fn open(path: impl Into<PathBuf>, decoder: Option<Decoder>) -> Result<Self> {
        let path = path.into();
        let meta = fs::metadata(&path).map_err(|e| ProcError::io(display(&path), e))?;
        if !meta.is_file() {
            return Err(ProcError::NotAFile(display(&path)));
        }
        Ok(Self::from_parts(path, decoder))
    }

    fn from_parts(path: PathBuf, decoder: Option<Decoder>) -> Self {
        Self {
            path,
            decoder,
            handle: RefCell::new(None),
        }
    }

    /// 对应的绝对路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取原始文本（每次都重新读取，读完后复位句柄）
    pub fn read_raw(&self) -> Result<String> {
        let mut slot = self.handle.borrow_mut();
        if slot.is_none() {
            let file = File::open(&self.path).map_err(|e| ProcError::io(display(&self.path), e))?;
            *slot = Some(file);
        }
        let Some(file) = slot.as_mut() else {
            return Err(ProcError::PathNotFound(display(&self.path)));
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| ProcError::io(display(&self.path), e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| ProcError::io(display(&self.path), e))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// 物化：有解码器时返回结构化值，否则返回原始文本
    pub fn materialize(&self) -> Result<Value> {
        let raw = self.read_raw()?;
        match self.decoder {
            Some(decode) => decode(&raw).map_err(|e| ProcError::Malformed {
                path: display(&self.path),
                reason: e.to_string(),
            }),
            None => Ok(Value::Str(raw)),
        }
    }
}

impl fmt::Debug for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNode")
            .field("path", &self.path)
            .field("decoded", &self.decoder.is_some())
            .finish()
    }
}

pub(crate) fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::FixedOps;
    use crate::query::lookup;
    use test_support::FakeProc;
    use test_support::mock::proc::{SELF_PID, USER_UID};

    fn procfs_at(mount: &Path) -> Arc<ProcFs> {
        ProcFs::mounted_at(mount, Arc::new(FixedOps::new(SELF_PID, USER_UID)))
    }

    #[test]
    fn test_mount_on_regular_file_is_not_a_directory() {
        let proc = FakeProc::standard();
        let mount = proc.root().join("version");
        let fs = procfs_at(&mount);

        let err = fs.root().unwrap_err();
        assert!(matches!(err, ProcError::NotADirectory(ref p) if *p == display(&mount)));
        let err = lookup(&fs, "loadavg").unwrap_err();
        assert!(matches!(err, ProcError::NotADirectory(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_file_node_on_directory_is_not_a_file() {
        let proc = FakeProc::standard();
        let dir = proc.root().join("sys");

        let err = FileNode::open(&dir, None).unwrap_err();
        assert!(matches!(err, ProcError::NotAFile(ref p) if *p == display(&dir)));

        let missing = proc.root().join("nothing-here");
        let err = FileNode::open(&missing, None).unwrap_err();
        assert!(matches!(err, ProcError::PathNotFound(_)));
    }

    #[test]
    fn test_file_node_rereads_on_every_materialization() {
        let proc = FakeProc::new();
        proc.file("counter", "one");
        let file = FileNode::open(proc.root().join("counter"), None).unwrap();

        assert_eq!(file.materialize().unwrap(), Value::from("one"));
        proc.file("counter", "two!");
        assert_eq!(file.materialize().unwrap(), Value::from("two!"));
        assert_eq!(file.materialize().unwrap(), Value::from("two!"));
    }

    #[test]
    fn test_file_node_decodes_fresh_content() {
        let proc = FakeProc::new();
        proc.file("loadavg", "0.20 0.18 0.12 1/80 11206\n");
        let file = FileNode::open(
            proc.root().join("loadavg"),
            Some(crate::decoders::loadavg::decode as Decoder),
        )
        .unwrap();

        let last_pid = |value: Value| value.get(&Key::from("last_pid")).cloned();
        assert_eq!(last_pid(file.materialize().unwrap()), Some(Value::Int(11206)));
        proc.file("loadavg", "0.20 0.18 0.12 1/80 11207\n");
        assert_eq!(last_pid(file.materialize().unwrap()), Some(Value::Int(11207)));
    }

    #[test]
    fn test_only_files_are_materializers() {
        let proc = FakeProc::standard();
        let fs = procfs_at(proc.root());
        let root = fs.root().unwrap();

        let file = root.lookup("loadavg").unwrap().unwrap();
        assert!(file.is_materializer());
        assert!(matches!(file.materialize().unwrap(), Node::Value(Value::Map(_))));

        let dir = root.lookup("sys").unwrap().unwrap();
        assert!(!dir.is_materializer());
        assert!(matches!(dir.materialize().unwrap(), Node::Directory(_)));

        let process = root.lookup("1").unwrap().unwrap();
        assert!(!process.is_materializer());
        assert!(!Node::Value(Value::Int(1)).is_materializer());
    }

    #[test]
    fn test_lookup_rejects_dot_entries() {
        let proc = FakeProc::standard();
        let fs = procfs_at(proc.root());
        let root = fs.root().unwrap();

        assert!(root.lookup(".").unwrap().is_none());
        assert!(root.lookup("..").unwrap().is_none());
        assert!(root.lookup("sys/kernel").unwrap().is_none());
        assert!(root.lookup("missing").unwrap().is_none());
    }
}
