//! `/proc` 伪文件系统的结构化查询引擎
//!
//! 此 crate 把 `/proc` 暴露为可按路径查询的对象图，包括：
//!
//! - [`DecoderRegistry`] - 按约定发现的逐文件解码器
//! - [`Node`] - 目录、文件、进程三类节点与链接解析规则
//! - [`resolve()`] - 带属性/下标消歧的路径解析器
//! - [`Processes`] - 可链式过滤的进程集合
//! - [`listing`] - 发现模式下的子项名投影
//!
//! ```no_run
//! let fs = procfs::ProcFs::new();
//! let uid = procfs::lookup(&fs, "1/status/Uid/effective")?;
//! let cpus = procfs::list(&fs, "cpuinfo")?;
//! # Ok::<(), procfs::ProcError>(())
//! ```

pub mod decoders;
pub mod error;
pub mod link;
pub mod listing;
pub mod ops;
pub mod path;
pub mod registry;
pub mod value;

mod node;
mod proc;
mod process;
mod query;
mod resolve;

// Re-export error
pub use error::{ProcError, Result};

// Re-export ops
pub use ops::{FixedOps, HostOps, ProcOps};

// Re-export registry
pub use registry::{BUILTIN_DECODERS, Decoder, DecoderRegistry, Namespace};

// Re-export value
pub use value::{Key, Map, Value};

// Re-export node
pub use node::{Access, DirectoryNode, FileNode, Node, Scope};

// Re-export proc
pub use proc::{DEFAULT_MOUNT, ProcFs};

// Re-export process
pub use process::{ProcessNode, Processes, UidMatch};

// Re-export resolve
pub use resolve::{KeyForm, RESOLUTION_ORDER, Strategy, resolve, resolve_from};

// Re-export query
pub use query::{Mode, find, list, lookup};
