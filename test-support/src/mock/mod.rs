//! Mock 实现模块
//!
//! 注意：这里不依赖 `procfs` crate（避免循环依赖）。
//! `procfs` 的测试用 `FixedOps` 配合这里的目录树使用。

pub mod proc;
