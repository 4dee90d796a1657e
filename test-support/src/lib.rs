//! 测试支持 crate
//!
//! 提供伪造的 `/proc` 目录树和伪文件样例内容

pub mod mock;
pub mod samples;

pub use mock::proc::{FakeProc, FakeProcess};
