//! 查询入口
//!
//! 前端（命令行与 HTTP）共用的顶层操作：解析路径，再按模式投影为值或子项名列表。

use std::sync::Arc;

use crate::error::Result;
use crate::listing;
use crate::proc::ProcFs;
use crate::resolve::resolve;
use crate::value::Value;

/// 查询模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 取值
    #[default]
    Value,
    /// 列出子项名
    List,
}

/// 取值模式：返回路径对应的值，目录返回子项名列表
pub fn lookup(fs: &Arc<ProcFs>, path: &str) -> Result<Value> {
    listing::into_value(resolve(fs, path)?)
}

/// 列表模式：返回路径对应节点的子项名
pub fn list(fs: &Arc<ProcFs>, path: &str) -> Result<Vec<String>> {
    listing::project(&resolve(fs, path)?, path)
}

/// 按模式查询并渲染为 JSON
pub fn find(fs: &Arc<ProcFs>, path: &str, mode: Mode) -> Result<String> {
    let value = match mode {
        Mode::Value => lookup(fs, path)?,
        Mode::List => Value::strings(list(fs, path)?),
    };
    Ok(value.to_json())
}
