//! # 日志文件数据模型
//!
//! 一次性读入的 ORCA 输出文件，按行保存，读入后不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/scanner.rs`, `parsers/orca_out.rs` 使用

use crate::error::{EsigenError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 已读入内存的日志文件
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl LogFile {
    /// 读取整个文件并关闭句柄
    ///
    /// 非 UTF-8 字节会被替换，不会导致失败。
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EsigenError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => EsigenError::FileReadError {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::from_content(path, &text))
    }

    /// 从已有文本构建（测试与管道输入使用）
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        LogFile {
            path: path.into(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 是否有任意一行包含给定子串
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}
