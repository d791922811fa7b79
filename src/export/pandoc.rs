//! # pandoc 文档转换
//!
//! 调用外部 `pandoc` 把 Markdown 暂存文件转换为 LaTeX / PDF / DOCX。
//! 目标格式由 pandoc 根据输出文件扩展名决定。
//!
//! ## 依赖关系
//! - 被 `export/mod.rs` 调用

use crate::error::{EsigenError, Result};
use std::path::Path;
use std::process::Command;

/// 执行 `<pandoc> <source> -o <target>`
pub fn convert(pandoc: &str, source: &Path, target: &Path) -> Result<()> {
    let output = Command::new(pandoc)
        .arg(source)
        .arg("-o")
        .arg(target)
        .output()
        .map_err(|_| EsigenError::CommandNotFound {
            command: pandoc.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(EsigenError::CommandFailed {
            command: format!("{} {} -o {}", pandoc, source.display(), target.display()),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_converter() {
        let err = convert(
            "esigen-no-such-converter",
            Path::new("data.md"),
            Path::new("si.pdf"),
        )
        .unwrap_err();
        assert!(matches!(err, EsigenError::CommandNotFound { .. }));
    }

    #[test]
    fn test_converter_failure_is_reported() {
        // `false` 总是以非零状态退出
        let err = convert("false", Path::new("data.md"), Path::new("si.pdf")).unwrap_err();
        assert!(matches!(err, EsigenError::CommandFailed { .. }));
    }

    #[test]
    fn test_converter_success() {
        assert!(convert("true", Path::new("data.md"), Path::new("si.pdf")).is_ok());
    }
}
