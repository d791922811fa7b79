//! # 表格导出模块
//!
//! 根据输出路径的扩展名决定写入方式：
//! - 无输出路径: 打印到终端
//! - `.md` / `.txt` / `.csv`: 直接写入 Markdown / 文本 / CSV
//! - `.tex` / `.pdf` / `.docx`: 先写 Markdown 暂存文件，再调用 pandoc 转换
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `render/` 生成内容
//! - 子模块: pandoc

pub mod pandoc;

use crate::error::{EsigenError, Result};
use crate::models::ReportTable;
use crate::render::{self, MissingStyle, RenderFormat};

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// 需要外部转换的目标格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertTarget {
    Latex,
    Pdf,
    Docx,
}

impl std::fmt::Display for ConvertTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertTarget::Latex => write!(f, "LaTeX"),
            ConvertTarget::Pdf => write!(f, "PDF"),
            ConvertTarget::Docx => write!(f, "DOCX"),
        }
    }
}

/// 输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// 标准输出
    Console,
    /// 直接写入渲染结果
    File { path: PathBuf, format: RenderFormat },
    /// Markdown 暂存后由 pandoc 转换
    Converted { path: PathBuf, target: ConvertTarget },
}

impl Destination {
    /// 由 `--output` 参数确定输出目标，不支持的扩展名立即报错
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Destination::Console),
        };

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        let file = |format| Destination::File {
            path: path.to_path_buf(),
            format,
        };
        let converted = |target| Destination::Converted {
            path: path.to_path_buf(),
            target,
        };

        match ext.as_str() {
            "md" => Ok(file(RenderFormat::Markdown)),
            "txt" => Ok(file(RenderFormat::Plain)),
            "csv" => Ok(file(RenderFormat::Intermediate)),
            "tex" => Ok(converted(ConvertTarget::Latex)),
            "pdf" => Ok(converted(ConvertTarget::Pdf)),
            "docx" => Ok(converted(ConvertTarget::Docx)),
            _ => Err(EsigenError::UnsupportedFormat(format!(
                "'{}' (expected .md, .txt, .csv, .tex, .pdf or .docx)",
                path.display()
            ))),
        }
    }

    /// 输出文件路径（终端输出时为 `None`）
    pub fn path(&self) -> Option<&Path> {
        match self {
            Destination::Console => None,
            Destination::File { path, .. } | Destination::Converted { path, .. } => {
                Some(path.as_path())
            }
        }
    }
}

/// 导出选项
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// 终端输出的样式
    pub console_style: RenderFormat,
    pub missing: MissingStyle,
    /// pandoc 可执行文件
    pub pandoc: String,
    /// Markdown 暂存文件
    pub staging: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            console_style: RenderFormat::Markdown,
            missing: MissingStyle::Zero,
            pandoc: "pandoc".to_string(),
            staging: PathBuf::from("data.md"),
        }
    }
}

/// 导出表格
pub fn export(table: &ReportTable, dest: &Destination, opts: &ExportOptions) -> Result<()> {
    match dest {
        Destination::Console => {
            let content = render::render(table, opts.console_style, opts.missing)?;
            write_console(&mut io::stdout().lock(), &content)
        }
        Destination::File { path, format } => {
            let content = render::render(table, *format, opts.missing)?;
            write_file(path, &content)
        }
        Destination::Converted { path, .. } => {
            let content = render::render(table, RenderFormat::Markdown, opts.missing)?;
            write_file(&opts.staging, &content)?;
            pandoc::convert(&opts.pandoc, &opts.staging, path)
        }
    }
}

/// 写到终端；下游提前关闭管道（如 `| head`）时静默结束
pub fn write_console<W: Write>(out: &mut W, content: &str) -> Result<()> {
    match out.write_all(content.as_bytes()).and_then(|_| out.flush()) {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(EsigenError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        }),
        _ => Ok(()),
    }
}

/// 写入文本文件
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| EsigenError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
