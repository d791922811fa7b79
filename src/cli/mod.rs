//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 用法
//! ```text
//! esigen opt1.out ts1.out -o SI.docx
//! ```
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/report.rs`

use crate::render::{MissingStyle, RenderFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 终端输出样式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ConsoleStyle {
    /// Pipe-delimited Markdown table
    #[default]
    Markdown,
    /// Column-aligned plain text
    Plain,
}

impl From<ConsoleStyle> for RenderFormat {
    fn from(style: ConsoleStyle) -> Self {
        match style {
            ConsoleStyle::Markdown => RenderFormat::Markdown,
            ConsoleStyle::Plain => RenderFormat::Plain,
        }
    }
}

/// esigen - 从 ORCA 输出生成 Supporting Information 能量表
#[derive(Parser, Debug)]
#[command(name = "esigen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Read energies from ORCA output files and create a table suitable for Supporting Information",
    long_about = None
)]
pub struct Cli {
    /// ORCA output file(s) to read energies from
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output file (.md, .txt, .csv, .tex, .pdf, .docx); prints to the terminal if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table style used when printing to the terminal
    #[arg(long, value_enum, default_value = "markdown")]
    pub style: ConsoleStyle,

    /// How to show quantities that were not found in a file
    #[arg(long, value_enum, default_value = "zero")]
    pub missing: MissingStyle,

    /// Document converter used for .tex, .pdf and .docx output
    #[arg(long, env = "ESIGEN_PANDOC", default_value = "pandoc")]
    pub pandoc: String,

    /// Staging Markdown file handed to the converter
    #[arg(long, default_value = "data.md")]
    pub staging: PathBuf,
}
