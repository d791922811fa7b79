//! # esigen - ORCA 能量表生成工具
//!
//! 从 ORCA 输出文件中提取单点能、Gibbs 自由能、自由能校正、零点能与虚频数目，
//! 生成可直接放进 Supporting Information 的表格。
//!
//! ## 输出
//! - 终端 (Markdown 或对齐文本)
//! - `.md` / `.txt` / `.csv` 直接写入
//! - `.tex` / `.pdf` / `.docx` 经 pandoc 转换
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (标记扫描与 ORCA 提取)
//!   │     ├── render/    (表格渲染)
//!   │     ├── export/    (写文件与 pandoc 转换)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
