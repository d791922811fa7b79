//! # 命令执行模块
//!
//! 实现报告生成的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `render/`, `export/`, `utils/`
//! - 子模块: report

pub mod report;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = report::ReportConfig::from_cli(cli)?;
    report::execute(&config)
}
