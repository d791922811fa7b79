//! # 数据模型模块
//!
//! 定义日志文件与报告表格的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `render/`, `commands/` 使用
//! - 子模块: log_file, report

pub mod log_file;
pub mod report;

pub use log_file::LogFile;
pub use report::{ReportTable, ResultRow, HEADER};
