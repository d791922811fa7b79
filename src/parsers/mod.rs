//! # 解析器模块
//!
//! 从 ORCA 输出文件中提取热化学量。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: scanner, orca_out

pub mod orca_out;
pub mod scanner;
