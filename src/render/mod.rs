//! # 表格渲染模块
//!
//! 把 `ReportTable` 序列化为终端文本、Markdown 表格或 CSV 中间格式。
//!
//! ## 格式化规则
//! - 能量保留 5 位小数
//! - 缺失的能量显示为 `0.00000`，缺失的虚频数显示为 `0`
//! - `MissingStyle::Na` 时所有缺失值显示为 `N/A`
//!
//! ## 依赖关系
//! - 被 `export/` 与 `commands/report.rs` 调用
//! - 使用 `models/report.rs`
//! - 子模块: plain, markdown, intermediate

pub mod intermediate;
pub mod markdown;
pub mod plain;

use crate::error::Result;
use crate::models::{ReportTable, ResultRow};

use clap::ValueEnum;
use serde::Serialize;
use tabled::Tabled;

/// 渲染格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// 列对齐文本
    Plain,
    /// 管道分隔表格
    Markdown,
    /// CSV 中间格式
    Intermediate,
}

/// 缺失值的显示方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum MissingStyle {
    /// Show missing energies as 0.00000 and missing NImag as 0
    #[default]
    Zero,
    /// Show every missing value as N/A
    Na,
}

/// 已格式化的一行，各渲染器共用
#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct FormattedRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Total Energy")]
    #[serde(rename = "Total Energy")]
    pub total_energy: String,
    #[tabled(rename = "Gibbs Free Energy")]
    #[serde(rename = "Gibbs Free Energy")]
    pub gibbs_free_energy: String,
    #[tabled(rename = "Free energy correction")]
    #[serde(rename = "Free energy correction")]
    pub gibbs_correction: String,
    #[tabled(rename = "ZPE")]
    #[serde(rename = "ZPE")]
    pub zpe: String,
    #[tabled(rename = "NImag")]
    #[serde(rename = "NImag")]
    pub imaginary_modes: String,
}

impl FormattedRow {
    pub fn from_row(row: &ResultRow, missing: MissingStyle) -> Self {
        FormattedRow {
            name: row.name.clone(),
            total_energy: format_energy(row.total_energy, missing),
            gibbs_free_energy: format_energy(row.gibbs_free_energy, missing),
            gibbs_correction: format_energy(row.gibbs_correction, missing),
            zpe: format_energy(row.zpe, missing),
            imaginary_modes: format_count(row.imaginary_modes, missing),
        }
    }

    /// 按表头顺序排列的单元格
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.total_energy.as_str(),
            self.gibbs_free_energy.as_str(),
            self.gibbs_correction.as_str(),
            self.zpe.as_str(),
            self.imaginary_modes.as_str(),
        ]
    }
}

/// 格式化能量值（5 位小数）
pub fn format_energy(value: Option<f64>, missing: MissingStyle) -> String {
    match (value, missing) {
        (Some(v), _) => format!("{:.5}", v),
        (None, MissingStyle::Zero) => format!("{:.5}", 0.0),
        (None, MissingStyle::Na) => "N/A".to_string(),
    }
}

/// 格式化虚频数目
pub fn format_count(value: Option<usize>, missing: MissingStyle) -> String {
    match (value, missing) {
        (Some(n), _) => n.to_string(),
        (None, MissingStyle::Zero) => "0".to_string(),
        (None, MissingStyle::Na) => "N/A".to_string(),
    }
}

/// 格式化整张表
pub fn format_rows(table: &ReportTable, missing: MissingStyle) -> Vec<FormattedRow> {
    table
        .rows
        .iter()
        .map(|r| FormattedRow::from_row(r, missing))
        .collect()
}

/// 渲染表格
pub fn render(table: &ReportTable, format: RenderFormat, missing: MissingStyle) -> Result<String> {
    let rows = format_rows(table, missing);
    match format {
        RenderFormat::Plain => Ok(plain::render(&rows)),
        RenderFormat::Markdown => Ok(markdown::render(&rows)),
        RenderFormat::Intermediate => intermediate::render(&rows),
    }
}
