//! # ORCA .out 输出解析器
//!
//! 从 ORCA 输出文件中提取单点能、Gibbs 自由能、自由能校正、零点能和虚频数目。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 使用
//! - 使用 `parsers/scanner.rs`, `models/`

use crate::error::Result;
use crate::models::{LogFile, ResultRow};
use crate::parsers::scanner;

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 频率计算块的标志
pub const FREQUENCY_MARKER: &str = "VIBRATIONAL FREQUENCIES";

/// 虚频行的标志
pub const IMAGINARY_MARKER: &str = "***imaginary mode***";

/// 只去掉一次 `.out`，连同后面紧跟的分隔点
static OUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.out\.?").unwrap());

/// 可由单个标记行读出的量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    TotalEnergy,
    GibbsFreeEnergy,
    GibbsCorrection,
    ZeroPointEnergy,
}

impl Quantity {
    /// 行内标记文本
    pub const fn marker(self) -> &'static str {
        match self {
            // "FINAL SINGLE POINT ENERGY       -76.123456789"
            Quantity::TotalEnergy => "FINAL SINGLE POINT ENERGY",
            // "Final Gibbs free energy         ...    -76.110000 Eh"
            Quantity::GibbsFreeEnergy => "Final Gibbs free energy",
            // "G-E(el)                           ...      0.012345 Eh      7.75 kcal/mol"
            Quantity::GibbsCorrection => "G-E(el)",
            // "Non-thermal (ZPE) correction              0.021345 Eh      13.39 kcal/mol"
            Quantity::ZeroPointEnergy => "Non-thermal (ZPE) correction",
        }
    }

    /// 数值所在字段（空白切分，从 0 开始）
    pub const fn field_index(self) -> usize {
        match self {
            Quantity::TotalEnergy => 4,
            Quantity::GibbsFreeEnergy => 5,
            Quantity::GibbsCorrection => 2,
            Quantity::ZeroPointEnergy => 3,
        }
    }

    pub fn extract(self, log: &LogFile) -> Result<Option<f64>> {
        scanner::scan_last(log, self.marker(), self.field_index())
    }
}

/// 统计虚频数目
///
/// 没有频率计算块时返回 `None`，与 `Some(0)`（确认无虚频）区分。
pub fn count_imaginary_modes(log: &LogFile) -> Option<usize> {
    if !log.contains(FREQUENCY_MARKER) {
        return None;
    }
    Some(scanner::count_lines(log, IMAGINARY_MARKER))
}

/// 由文件路径得到表格中的名称
///
/// 取文件名部分，只替换第一次出现的 `.out`：
/// `water.out` -> `water`，`my.out.file` -> `myfile`。
pub fn derive_identifier(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    OUT_PATTERN.replace(&file_name, "").into_owned()
}

/// 从已读入的日志构建一行结果
pub fn parse_orca_log(log: &LogFile) -> Result<ResultRow> {
    let mut row = ResultRow::new(derive_identifier(log.path()));

    row.total_energy = Quantity::TotalEnergy.extract(log)?;
    row.gibbs_free_energy = Quantity::GibbsFreeEnergy.extract(log)?;
    row.gibbs_correction = Quantity::GibbsCorrection.extract(log)?;
    row.zpe = Quantity::ZeroPointEnergy.extract(log)?;
    row.imaginary_modes = count_imaginary_modes(log);

    Ok(row)
}

/// 解析 ORCA 输出文件（读取一次，所有提取器共用）
pub fn parse_orca_output(path: &Path) -> Result<ResultRow> {
    let log = LogFile::read(path)?;
    parse_orca_log(&log)
}
