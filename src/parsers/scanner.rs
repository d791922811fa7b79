//! # 标记扫描器
//!
//! 在日志中查找包含给定标记的行，取该行按空白切分后的第 N 个字段（首尾空白不计）。
//! 从文件末尾往前扫描，命中的是正向顺序中的最后一次出现：
//! 几何优化等计算会多次打印同一标记，最后一次才是最终值。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs` 使用
//! - 使用 `models/log_file.rs`

use crate::error::{EsigenError, Result};
use crate::models::LogFile;

/// 返回最后一个包含 `marker` 的行中第 `field` 个字段（从 0 开始）的数值
///
/// 没有匹配行时返回 `Ok(None)`；匹配行字段缺失或不是数字时返回 `ParseError`。
pub fn scan_last(log: &LogFile, marker: &str, field: usize) -> Result<Option<f64>> {
    let hit = log
        .lines()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, line)| line.contains(marker));

    let (idx, line) = match hit {
        Some(h) => h,
        None => return Ok(None),
    };

    let parse_error = |reason: String| EsigenError::ParseError {
        path: log.path().display().to_string(),
        line: idx + 1,
        marker: marker.to_string(),
        reason,
    };

    let token = line
        .split_whitespace()
        .nth(field)
        .ok_or_else(|| parse_error(format!("field {} is missing", field)))?;

    token
        .parse::<f64>()
        .map(Some)
        .map_err(|_| parse_error(format!("'{}' is not a number", token)))
}

/// 统计包含 `marker` 的行数（与顺序无关）
pub fn count_lines(log: &LogFile, marker: &str) -> usize {
    log.lines().iter().filter(|l| l.contains(marker)).count()
}
