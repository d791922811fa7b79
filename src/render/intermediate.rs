//! # CSV 中间格式
//!
//! 逗号分隔，首行为表头，每个结果一行。
//!
//! ## 依赖关系
//! - 被 `render/mod.rs` 调用
//! - 使用 `csv` + `serde` 序列化 `FormattedRow`

use super::FormattedRow;
use crate::error::{EsigenError, Result};
use crate::models::HEADER;

/// 渲染 CSV 中间格式
pub fn render(rows: &[FormattedRow]) -> Result<String> {
    // 表头手动写入，空表也保留表头
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| EsigenError::Other(format!("Failed to flush CSV buffer: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| EsigenError::Other(e.to_string()))
}
