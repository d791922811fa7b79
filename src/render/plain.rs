//! # 终端文本渲染
//!
//! 使用 `tabled` 生成列对齐的等宽文本。
//!
//! ## 依赖关系
//! - 被 `render/mod.rs` 调用
//! - 使用 `tabled` crate

use super::FormattedRow;
use tabled::settings::Style;
use tabled::Table;

/// 渲染列对齐文本
pub fn render(rows: &[FormattedRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::blank());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportTable, ResultRow};
    use crate::render::{format_rows, MissingStyle};

    #[test]
    fn test_plain_columns_align_with_uneven_names() {
        let mut table = ReportTable::new();
        table.push(ResultRow {
            name: "x".to_string(),
            total_energy: Some(-1.0),
            ..Default::default()
        });
        table.push(ResultRow {
            name: "a-much-longer-identifier".to_string(),
            total_energy: Some(-100.0),
            ..Default::default()
        });

        let text = render(&format_rows(&table, MissingStyle::Zero));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Total Energy"));

        // "Total Energy" 列在每一行的起始位置一致
        let col = lines[0].find("Total Energy").unwrap();
        assert_eq!(lines[1].find("-1.00000").unwrap(), col);
        assert_eq!(lines[2].find("-100.00000").unwrap(), col);
    }
}
