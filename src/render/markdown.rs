//! # Markdown 表格渲染
//!
//! 管道分隔表格，每列宽度为该列最宽单元格（含表头）加 1。
//!
//! ## 依赖关系
//! - 被 `render/mod.rs` 调用

use super::FormattedRow;
use crate::models::HEADER;

/// 渲染 Markdown 表格
pub fn render(rows: &[FormattedRow]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.cells().iter().map(|c| escape_cell(c)).collect())
        .collect();
    let widths = column_widths(&body);

    let mut out = String::new();
    push_line(&mut out, &HEADER, &widths);

    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(w - 1)).collect();
    let separators: Vec<&str> = separators.iter().map(String::as_str).collect();
    push_line(&mut out, &separators, &widths);

    for cells in &body {
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        push_line(&mut out, &cells, &widths);
    }

    out
}

/// 单元格中的 `|` 写作 `\|`，避免被当成列分隔符
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

/// 每列宽度：所有行（含表头）最宽单元格 + 1，按转义后的文本计算
fn column_widths(body: &[Vec<String>]) -> Vec<usize> {
    HEADER
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                + 1
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        out.push_str(&" ".repeat(pad));
        out.push('|');
    }
    out.push('\n');
}
