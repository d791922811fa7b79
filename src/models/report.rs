//! # 报告表格数据模型
//!
//! 每个输入文件对应一行 `ResultRow`，按输入顺序组成 `ReportTable`。
//! 所有提取值都是 `Option`：`None` 表示日志中没有对应标记，
//! 不是错误，渲染时再决定如何显示。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs` 构建
//! - 被 `render/` 消费

/// 固定表头
pub const HEADER: [&str; 6] = [
    "Name",
    "Total Energy",
    "Gibbs Free Energy",
    "Free energy correction",
    "ZPE",
    "NImag",
];

/// 单个 ORCA 输出文件的提取结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    /// 由文件名去掉 `.out` 得到的标识
    pub name: String,

    /// FINAL SINGLE POINT ENERGY (Eh)
    pub total_energy: Option<f64>,

    /// Final Gibbs free energy (Eh)
    pub gibbs_free_energy: Option<f64>,

    /// G-E(el) (Eh)
    pub gibbs_correction: Option<f64>,

    /// 零点能校正 (Eh)
    pub zpe: Option<f64>,

    /// 虚频数目；`None` 表示没有做频率计算，`Some(0)` 表示确认为极小点
    pub imaginary_modes: Option<usize>,
}

impl ResultRow {
    pub fn new(name: impl Into<String>) -> Self {
        ResultRow {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 是否一个量都没有找到
    pub fn is_empty(&self) -> bool {
        self.total_energy.is_none()
            && self.gibbs_free_energy.is_none()
            && self.gibbs_correction.is_none()
            && self.zpe.is_none()
            && self.imaginary_modes.is_none()
    }
}

/// 报告表格：行顺序即输入顺序，不去重、不排序
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    pub rows: Vec<ResultRow>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }
}
