//! # 报告生成命令实现
//!
//! 读取 ORCA 输出文件，汇总为能量表并导出。
//!
//! ## 功能
//! - 在读取任何输入之前校验输出格式
//! - 按输入顺序逐个解析文件（一个文件一行）
//! - 打印到终端或写入文件 / 经 pandoc 转换
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `parsers/orca_out.rs`, `export/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::Cli;
use crate::error::Result;
use crate::export::{self, Destination, ExportOptions};
use crate::models::ReportTable;
use crate::parsers::orca_out;
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 一次运行的完整配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub inputs: Vec<PathBuf>,
    pub destination: Destination,
    pub options: ExportOptions,
}

impl ReportConfig {
    /// 由命令行参数构建；不支持的输出格式在这里即报错
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let destination = Destination::from_path(cli.output.as_deref())?;
        Ok(ReportConfig {
            inputs: cli.files,
            destination,
            options: ExportOptions {
                console_style: cli.style.into(),
                missing: cli.missing,
                pandoc: cli.pandoc,
                staging: cli.staging,
            },
        })
    }

    fn is_console(&self) -> bool {
        self.destination == Destination::Console
    }
}

/// 执行报告生成
pub fn execute(config: &ReportConfig) -> Result<()> {
    let verbose = !config.is_console();

    if verbose {
        output::print_header("Collecting ORCA Energies");
        output::print_info(&format!("Reading {} file(s)...", config.inputs.len()));
    }

    let table = build_report(&config.inputs)?;

    if verbose {
        for row in table.rows.iter().filter(|r| r.is_empty()) {
            output::print_warning(&format!("No energies found for '{}'", row.name));
        }
    }

    if let Destination::Converted { target, .. } = &config.destination {
        output::print_info(&format!(
            "Converting '{}' to {} with {}",
            config.options.staging.display(),
            target,
            config.options.pandoc
        ));
    }

    export::export(&table, &config.destination, &config.options)?;

    if let Some(path) = config.destination.path() {
        output::print_success(&format!("Table written to '{}'", path.display()));
    }

    Ok(())
}

/// 按输入顺序解析所有文件；任何文件失败都会终止
pub fn build_report(inputs: &[PathBuf]) -> Result<ReportTable> {
    let pb = progress::create_progress_bar(inputs.len() as u64, "Parsing");

    let mut table = ReportTable::new();
    for path in inputs {
        let row = match orca_out::parse_orca_output(path) {
            Ok(row) => row,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        table.push(row);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsigenError;
    use crate::render::{self, MissingStyle, RenderFormat};
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_rows_follow_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            write(dir.path(), "c.out", "FINAL SINGLE POINT ENERGY  -3.0\n"),
            write(dir.path(), "a.out", ""),
            write(dir.path(), "b.out", "FINAL SINGLE POINT ENERGY  -2.0\n"),
            write(dir.path(), "a2.out", "FINAL SINGLE POINT ENERGY  -1.0\n"),
        ];

        let table = build_report(&inputs).unwrap();
        assert_eq!(table.rows.len(), inputs.len());
        let names: Vec<_> = table.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b", "a2"]);
        assert_eq!(table.rows[1].total_energy, None);
        assert_eq!(table.rows[2].total_energy, Some(-2.0));
    }

    #[test]
    fn test_imaginary_mode_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let ts = write(
            dir.path(),
            "ts.out",
            "VIBRATIONAL FREQUENCIES\n\
             \x20  6:  -300.00 cm**-1 ***imaginary mode***\n\
             \x20  7:   -50.00 cm**-1 ***imaginary mode***\n\
             \x20  8:   400.00 cm**-1\n",
        );
        let sp = write(dir.path(), "sp.out", "FINAL SINGLE POINT ENERGY  -1.5\n");

        let table = build_report(&[ts, sp]).unwrap();
        assert_eq!(table.rows[0].imaginary_modes, Some(2));
        assert_eq!(table.rows[1].imaginary_modes, None);

        let csv = render::render(&table, RenderFormat::Intermediate, MissingStyle::Zero).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert!(lines[1].ends_with(",2"));
        assert!(lines[2].ends_with(",0"));
    }

    #[test]
    fn test_missing_file_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let ok = write(dir.path(), "ok.out", "");
        let missing = dir.path().join("missing.out");

        let err = build_report(&[ok, missing]).unwrap_err();
        assert!(matches!(err, EsigenError::FileNotFound { .. }));
    }

    #[test]
    fn test_malformed_value_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.out", "FINAL SINGLE POINT ENERGY  ******\n");

        let err = build_report(&[bad]).unwrap_err();
        assert!(matches!(err, EsigenError::ParseError { .. }));
    }

    #[test]
    fn test_unsupported_format_rejected_before_reading() {
        // 输入文件不存在，但格式错误应当先被发现
        let cli = Cli::try_parse_from(["esigen", "nope.out", "-o", "table.xyz"]).unwrap();
        let err = ReportConfig::from_cli(cli).unwrap_err();
        assert!(matches!(err, EsigenError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_execute_writes_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            dir.path(),
            "water.out",
            "FINAL SINGLE POINT ENERGY    -76.123456\n\
             Final Gibbs free energy ...   -76.110000\n",
        );
        let out = dir.path().join("si.md");

        let cli = Cli::try_parse_from([
            Path::new("esigen"),
            input.as_path(),
            Path::new("-o"),
            out.as_path(),
        ])
        .unwrap();
        let config = ReportConfig::from_cli(cli).unwrap();
        execute(&config).unwrap();

        let md = fs::read_to_string(&out).unwrap();
        let row = md.lines().nth(2).unwrap();
        let cells: Vec<_> = row
            .trim_matches('|')
            .split('|')
            .map(|c| c.trim())
            .collect();
        assert_eq!(
            cells,
            vec!["water", "-76.12346", "-76.11000", "0.00000", "0.00000", "0"]
        );
    }
}
