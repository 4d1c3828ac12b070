//! # 报告导出模块
//!
//! 将汇总渲染为文本报告与分号分隔的 CSV 报告，并写入磁盘。
//!
//! ## 支持格式
//! - TXT: 标题、每文件一行（`name - N linhas - M palavras`）、总计、错误列表
//! - CSV: `Arquivo;Linhas;Palavras`、每文件一行、`TOTAL` 行、错误列表
//!
//! 两种文件均以 UTF-8 BOM 开头，行尾为 `\n`。
//!
//! ## 依赖关系
//! - 被 `commands/count.rs` 调用
//! - 使用 `models/summary.rs` 的 `Summary`
//! - 使用 `chrono` 生成时间戳，`csv` 写入 CSV

pub mod csv;
pub mod text;

use crate::error::{Result, WordTallyError};
use crate::models::Summary;

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 报告头部信息
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// 输入目录（原样显示）
    pub directory: String,
    pub started: DateTime<Local>,
    pub finished: DateTime<Local>,
}

/// 已写入的报告路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub csv: PathBuf,
}

impl ReportPaths {
    /// `relatorio_<yyyyMMdd_HHmmss>.{txt,csv}`
    pub fn new(output_dir: &Path, stamp: &DateTime<Local>) -> Self {
        let base = format!("relatorio_{}", stamp.format("%Y%m%d_%H%M%S"));
        Self {
            text: output_dir.join(format!("{}.txt", base)),
            csv: output_dir.join(format!("{}.csv", base)),
        }
    }
}

/// 渲染并写入两种报告
pub fn write_reports(summary: &Summary, ctx: &ReportContext, output_dir: &Path) -> Result<ReportPaths> {
    fs::create_dir_all(output_dir).map_err(|e| WordTallyError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let paths = ReportPaths::new(output_dir, &Local::now());

    write_with_bom(&paths.text, &text::render(summary, ctx))?;
    write_with_bom(&paths.csv, &csv::render(summary)?)?;

    Ok(paths)
}

fn write_with_bom(path: &Path, content: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(content.as_bytes());

    fs::write(path, bytes).map_err(|e| WordTallyError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, ScanResult};
    use crate::scanner::FileCounts;
    use chrono::TimeZone;

    #[test]
    fn test_report_paths() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let paths = ReportPaths::new(Path::new("/out"), &stamp);
        assert_eq!(paths.text, PathBuf::from("/out/relatorio_20240309_070501.txt"));
        assert_eq!(paths.csv, PathBuf::from("/out/relatorio_20240309_070501.csv"));
    }

    #[test]
    fn test_write_reports() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export");
        let summary = Summary::from_outcomes(vec![Outcome::Scanned(ScanResult::new(
            "a.txt",
            FileCounts { lines: 1, words: 2 },
        ))]);
        let now = Local::now();
        let ctx = ReportContext {
            directory: dir.path().display().to_string(),
            started: now,
            finished: now,
        };

        let paths = write_reports(&summary, &ctx, &out).unwrap();

        let text = fs::read(&paths.text).unwrap();
        assert!(text.starts_with(UTF8_BOM));
        assert!(String::from_utf8_lossy(&text).contains("a.txt - 1 linhas - 2 palavras\n"));

        let csv = fs::read(&paths.csv).unwrap();
        assert!(csv.starts_with(UTF8_BOM));
        assert_eq!(&csv[UTF8_BOM.len()..], b"Arquivo;Linhas;Palavras\na.txt;1;2\nTOTAL;1;2\n");
    }
}
