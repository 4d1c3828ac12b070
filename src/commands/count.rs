//! # count 命令实现
//!
//! 并行统计所选文本文件的行数与单词数，并导出 TXT/CSV 报告。
//!
//! ## 流程
//! 1. 收集目录顶层匹配的文件并列出
//! 2. 读取选择表达式（参数、环境变量或交互输入），打印诊断
//! 3. 注册 Ctrl+C 处理器，触发取消令牌
//! 4. 有界并行扫描，汇总结果
//! 5. 打印汇总表格并写入报告
//!
//! ## 依赖关系
//! - 使用 `cli/count.rs` 定义的参数
//! - 使用 `batch/`, `scanner/`, `report/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, CancelToken, FileCollector, Selection};
use crate::cli::count::CountArgs;
use crate::error::{Result, WordTallyError};
use crate::models::Summary;
use crate::report::{self, ReportContext};
use crate::scanner;
use crate::utils::output;

use chrono::Local;
use console::Term;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{debug, warn};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Lines")]
    lines: u64,
    #[tabled(rename = "Words")]
    words: u64,
}

/// 执行 count 命令
pub fn execute(args: CountArgs) -> Result<()> {
    output::print_header("Counting Lines and Words");

    let collector = FileCollector::new(&args.dir).with_pattern(&args.pattern);
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(
            &WordTallyError::NoFilesFound {
                pattern: collector.patterns(),
            }
            .to_string(),
        );
        return Ok(());
    }

    output::print_info("Files found:");
    output::print_file_list(&files);
    println!();

    let expr = match args.select {
        Some(ref expr) => expr.clone(),
        None if !args.no_prompt && console::user_attended() => prompt_selection()?,
        None => String::new(),
    };

    let selection = Selection::parse(&expr, files.len());
    for diagnostic in selection.diagnostics() {
        output::print_warning(&diagnostic.to_string());
    }
    debug!(indices = ?selection.indices(), "selection resolved");
    let selected = selection.apply(&files);

    let runner = BatchRunner::new(args.jobs).with_progress(!args.no_progress);
    output::print_info(&format!(
        "Starting processing of {} file(s) with {} job(s)...",
        selected.len(),
        runner.jobs()
    ));

    let cancel = CancelToken::new();
    install_interrupt_handler(&cancel);

    let started = Local::now();
    let summary = runner.run(&selected, &cancel, scanner::scan_file)?;
    let finished = Local::now();

    if cancel.is_cancelled() {
        output::print_warning("Cancelled by user (Ctrl+C).");
    }

    print_summary(&summary);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.dir.join("export"));
    let ctx = ReportContext {
        directory: args.dir.display().to_string(),
        started,
        finished,
    };
    let paths = report::write_reports(&summary, &ctx, &output_dir)?;

    output::print_done("Processing complete.");
    output::print_success(&format!("TXT report: {}", paths.text.display()));
    output::print_success(&format!("CSV report: {}", paths.csv.display()));

    Ok(())
}

/// 交互式读取选择表达式
fn prompt_selection() -> Result<String> {
    let term = Term::stdout();
    let read_error = |source| WordTallyError::FileReadError {
        path: "<stdin>".to_string(),
        source,
    };

    term.write_str("Select files (e.g. 1,3-5) or Enter for all: ")
        .map_err(read_error)?;
    let line = term.read_line().map_err(read_error)?;
    Ok(line.trim().to_string())
}

/// Ctrl+C 只负责触发取消令牌；注册失败时继续运行（无法中断）
fn install_interrupt_handler(cancel: &CancelToken) {
    let token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        token.cancel();
    }) {
        warn!(error = %e, "failed to install Ctrl+C handler");
    }
}

/// 打印汇总表格与错误
fn print_summary(summary: &Summary) {
    output::print_separator();

    if summary.entries.is_empty() {
        output::print_warning("No file was scanned successfully.");
    } else {
        let rows: Vec<SummaryRow> = summary
            .entries
            .iter()
            .map(|e| SummaryRow {
                file: e.file_name.clone(),
                lines: e.lines,
                words: e.words,
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    output::print_info(&format!(
        "TOTAL: {} lines | {} words in {} file(s)",
        summary.total_lines, summary.total_words, summary.file_count
    ));

    if summary.has_errors() {
        output::print_warning(&format!(
            "{} file(s) failed ({} cancelled):",
            summary.errors.len(),
            summary.cancelled_count()
        ));
        for error in &summary.errors {
            output::print_error(&error.to_string());
        }
    }

    output::print_separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(dir: &std::path::Path) -> CountArgs {
        CountArgs {
            dir: dir.to_path_buf(),
            select: Some(String::new()),
            jobs: 2,
            pattern: "*.txt".to_string(),
            output_dir: None,
            no_progress: true,
            no_prompt: true,
        }
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(execute(args(dir.path())).is_ok());
        assert!(!dir.path().join("export").exists());
    }

    #[test]
    fn test_count_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello world\nfoo").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();

        let mut count_args = args(dir.path());
        count_args.select = Some("2".to_string());
        execute(count_args).unwrap();

        let reports: Vec<_> = fs::read_dir(dir.path().join("export"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(reports.len(), 2);

        let csv_path = reports
            .iter()
            .find(|p| p.extension().and_then(|e| e.to_str()) == Some("csv"))
            .unwrap();
        let csv = fs::read_to_string(csv_path).unwrap();
        assert!(csv.ends_with("Arquivo;Linhas;Palavras\nb.txt;1;1\nTOTAL;1;1\n"));
    }
}
