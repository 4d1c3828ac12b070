//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印带序号的文件列表（序号从 1 开始）
pub fn print_file_list(files: &[impl AsRef<Path>]) {
    for line in file_list_lines(files) {
        println!("{}", line);
    }
}

/// ` 1. a.txt` 形式，序号右对齐两位
pub fn file_list_lines(files: &[impl AsRef<Path>]) -> Vec<String> {
    files
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let path = path.as_ref();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!(" {:>2}. {}", i + 1, name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_list_lines() {
        let files: Vec<PathBuf> = (1..=10).map(|i| PathBuf::from(format!("/d/f{}.txt", i))).collect();
        let lines = file_list_lines(&files);
        assert_eq!(lines[0], "  1. f1.txt");
        assert_eq!(lines[9], " 10. f10.txt");
    }
}
