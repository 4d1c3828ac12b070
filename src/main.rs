//! # wordtally - 文本文件批量统计工具
//!
//! 并行统计一批文本文件的行数与单词数，并导出 TXT/CSV 汇总报告。
//!
//! ## 子命令
//! - `count` - 选择文件、并行扫描、导出报告
//! - `list`  - 列出可选择的文件及序号
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集、选择解析、并行调度、取消)
//!   │     ├── scanner/  (行/词扫描器)
//!   │     ├── models/   (结果与汇总)
//!   │     └── report/   (TXT/CSV 报告)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod report;
mod scanner;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
