//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `count`: 并行统计所选文件的行数与单词数，并导出报告
//! - `list`: 列出目录中可供选择的文件及其序号
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: count, list

pub mod count;
pub mod list;

use clap::{Parser, Subcommand};

/// wordtally - 文本文件批量行数/单词数统计
#[derive(Parser)]
#[command(name = "wordtally")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Count lines and words across a batch of text files in parallel", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Count lines and words in the selected files and export TXT/CSV reports
    Count(count::CountArgs),

    /// List the files of a directory with their selection indices
    List(list::ListArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_count() {
        let cli = Cli::try_parse_from([
            "wordtally", "-v", "count", "docs", "--select", "1,3-5", "--jobs", "2",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Count(args) => {
                assert_eq!(args.dir, std::path::PathBuf::from("docs"));
                assert_eq!(args.select.as_deref(), Some("1,3-5"));
                assert_eq!(args.jobs, 2);
                assert_eq!(args.pattern, "*.txt");
                assert!(args.output_dir.is_none());
            }
            Commands::List(_) => panic!("expected count"),
        }
    }
}
