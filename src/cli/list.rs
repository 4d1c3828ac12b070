//! # list 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing the text files (top level only)
    pub dir: PathBuf,

    /// File name pattern(s), comma-separated
    #[arg(long, default_value = "*.txt", env = "WORDTALLY_PATTERN")]
    pub pattern: String,
}
