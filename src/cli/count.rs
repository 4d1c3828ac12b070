//! # count 子命令 CLI 定义
//!
//! 统计所选文件的行数与单词数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/count.rs`

use clap::Args;
use std::path::PathBuf;

/// count 子命令参数
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Directory containing the text files (top level only)
    pub dir: PathBuf,

    /// Selection of files by index, e.g. '1,3-5' (empty = all files)
    #[arg(short, long, env = "WORDTALLY_SELECT")]
    pub select: Option<String>,

    /// Number of parallel jobs (0 = number of logical CPUs)
    #[arg(short, long, default_value_t = 0, env = "WORDTALLY_JOBS")]
    pub jobs: usize,

    /// File name pattern(s), comma-separated
    #[arg(long, default_value = "*.txt", env = "WORDTALLY_PATTERN")]
    pub pattern: String,

    /// Directory for the TXT/CSV reports [default: <DIR>/export]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Never prompt for a selection; process all files unless --select is given
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,
}
