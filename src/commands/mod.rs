//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `scanner/`, `report/`, `utils/`
//! - 子模块: count, list

pub mod count;
pub mod list;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Count(args) => count::execute(args),
        Commands::List(args) => list::execute(args),
    }
}
