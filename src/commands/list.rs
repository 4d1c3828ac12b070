//! # list 命令实现
//!
//! 列出目录中匹配的文件及其序号，序号即 `count --select` 使用的序号。

use crate::batch::FileCollector;
use crate::cli::list::ListArgs;
use crate::error::{Result, WordTallyError};
use crate::utils::output;

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
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

    output::print_info(&format!("Files found in '{}':", args.dir.display()));
    output::print_file_list(&files);
    Ok(())
}
