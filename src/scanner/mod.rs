//! # 行/词扫描器
//!
//! 流式读取单个文件，统计行数与单词数。
//!
//! ## 功能
//! - 按行读取（自动识别 BOM，见 `decode.rs`）
//! - 单次前向扫描统计每行的单词数（空白/非空白状态机）
//! - 每读取一行之前检查取消信号
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 的调用方作为扫描函数传入
//! - 使用 `batch/cancel.rs` 的 `CancelToken`

pub mod decode;

use crate::batch::CancelToken;
use crate::error::{Result, WordTallyError};

use decode::LineReader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::trace;

/// 单个文件的统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub lines: u64,
    pub words: u64,
}

/// 统计一行中的单词数
///
/// 离开单词（遇到空白）时计数，行尾仍处于单词内时再计一次，
/// 结果等于行内极大非空白串的个数。
pub fn count_words(line: &str) -> u64 {
    let mut in_word = false;
    let mut count = 0;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if in_word {
                count += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }

    if in_word {
        count += 1;
    }
    count
}

/// 扫描任意字节流
///
/// `name` 仅用于错误信息。
pub fn scan_reader<R: Read>(reader: R, name: &str, cancel: &CancelToken) -> Result<FileCounts> {
    cancel.check()?;

    let read_error = |source| WordTallyError::FileReadError {
        path: name.to_string(),
        source,
    };

    let mut lines = LineReader::new(reader).map_err(read_error)?;
    trace!(file = name, encoding = ?lines.encoding(), "stream opened");
    let mut counts = FileCounts::default();

    loop {
        cancel.check()?;
        match lines.next_line().map_err(read_error)? {
            Some(line) => {
                counts.lines += 1;
                counts.words += count_words(&line);
            }
            None => break,
        }
    }

    Ok(counts)
}

/// 扫描磁盘文件
pub fn scan_file(path: &Path, cancel: &CancelToken) -> Result<FileCounts> {
    cancel.check()?;

    let file = File::open(path).map_err(|e| WordTallyError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    scan_reader(file, &path.display().to_string(), cancel)
}
