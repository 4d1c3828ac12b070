//! # 批量执行器
//!
//! 并行执行批量扫描任务。
//!
//! ## 功能
//! - 基于专用 rayon 线程池的并行迭代，最多 `jobs` 个扫描同时进行
//! - 单个文件的失败（包括取消）互不影响
//! - 取消后不再启动新的扫描，未完成的文件记为 "cancelled" 错误
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/count.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `models/` 收集与汇总结果

use crate::batch::CancelToken;
use crate::error::{Result, WordTallyError};
use crate::models::{Outcome, OutcomeSink, ScanError, ScanResult, Summary};
use crate::scanner::FileCounts;
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 表示使用全部逻辑处理器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行扫描文件列表并汇总
    ///
    /// 取消不会作为错误返回：已收集的结果照常汇总。
    /// 仅当文件列表为空时返回 `NothingToProcess`。
    pub fn run<F>(&self, files: &[PathBuf], cancel: &CancelToken, scanner: F) -> Result<Summary>
    where
        F: Fn(&Path, &CancelToken) -> Result<FileCounts> + Sync + Send,
    {
        if files.is_empty() {
            return Err(WordTallyError::NothingToProcess);
        }

        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Scanning")
        } else {
            ProgressBar::hidden()
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("wordtally-worker-{}", i))
            .build()?;

        debug!(jobs = self.jobs, files = files.len(), "dispatching scans");

        let sink = OutcomeSink::new();

        pool.install(|| {
            files.par_iter().for_each(|path| {
                let outcome = scan_one(path, cancel, &scanner);
                if let Outcome::Failed(ref err) = outcome {
                    if !err.is_cancelled() {
                        pb.suspend(|| warn!(file = %err.file_name, error = %err.message, "scan failed"));
                    }
                }
                sink.push(outcome);
                pb.inc(1);
            });
        });

        pb.finish_and_clear();

        if cancel.is_cancelled() {
            info!(collected = sink.len(), "run cancelled, reporting partial results");
        }

        Ok(Summary::from_outcomes(sink.into_outcomes()))
    }
}

/// 扫描单个文件，将任何失败转换为 `ScanError`
fn scan_one<F>(path: &Path, cancel: &CancelToken, scanner: &F) -> Outcome
where
    F: Fn(&Path, &CancelToken) -> Result<FileCounts>,
{
    let file_name = display_name(path);

    // 检查点：取消后不再启动新的扫描
    if cancel.is_cancelled() {
        debug!(file = %file_name, "not started, cancelled");
        return Outcome::Failed(ScanError::cancelled(file_name));
    }

    debug!(file = %file_name, "scan started");
    match scanner(path, cancel) {
        Ok(counts) => {
            debug!(file = %file_name, lines = counts.lines, words = counts.words, "scan finished");
            Outcome::Scanned(ScanResult::new(file_name, counts))
        }
        Err(e) => {
            if e.is_cancelled() {
                debug!(file = %file_name, "scan interrupted by cancellation");
            }
            Outcome::Failed(ScanError::from_error(file_name, &e))
        }
    }
}

/// 报告中使用的文件名（不含目录）
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
