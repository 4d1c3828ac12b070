//! # 文本报告
//!
//! 面向阅读的逐行报告，格式需与既有报告逐字节一致。

use super::ReportContext;
use crate::models::Summary;

use std::fmt;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 文本报告视图
pub struct TextReport<'a> {
    pub summary: &'a Summary,
    pub ctx: &'a ReportContext,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "=== Relatório de Processamento ===")?;
        writeln!(f, "Diretório: {}", self.ctx.directory)?;
        writeln!(f, "Arquivos processados: {}", summary.file_count)?;
        writeln!(f, "Início: {}", self.ctx.started.format(TIME_FORMAT))?;
        writeln!(f, "Fim:    {}", self.ctx.finished.format(TIME_FORMAT))?;
        writeln!(f)?;

        for entry in &summary.entries {
            writeln!(f, "{} - {} linhas - {} palavras", entry.file_name, entry.lines, entry.words)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "TOTAL: {} linhas | {} palavras",
            summary.total_lines, summary.total_words
        )?;

        if summary.has_errors() {
            writeln!(f)?;
            writeln!(f, "Erros:")?;
            for error in &summary.errors {
                writeln!(f, " - {}", error)?;
            }
        }

        Ok(())
    }
}

pub fn render(summary: &Summary, ctx: &ReportContext) -> String {
    TextReport { summary, ctx }.to_string()
}
