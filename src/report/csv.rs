//! # CSV 报告
//!
//! 分号分隔；含分隔符、引号或换行的字段用双引号包裹，内部引号加倍。

use crate::error::{Result, WordTallyError};
use crate::models::Summary;

const HEADER: [&str; 3] = ["Arquivo", "Linhas", "Palavras"];

/// 报告统一使用的写入器设置
fn writer_over(buf: Vec<u8>) -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf)
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| WordTallyError::CsvError(e.into_error().into()))
}

/// 渲染 CSV 报告
pub fn render(summary: &Summary) -> Result<String> {
    let mut wtr = writer_over(Vec::new());

    wtr.write_record(HEADER)?;
    for entry in &summary.entries {
        wtr.serialize(entry)?;
    }
    wtr.write_record([
        "TOTAL".to_string(),
        summary.total_lines.to_string(),
        summary.total_words.to_string(),
    ])?;

    let mut bytes = finish(wtr)?;

    if summary.has_errors() {
        // 空行无法作为记录写出，直接追加到缓冲后继续写入
        bytes.push(b'\n');

        let mut wtr = writer_over(bytes);
        wtr.write_record(["Erros", ""])?;
        for error in &summary.errors {
            wtr.write_record([error.to_string(), String::new()])?;
        }
        bytes = finish(wtr)?;
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordTallyError;
    use crate::models::{Outcome, ScanError, ScanResult};
    use crate::scanner::FileCounts;

    fn ok(name: &str, lines: u64, words: u64) -> Outcome {
        Outcome::Scanned(ScanResult::new(name, FileCounts { lines, words }))
    }

    #[test]
    fn test_render_plain() {
        let summary = Summary::from_outcomes(vec![ok("b.txt", 2, 3), ok("a.txt", 1, 1)]);
        assert_eq!(
            render(&summary).unwrap(),
            "Arquivo;Linhas;Palavras\na.txt;1;1\nb.txt;2;3\nTOTAL;3;4\n"
        );
    }

    #[test]
    fn test_render_quotes_special_fields() {
        let summary = Summary::from_outcomes(vec![
            ok("semi;colon.txt", 1, 1),
            ok("say \"hi\".txt", 1, 1),
            ok("plain, comma.txt", 1, 1),
        ]);
        assert_eq!(
            render(&summary).unwrap(),
            "Arquivo;Linhas;Palavras\n\
             plain, comma.txt;1;1\n\
             \"say \"\"hi\"\".txt\";1;1\n\
             \"semi;colon.txt\";1;1\n\
             TOTAL;3;3\n"
        );
    }

    #[test]
    fn test_render_errors_section() {
        let missing = WordTallyError::DirectoryNotFound {
            path: "x;y".to_string(),
        };
        let summary = Summary::from_outcomes(vec![
            ok("a.txt", 1, 2),
            Outcome::Failed(ScanError::cancelled("b.txt")),
            Outcome::Failed(ScanError::from_error("c.txt", &missing)),
        ]);
        assert_eq!(
            render(&summary).unwrap(),
            "Arquivo;Linhas;Palavras\n\
             a.txt;1;2\n\
             TOTAL;1;2\n\
             \n\
             Erros;\n\
             b.txt: operação cancelada.;\n\
             \"c.txt: Directory not found: x;y\";\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&Summary::default()).unwrap(),
            "Arquivo;Linhas;Palavras\nTOTAL;0;0\n"
        );
    }
}
