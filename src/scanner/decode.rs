//! # 文本流解码
//!
//! 按行流式读取文本，自动识别字节序标记 (BOM)。
//!
//! ## 行为
//! - 识别 UTF-8 (EF BB BF)、UTF-32 LE (FF FE 00 00)、UTF-32 BE (00 00 FE FF)、
//!   UTF-16 LE (FF FE)、UTF-16 BE (FE FF) 的 BOM，BOM 不计入内容
//! - 无 BOM 时按 UTF-8 解码，非法序列替换为 U+FFFD
//! - `\n`、`\r\n`、单独的 `\r` 均视为行终止符
//! - 末尾无终止符的非空行计为一行；末尾终止符不会产生额外空行
//!
//! ## 依赖关系
//! - 被 `scanner/mod.rs` 使用
//! - 仅使用标准库 I/O

use std::io::{self, BufRead, BufReader, Chain, Cursor, Read};

/// 文本编码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl TextEncoding {
    /// 根据流开头的字节识别编码，返回 (编码, BOM 字节数)
    ///
    /// UTF-32 LE 的 BOM 以 UTF-16 LE 的 BOM 开头，必须先匹配。
    pub fn detect(prefix: &[u8]) -> (Self, usize) {
        match prefix {
            [0xFF, 0xFE, 0x00, 0x00, ..] => (TextEncoding::Utf32Le, 4),
            [0x00, 0x00, 0xFE, 0xFF, ..] => (TextEncoding::Utf32Be, 4),
            [0xEF, 0xBB, 0xBF, ..] => (TextEncoding::Utf8, 3),
            [0xFF, 0xFE, ..] => (TextEncoding::Utf16Le, 2),
            [0xFE, 0xFF, ..] => (TextEncoding::Utf16Be, 2),
            _ => (TextEncoding::Utf8, 0),
        }
    }

    /// 定长码元的字节数；UTF-8 返回 `None`
    fn unit_width(self) -> Option<usize> {
        match self {
            TextEncoding::Utf8 => None,
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => Some(2),
            TextEncoding::Utf32Le | TextEncoding::Utf32Be => Some(4),
        }
    }
}

/// 逐行读取器
pub struct LineReader<R> {
    inner: BufReader<Chain<Cursor<Vec<u8>>, R>>,
    encoding: TextEncoding,
    bytes: Vec<u8>,
    units: Vec<u32>,
    pending_unit: Option<u32>,
}

impl<R: Read> LineReader<R> {
    /// 创建读取器，并消费可能存在的 BOM
    pub fn new(mut reader: R) -> io::Result<Self> {
        let mut prefix = [0u8; 4];
        let filled = read_up_to(&mut reader, &mut prefix)?;
        let (encoding, bom_len) = TextEncoding::detect(&prefix[..filled]);
        let leftover = prefix[bom_len..filled].to_vec();

        Ok(Self {
            inner: BufReader::new(Cursor::new(leftover).chain(reader)),
            encoding,
            bytes: Vec::new(),
            units: Vec::new(),
            pending_unit: None,
        })
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// 读取下一行（不含终止符），流结束时返回 `None`
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.encoding.unit_width() {
            None => self.next_utf8_line(),
            Some(width) => self.next_wide_line(width),
        }
    }

    fn next_utf8_line(&mut self) -> io::Result<Option<String>> {
        self.bytes.clear();
        let mut saw_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(saw_any.then(|| String::from_utf8_lossy(&self.bytes).into_owned()));
            }
            saw_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    self.bytes.extend_from_slice(&available[..pos]);
                    self.inner.consume(pos + 1);
                    if terminator == b'\r' {
                        self.skip_utf8_lf()?;
                    }
                    return Ok(Some(String::from_utf8_lossy(&self.bytes).into_owned()));
                }
                None => {
                    let len = available.len();
                    self.bytes.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }

    /// `\r` 之后紧跟的 `\n` 属于同一个终止符
    fn skip_utf8_lf(&mut self) -> io::Result<()> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    if buf.first() == Some(&b'\n') {
                        self.inner.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// UTF-16 / UTF-32 按定长码元读取
    fn next_wide_line(&mut self, width: usize) -> io::Result<Option<String>> {
        self.units.clear();
        let mut saw_any = false;

        while let Some(unit) = self.next_unit(width)? {
            saw_any = true;
            match unit {
                0x000A => return Ok(Some(self.decode_units())),
                0x000D => {
                    if let Some(next) = self.next_unit(width)? {
                        if next != 0x000A {
                            self.pending_unit = Some(next);
                        }
                    }
                    return Ok(Some(self.decode_units()));
                }
                other => self.units.push(other),
            }
        }

        Ok(saw_any.then(|| self.decode_units()))
    }

    /// 读取一个码元；末尾不足一个码元的字节被丢弃
    fn next_unit(&mut self, width: usize) -> io::Result<Option<u32>> {
        if let Some(unit) = self.pending_unit.take() {
            return Ok(Some(unit));
        }

        let mut raw = [0u8; 4];
        if read_up_to(&mut self.inner, &mut raw[..width])? < width {
            return Ok(None);
        }

        Ok(Some(match self.encoding {
            TextEncoding::Utf16Le => u16::from_le_bytes([raw[0], raw[1]]) as u32,
            TextEncoding::Utf16Be => u16::from_be_bytes([raw[0], raw[1]]) as u32,
            TextEncoding::Utf32Be => u32::from_be_bytes(raw),
            _ => u32::from_le_bytes(raw),
        }))
    }

    fn decode_units(&self) -> String {
        match self.encoding {
            TextEncoding::Utf32Le | TextEncoding::Utf32Be => self
                .units
                .iter()
                .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
            _ => char::decode_utf16(self.units.iter().map(|&u| u as u16))
                .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
        }
    }
}

/// 尽量填满 `buf`，返回实际读取的字节数（遇到 EOF 时可能不足）
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
