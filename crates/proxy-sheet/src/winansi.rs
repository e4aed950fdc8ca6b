//! WinAnsi text for the builtin Helvetica labels
//!
//! printpdf writes builtin-font text as UTF-8 bytes while declaring the font
//! `/WinAnsiEncoding`. Once the document is serialized, label strings are
//! re-encoded so accented names print as written.

use crate::types::Result;
use lopdf::content::Content;
use lopdf::{Document, Object};

/// Byte written for characters WinAnsi cannot represent
pub const REPLACEMENT: u8 = b'?';

/// Encode `text` as WinAnsi (cp1252). Returns the bytes and the number of
/// characters replaced with `?`.
pub fn encode_winansi(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = text
        .chars()
        .map(|ch| {
            winansi_byte(ch).unwrap_or_else(|| {
                replaced += 1;
                REPLACEMENT
            })
        })
        .collect();
    (bytes, replaced)
}

fn winansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '\u{0000}'..='\u{007F}' => ch as u8,
        '\u{00A0}'..='\u{00FF}' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Rewrite every `Tj`/`TJ` string operand of a serialized PDF from UTF-8 to
/// WinAnsi.
pub fn reencode_text(pdf: &[u8]) -> Result<Vec<u8>> {
    let mut doc = Document::load_mem(pdf)?;

    let page_ids: Vec<_> = doc.get_pages().into_values().collect();
    for page_id in page_ids {
        let mut content = doc.get_and_decode_page_content(page_id)?;
        if reencode_operations(&mut content) {
            doc.change_page_content(page_id, content.encode()?)?;
        }
    }

    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

fn reencode_operations(content: &mut Content) -> bool {
    let mut changed = false;
    for operation in &mut content.operations {
        match operation.operator.as_str() {
            "Tj" | "'" | "\"" => {
                for operand in &mut operation.operands {
                    changed |= reencode_string(operand);
                }
            }
            "TJ" => {
                for operand in &mut operation.operands {
                    if let Object::Array(items) = operand {
                        for item in items {
                            changed |= reencode_string(item);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    changed
}

fn reencode_string(object: &mut Object) -> bool {
    let Object::String(bytes, _) = object else {
        return false;
    };
    if bytes.is_ascii() {
        return false;
    }

    let (encoded, replaced) = encode_winansi(&String::from_utf8_lossy(bytes));
    if replaced > 0 {
        log::warn!("{} label characters have no WinAnsi glyph", replaced);
    }
    *bytes = encoded;
    true
}
