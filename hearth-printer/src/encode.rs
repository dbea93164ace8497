//! ESC/POS command encoding
//!
//! Maps directives to fixed device control-byte sequences. Encoding is pure
//! and total: every directive variant has exactly one byte sequence, and
//! concatenating the encoded directives of a document yields the exact byte
//! stream sent to the device. Nothing is reordered, merged, or dropped.

use crate::document::{Directive, Document};
use crate::encoding::to_codepage;

// ESC a n - Select justification
const ALIGN_CENTER: [u8; 3] = [0x1B, 0x61, 0x01];
const ALIGN_LEFT: [u8; 3] = [0x1B, 0x61, 0x00];

// ESC E n - Turn emphasized mode on/off
const BOLD_ON: [u8; 3] = [0x1B, 0x45, 0x01];
const BOLD_OFF: [u8; 3] = [0x1B, 0x45, 0x00];

// GS ! n - Select character size
const DOUBLE_HEIGHT_ON: [u8; 3] = [0x1D, 0x21, 0x01];
const DOUBLE_HEIGHT_OFF: [u8; 3] = [0x1D, 0x21, 0x00];

// LF
const LINE_FEED: [u8; 1] = [0x0A];

// GS V 0 - Full cut
const FULL_CUT: [u8; 3] = [0x1D, 0x56, 0x00];

// ESC @ - Initialize printer
pub(crate) const INIT: [u8; 2] = [0x1B, 0x40];

// ESC t 16 - Select WPC1252 code page
pub(crate) const CODEPAGE_WPC1252: [u8; 3] = [0x1B, 0x74, 16];

/// Encode a single directive into the buffer
pub fn encode_directive(directive: &Directive, buf: &mut Vec<u8>) {
    match directive {
        Directive::Text(s) => buf.extend_from_slice(&to_codepage(s)),
        Directive::Newline => buf.extend_from_slice(&LINE_FEED),
        Directive::AlignCenter => buf.extend_from_slice(&ALIGN_CENTER),
        Directive::AlignLeft => buf.extend_from_slice(&ALIGN_LEFT),
        Directive::Bold(true) => buf.extend_from_slice(&BOLD_ON),
        Directive::Bold(false) => buf.extend_from_slice(&BOLD_OFF),
        Directive::DoubleHeight(true) => buf.extend_from_slice(&DOUBLE_HEIGHT_ON),
        Directive::DoubleHeight(false) => buf.extend_from_slice(&DOUBLE_HEIGHT_OFF),
        Directive::Cut => buf.extend_from_slice(&FULL_CUT),
    }
}

/// Encode a whole document to the device byte stream
pub fn encode_document(document: &Document) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1024);
    for directive in document.directives() {
        encode_directive(directive, &mut buf);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentBuilder;

    fn encode_one(directive: &Directive) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_directive(directive, &mut buf);
        buf
    }

    #[test]
    fn test_directive_byte_table() {
        assert_eq!(encode_one(&Directive::AlignCenter), [0x1B, 0x61, 0x01]);
        assert_eq!(encode_one(&Directive::AlignLeft), [0x1B, 0x61, 0x00]);
        assert_eq!(encode_one(&Directive::Bold(true)), [0x1B, 0x45, 0x01]);
        assert_eq!(encode_one(&Directive::Bold(false)), [0x1B, 0x45, 0x00]);
        assert_eq!(encode_one(&Directive::DoubleHeight(true)), [0x1D, 0x21, 0x01]);
        assert_eq!(encode_one(&Directive::DoubleHeight(false)), [0x1D, 0x21, 0x00]);
        assert_eq!(encode_one(&Directive::Newline), [0x0A]);
        assert_eq!(encode_one(&Directive::Cut), [0x1D, 0x56, 0x00]);
    }

    #[test]
    fn test_text_uses_codepage_bytes() {
        assert_eq!(encode_one(&Directive::Text("abc".to_string())), b"abc");
        // ç = 0xE7, ã = 0xE3 in Windows-1252
        assert_eq!(
            encode_one(&Directive::Text("Ação".to_string())),
            [0x41, 0xE7, 0xE3, 0x6F]
        );
    }

    #[test]
    fn test_document_encoding_is_ordered_concatenation() {
        let mut b = DocumentBuilder::new(32);
        b.center().bold().text("hi").bold_off().cut();
        let doc = b.build();

        let mut expected = Vec::new();
        for directive in doc.directives() {
            encode_directive(directive, &mut expected);
        }

        assert_eq!(encode_document(&doc), expected);
        assert_eq!(
            encode_document(&doc),
            [
                0x1B, 0x61, 0x01, // center
                0x1B, 0x45, 0x01, // bold on
                b'h', b'i',
                0x1B, 0x45, 0x00, // bold off
                0x1D, 0x56, 0x00, // cut
            ]
        );
    }

    #[test]
    fn test_encoding_is_deterministic_and_length_additive() {
        let mut b = DocumentBuilder::new(32);
        b.line("one").line("two").cut();
        let doc = b.build();

        let first = encode_document(&doc);
        let second = encode_document(&doc);
        assert_eq!(first, second);

        let sum: usize = doc
            .directives()
            .iter()
            .map(|d| encode_one(d).len())
            .sum();
        assert_eq!(first.len(), sum);
    }
}
