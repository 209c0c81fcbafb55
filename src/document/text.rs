/// Result of decoding raw bytes as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Binary { len: usize },
}

/// Decodes `bytes` as UTF-8. With `lossy`, invalid sequences are replaced
/// instead of turning the whole input into [`Decoded::Binary`].
pub fn decode_text(bytes: &[u8], lossy: bool) -> Decoded {
    if lossy {
        return Decoded::Text(lossy_text(bytes));
    }
    match std::str::from_utf8(bytes) {
        Ok(text) if !looks_binary(text) => Decoded::Text(text.to_owned()),
        _ => Decoded::Binary { len: bytes.len() },
    }
}

pub(super) fn lossy_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// NUL never shows up in text files we can display.
fn looks_binary(text: &str) -> bool {
    text.contains('\0')
}

pub(super) fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::{Decoded, decode_text, split_lines};

    #[test]
    fn strict_decode_reports_binary_explicitly() {
        assert_eq!(
            decode_text(&[0xff, 0xfe, 0x00, 0x41], false),
            Decoded::Binary { len: 4 }
        );
        assert_eq!(
            decode_text(b"plain\0bytes", false),
            Decoded::Binary { len: 11 }
        );
    }

    #[test]
    fn lossy_decode_keeps_valid_text_around_bad_bytes() {
        let Decoded::Text(text) = decode_text(b"ok \xff end", true) else {
            panic!("lossy decode should always yield text");
        };
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" end"));
    }

    #[test]
    fn split_lines_handles_crlf_and_bom() {
        let lines = split_lines("\u{feff}first\r\nsecond\n\nfourth");
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }
}
