//! Input decoding helpers.

use std::borrow::Cow;

/// Decode the raw bytes of a style dump to a string.
///
/// Topaz containers predate consistent UTF-8: try UTF-8 first (BOM handled
/// by encoding_rs), then fall back to Windows-1252, the usual encoding of
/// old ebooks.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_passthrough() {
        let decoded = decode_text("style.class=Caf\u{e9}".as_bytes());
        assert_eq!(decoded, "style.class=Café");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // 0xE9 is 'é' in CP1252 and malformed as UTF-8
        let decoded = decode_text(b"style.class=Caf\xe9");
        assert_eq!(decoded, "style.class=Café");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let decoded = decode_text(b"\xef\xbb\xbfstyle.class=Foo");
        assert_eq!(decoded, "style.class=Foo");
    }
}
