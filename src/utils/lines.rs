//! Line delimited lists of byte buffers

/// Split `content` into the lines delimited by `\n`.
///
/// Lines are raw bytes and keep everything except the delimiter, including a trailing `\r`. A final `\n` ends the
/// last line and does not start an empty one, so `b"a\nb\n"` and `b"a\nb"` both hold two elements. An empty line in
/// the middle is an empty element.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }
    content.split(|byte| *byte == b'\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(b"a\nb\n"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(split_lines(b"a\nb"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(split_lines(b"a\n\nb\n"), vec![&b"a"[..], &b""[..], &b"b"[..]]);
        assert!(split_lines(b"").is_empty());
        assert!(split_lines(b"\n").is_empty());
        assert_eq!(split_lines(b"\n\n"), vec![&b""[..]]);
    }

    #[test]
    fn test_split_lines_keeps_bytes() {
        // Carriage returns are part of the element
        assert_eq!(split_lines(b"a\r\n"), vec![&b"a\r"[..]]);
        // Not UTF-8
        assert_eq!(
            split_lines(&[0xff, 0xfe, b'\n', 0x00, 0x80]),
            vec![&[0xff, 0xfe][..], &[0x00, 0x80][..]]
        );
    }
}
