//! Plaintext wire protocol spoken with the quote server.
//!
//! A request is a single line `"<SYM>,<user>\n"`. The response is an opaque text
//! blob of at most `RESPONSE_BUF_LEN` bytes which may carry NUL padding and a
//! trailing line terminator; `clean_response` strips both.
use crate::error::QuoteError;
use crate::symbol::Symbol;

/// Fixed synthetic user every request is issued for.
pub const USER_TAG: &str = "jdoe";
/// Size of the single read performed per request.
pub const RESPONSE_BUF_LEN: usize = 1024;

const PADDING: [u8; 2] = [b'\0', b'\n'];

/// Format the request line for `symbol` on behalf of `user`.
pub fn request_line(symbol: &Symbol, user: &str) -> String {
    format!("{},{}\n", symbol, user)
}

/// Parse a request line back into its symbol and user parts.
///
/// Surrounding whitespace and NUL padding are ignored.
pub fn parse_request_line(line: &str) -> Result<(Symbol, String), QuoteError> {
    let line = line.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    let (symbol, user) = line
        .split_once(',')
        .ok_or_else(|| QuoteError::Format(format!("expected \"<SYM>,<user>\", got {:?}", line)))?;
    if user.is_empty() || user.contains(',') {
        return Err(QuoteError::Format(format!("invalid user in {:?}", line)));
    }
    Ok((symbol.parse()?, user.to_string()))
}

/// Strip NUL padding and line terminators from both ends of a raw response.
///
/// Trailing buffer slack and the peer's `\n` are removed in one pass over the
/// combined set, so the result never starts or ends with either byte and
/// cleaning twice equals cleaning once. Invalid UTF-8 is replaced lossily.
pub fn clean_response(raw: &[u8]) -> String {
    let start = raw
        .iter()
        .position(|b| !PADDING.contains(b))
        .unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|b| !PADDING.contains(b))
        .map_or(start, |i| i + 1);
    String::from_utf8_lossy(&raw[start..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_layout() {
        let symbol: Symbol = "ABC".parse().unwrap();
        assert_eq!(request_line(&symbol, USER_TAG), "ABC,jdoe\n");
    }

    #[test]
    fn parses_request_lines() {
        let (symbol, user) = parse_request_line("QRS,jdoe\n").unwrap();
        assert_eq!(symbol.as_str(), "QRS");
        assert_eq!(user, "jdoe");

        let (symbol, _) = parse_request_line("AAA,bob\r\n\0\0").unwrap();
        assert_eq!(symbol.as_str(), "AAA");
    }

    #[test]
    fn rejects_malformed_request_lines() {
        assert!(matches!(parse_request_line("ABC"), Err(QuoteError::Format(_))));
        assert!(matches!(parse_request_line("ABC,"), Err(QuoteError::Format(_))));
        assert!(matches!(parse_request_line("abc,jdoe"), Err(QuoteError::InvalidSymbol(_))));
    }

    #[test]
    fn strips_nul_padding_and_newlines() {
        let mut buf = [0u8; RESPONSE_BUF_LEN];
        let reply = b"123.45,ABC,jdoe,1700000000000,key\n";
        buf[..reply.len()].copy_from_slice(reply);
        assert_eq!(clean_response(&buf), "123.45,ABC,jdoe,1700000000000,key");
        assert_eq!(clean_response(b"\n\0quote\0\n"), "quote");
        assert_eq!(clean_response(b"a\0\n"), "a");
    }

    #[test]
    fn keeps_interior_bytes() {
        assert_eq!(clean_response(b"line one\nline two\n"), "line one\nline two");
        assert_eq!(clean_response(b"a\0b"), "a\0b");
        assert_eq!(clean_response(b"quote\r\n"), "quote\r");
    }

    #[test]
    fn all_padding_cleans_to_empty() {
        assert_eq!(clean_response(&[0u8; RESPONSE_BUF_LEN]), "");
        assert_eq!(clean_response(b"\n\n\0"), "");
        assert_eq!(clean_response(b""), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples: [&[u8]; 6] = [
            b"ABC,jdoe\n\0\0",
            b"\0\0\n",
            b"a\0\n",
            b"\n\0x\n\0",
            b"plain",
            b"\xff\xfe\n",
        ];
        for raw in samples {
            let once = clean_response(raw);
            let twice = clean_response(once.as_bytes());
            assert_eq!(once, twice, "{raw:?}");
        }
    }
}
