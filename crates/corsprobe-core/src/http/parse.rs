//! Parse raw HTTP response header lines into a HeaderMap.

use super::HeaderMap;

/// Decode one raw header line. Bytes that are not UTF-8 are read as
/// ISO-8859-1 so the line is never lost.
pub(crate) fn decode_header_line(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(s) => s.trim_end().to_string(),
        Err(_) => data
            .iter()
            .map(|&b| char::from(b))
            .collect::<String>()
            .trim_end()
            .to_string(),
    }
}

/// Parse collected header lines into a HeaderMap.
///
/// With redirects followed, curl reports the header block of every hop; each
/// status line starts a new block, so only the final response's headers remain.
pub(crate) fn parse_header_lines(lines: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            headers.push(name, value.trim());
        }
    }
    headers
}
