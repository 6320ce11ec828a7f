//! PEM framing around DER payloads

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{Error, Result};

const LINE_WIDTH: usize = 64;

/// Wrap DER bytes in a PEM envelope with the given label.
///
/// The body is Base64, folded at 64 columns, every line (including the
/// trailing END line) terminated by a newline.
pub fn encode_pem(label: &str, der: &[u8]) -> String {
    let body = BASE64.encode(der);
    let mut out = String::with_capacity(body.len() + 2 * label.len() + 40);
    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    for chunk in body.as_bytes().chunks(LINE_WIDTH) {
        // Base64 output is ASCII, so the chunk is valid UTF-8.
        out.push_str(std::str::from_utf8(chunk).expect("base64 body is ASCII"));
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Extract the DER bytes from a PEM envelope.
///
/// Lines are split on CR/LF; blank lines and the `-----` marker lines are
/// dropped, everything else is concatenated and Base64-decoded.
pub fn decode_pem(pem: &str) -> Result<Vec<u8>> {
    let mut body = String::new();
    for line in pem.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() || line.starts_with("-----") {
            continue;
        }
        body.push_str(line);
    }
    if body.is_empty() {
        return Err(Error::encoding("PEM envelope", "no body lines".to_string()));
    }
    BASE64
        .decode(body.as_bytes())
        .map_err(|e| Error::encoding("PEM envelope", format!("invalid base64 body: {}", e)))
}
