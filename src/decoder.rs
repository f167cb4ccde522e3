use crate::app::ports::FetchResponse;
use crate::error::{ImportError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turn a fetched body into document text.
///
/// Decompression itself happens in the transport, which strips
/// `Content-Encoding` once it has inflated the body. Anything still encoded
/// here is an encoding the transport could not handle, or a gzip stream the
/// server sent without declaring it.
pub fn decode_body(response: &FetchResponse) -> Result<String> {
    if let Some(encoding) = response.content_encoding.as_deref() {
        let encoding = encoding.trim();
        if !encoding.is_empty() && !encoding.eq_ignore_ascii_case("identity") {
            return Err(ImportError::Decode(format!(
                "unsupported content encoding '{encoding}'"
            )));
        }
    }

    if response.bytes.starts_with(&GZIP_MAGIC) {
        return Err(ImportError::Decode(
            "body is gzip-compressed but was not declared as such".into(),
        ));
    }

    Ok(String::from_utf8_lossy(&response.bytes).into_owned())
}
