use base64::prelude::*;
use hyamdral_common::error::{HyamdralError, Result};
use std::path::Path;
use tracing::debug;

/// Hard ceiling for inlined images: records embed their images as data
/// URIs, so oversized files would bloat the content tree for every
/// reader.
pub const MAX_IMAGE_BYTES: u64 = 1_048_576;

const TOO_LARGE_MESSAGE: &str = "Зургийн хэмжээ 1MB-аас бага байх ёстой.";

/// Encodes a picked file as a `data:{mime};base64,...` URI, ready to be
/// written into a pending form field.
///
/// The size ceiling is checked against file metadata before any byte is
/// read, so an oversized file is rejected without decode work and the
/// caller's pending field stays as it was. Completion is asynchronous:
/// the encoded value only exists once the future resolves, never at call
/// time. No compression, resizing or content validation happens here —
/// the MIME type comes from the file extension alone.
pub async fn inline_image(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(HyamdralError::Media(TOO_LARGE_MESSAGE.to_owned()));
    }

    let bytes = tokio::fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    debug!(path = %path.display(), bytes = bytes.len(), %mime, "inlined image");
    Ok(format!("data:{mime};base64,{}", BASE64_STANDARD.encode(&bytes)))
}
