/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::location::PageLocation;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use tracing::warn;

/// Encodes source text for the `#code/` fragment of a shareable URL.
///
/// Implementations must round-trip arbitrary Unicode and produce output that
/// is safe inside a URL fragment without further escaping.
pub trait TextCodec {
    fn compress(&self, text: &str) -> String;

    /// Returns `None` when `data` was not produced by this codec.
    fn decompress(&self, data: &str) -> Option<String>;
}

/// URL-safe base64 of the UTF-8 text, without padding.
///
/// It does not compress; hosts that share links with the hosted playground
/// plug in their own codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl TextCodec for Base64Codec {
    fn compress(&self, text: &str) -> String {
        URL_SAFE_NO_PAD.encode(text.as_bytes())
    }

    fn decompress(&self, data: &str) -> Option<String> {
        let bytes = URL_SAFE_NO_PAD.decode(data.as_bytes()).ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// Pick the code a sandbox opens with.
///
/// `#src=<uri-encoded text>` wins, then `#code/<codec data>`; otherwise, or
/// when the fragment cannot be decoded, `default_text` is used.
#[must_use]
pub fn initial_code(default_text: &str, location: &PageLocation, codec: &dyn TextCodec) -> String {
    let hash = location.hash();

    if let Some(encoded) = hash.strip_prefix("src=") {
        return percent_decode_str(encoded)
            .decode_utf8_lossy()
            .trim()
            .to_string();
    }

    if let Some(data) = hash.strip_prefix("code/") {
        match codec.decompress(data.trim()) {
            Some(code) => return code,
            None => warn!("could not decode the code fragment, using the default text"),
        }
    }

    default_text.to_string()
}
