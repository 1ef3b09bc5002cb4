//! lz-string codec used by the hosted playground for `#code/` fragments

use playground_sandbox::TextCodec;

const URI_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$";

/// `compressToEncodedURIComponent` / `decompressFromEncodedURIComponent`
#[derive(Debug, Clone, Copy, Default)]
pub struct LzStringCodec;

impl TextCodec for LzStringCodec {
    fn compress(&self, text: &str) -> String {
        lz_str::compress_to_encoded_uri_component(text)
    }

    fn decompress(&self, data: &str) -> Option<String> {
        // Form-encoded links turn '+' into a space
        let data = data.replace(' ', "+");
        if data.is_empty() || !data.chars().all(|c| URI_ALPHABET.contains(c)) {
            return None;
        }
        let wide = lz_str::decompress_from_encoded_uri_component(data.as_str())?;
        String::from_utf16(&wide).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hosted_playground_output() {
        assert_eq!(LzStringCodec.compress("hello"), "BYUwNmD2Q");
        assert_eq!(LzStringCodec.compress("let a = 1"), "DYUwLgBAhhC8EEYg");
    }

    #[test]
    fn test_decompress_playground_fragment() {
        assert_eq!(
            LzStringCodec.decompress("PTAEAsEuBtoewFAFMAeAHOAnALqAxnAHYDOuAhiQO5KagC8oALAEwDcCQA").as_deref(),
            Some("// héllo\nexport const answer = 42;\n")
        );
    }

    #[test]
    fn test_round_trips_unicode() {
        let text = "const greeting = \"héllo 👋\";\n// ünïcödé\tand tabs";
        let encoded = LzStringCodec.compress(text);
        assert!(encoded.chars().all(|c| URI_ALPHABET.contains(c)));
        assert_eq!(LzStringCodec.decompress(&encoded).as_deref(), Some(text));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(LzStringCodec.decompress("%%%"), None);
        assert_eq!(LzStringCodec.decompress(""), None);
    }
}
