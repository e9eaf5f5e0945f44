use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;

static DATA_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*\bsrc\s*=\s*["'](data:[^"']+)["']"#).unwrap());

/// What the document-conversion collaborator yields: HTML-equivalent markup,
/// conversion diagnostics, and embedded images as self-contained data URIs.
#[derive(Debug, Clone)]
pub struct ConvertedMarkup {
    pub html: String,
    pub messages: Vec<String>,
    pub images: Vec<String>,
}

/// Upstream conversion boundary: one async call per document payload. The
/// extractor core awaits it once and then runs synchronously to completion.
#[allow(async_fn_in_trait)]
pub trait MarkupConverter {
    async fn convert(&self, payload: &[u8]) -> Result<ConvertedMarkup>;
}

/// Identity converter for payloads that already are HTML markup. Converters
/// for binary word-processor formats live outside this crate and implement
/// the same trait.
pub struct HtmlPassthrough;

impl MarkupConverter for HtmlPassthrough {
    async fn convert(&self, payload: &[u8]) -> Result<ConvertedMarkup> {
        let html = std::str::from_utf8(payload)
            .context("document is not UTF-8 markup")?
            .to_string();
        if !html.contains('<') {
            bail!("document contains no markup elements");
        }
        let images = DATA_URI_RE
            .captures_iter(&html)
            .map(|c| c[1].to_string())
            .collect();
        Ok(ConvertedMarkup {
            html,
            messages: Vec::new(),
            images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_accepts_markup() {
        let out = HtmlPassthrough.convert(b"<p>hi</p>").await.unwrap();
        assert_eq!(out.html, "<p>hi</p>");
        assert!(out.messages.is_empty());
        assert!(out.images.is_empty());
    }

    #[tokio::test]
    async fn passthrough_rejects_binary() {
        assert!(HtmlPassthrough.convert(&[0xff, 0xfe, 0x00]).await.is_err());
    }

    #[tokio::test]
    async fn passthrough_rejects_plain_text() {
        assert!(HtmlPassthrough.convert(b"just words").await.is_err());
    }

    #[tokio::test]
    async fn embedded_data_uris_harvested() {
        let html = "<p>x</p><img src=\"data:image/png;base64,AAAA\"><img src='http://x/y.png'>";
        let out = HtmlPassthrough.convert(html.as_bytes()).await.unwrap();
        assert_eq!(out.images, vec!["data:image/png;base64,AAAA"]);
    }
}
