//! HTTP client for the Google Translate TTS endpoint.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

const ENDPOINT: &str = "https://translate.google.com/translate_tts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A synthesis attempt for one entry failed. Recoverable at per-entry
/// granularity: the driver logs it and moves on, and the missing output
/// file makes the next run retry naturally.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TTS service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("TTS service returned an empty body")]
    EmptyAudio,
}

/// External speech synthesis: text plus a spoken-language code in, encoded
/// audio bytes out. The driver is generic over this so tests can record
/// invocations without touching the network.
#[allow(async_fn_in_trait)]
pub trait SpeechSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SynthesisError>;
}

/// Synthesizer backed by the unauthenticated Google Translate TTS endpoint,
/// the same service the app's original asset sets were generated with.
/// Returns MP3 bytes.
pub struct GoogleTranslateTts {
    client: reqwest::Client,
}

impl GoogleTranslateTts {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, SynthesisError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    fn request_url(text: &str, lang: &str) -> String {
        format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&total=1&idx=0&textlen={}&q={}",
            ENDPOINT,
            urlencoding::encode(lang),
            text.chars().count(),
            urlencoding::encode(text)
        )
    }
}

impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SynthesisError> {
        let url = Self::request_url(text, lang);
        debug!("Requesting synthesis for \"{}\"", text);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::Status(status));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        debug!("Received {} bytes of audio", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_encodes_text_and_language() {
        let url = GoogleTranslateTts::request_url("... あ", "ja");
        assert!(url.starts_with(ENDPOINT));
        assert!(url.contains("tl=ja"));
        assert!(url.contains("textlen=5"));
        assert!(url.contains("q=...%20%E3%81%82"));
    }
}
