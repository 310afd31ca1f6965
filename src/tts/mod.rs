//! Speech synthesis adapter.
//!
//! The synthesizer is the only component that performs network I/O; the
//! production implementation talks to the Google Translate TTS endpoint.

mod synthesizer;

pub use synthesizer::{GoogleTranslateTts, SpeechSynthesizer, SynthesisError};
