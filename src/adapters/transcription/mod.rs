//! Transcriber adapters.

mod mock_transcriber;

pub use mock_transcriber::{MockTranscriber, CANNED_UTTERANCES};
