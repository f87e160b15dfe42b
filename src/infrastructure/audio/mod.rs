mod openai_whisper_engine;
mod staged_audio;

pub use openai_whisper_engine::{OpenAiWhisperEngine, WhisperOptions};
pub use staged_audio::StagedAudio;
