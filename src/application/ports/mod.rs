mod audio_converter;
mod media_resolver;
mod transcription_engine;

pub use audio_converter::{AudioConverter, ConversionError};
pub use media_resolver::{MediaResolver, ResolverError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
