mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ConversionSettings, ResolverSettings, ServerSettings, Settings, TranscriptionSettings,
};
