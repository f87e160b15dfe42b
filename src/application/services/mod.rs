mod conversion_pipeline;

pub use conversion_pipeline::{ConversionOutcome, ConversionPipeline, PipelineError};
