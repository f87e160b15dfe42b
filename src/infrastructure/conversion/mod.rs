mod freeconvert_client;
mod job_payload;

pub use freeconvert_client::{ConversionOptions, FreeConvertClient};
