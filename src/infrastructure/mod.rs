pub mod audio;
pub mod conversion;
pub mod observability;
pub mod resolver;
