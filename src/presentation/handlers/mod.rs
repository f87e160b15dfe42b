mod api_response;
mod convert;
mod health;
mod service_info;

pub use api_response::{
    ApiError, ApiResponse, CONVERSION_FAILED_MESSAGE, EMPTY_LINK_MESSAGE, INTERNAL_ERROR_MESSAGE,
    MISCONFIGURED_MESSAGE, MISSING_LINK_MESSAGE, RESOLUTION_FAILED_MESSAGE, SUCCESS_MESSAGE,
    TRANSCRIPTION_FAILED_MESSAGE,
};
pub use convert::{ConvertRequest, convert_handler};
pub use health::health_handler;
pub use service_info::service_info_handler;
