pub mod api_error;
pub mod api_response;
pub mod from_request;
