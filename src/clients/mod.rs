pub mod video_api;

pub use video_api::{VideoApiClient, VideoApiError, VideoStatus};
