#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.empty")]
    Empty,
    #[error("image.invalid_encoding")]
    InvalidEncoding,
    #[error("image.decode_failed")]
    Decode,
    #[error("image.encode_failed")]
    Encode,
    #[error("image.task_failed")]
    TaskFailed,
}
