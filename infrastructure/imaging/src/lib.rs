mod content_cropper;

pub use content_cropper::ContentCropper;
