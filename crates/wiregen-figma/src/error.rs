use thiserror::Error;

/// Error type for Figma API operations.
#[derive(Debug, Error)]
pub enum FigmaError {
  /// The API answered with a status outside the 2xx range.
  #[error("Figma API returned status {status} for {url}")]
  Status { status: u16, url: String },

  /// The request never produced a usable response (DNS, TLS, I/O).
  #[error("Figma API request failed: {0}")]
  Transport(String),

  /// The response body did not match the expected shape.
  #[error("Malformed Figma response: {0}")]
  Malformed(#[from] serde_json::Error),
}
