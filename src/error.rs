/// Main library error type
#[derive(Debug, thiserror::Error)]
pub enum SyndicationError {
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generated document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Character {character:?} cannot be represented in {encoding}")]
    Unmappable {
        encoding: &'static str,
        character: char,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Encoding {0} cannot be used for output")]
    UnsupportedEncoding(&'static str),

    #[error("Character {character:?} is not allowed in XML")]
    InvalidCharacter { character: char },

    #[error("Date {0} has no RFC-822 representation")]
    DateOutOfRange(chrono::DateTime<chrono::Utc>),
}

/// Custom result type for the library
pub type SyndicationResult<T> = Result<T, SyndicationError>;
