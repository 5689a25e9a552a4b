use chrono::ParseError;
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MSeedError {
    #[error("IO Error")]
    IOError(#[from] std::io::Error),
    #[error("cannot parse extra headers")]
    JsonError(#[from] serde_json::Error),
    #[error("date parsing error: `{0}`")]
    ParseError(#[from] ParseError),
    #[error("cannot parse {1} in FDSN source identifier `{0}`")]
    IdentifierParse(String, String),
    #[error("cannot map `{0}` to miniSEED 2 codes: net `{1}` sta `{2}` loc `{3}` chan `{4}`")]
    SeedCodes(String, String, String, String, String),
    #[error("record length {0} out of range for miniSEED {1}")]
    RecordLength(u32, u8),
    #[error("record length {0} is not a power of 2")]
    RecordLengthPowerOfTwo(u32),
    #[error("sample type `{0}` not supported for encoding `{1}`")]
    UnsupportedSampleType(char, u8),
    #[error("sample value {0} out of range for {1} encoding")]
    SampleOutOfRange(i32, &'static str),
    #[error("time value out of representable range: {0}")]
    TimeOutOfRange(i64),
    #[error("cannot represent sample rate {0} as factor and multiplier")]
    RateOutOfRange(f64),
    #[error("{0} bytes available, {1} needed for {2}")]
    BufferTooSmall(usize, usize, &'static str),
    #[error("too many samples ({0}) for a single {1} record")]
    TooManySamples(u64, &'static str),
    #[error("extra header entry malformed: {0}")]
    ExtraHeaderParse(String),
    #[error("source identifier too long: {0} bytes")]
    SidTooLong(usize),
    #[error("extra headers too long: {0} bytes")]
    ExtraHeadersTooLong(usize),
    #[error("missing raw record for repacking")]
    NoRawRecord,
    #[error("miniSEED compression error: `{0}`")]
    Compression(String),
}

/// Log a failure with its source identifier context and return it.
pub(crate) fn fail<T>(sid: &str, err: MSeedError) -> Result<T, MSeedError> {
    error!("{}: {}", sid, err);
    Err(err)
}

/// Log an error propagating out of a sub-operation, once, with the source
/// identifier context.
pub(crate) fn log_err<T>(result: Result<T, MSeedError>, sid: &str) -> Result<T, MSeedError> {
    if let Err(ref err) = result {
        error!("{}: {}", sid, err);
    }
    result
}
