use std::fmt;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Maximum samples representable by one 64-byte Steim-1 frame (15 words of
/// four 8-bit differences).
pub const STEIM1_FRAME_MAX_SAMPLES: u32 = 60;

/// Maximum samples representable by one 64-byte Steim-2 frame (15 words of
/// seven 4-bit differences).
pub const STEIM2_FRAME_MAX_SAMPLES: u32 = 105;

/// Data encodings supported for packing.
/// ```text
/// 0   Text, UTF-8 allowed, use ASCII for maximum portability, no structure defined
/// 1   16-bit integer (two's complement)
/// 3   32-bit integer (two's complement)
/// 4   32-bit floats (IEEE float)
/// 5   64-bit floats (IEEE double)
/// 10  Steim-1 integer compression, big endian byte order
/// 11  Steim-2 integer compression, big endian byte order
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    Text,
    Int16,
    Int32,
    Float32,
    Float64,
    Steim1,
    Steim2,
}

impl DataEncoding {
    /// Creates a DataEncoding from the format's integer code, None for
    /// codes the packer cannot produce.
    pub fn from_int(val: u8) -> Option<DataEncoding> {
        match val {
            0 => Some(DataEncoding::Text),
            1 => Some(DataEncoding::Int16),
            3 => Some(DataEncoding::Int32),
            4 => Some(DataEncoding::Float32),
            5 => Some(DataEncoding::Float64),
            10 => Some(DataEncoding::Steim1),
            11 => Some(DataEncoding::Steim2),
            _ => None,
        }
    }

    /// The integer code of the encoding as stored in record headers.
    pub fn value(&self) -> u8 {
        match self {
            DataEncoding::Text => 0,
            DataEncoding::Int16 => 1,
            DataEncoding::Int32 => 3,
            DataEncoding::Float32 => 4,
            DataEncoding::Float64 => 5,
            DataEncoding::Steim1 => 10,
            DataEncoding::Steim2 => 11,
        }
    }

    /// Bytes per encoded sample for the fixed-size encodings, None for the
    /// compressed ones.
    pub fn sample_size(&self) -> Option<usize> {
        match self {
            DataEncoding::Text => Some(1),
            DataEncoding::Int16 => Some(2),
            DataEncoding::Int32 => Some(4),
            DataEncoding::Float32 => Some(4),
            DataEncoding::Float64 => Some(8),
            DataEncoding::Steim1 | DataEncoding::Steim2 => None,
        }
    }

    /// Upper bound on samples that fit in `payload_bytes` of encoded data.
    pub fn max_samples(&self, payload_bytes: usize) -> usize {
        match self {
            DataEncoding::Steim1 => (payload_bytes / 64) * STEIM1_FRAME_MAX_SAMPLES as usize,
            DataEncoding::Steim2 => (payload_bytes / 64) * STEIM2_FRAME_MAX_SAMPLES as usize,
            DataEncoding::Text => payload_bytes,
            DataEncoding::Int16 => payload_bytes / 2,
            DataEncoding::Int32 | DataEncoding::Float32 => payload_bytes / 4,
            DataEncoding::Float64 => payload_bytes / 8,
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DataEncoding::Text => write!(
                f,
                "Text, UTF-8 allowed, use ASCII for maximum portability, no structure defined"
            ),
            DataEncoding::Int16 => write!(f, "16-bit integer (two's complement)"),
            DataEncoding::Int32 => write!(f, "32-bit integer (two's complement)"),
            DataEncoding::Float32 => write!(f, "32-bit floats (IEEE float)"),
            DataEncoding::Float64 => write!(f, "64-bit floats (IEEE double)"),
            DataEncoding::Steim1 => write!(f, "Steim-1 integer compression, big endian byte order"),
            DataEncoding::Steim2 => write!(f, "Steim-2 integer compression, big endian byte order"),
        }
    }
}
