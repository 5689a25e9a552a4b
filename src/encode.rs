use byteorder::ByteOrder;

use crate::data_encoding::DataEncoding;
use crate::mseed_error::MSeedError;
use crate::{steim1, steim2};

/// Input sample buffer for packing.  The variant is the record's sample
/// type: text, 32-bit integer, 32-bit float or 64-bit float.
#[derive(Debug, Clone)]
pub enum DataSamples<'a> {
    Text(&'a [u8]),
    Int32(&'a [i32]),
    Float32(&'a [f32]),
    Float64(&'a [f64]),
}

impl DataSamples<'_> {
    pub fn len(&self) -> usize {
        match self {
            DataSamples::Text(v) => v.len(),
            DataSamples::Int32(v) => v.len(),
            DataSamples::Float32(v) => v.len(),
            DataSamples::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes per sample in the input buffer.
    pub fn sample_size(&self) -> usize {
        match self {
            DataSamples::Text(_) => 1,
            DataSamples::Int32(_) => 4,
            DataSamples::Float32(_) => 4,
            DataSamples::Float64(_) => 8,
        }
    }

    /// Single character sample type code used in diagnostics.
    pub fn type_char(&self) -> char {
        match self {
            DataSamples::Text(_) => 't',
            DataSamples::Int32(_) => 'i',
            DataSamples::Float32(_) => 'f',
            DataSamples::Float64(_) => 'd',
        }
    }
}

/// Encode samples starting at index `from` into `dest`, stopping at
/// whichever of the two buffers runs out first.
///
/// Returns (samples consumed, bytes written).  The generic byte order
/// applies to the fixed-size encodings; Steim frames are big endian
/// regardless of record format.
pub(crate) fn pack_data<E: ByteOrder>(
    samples: &DataSamples,
    from: usize,
    encoding: DataEncoding,
    dest: &mut [u8],
) -> Result<(usize, usize), MSeedError> {
    let mismatch = || MSeedError::UnsupportedSampleType(samples.type_char(), encoding.value());

    match encoding {
        DataEncoding::Text => {
            let src = match samples {
                DataSamples::Text(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            if dest.is_empty() {
                return Err(MSeedError::BufferTooSmall(0, 1, "text encoding"));
            }
            let n = src.len().min(dest.len());
            dest[..n].copy_from_slice(&src[..n]);
            Ok((n, n))
        }
        DataEncoding::Int16 => {
            let src = match samples {
                DataSamples::Int32(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            if dest.len() < 2 {
                return Err(MSeedError::BufferTooSmall(dest.len(), 2, "INT16 encoding"));
            }
            let mut written = 0;
            let mut count = 0;
            for &sample in src {
                if written + 2 > dest.len() {
                    break;
                }
                if sample > i16::MAX as i32 || sample < i16::MIN as i32 {
                    return Err(MSeedError::SampleOutOfRange(sample, "INT16"));
                }
                E::write_i16(&mut dest[written..written + 2], sample as i16);
                written += 2;
                count += 1;
            }
            Ok((count, written))
        }
        DataEncoding::Int32 => {
            let src = match samples {
                DataSamples::Int32(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            if dest.len() < 4 {
                return Err(MSeedError::BufferTooSmall(dest.len(), 4, "INT32 encoding"));
            }
            let mut written = 0;
            let mut count = 0;
            for &sample in src {
                if written + 4 > dest.len() {
                    break;
                }
                E::write_i32(&mut dest[written..written + 4], sample);
                written += 4;
                count += 1;
            }
            Ok((count, written))
        }
        DataEncoding::Float32 => {
            let src = match samples {
                DataSamples::Float32(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            if dest.len() < 4 {
                return Err(MSeedError::BufferTooSmall(dest.len(), 4, "FLOAT32 encoding"));
            }
            let mut written = 0;
            let mut count = 0;
            for &sample in src {
                if written + 4 > dest.len() {
                    break;
                }
                E::write_u32(&mut dest[written..written + 4], sample.to_bits());
                written += 4;
                count += 1;
            }
            Ok((count, written))
        }
        DataEncoding::Float64 => {
            let src = match samples {
                DataSamples::Float64(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            if dest.len() < 8 {
                return Err(MSeedError::BufferTooSmall(dest.len(), 8, "FLOAT64 encoding"));
            }
            let mut written = 0;
            let mut count = 0;
            for &sample in src {
                if written + 8 > dest.len() {
                    break;
                }
                E::write_u64(&mut dest[written..written + 8], sample.to_bits());
                written += 8;
                count += 1;
            }
            Ok((count, written))
        }
        DataEncoding::Steim1 => {
            let src = match samples {
                DataSamples::Int32(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            steim1::encode(src, dest)
        }
        DataEncoding::Steim2 => {
            let src = match samples {
                DataSamples::Int32(v) => &v[from..],
                _ => return Err(mismatch()),
            };
            steim2::encode(src, dest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn text_copies_bytes() {
        let samples = DataSamples::Text(b"hello miniSEED");
        let mut dest = [0u8; 8];
        let (n, written) =
            pack_data::<LittleEndian>(&samples, 0, DataEncoding::Text, &mut dest).unwrap();
        assert_eq!(n, 8);
        assert_eq!(written, 8);
        assert_eq!(&dest, b"hello mi");

        let (n, written) =
            pack_data::<LittleEndian>(&samples, 8, DataEncoding::Text, &mut dest).unwrap();
        assert_eq!(n, 6);
        assert_eq!(written, 6);
        assert_eq!(&dest[..6], b"niSEED");
    }

    #[test]
    fn int16_endianness_and_range() {
        let data = [1, -2, 300];
        let samples = DataSamples::Int32(&data);
        let mut dest = [0u8; 6];
        let (n, written) =
            pack_data::<BigEndian>(&samples, 0, DataEncoding::Int16, &mut dest).unwrap();
        assert_eq!((n, written), (3, 6));
        assert_eq!(dest, [0, 1, 0xff, 0xfe, 0x01, 0x2c]);

        let mut dest = [0u8; 6];
        let (n, written) =
            pack_data::<LittleEndian>(&samples, 0, DataEncoding::Int16, &mut dest).unwrap();
        assert_eq!((n, written), (3, 6));
        assert_eq!(dest, [1, 0, 0xfe, 0xff, 0x2c, 0x01]);

        let toobig = [40000];
        let samples = DataSamples::Int32(&toobig);
        let mut dest = [0u8; 2];
        assert!(pack_data::<BigEndian>(&samples, 0, DataEncoding::Int16, &mut dest).is_err());
    }

    #[test]
    fn int32_bounded_by_dest() {
        let data = [1, 2, 3, 4, 5];
        let samples = DataSamples::Int32(&data);
        let mut dest = [0u8; 11];
        let (n, written) =
            pack_data::<LittleEndian>(&samples, 0, DataEncoding::Int32, &mut dest).unwrap();
        assert_eq!((n, written), (2, 8));
        assert_eq!(&dest[..8], [1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn floats_bit_preserving() {
        let data = [1.5f32, -0.0];
        let samples = DataSamples::Float32(&data);
        let mut dest = [0u8; 8];
        pack_data::<LittleEndian>(&samples, 0, DataEncoding::Float32, &mut dest).unwrap();
        assert_eq!(&dest[..4], 1.5f32.to_bits().to_le_bytes());
        assert_eq!(&dest[4..], (-0.0f32).to_bits().to_le_bytes());

        let data = [2.25f64];
        let samples = DataSamples::Float64(&data);
        let mut dest = [0u8; 8];
        pack_data::<BigEndian>(&samples, 0, DataEncoding::Float64, &mut dest).unwrap();
        assert_eq!(dest, 2.25f64.to_bits().to_be_bytes());
    }

    #[test]
    fn sample_type_mismatch_rejected() {
        let data = [1.0f32];
        let samples = DataSamples::Float32(&data);
        let mut dest = [0u8; 64];
        assert!(pack_data::<BigEndian>(&samples, 0, DataEncoding::Int32, &mut dest).is_err());
        assert!(pack_data::<BigEndian>(&samples, 0, DataEncoding::Steim2, &mut dest).is_err());
        let samples = DataSamples::Text(b"x");
        assert!(pack_data::<BigEndian>(&samples, 0, DataEncoding::Float32, &mut dest).is_err());
    }
}
