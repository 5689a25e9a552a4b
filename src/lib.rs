//! A library for packing time series data into miniSEED 2 and miniSEED 3
//! records.
//!
//! See the miniSEED 3 specification at <https://docs.fdsn.org/projects/miniSEED3>
//! and the SEED 2.4 manual for the version 2 format.
//!
//! # Example
//!
//! ```
//! use mseedpack::{pack_records, DataSamples, PackFlags, PackRecord};
//! # fn main() -> Result<(), mseedpack::MSeedError> {
//! let samples: Vec<i32> = (0..500).map(|i| i * 3 % 101).collect();
//! let start = mseedpack::timestr_to_nstime("2012-01-01T00:00:00Z")?;
//! let msr = PackRecord::new(
//!     "FDSN:XX_TEST__B_H_Z",
//!     start,
//!     20.0,
//!     DataSamples::Int32(&samples),
//! );
//!
//! let mut out: Vec<u8> = Vec::new();
//! let (records, packed) = pack_records(
//!     &msr,
//!     |rec| out.extend_from_slice(rec),
//!     PackFlags::FLUSH_DATA,
//! )?;
//! assert_eq!(records, 1);
//! assert_eq!(packed, 500);
//! assert_eq!(&out[0..2], b"MS");
//! # Ok(())
//! # }
//! ```
mod data_encoding;
mod encode;
mod extra_headers;
mod fdsn_source_identifier;
mod header2;
mod header3;
mod mseed_error;
mod nstime;
mod pack;
mod rate;
mod steim1;
mod steim2;
mod steim_frame;

pub use crate::data_encoding::{
    DataEncoding, STEIM1_FRAME_MAX_SAMPLES, STEIM2_FRAME_MAX_SAMPLES,
};
pub use crate::encode::DataSamples;
pub use crate::extra_headers::ExtraHeaders;
pub use crate::fdsn_source_identifier::FdsnSourceIdentifier;
pub use crate::header2::{pack_header2, FIXED_HEADER2_SIZE};
pub use crate::header3::{pack_header3, CRC_OFFSET, FIXED_HEADER_SIZE};
pub use crate::mseed_error::MSeedError;
pub use crate::nstime::{
    nstime_to_time, sample_time, split_fsec, timestr_to_nstime, BrokenDownTime, NsTime, NSTMODULUS,
};
pub use crate::pack::{
    pack_records, repack_mseed2, repack_mseed3, PackFlags, PackRecord, RawRecord, CASTAGNOLI,
    DEFAULT_RECLEN, MAXRECLEN, MAXRECLEN_V2, MINRECLEN, MINRECLEN_V2,
};
pub use crate::rate::{gen_fact_mult, nominal_rate};
