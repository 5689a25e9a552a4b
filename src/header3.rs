use byteorder::{ByteOrder, LittleEndian};

use crate::mseed_error::{fail, log_err, MSeedError};
use crate::nstime::nstime_to_time;
use crate::pack::{PackRecord, MAXRECLEN, MINRECLEN};

/// Size in bytes of the version 3 fixed header, excluding the identifier
/// and extra headers.
pub const FIXED_HEADER_SIZE: usize = 40;

/// Offset of the 4-byte CRC within the fixed header.
pub const CRC_OFFSET: usize = 28;

pub(crate) const NSEC_OFFSET: usize = 4;
pub(crate) const YEAR_OFFSET: usize = 8;
pub(crate) const DAY_OFFSET: usize = 10;
pub(crate) const HOUR_OFFSET: usize = 12;
pub(crate) const MIN_OFFSET: usize = 13;
pub(crate) const SEC_OFFSET: usize = 14;
pub(crate) const ENCODING_OFFSET: usize = 15;
pub(crate) const NUMSAMPLES_OFFSET: usize = 24;
pub(crate) const DATALENGTH_OFFSET: usize = 36;

/// Pack a miniSEED version 3 fixed header, identifier and extra headers
/// into the front of `record`.
///
/// The sample count, data length and CRC fields are left zero, the record
/// driver fills them per record.  Returns the header length, which is also
/// the offset where encoded data begins.
pub fn pack_header3(msr: &PackRecord, record: &mut [u8]) -> Result<usize, MSeedError> {
    if msr.reclen < MINRECLEN || msr.reclen > MAXRECLEN {
        return fail(&msr.sid, MSeedError::RecordLength(msr.reclen, 3));
    }

    let sidlength = msr.sid.len();
    if sidlength > 255 {
        return fail(&msr.sid, MSeedError::SidTooLong(sidlength));
    }
    if msr.extra.len() > u16::MAX as usize {
        return fail(&msr.sid, MSeedError::ExtraHeadersTooLong(msr.extra.len()));
    }

    let headerlen = FIXED_HEADER_SIZE + sidlength + msr.extra.len();
    if record.len() < headerlen {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(record.len(), headerlen, "miniSEED 3 header"),
        );
    }

    let bt = log_err(nstime_to_time(msr.start_time), &msr.sid)?;

    record[..FIXED_HEADER_SIZE].fill(0);
    record[0] = b'M';
    record[1] = b'S';
    record[2] = 3;
    record[3] = msr.flags;
    LittleEndian::write_u32(&mut record[NSEC_OFFSET..], bt.nanosecond);
    LittleEndian::write_u16(&mut record[YEAR_OFFSET..], bt.year);
    LittleEndian::write_u16(&mut record[DAY_OFFSET..], bt.day_of_year);
    record[HOUR_OFFSET] = bt.hour;
    record[MIN_OFFSET] = bt.minute;
    record[SEC_OFFSET] = bt.second;
    record[ENCODING_OFFSET] = msr.encoding.value();

    // Rates positive and below one are stored in period notation
    let samprate = msr.sample_rate;
    let stored_rate = if samprate > 0.0 && samprate < 1.0 {
        -1.0 / samprate
    } else {
        samprate
    };
    LittleEndian::write_f64(&mut record[16..], stored_rate);

    record[32] = msr.pub_version;
    record[33] = sidlength as u8;
    LittleEndian::write_u16(&mut record[34..], msr.extra.len() as u16);

    record[FIXED_HEADER_SIZE..FIXED_HEADER_SIZE + sidlength].copy_from_slice(msr.sid.as_bytes());
    record[FIXED_HEADER_SIZE + sidlength..headerlen].copy_from_slice(msr.extra.as_bytes());

    Ok(headerlen)
}
