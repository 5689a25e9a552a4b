use bitflags::bitflags;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use crc::{Crc, CRC_32_ISCSI};
use log::debug;

use crate::data_encoding::DataEncoding;
use crate::encode::{pack_data, DataSamples};
use crate::header2::{
    pack_header2_offsets, B1000_ENCODING, B1001_MICROSECOND, FSDH_DATAOFFSET, FSDH_DAY, FSDH_FSEC,
    FSDH_HOUR, FSDH_MIN, FSDH_NUMSAMPLES, FSDH_SEC, FSDH_YEAR,
};
use crate::header3::{
    pack_header3, CRC_OFFSET, DATALENGTH_OFFSET, DAY_OFFSET, ENCODING_OFFSET, HOUR_OFFSET,
    MIN_OFFSET, NSEC_OFFSET, NUMSAMPLES_OFFSET, SEC_OFFSET, YEAR_OFFSET,
};
use crate::mseed_error::{fail, log_err, MSeedError};
use crate::nstime::{nstime_to_time, sample_time, split_fsec, NsTime};

pub const CASTAGNOLI: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// Smallest and largest miniSEED 3 record lengths.
pub const MINRECLEN: u32 = 40;
pub const MAXRECLEN: u32 = 1 << 20;

/// Smallest and largest miniSEED 2 record lengths.
pub const MINRECLEN_V2: u32 = 128;
pub const MAXRECLEN_V2: u32 = 1 << 16;

/// Record length used when the caller does not choose one.
pub const DEFAULT_RECLEN: u32 = 4096;

bitflags! {
    /// Flags controlling the packing process.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PackFlags: u32 {
        /// Pack all data, emitting a final partial record if needed.
        const FLUSH_DATA = 0x01;
        /// Pack miniSEED 2 regardless of the record's format version.
        const PACK_VER2 = 0x02;
    }
}

/// A previously parsed record whose encoded payload can be reused when
/// repacking, without decoding the samples.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    /// The complete original record.
    pub record: &'a [u8],
    /// Byte offset of the encoded data within `record`.
    pub data_offset: usize,
    /// Byte length of the encoded data.
    pub data_length: usize,
    /// Number of samples the encoded data holds.
    pub sample_count: u64,
}

/// The logical record: a header template plus the sample buffer to pack.
///
/// `new()` fills the conventional defaults: format version 3, Steim-2
/// encoding, 4096 byte records, publication version 1, no extra headers.
#[derive(Debug, Clone)]
pub struct PackRecord<'a> {
    /// FDSN source identifier, e.g. `FDSN:XX_TEST__B_H_Z`.
    pub sid: String,
    /// miniSEED format version to produce, 2 or 3.
    pub format_version: u8,
    /// Record-level bit flags: 0x01 calibration signal present,
    /// 0x02 time tag questionable, 0x04 clock locked.
    pub flags: u8,
    /// Time of the first sample.
    pub start_time: NsTime,
    /// Samples/second when positive, seconds/sample when negative.
    pub sample_rate: f64,
    pub encoding: DataEncoding,
    /// Maximum record length in bytes.
    pub reclen: u32,
    pub pub_version: u8,
    /// Extra headers as a JSON object string, empty for none.
    pub extra: String,
    pub samples: DataSamples<'a>,
    /// Original record for the repack path.
    pub raw: Option<RawRecord<'a>>,
}

impl<'a> PackRecord<'a> {
    pub fn new(
        sid: &str,
        start_time: NsTime,
        sample_rate: f64,
        samples: DataSamples<'a>,
    ) -> PackRecord<'a> {
        PackRecord {
            sid: sid.to_string(),
            format_version: 3,
            flags: 0,
            start_time,
            sample_rate,
            encoding: DataEncoding::Steim2,
            reclen: DEFAULT_RECLEN,
            pub_version: 1,
            extra: String::new(),
            samples,
            raw: None,
        }
    }
}

/// Pack the record's samples into miniSEED records, handing each finished
/// record to `record_handler`.
///
/// The handler's byte slice is only valid during the call; it must copy or
/// consume the record before returning because the buffer is reused for
/// the next record.  Records are emitted in time order and the sample
/// buffer is never modified.
///
/// Without [`PackFlags::FLUSH_DATA`] the final partial record is withheld;
/// with it all samples are packed.  [`PackFlags::PACK_VER2`] forces
/// miniSEED 2 output regardless of `format_version`.
///
/// Returns (records emitted, samples packed).
pub fn pack_records<F>(
    msr: &PackRecord,
    record_handler: F,
    flags: PackFlags,
) -> Result<(usize, u64), MSeedError>
where
    F: FnMut(&[u8]),
{
    if msr.format_version == 2 || flags.contains(PackFlags::PACK_VER2) {
        pack_mseed2(msr, record_handler, flags)
    } else {
        pack_mseed3(msr, record_handler, flags)
    }
}

fn pack_mseed3<F>(
    msr: &PackRecord,
    mut record_handler: F,
    flags: PackFlags,
) -> Result<(usize, u64), MSeedError>
where
    F: FnMut(&[u8]),
{
    let maxreclen = msr.reclen as usize;
    let mut rawrec = vec![0u8; maxreclen];

    // Fixed header plus identifier and extra headers, data follows
    let dataoffset = pack_header3(msr, &mut rawrec)?;

    // Short cut: no samples packs a single header-only record, with the
    // encoding forced to text to reduce expectations
    if msr.samples.is_empty() {
        rawrec[ENCODING_OFFSET] = DataEncoding::Text.value();
        set_crc(&mut rawrec[..dataoffset]);
        debug!("{}: packed {} byte record with no payload", msr.sid, dataoffset);
        record_handler(&rawrec[..dataoffset]);
        return Ok((1, 0));
    }

    let maxdatabytes = maxreclen - dataoffset;
    let maxsamples = msr.encoding.max_samples(maxdatabytes) as u64;
    let numsamples = msr.samples.len() as u64;

    let mut encoded = vec![0u8; maxdatabytes];
    let mut totalpackedsamples: u64 = 0;
    let mut recordcnt = 0;

    while numsamples - totalpackedsamples > maxsamples || flags.contains(PackFlags::FLUSH_DATA) {
        let (packsamples, datalength) = log_err(
            pack_data::<LittleEndian>(
                &msr.samples,
                totalpackedsamples as usize,
                msr.encoding,
                &mut encoded,
            ),
            &msr.sid,
        )?;

        let reclen = dataoffset + datalength;
        rawrec[dataoffset..reclen].copy_from_slice(&encoded[..datalength]);

        LittleEndian::write_u32(&mut rawrec[NUMSAMPLES_OFFSET..], packsamples as u32);
        LittleEndian::write_u32(&mut rawrec[DATALENGTH_OFFSET..], datalength as u32);
        set_crc(&mut rawrec[..reclen]);

        debug!(
            "{}: packed {} samples into {} byte record",
            msr.sid, packsamples, reclen
        );
        record_handler(&rawrec[..reclen]);

        totalpackedsamples += packsamples as u64;
        recordcnt += 1;

        if totalpackedsamples >= numsamples {
            break;
        }

        // Refresh the start time for the next record, computed from the
        // first sample's time so no rounding accumulates
        let nextstarttime = sample_time(msr.start_time, totalpackedsamples as i64, msr.sample_rate);
        let bt = log_err(nstime_to_time(nextstarttime), &msr.sid)?;
        LittleEndian::write_u32(&mut rawrec[NSEC_OFFSET..], bt.nanosecond);
        LittleEndian::write_u16(&mut rawrec[YEAR_OFFSET..], bt.year);
        LittleEndian::write_u16(&mut rawrec[DAY_OFFSET..], bt.day_of_year);
        rawrec[HOUR_OFFSET] = bt.hour;
        rawrec[MIN_OFFSET] = bt.minute;
        rawrec[SEC_OFFSET] = bt.second;
    }

    debug!("{}: packed {} total samples", msr.sid, totalpackedsamples);

    Ok((recordcnt, totalpackedsamples))
}

fn pack_mseed2<F>(
    msr: &PackRecord,
    mut record_handler: F,
    flags: PackFlags,
) -> Result<(usize, u64), MSeedError>
where
    F: FnMut(&[u8]),
{
    let reclen = msr.reclen as usize;
    let mut rawrec = vec![0u8; reclen];

    let layout = pack_header2_offsets(msr, &mut rawrec)?;
    let headerlen = layout.headerlen;

    // Short cut: no samples packs a single record with no payload
    if msr.samples.is_empty() {
        rawrec[layout.blockette_1000 + B1000_ENCODING] = DataEncoding::Text.value();
        debug!("{}: packed {} byte record with no payload", msr.sid, reclen);
        record_handler(&rawrec);
        return Ok((1, 0));
    }

    let dataoffset = data_offset2(msr.encoding, headerlen);
    let maxdatabytes = match reclen.checked_sub(dataoffset) {
        Some(maxdatabytes) => maxdatabytes,
        None => {
            return fail(
                &msr.sid,
                MSeedError::BufferTooSmall(reclen, dataoffset, "encoded data"),
            )
        }
    };
    BigEndian::write_u16(&mut rawrec[FSDH_DATAOFFSET..], dataoffset as u16);

    let maxsamples = msr.encoding.max_samples(maxdatabytes) as u64;
    let numsamples = msr.samples.len() as u64;

    let mut encoded = vec![0u8; maxdatabytes];
    let mut totalpackedsamples: u64 = 0;
    let mut recordcnt = 0;

    while numsamples - totalpackedsamples > maxsamples || flags.contains(PackFlags::FLUSH_DATA) {
        let (packsamples, datalength) = log_err(
            pack_data::<BigEndian>(
                &msr.samples,
                totalpackedsamples as usize,
                msr.encoding,
                &mut encoded,
            ),
            &msr.sid,
        )?;

        if packsamples > u16::MAX as usize {
            return fail(
                &msr.sid,
                MSeedError::TooManySamples(packsamples as u64, "miniSEED 2"),
            );
        }

        rawrec[dataoffset..dataoffset + datalength].copy_from_slice(&encoded[..datalength]);
        BigEndian::write_u16(&mut rawrec[FSDH_NUMSAMPLES..], packsamples as u16);

        // Zero between encoded data and end of the fixed-length record
        rawrec[dataoffset + datalength..].fill(0);

        debug!(
            "{}: packed {} samples into {} byte record",
            msr.sid, packsamples, reclen
        );
        record_handler(&rawrec);

        totalpackedsamples += packsamples as u64;
        recordcnt += 1;

        if totalpackedsamples >= numsamples {
            break;
        }

        // Refresh the start time fields for the next record
        let nextstarttime = sample_time(msr.start_time, totalpackedsamples as i64, msr.sample_rate);
        let (second_nstime, fsec, usec_offset) = split_fsec(nextstarttime);
        let bt = log_err(nstime_to_time(second_nstime), &msr.sid)?;
        BigEndian::write_u16(&mut rawrec[FSDH_YEAR..], bt.year);
        BigEndian::write_u16(&mut rawrec[FSDH_DAY..], bt.day_of_year);
        rawrec[FSDH_HOUR] = bt.hour;
        rawrec[FSDH_MIN] = bt.minute;
        rawrec[FSDH_SEC] = bt.second;
        BigEndian::write_u16(&mut rawrec[FSDH_FSEC..], fsec);
        if let Some(b1001) = layout.blockette_1001 {
            rawrec[b1001 + B1001_MICROSECOND] = usec_offset as u8;
        }
    }

    debug!("{}: packed {} total samples", msr.sid, totalpackedsamples);

    Ok((recordcnt, totalpackedsamples))
}

/// Repack a parsed record into a version 3 record without re-encoding,
/// copying the payload bytes verbatim from the original record.
///
/// Returns the record length.
pub fn repack_mseed3(msr: &PackRecord, record: &mut [u8]) -> Result<usize, MSeedError> {
    let raw = match msr.raw.as_ref() {
        Some(raw) => raw,
        None => return fail(&msr.sid, MSeedError::NoRawRecord),
    };

    if raw.sample_count > u32::MAX as u64 {
        return fail(
            &msr.sid,
            MSeedError::TooManySamples(raw.sample_count, "miniSEED 3"),
        );
    }
    if raw.data_offset + raw.data_length > raw.record.len() {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(
                raw.record.len(),
                raw.data_offset + raw.data_length,
                "raw record payload",
            ),
        );
    }

    let dataoffset = pack_header3(msr, record)?;
    let reclen = dataoffset + raw.data_length;

    if record.len() < reclen {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(record.len(), reclen, "repacked record"),
        );
    }

    record[dataoffset..reclen]
        .copy_from_slice(&raw.record[raw.data_offset..raw.data_offset + raw.data_length]);

    LittleEndian::write_u32(&mut record[NUMSAMPLES_OFFSET..], raw.sample_count as u32);
    LittleEndian::write_u32(&mut record[DATALENGTH_OFFSET..], raw.data_length as u32);
    set_crc(&mut record[..reclen]);

    debug!(
        "{}: repacked {} samples into a {} byte record",
        msr.sid, raw.sample_count, reclen
    );

    Ok(reclen)
}

/// Repack a parsed record into a version 2 record without re-encoding.
///
/// The new record keeps the requested fixed record length, zero filling
/// past the payload.  Returns the record length.
pub fn repack_mseed2(msr: &PackRecord, record: &mut [u8]) -> Result<usize, MSeedError> {
    let raw = match msr.raw.as_ref() {
        Some(raw) => raw,
        None => return fail(&msr.sid, MSeedError::NoRawRecord),
    };
    let reclen = msr.reclen as usize;

    if record.len() < reclen {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(record.len(), reclen, "repacked record"),
        );
    }
    if raw.sample_count > u16::MAX as u64 {
        return fail(
            &msr.sid,
            MSeedError::TooManySamples(raw.sample_count, "miniSEED 2"),
        );
    }
    if raw.data_offset + raw.data_length > raw.record.len() {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(
                raw.record.len(),
                raw.data_offset + raw.data_length,
                "raw record payload",
            ),
        );
    }

    let layout = pack_header2_offsets(msr, &mut record[..reclen])?;
    let dataoffset = data_offset2(msr.encoding, layout.headerlen);
    let totalsize = dataoffset + raw.data_length;

    if reclen < totalsize {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(reclen, totalsize, "repacked record"),
        );
    }

    // Zero between blockettes and data, then copy the payload verbatim
    record[layout.headerlen..dataoffset].fill(0);
    record[dataoffset..totalsize]
        .copy_from_slice(&raw.record[raw.data_offset..raw.data_offset + raw.data_length]);

    BigEndian::write_u16(&mut record[FSDH_NUMSAMPLES..], raw.sample_count as u16);
    BigEndian::write_u16(&mut record[FSDH_DATAOFFSET..], dataoffset as u16);

    record[totalsize..reclen].fill(0);

    debug!(
        "{}: repacked {} samples into a {} byte record",
        msr.sid, raw.sample_count, reclen
    );

    Ok(reclen)
}

/// Offset where encoded data begins in a v2 record: Steim frames start on
/// the first 64-byte boundary at or after the header, other encodings
/// directly after the blockettes.
fn data_offset2(encoding: DataEncoding, headerlen: usize) -> usize {
    match encoding {
        DataEncoding::Steim1 | DataEncoding::Steim2 => {
            let mut dataoffset = 64;
            while dataoffset < headerlen {
                dataoffset += 64;
            }
            dataoffset
        }
        _ => headerlen,
    }
}

/// Compute the CRC-32C of the record with the CRC field zeroed and store
/// it little endian in place.
fn set_crc(record: &mut [u8]) {
    record[CRC_OFFSET..CRC_OFFSET + 4].fill(0);
    let crc = CASTAGNOLI.checksum(record);
    LittleEndian::write_u32(&mut record[CRC_OFFSET..], crc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header3::FIXED_HEADER_SIZE;
    use crate::nstime::timestr_to_nstime;

    const SID: &str = "FDSN:XX_TEST__X_Y_Z";

    fn start() -> NsTime {
        timestr_to_nstime("2012-01-01T00:00:00Z").unwrap()
    }

    fn crc_valid(record: &[u8]) -> bool {
        let stored = LittleEndian::read_u32(&record[CRC_OFFSET..]);
        let mut copy = record.to_vec();
        copy[CRC_OFFSET..CRC_OFFSET + 4].fill(0);
        CASTAGNOLI.checksum(&copy) == stored
    }

    #[test]
    fn int32_v3_single_record() {
        let data: Vec<i32> = (0..100).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;

        let mut records: Vec<Vec<u8>> = Vec::new();
        let (cnt, samples) =
            pack_records(&msr, |rec| records.push(rec.to_vec()), PackFlags::FLUSH_DATA).unwrap();

        assert_eq!(cnt, 1);
        assert_eq!(samples, 100);
        let rec = &records[0];
        assert_eq!(rec.len(), FIXED_HEADER_SIZE + SID.len() + 400);
        assert_eq!(&rec[0..2], b"MS");
        assert_eq!(LittleEndian::read_u32(&rec[NUMSAMPLES_OFFSET..]), 100);
        assert_eq!(LittleEndian::read_u32(&rec[DATALENGTH_OFFSET..]), 400);
        assert!(crc_valid(rec));
        // payload is little endian int32
        let payload = &rec[FIXED_HEADER_SIZE + SID.len()..];
        assert_eq!(LittleEndian::read_i32(&payload[4..]), 1);
    }

    #[test]
    fn empty_samples_single_text_record() {
        let msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&[]));

        let mut records: Vec<Vec<u8>> = Vec::new();
        let (cnt, samples) =
            pack_records(&msr, |rec| records.push(rec.to_vec()), PackFlags::empty()).unwrap();
        assert_eq!((cnt, samples), (1, 0));
        let rec = &records[0];
        assert_eq!(rec.len(), FIXED_HEADER_SIZE + SID.len());
        assert_eq!(rec[ENCODING_OFFSET], 0);
        assert_eq!(LittleEndian::read_u32(&rec[DATALENGTH_OFFSET..]), 0);
        assert!(crc_valid(rec));
    }

    #[test]
    fn partial_record_withheld_without_flush() {
        let data: Vec<i32> = (0..100).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;

        let mut cnt_handled = 0;
        let (cnt, samples) =
            pack_records(&msr, |_| cnt_handled += 1, PackFlags::empty()).unwrap();
        assert_eq!(cnt, 0);
        assert_eq!(samples, 0);
        assert_eq!(cnt_handled, 0);
    }

    #[test]
    fn v2_records_fixed_length() {
        let data: Vec<i32> = (0..500).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int16;
        msr.reclen = 256;
        msr.format_version = 2;

        let mut lengths = Vec::new();
        let mut total = 0u32;
        let (cnt, samples) = pack_records(
            &msr,
            |rec| {
                lengths.push(rec.len());
                total += BigEndian::read_u16(&rec[FSDH_NUMSAMPLES..]) as u32;
            },
            PackFlags::FLUSH_DATA,
        )
        .unwrap();

        assert!(cnt > 1);
        assert_eq!(samples, 500);
        assert_eq!(total, 500);
        assert!(lengths.iter().all(|&len| len == 256));
    }

    #[test]
    fn pack_ver2_flag_forces_v2() {
        let data: Vec<i32> = (0..10).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;
        msr.reclen = 512;

        let mut first = Vec::new();
        pack_records(
            &msr,
            |rec| first.extend_from_slice(rec),
            PackFlags::FLUSH_DATA | PackFlags::PACK_VER2,
        )
        .unwrap();
        assert_eq!(first.len(), 512);
        assert!(first[0].is_ascii_digit());
    }

    #[test]
    fn successive_records_advance_start_time() {
        let data: Vec<i32> = (0..500).collect();
        let mut msr = PackRecord::new(SID, start(), 40.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;
        msr.reclen = 128; // 17 samples per record after the 59 byte header

        let mut seconds = Vec::new();
        let mut nanos = Vec::new();
        pack_records(
            &msr,
            |rec| {
                seconds.push(rec[SEC_OFFSET]);
                nanos.push(LittleEndian::read_u32(&rec[NSEC_OFFSET..]));
            },
            PackFlags::FLUSH_DATA,
        )
        .unwrap();

        assert!(seconds.len() > 3);
        // each record holds 17 samples at 40 Hz, 0.425 s apart
        assert_eq!((seconds[1], nanos[1]), (0, 425_000_000));
        assert_eq!((seconds[2], nanos[2]), (0, 850_000_000));
        assert_eq!((seconds[3], nanos[3]), (1, 275_000_000));
    }

    #[test]
    fn repack3_reuses_payload() {
        let data: Vec<i32> = (0..50).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;

        let mut original = Vec::new();
        pack_records(&msr, |rec| original.extend_from_slice(rec), PackFlags::FLUSH_DATA).unwrap();

        let dataoffset = FIXED_HEADER_SIZE + SID.len();
        let mut repack_template = msr.clone();
        repack_template.pub_version = 2;
        repack_template.raw = Some(RawRecord {
            record: &original,
            data_offset: dataoffset,
            data_length: 200,
            sample_count: 50,
        });

        let mut out = vec![0u8; 4096];
        let reclen = repack_mseed3(&repack_template, &mut out).unwrap();
        assert_eq!(reclen, original.len());
        assert_eq!(&out[dataoffset..reclen], &original[dataoffset..]);
        assert_eq!(out[32], 2); // publication version updated
        assert!(crc_valid(&out[..reclen]));
    }

    #[test]
    fn repack_requires_raw_record() {
        let msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&[]));
        let mut out = vec![0u8; 4096];
        assert!(matches!(
            repack_mseed3(&msr, &mut out),
            Err(MSeedError::NoRawRecord)
        ));
        assert!(repack_mseed2(&msr, &mut out).is_err());
    }

    #[test]
    fn repack2_fixed_length_and_offsets() {
        let data: Vec<i32> = (0..50).collect();
        let mut msr = PackRecord::new(SID, start(), 1.0, DataSamples::Int32(&data));
        msr.encoding = DataEncoding::Int32;
        msr.format_version = 2;
        msr.reclen = 512;

        let mut original = Vec::new();
        pack_records(&msr, |rec| original.extend_from_slice(rec), PackFlags::FLUSH_DATA).unwrap();
        assert_eq!(original.len(), 512);
        let orig_dataoffset = BigEndian::read_u16(&original[FSDH_DATAOFFSET..]) as usize;

        let mut repack_template = msr.clone();
        repack_template.raw = Some(RawRecord {
            record: &original,
            data_offset: orig_dataoffset,
            data_length: 200,
            sample_count: 50,
        });

        let mut out = vec![0u8; 512];
        let reclen = repack_mseed2(&repack_template, &mut out).unwrap();
        assert_eq!(reclen, 512);
        assert_eq!(BigEndian::read_u16(&out[FSDH_NUMSAMPLES..]), 50);
        let dataoffset = BigEndian::read_u16(&out[FSDH_DATAOFFSET..]) as usize;
        assert_eq!(
            &out[dataoffset..dataoffset + 200],
            &original[orig_dataoffset..orig_dataoffset + 200]
        );
    }

    #[test]
    fn steim_data_offset_aligned() {
        assert_eq!(data_offset2(DataEncoding::Steim1, 56), 64);
        assert_eq!(data_offset2(DataEncoding::Steim2, 64), 64);
        assert_eq!(data_offset2(DataEncoding::Steim2, 65), 128);
        assert_eq!(data_offset2(DataEncoding::Int32, 56), 56);
    }
}
