use byteorder::{BigEndian, ByteOrder};
use log::{debug, error, warn};
use serde_json::Value;

use crate::extra_headers::{ptr_bool, ptr_num, ptr_str, ptr_uint, ExtraHeaders};
use crate::fdsn_source_identifier::FdsnSourceIdentifier;
use crate::mseed_error::{fail, log_err, MSeedError};
use crate::nstime::{nstime_to_time, split_fsec, timestr_to_nstime};
use crate::pack::{PackRecord, MAXRECLEN_V2, MINRECLEN_V2};
use crate::rate::{gen_fact_mult, nominal_rate, sample_rate_hz};

/// Size in bytes of the version 2 fixed section of data header.
pub const FIXED_HEADER2_SIZE: usize = 48;

// Fixed header field offsets
pub(crate) const FSDH_YEAR: usize = 20;
pub(crate) const FSDH_DAY: usize = 22;
pub(crate) const FSDH_HOUR: usize = 24;
pub(crate) const FSDH_MIN: usize = 25;
pub(crate) const FSDH_SEC: usize = 26;
pub(crate) const FSDH_FSEC: usize = 28;
pub(crate) const FSDH_NUMSAMPLES: usize = 30;
const FSDH_SAMPRATE_FACT: usize = 32;
const FSDH_SAMPRATE_MULT: usize = 34;
const FSDH_ACTFLAGS: usize = 36;
const FSDH_IOFLAGS: usize = 37;
const FSDH_DQFLAGS: usize = 38;
const FSDH_NUMBLOCKETTES: usize = 39;
const FSDH_TIMECORRECT: usize = 40;
pub(crate) const FSDH_DATAOFFSET: usize = 44;
const FSDH_BLOCKETTEOFFSET: usize = 46;

// Offsets within blockette bodies patched by the record driver
pub(crate) const B1000_ENCODING: usize = 4;
pub(crate) const B1001_MICROSECOND: usize = 5;

/// Byte offsets of the blockettes a v2 header carries, used by the record
/// driver to patch per-record fields in place.
pub(crate) struct Header2Layout {
    pub headerlen: usize,
    pub blockette_1000: usize,
    pub blockette_1001: Option<usize>,
}

/// Pack a miniSEED version 2 fixed header and blockette chain into the
/// front of `record`, returning the header length.
pub fn pack_header2(msr: &PackRecord, record: &mut [u8]) -> Result<usize, MSeedError> {
    Ok(pack_header2_offsets(msr, record)?.headerlen)
}

/// Pack a v2 header, also reporting where B1000 and B1001 landed.
pub(crate) fn pack_header2_offsets(
    msr: &PackRecord,
    record: &mut [u8],
) -> Result<Header2Layout, MSeedError> {
    if msr.reclen < MINRECLEN_V2 || msr.reclen > MAXRECLEN_V2 {
        return fail(&msr.sid, MSeedError::RecordLength(msr.reclen, 2));
    }
    if (msr.reclen & (msr.reclen - 1)) != 0 {
        return fail(&msr.sid, MSeedError::RecordLengthPowerOfTwo(msr.reclen));
    }
    let reclenexp = msr.reclen.trailing_zeros() as u8;

    let sid = log_err(FdsnSourceIdentifier::parse(&msr.sid), &msr.sid)?;
    let (network, station, location, channel) = log_err(sid.seed_codes(), &msr.sid)?;

    if record.len() < FIXED_HEADER2_SIZE + 8 {
        return fail(
            &msr.sid,
            MSeedError::BufferTooSmall(record.len(), FIXED_HEADER2_SIZE + 8, "miniSEED 2 header"),
        );
    }

    // Time at fsec resolution plus the microsecond offset carried by B1001
    let (second_nstime, fsec, usec_offset) = split_fsec(msr.start_time);
    let bt = log_err(nstime_to_time(second_nstime), &msr.sid)?;

    let hz = sample_rate_hz(msr.sample_rate);
    let (factor, multiplier) = log_err(gen_fact_mult(hz), &msr.sid)?;

    let eh = log_err(ExtraHeaders::parse(&msr.extra), &msr.sid)?;

    record[..FIXED_HEADER2_SIZE].fill(0);

    // Sequence number from extra headers if present
    match eh.get_uint("/FDSN/Sequence") {
        Some(seq) if seq <= 999_999 => {
            record[0..6].copy_from_slice(format!("{:06}", seq).as_bytes())
        }
        Some(seq) => {
            warn!("{}: sequence number {} out of range, using 999999", msr.sid, seq);
            record[0..6].copy_from_slice(b"999999")
        }
        None => record[0..6].copy_from_slice(b"000000"),
    }

    // DataQuality indicator from extra headers, otherwise mapped from the
    // publication version
    record[6] = match eh.get_str("/FDSN/DataQuality") {
        Some(q) if matches!(q.as_bytes().first(), Some(b'R' | b'D' | b'Q' | b'M')) => {
            q.as_bytes()[0]
        }
        _ => match msr.pub_version {
            1 => b'R',
            3 => b'Q',
            4 => b'M',
            _ => b'D',
        },
    };

    record[7] = b' ';
    copy_open(&mut record[8..13], &station);
    copy_open(&mut record[13..15], &location);
    copy_open(&mut record[15..18], &channel);
    copy_open(&mut record[18..20], &network);

    BigEndian::write_u16(&mut record[FSDH_YEAR..], bt.year);
    BigEndian::write_u16(&mut record[FSDH_DAY..], bt.day_of_year);
    record[FSDH_HOUR] = bt.hour;
    record[FSDH_MIN] = bt.minute;
    record[FSDH_SEC] = bt.second;
    record[27] = 0;
    BigEndian::write_u16(&mut record[FSDH_FSEC..], fsec);
    BigEndian::write_u16(&mut record[FSDH_NUMSAMPLES..], 0);

    BigEndian::write_i16(&mut record[FSDH_SAMPRATE_FACT..], factor);
    BigEndian::write_i16(&mut record[FSDH_SAMPRATE_MULT..], multiplier);

    // Activity flags
    let mut actflags = 0u8;
    if msr.flags & 0x01 != 0 {
        actflags |= 0x01; // calibration signal present
    }
    if eh.get_bool("/FDSN/Event/Begin") == Some(true) {
        actflags |= 0x04;
    }
    if eh.get_bool("/FDSN/Event/End") == Some(true) {
        actflags |= 0x08;
    }
    if let Some(leap) = eh.get_num("/FDSN/Time/LeapSecond") {
        if leap > 0.0 {
            actflags |= 0x10;
        } else if leap < 0.0 {
            actflags |= 0x20;
        }
    }
    if eh.get_bool("/FDSN/Event/InProgress") == Some(true) {
        actflags |= 0x40;
    }

    // I/O and clock flags
    let mut ioflags = 0u8;
    if eh.get_bool("/FDSN/Flags/StationVolumeParityError") == Some(true) {
        ioflags |= 0x01;
    }
    if eh.get_bool("/FDSN/Flags/LongRecordRead") == Some(true) {
        ioflags |= 0x02;
    }
    if eh.get_bool("/FDSN/Flags/ShortRecordRead") == Some(true) {
        ioflags |= 0x04;
    }
    if eh.get_bool("/FDSN/Flags/StartOfTimeSeries") == Some(true) {
        ioflags |= 0x08;
    }
    if eh.get_bool("/FDSN/Flags/EndOfTimeSeries") == Some(true) {
        ioflags |= 0x10;
    }
    if msr.flags & 0x04 != 0 {
        ioflags |= 0x20; // clock locked
    }

    // Data quality flags
    let mut dqflags = 0u8;
    if eh.get_bool("/FDSN/Flags/AmplifierSaturation") == Some(true) {
        dqflags |= 0x01;
    }
    if eh.get_bool("/FDSN/Flags/DigitizerClipping") == Some(true) {
        dqflags |= 0x02;
    }
    if eh.get_bool("/FDSN/Flags/Spikes") == Some(true) {
        dqflags |= 0x04;
    }
    if eh.get_bool("/FDSN/Flags/Glitches") == Some(true) {
        dqflags |= 0x08;
    }
    if eh.get_bool("/FDSN/Flags/MissingData") == Some(true) {
        dqflags |= 0x10;
    }
    if eh.get_bool("/FDSN/Flags/TelemetrySyncError") == Some(true) {
        dqflags |= 0x20;
    }
    if eh.get_bool("/FDSN/Flags/FilterCharging") == Some(true) {
        dqflags |= 0x40;
    }
    if msr.flags & 0x02 != 0 {
        dqflags |= 0x80; // time tag questionable
    }

    if let Some(correction) = eh.get_num("/FDSN/Time/Correction") {
        BigEndian::write_i32(
            &mut record[FSDH_TIMECORRECT..],
            (correction * 10000.0 + 0.5) as i32,
        );
        // V3 records do not allow unapplied time corrections and unapplied
        // corrections in v2 records are applied on read, so mark applied
        actflags |= 0x02;
    } else {
        BigEndian::write_i32(&mut record[FSDH_TIMECORRECT..], 0);
    }

    record[FSDH_ACTFLAGS] = actflags;
    record[FSDH_IOFLAGS] = ioflags;
    record[FSDH_DQFLAGS] = dqflags;
    record[FSDH_NUMBLOCKETTES] = 1;
    BigEndian::write_u16(&mut record[FSDH_DATAOFFSET..], 0);
    BigEndian::write_u16(&mut record[FSDH_BLOCKETTEOFFSET..], 48);

    let mut written: usize = 48;

    // Mandatory Blockette 1000
    let blockette_1000 = written;
    BigEndian::write_u16(&mut record[written..], 1000);
    BigEndian::write_u16(&mut record[written + 2..], 0);
    record[written + B1000_ENCODING] = msr.encoding.value();
    record[written + 5] = 1; // word order, big endian
    record[written + 6] = reclenexp;
    record[written + 7] = 0;
    let mut next_link = written + 2;
    written += 8;

    // Blockette 1001 if a microsecond offset or timing quality is present
    let mut blockette_1001 = None;
    if eh.get_uint("/FDSN/Time/Quality").is_some() || usec_offset != 0 {
        reserve(record, written, 8, "B1001 blockette", &msr.sid)?;
        link_blockette(record, &mut next_link, written);
        BigEndian::write_u16(&mut record[written..], 1001);
        BigEndian::write_u16(&mut record[written + 2..], 0);
        record[written + 4] = match eh.get_uint("/FDSN/Time/Quality") {
            Some(quality) if quality <= u8::MAX as u64 => quality as u8,
            Some(quality) => {
                warn!("{}: timing quality {} out of range, using 0", msr.sid, quality);
                0
            }
            None => 0,
        };
        record[written + B1001_MICROSECOND] = usec_offset as u8;
        record[written + 6] = 0; // reserved
        record[written + 7] = 0; // frame count
        blockette_1001 = Some(written);
        written += 8;
    }

    // Blockette 100 if the factor/multiplier cannot carry the sample rate
    if (hz - nominal_rate(factor, multiplier)).abs() > 0.0001 {
        reserve(record, written, 12, "B100 blockette", &msr.sid)?;
        link_blockette(record, &mut next_link, written);
        BigEndian::write_u16(&mut record[written..], 100);
        BigEndian::write_u16(&mut record[written + 2..], 0);
        BigEndian::write_f32(&mut record[written + 4..], msr.sample_rate as f32);
        record[written + 8] = 0;
        record[written + 9..written + 12].fill(0);
        written += 12;
    }

    // Blockette 500 per timing exception
    if let Some(exceptions) = eh.get_array("/FDSN/Time/Exception") {
        for entry in exceptions {
            if !entry.is_object() {
                continue;
            }
            reserve(record, written, 200, "B500 blockette", &msr.sid)?;
            link_blockette(record, &mut next_link, written);
            record[written..written + 200].fill(0);
            BigEndian::write_u16(&mut record[written..], 500);

            let blk = &mut record[written..written + 200];
            if let Some(vco) = ptr_num(entry, "/VCOCorrection") {
                BigEndian::write_f32(&mut blk[4..], vco as f32);
            }
            if let Some(timestr) = ptr_str(entry, "/Time") {
                let usec = write_btime(&mut blk[8..18], timestr)?;
                blk[18] = usec as u8;
            }
            if let Some(quality) = ptr_uint(entry, "/ReceptionQuality") {
                if quality <= u8::MAX as u64 {
                    blk[19] = quality as u8;
                } else {
                    warn!("{}: B500 reception quality {} out of range, dropped", msr.sid, quality);
                }
            }
            if let Some(count) = ptr_uint(entry, "/Count") {
                if count <= u32::MAX as u64 {
                    BigEndian::write_u32(&mut blk[20..], count as u32);
                } else {
                    warn!("{}: B500 exception count {} out of range, dropped", msr.sid, count);
                }
            }
            if let Some(extype) = ptr_str(entry, "/Type") {
                copy_open(&mut blk[24..40], extype);
            }
            if let Some(model) = eh.get_str("/FDSN/Clock/Model") {
                copy_open(&mut blk[40..72], model);
            }
            if let Some(status) = ptr_str(entry, "/ClockStatus") {
                copy_open(&mut blk[72..200], status);
            }
            written += 200;
        }
    }

    // Blockette 200 or 201 per event detection
    if let Some(detections) = eh.get_array("/FDSN/Event/Detection") {
        for entry in detections {
            if !entry.is_object() {
                continue;
            }
            let murdock = matches!(ptr_str(entry, "/Type"),
                Some(detection_type) if starts_with_ignore_case(detection_type, "MURDOCK"));
            let (blockette_type, blockette_length) = if murdock { (201, 60) } else { (200, 52) };

            reserve(record, written, blockette_length, "event detection blockette", &msr.sid)?;
            link_blockette(record, &mut next_link, written);
            record[written..written + blockette_length].fill(0);
            BigEndian::write_u16(&mut record[written..], blockette_type);

            let blk = &mut record[written..written + blockette_length];
            if let Some(amplitude) = ptr_num(entry, "/SignalAmplitude") {
                BigEndian::write_f32(&mut blk[4..], amplitude as f32);
            }
            if let Some(period) = ptr_num(entry, "/SignalPeriod") {
                BigEndian::write_f32(&mut blk[8..], period as f32);
            }
            if let Some(background) = ptr_num(entry, "/BackgroundEstimate") {
                BigEndian::write_f32(&mut blk[12..], background as f32);
            }

            // Wave polarity: dilatation versus (assumed) compression
            if let Some(wave) = ptr_str(entry, "/Wave") {
                if starts_with_ignore_case(wave, "DILATATION") {
                    blk[16] |= 0x01;
                }
            } else if blockette_type == 200 {
                blk[16] |= 0x04;
            }
            if blockette_type == 200 {
                if let Some(units) = ptr_str(entry, "/Units") {
                    if !starts_with_ignore_case(units, "COUNT") {
                        blk[16] |= 0x02;
                    }
                }
            }

            if let Some(onset) = ptr_str(entry, "/OnsetTime") {
                write_btime(&mut blk[18..28], onset)?;
            }

            if blockette_type == 200 {
                if let Some(detector) = ptr_str(entry, "/Detector") {
                    copy_open(&mut blk[28..52], detector);
                }
            } else {
                if let Some(Value::Array(snrs)) = entry.pointer("/MEDSNR") {
                    for (idx, snr) in snrs.iter().filter_map(|v| v.as_f64()).take(6).enumerate() {
                        blk[28 + idx] = snr as u8;
                    }
                }
                if let Some(lookback) = ptr_uint(entry, "/MEDLookback") {
                    if lookback < u8::MAX as u64 {
                        blk[34] = lookback as u8;
                    } else {
                        warn!("{}: B201 lookback {} out of range, dropped", msr.sid, lookback);
                    }
                }
                if let Some(algorithm) = ptr_uint(entry, "/MEDPickAlgorithm") {
                    if algorithm < u8::MAX as u64 {
                        blk[35] = algorithm as u8;
                    } else {
                        warn!(
                            "{}: B201 pick algorithm {} out of range, dropped",
                            msr.sid, algorithm
                        );
                    }
                }
                if let Some(detector) = ptr_str(entry, "/Detector") {
                    copy_open(&mut blk[36..60], detector);
                }
            }

            written += blockette_length;
        }
    }

    // Blockette 300/310/320/390 per calibration, B395 when an end time is given
    if let Some(calibrations) = eh.get_array("/FDSN/Calibration/Sequence") {
        for entry in calibrations {
            if !entry.is_object() {
                continue;
            }
            let mut blockette_type = 0u16;
            let mut blockette_length = 0usize;
            if let Some(cal_type) = ptr_str(entry, "/Type") {
                if starts_with_ignore_case(cal_type, "STEP") {
                    blockette_type = 300;
                    blockette_length = 60;
                } else if starts_with_ignore_case(cal_type, "SINE") {
                    blockette_type = 310;
                    blockette_length = 60;
                } else if starts_with_ignore_case(cal_type, "PSEUDORANDOM") {
                    blockette_type = 320;
                    blockette_length = 64;
                } else if starts_with_ignore_case(cal_type, "GENERIC") {
                    blockette_type = 390;
                    blockette_length = 28;
                }
            } else if entry.pointer("/EndTime").is_some() {
                blockette_type = 395;
                blockette_length = 16;
            }

            if blockette_type == 0 || blockette_length == 0 {
                return fail(
                    &msr.sid,
                    MSeedError::ExtraHeaderParse(String::from(
                        "unknown or unset /FDSN/Calibration/Sequence Type or EndTime",
                    )),
                );
            }

            if blockette_type != 395 {
                reserve(record, written, blockette_length, "calibration blockette", &msr.sid)?;
                link_blockette(record, &mut next_link, written);
                record[written..written + blockette_length].fill(0);
                BigEndian::write_u16(&mut record[written..], blockette_type);

                let blk = &mut record[written..written + blockette_length];
                if let Some(begin) = ptr_str(entry, "/BeginTime") {
                    write_btime(&mut blk[4..14], begin)?;
                }
                match blockette_type {
                    300 => write_b300(blk, entry),
                    310 => write_b310(blk, entry),
                    320 => write_b320(blk, entry),
                    _ => write_b390(blk, entry),
                }
                written += blockette_length;
            }

            // Blockette 395 when an end time is included
            if let Some(end) = ptr_str(entry, "/EndTime") {
                reserve(record, written, 16, "B395 blockette", &msr.sid)?;
                link_blockette(record, &mut next_link, written);
                record[written..written + 16].fill(0);
                BigEndian::write_u16(&mut record[written..], 395);
                write_btime(&mut record[written + 4..written + 14], end)?;
                written += 16;
            }
        }
    }

    debug!(
        "{}: packed {} byte miniSEED 2 header, {} blockettes",
        msr.sid, written, record[FSDH_NUMBLOCKETTES]
    );

    Ok(Header2Layout {
        headerlen: written,
        blockette_1000,
        blockette_1001,
    })
}

fn write_b300(blk: &mut [u8], entry: &Value) {
    if let Some(steps) = ptr_uint(entry, "/Steps") {
        if steps <= u8::MAX as u64 {
            blk[14] = steps as u8;
        } else {
            warn!("B300 step count {} out of range, dropped", steps);
        }
    }
    if ptr_bool(entry, "/StepFirstPulsePositive") == Some(true) {
        blk[15] |= 0x01;
    }
    if ptr_bool(entry, "/StepAlternateSign") == Some(true) {
        blk[15] |= 0x02;
    }
    if cal_trigger_automatic(entry) {
        blk[15] |= 0x04;
    }
    if ptr_bool(entry, "/Continued") == Some(true) {
        blk[15] |= 0x08;
    }
    if let Some(duration) = ptr_num(entry, "/Duration") {
        BigEndian::write_u32(&mut blk[16..], duration_0001s(duration));
    }
    if let Some(between) = ptr_num(entry, "/StepBetween") {
        BigEndian::write_u32(&mut blk[20..], duration_0001s(between));
    }
    if let Some(amplitude) = ptr_num(entry, "/Amplitude") {
        BigEndian::write_f32(&mut blk[24..], amplitude as f32);
    }
    if let Some(input) = ptr_str(entry, "/InputChannel") {
        copy_open(&mut blk[28..31], input);
    }
    if let Some(reference) = ptr_num(entry, "/ReferenceAmplitude") {
        BigEndian::write_u32(&mut blk[32..], (reference + 0.5) as u32);
    }
    if let Some(coupling) = ptr_str(entry, "/Coupling") {
        copy_open(&mut blk[36..48], coupling);
    }
    if let Some(rolloff) = ptr_str(entry, "/Rolloff") {
        copy_open(&mut blk[48..60], rolloff);
    }
}

fn write_b310(blk: &mut [u8], entry: &Value) {
    if cal_trigger_automatic(entry) {
        blk[15] |= 0x04;
    }
    if ptr_bool(entry, "/Continued") == Some(true) {
        blk[15] |= 0x08;
    }
    if let Some(range) = ptr_str(entry, "/AmplitudeRange") {
        if starts_with_ignore_case(range, "PEAKTOPEAK") {
            blk[15] |= 0x10;
        }
        if starts_with_ignore_case(range, "ZEROTOPEAK") {
            blk[15] |= 0x20;
        }
        if starts_with_ignore_case(range, "RMS") {
            blk[15] |= 0x40;
        }
    }
    if let Some(duration) = ptr_num(entry, "/Duration") {
        BigEndian::write_u32(&mut blk[16..], duration_0001s(duration));
    }
    if let Some(period) = ptr_num(entry, "/SinePeriod") {
        BigEndian::write_f32(&mut blk[20..], period as f32);
    }
    if let Some(amplitude) = ptr_num(entry, "/Amplitude") {
        BigEndian::write_f32(&mut blk[24..], amplitude as f32);
    }
    if let Some(input) = ptr_str(entry, "/InputChannel") {
        copy_open(&mut blk[28..31], input);
    }
    if let Some(reference) = ptr_num(entry, "/ReferenceAmplitude") {
        BigEndian::write_u32(&mut blk[32..], (reference + 0.5) as u32);
    }
    if let Some(coupling) = ptr_str(entry, "/Coupling") {
        copy_open(&mut blk[36..48], coupling);
    }
    if let Some(rolloff) = ptr_str(entry, "/Rolloff") {
        copy_open(&mut blk[48..60], rolloff);
    }
}

fn write_b320(blk: &mut [u8], entry: &Value) {
    if cal_trigger_automatic(entry) {
        blk[15] |= 0x04;
    }
    if ptr_bool(entry, "/Continued") == Some(true) {
        blk[15] |= 0x08;
    }
    if let Some(range) = ptr_str(entry, "/AmplitudeRange") {
        if starts_with_ignore_case(range, "RANDOM") {
            blk[15] |= 0x10;
        }
    }
    if let Some(duration) = ptr_num(entry, "/Duration") {
        BigEndian::write_u32(&mut blk[16..], duration_0001s(duration));
    }
    if let Some(amplitude) = ptr_num(entry, "/Amplitude") {
        BigEndian::write_f32(&mut blk[20..], amplitude as f32);
    }
    if let Some(input) = ptr_str(entry, "/InputChannel") {
        copy_open(&mut blk[24..27], input);
    }
    if let Some(reference) = ptr_num(entry, "/ReferenceAmplitude") {
        BigEndian::write_u32(&mut blk[28..], (reference + 0.5) as u32);
    }
    if let Some(coupling) = ptr_str(entry, "/Coupling") {
        copy_open(&mut blk[32..44], coupling);
    }
    if let Some(rolloff) = ptr_str(entry, "/Rolloff") {
        copy_open(&mut blk[44..56], rolloff);
    }
    if let Some(noise) = ptr_str(entry, "/Noise") {
        copy_open(&mut blk[56..64], noise);
    }
}

fn write_b390(blk: &mut [u8], entry: &Value) {
    if cal_trigger_automatic(entry) {
        blk[15] |= 0x04;
    }
    if ptr_bool(entry, "/Continued") == Some(true) {
        blk[15] |= 0x08;
    }
    if let Some(duration) = ptr_num(entry, "/Duration") {
        BigEndian::write_u32(&mut blk[16..], duration_0001s(duration));
    }
    if let Some(amplitude) = ptr_num(entry, "/Amplitude") {
        BigEndian::write_f32(&mut blk[20..], amplitude as f32);
    }
    if let Some(input) = ptr_str(entry, "/InputChannel") {
        copy_open(&mut blk[24..27], input);
    }
}

fn cal_trigger_automatic(entry: &Value) -> bool {
    matches!(ptr_str(entry, "/Trigger"),
        Some(trigger) if starts_with_ignore_case(trigger, "AUTOMATIC"))
}

/// Calibration durations are stored as unsigned counts of 0.0001 s.
fn duration_0001s(seconds: f64) -> u32 {
    (seconds * 10000.0 + 0.5) as u32
}

/// Point the previous blockette's next field at `written` and bump the
/// blockette count.
fn link_blockette(record: &mut [u8], next_link: &mut usize, written: usize) {
    BigEndian::write_u16(&mut record[*next_link..], written as u16);
    *next_link = written + 2;
    record[FSDH_NUMBLOCKETTES] += 1;
}

fn reserve(
    record: &[u8],
    written: usize,
    needed: usize,
    what: &'static str,
    sid: &str,
) -> Result<(), MSeedError> {
    if written + needed > record.len() {
        return fail(
            sid,
            MSeedError::BufferTooSmall(record.len(), written + needed, what),
        );
    }
    Ok(())
}

/// Copy into a fixed-width SEED text field, space padded, no terminator.
fn copy_open(dest: &mut [u8], s: &str) {
    let bytes = s.as_bytes();
    for (idx, slot) in dest.iter_mut().enumerate() {
        *slot = *bytes.get(idx).unwrap_or(&b' ');
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Write a time string as a 10-byte BTIME, returning the microsecond
/// offset left over after the fsec field.
fn write_btime(btime: &mut [u8], timestr: &str) -> Result<i8, MSeedError> {
    let nstime = match timestr_to_nstime(timestr) {
        Ok(nstime) => nstime,
        Err(err) => {
            error!("cannot convert blockette time `{}`: {}", timestr, err);
            return Err(err);
        }
    };
    let (second_nstime, fsec, usec_offset) = split_fsec(nstime);
    let bt = log_err(nstime_to_time(second_nstime), timestr)?;

    BigEndian::write_u16(&mut btime[0..], bt.year);
    BigEndian::write_u16(&mut btime[2..], bt.day_of_year);
    btime[4] = bt.hour;
    btime[5] = bt.minute;
    btime[6] = bt.second;
    btime[7] = 0;
    BigEndian::write_u16(&mut btime[8..], fsec);

    Ok(usec_offset)
}
