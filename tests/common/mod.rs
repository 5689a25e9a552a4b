//! Shared fixtures and reference decoders for the packing tests.
//!
//! The decoders only exist to check round trips; the library itself is
//! write-only.

#![allow(dead_code)]

mod sine;

pub use sine::SINE;

/// The sine fixture truncated to integers, the form the Steim and integer
/// encodings consume.
pub fn sine_ints() -> Vec<i32> {
    SINE.iter().map(|&v| v as i32).collect()
}

pub fn sine_f64() -> Vec<f64> {
    SINE.iter().map(|&v| v as f64).collect()
}

fn be_u32(bytes: &[u8], idx: usize) -> u32 {
    u32::from_be_bytes([
        bytes[4 * idx],
        bytes[4 * idx + 1],
        bytes[4 * idx + 2],
        bytes[4 * idx + 3],
    ])
}

fn sign_extend(raw: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((raw << shift) as i32) >> shift
}

/// Forward integration constant of the first frame.
pub fn steim_x0(frames: &[u8]) -> i32 {
    be_u32(frames, 1) as i32
}

/// Reverse integration constant of the first frame.
pub fn steim_xn(frames: &[u8]) -> i32 {
    be_u32(frames, 2) as i32
}

/// Decode Steim-1 frames back into samples.
pub fn decode_steim1(frames: &[u8], num_samples: usize) -> Vec<i32> {
    assert_eq!(frames.len() % 64, 0, "Steim data must be whole frames");
    let mut diffs: Vec<i32> = Vec::new();

    for (frame_idx, frame) in frames.chunks(64).enumerate() {
        let nibbles = be_u32(frame, 0);
        for widx in 1..16 {
            if frame_idx == 0 && (widx == 1 || widx == 2) {
                continue; // integration constants
            }
            let word = be_u32(frame, widx);
            match (nibbles >> (32 - 2 * widx)) & 0x3 {
                0 => {}
                1 => {
                    for k in 0..4 {
                        diffs.push(sign_extend(word >> (8 * (3 - k)) & 0xff, 8));
                    }
                }
                2 => {
                    for k in 0..2 {
                        diffs.push(sign_extend(word >> (16 * (1 - k)) & 0xffff, 16));
                    }
                }
                _ => diffs.push(word as i32),
            }
        }
    }

    integrate(steim_x0(frames), steim_xn(frames), &diffs, num_samples)
}

/// Decode Steim-2 frames back into samples.
pub fn decode_steim2(frames: &[u8], num_samples: usize) -> Vec<i32> {
    assert_eq!(frames.len() % 64, 0, "Steim data must be whole frames");
    let mut diffs: Vec<i32> = Vec::new();

    for (frame_idx, frame) in frames.chunks(64).enumerate() {
        let nibbles = be_u32(frame, 0);
        for widx in 1..16 {
            if frame_idx == 0 && (widx == 1 || widx == 2) {
                continue;
            }
            let word = be_u32(frame, widx);
            match (nibbles >> (32 - 2 * widx)) & 0x3 {
                0 => {}
                1 => {
                    for k in 0..4 {
                        diffs.push(sign_extend(word >> (8 * (3 - k)) & 0xff, 8));
                    }
                }
                2 => match word >> 30 {
                    1 => diffs.push(sign_extend(word & 0x3fff_ffff, 30)),
                    2 => {
                        for k in 0..2 {
                            diffs.push(sign_extend(word >> (15 * (1 - k)) & 0x7fff, 15));
                        }
                    }
                    3 => {
                        for k in 0..3 {
                            diffs.push(sign_extend(word >> (10 * (2 - k)) & 0x3ff, 10));
                        }
                    }
                    _ => panic!("reserved 2-nibble sub-code 0"),
                },
                _ => match word >> 30 {
                    0 => {
                        for k in 0..5 {
                            diffs.push(sign_extend(word >> (6 * (4 - k)) & 0x3f, 6));
                        }
                    }
                    1 => {
                        for k in 0..6 {
                            diffs.push(sign_extend(word >> (5 * (5 - k)) & 0x1f, 5));
                        }
                    }
                    2 => {
                        for k in 0..7 {
                            diffs.push(sign_extend(word >> (4 * (6 - k)) & 0xf, 4));
                        }
                    }
                    _ => panic!("reserved 3-nibble sub-code 3"),
                },
            }
        }
    }

    integrate(steim_x0(frames), steim_xn(frames), &diffs, num_samples)
}

fn integrate(x0: i32, xn: i32, diffs: &[i32], num_samples: usize) -> Vec<i32> {
    assert!(
        diffs.len() >= num_samples,
        "{} packed differences for {} samples",
        diffs.len(),
        num_samples
    );
    let mut samples = Vec::with_capacity(num_samples);
    samples.push(x0);
    let mut last = x0;
    for &diff in &diffs[1..num_samples] {
        last = last.wrapping_add(diff);
        samples.push(last);
    }
    assert_eq!(
        *samples.last().unwrap(),
        xn,
        "reverse integration constant mismatch"
    );
    samples
}
