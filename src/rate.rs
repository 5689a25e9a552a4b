use crate::mseed_error::MSeedError;

/// Sample rate in Hz for the header convention where a negative value is a
/// period in seconds/sample.
pub fn sample_rate_hz(samprate: f64) -> f64 {
    if samprate < 0.0 {
        -1.0 / samprate
    } else {
        samprate
    }
}

/// Generate the SEED sample rate factor and multiplier for a rate.
///
/// A positive input is samples/second, a negative input seconds/sample.
/// Rates >= 1.0 use samples/second notation, rates < 1.0 seconds/sample
/// notation (both outputs negated).
pub fn gen_fact_mult(samprate: f64) -> Result<(i16, i16), MSeedError> {
    let rate = if samprate < 0.0 {
        -1.0 / samprate
    } else {
        samprate
    };

    if rate == 0.0 {
        return Ok((0, 0));
    }

    if rate >= 1.0 {
        if let Some((factor1, factor2)) = reduce_rate(rate) {
            return Ok((factor1, factor2));
        }
    } else if let Some((factor1, factor2)) = reduce_rate(1.0 / rate) {
        // Invert to seconds/sample notation
        return Ok((-factor1, -factor2));
    }

    Err(MSeedError::RateOutOfRange(samprate))
}

/// Nominal sample rate implied by a factor/multiplier pair.
pub fn nominal_rate(factor: i16, multiplier: i16) -> f64 {
    let mut samprate = 0.0;

    if factor > 0 {
        samprate = factor as f64;
    } else if factor < 0 {
        samprate = -1.0 / factor as f64;
    }

    if multiplier > 0 {
        samprate *= multiplier as f64;
    } else if multiplier < 0 {
        samprate = -samprate / multiplier as f64;
    }

    samprate
}

/// Reduce a sample rate into two 16-bit factors (the second is a divisor
/// when negative).
///
/// Integer rates up to 32767 are exact.  Integer rates up to 32767^2 are
/// matched with the closest factor pair found by searching down from
/// floor(sqrt(rate)); the search keeps the first local minimum.  Non-integer
/// rates up to 32767 become a continued-fraction rational approximation.
fn reduce_rate(samprate: f64) -> Option<(i16, i16)> {
    let intsamprate = (samprate + 0.5) as i64;

    if (samprate - intsamprate as f64).abs() < 0.0000001 {
        if intsamprate <= 32767 {
            return Some((intsamprate as i16, 1));
        }

        if intsamprate <= 32767 * 32767 {
            let mut searchfactor1 = num::integer::sqrt(intsamprate);
            let mut closestdiff = searchfactor1;
            let mut closestfactor = searchfactor1;

            while intsamprate % searchfactor1 != 0 {
                searchfactor1 -= 1;

                // Track the factor that generates the closest match
                let searchfactor2 = intsamprate / searchfactor1;
                let diff = intsamprate - searchfactor1 * searchfactor2;
                if diff < closestdiff {
                    closestdiff = diff;
                    closestfactor = searchfactor1;
                }

                // Next iteration would push the second factor out of range,
                // accept the closest found
                if intsamprate / (searchfactor1 - 1) > 32767 {
                    searchfactor1 = closestfactor;
                    break;
                }
            }

            let searchfactor2 = intsamprate / searchfactor1;

            if searchfactor1 <= 32767 && searchfactor2 <= 32767 {
                return Some((searchfactor1 as i16, searchfactor2 as i16));
            }
        }
    } else if samprate <= 32767.0 {
        let (num, den) = rat_approx(samprate, 32767, 1e-8);
        // Negate the denominator to denote division
        return Some((num as i16, -(den as i16)));
    }

    None
}

/// Approximate a real as a rational through continued fraction expansion,
/// with numerator and denominator bounded by `maxval`.
fn rat_approx(real: f64, maxval: i32, precision: f64) -> (i32, i32) {
    let pos = real >= 0.0;
    let mut realj = if pos { real } else { -real };
    let preal = realj;

    let mut bj = (realj + precision) as i32;
    realj = 1.0 / (realj - bj as f64);
    let mut aj = bj;
    let mut aj1 = 1;
    let mut bigbj = 1;
    let mut bj1 = 0;

    let mut num = aj;
    let mut den = bigbj;
    let mut pnum = aj;
    let mut pden = bigbj;

    while (preal - aj as f64 / bigbj as f64).abs() > precision && aj < maxval && bigbj < maxval {
        let aj2 = aj1;
        aj1 = aj;
        let bj2 = bj1;
        bj1 = bigbj;
        bj = (realj + precision) as i32;
        realj = 1.0 / (realj - bj as f64);
        aj = bj * aj1 + aj2;
        bigbj = bj * bj1 + bj2;
        num = pnum;
        den = pden;
        pnum = aj;
        pden = bigbj;
    }

    if pnum < maxval && pden < maxval {
        num = pnum;
        den = pden;
    }

    if !pos {
        num = -num;
    }

    (num, den)
}
