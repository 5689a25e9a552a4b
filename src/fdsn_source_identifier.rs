use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MSeedError;

lazy_static! {
    static ref PARSE_FDSN_REGEX: Regex = Regex::new(
        r"(?x)^
            FDSN:                      # prefix
            (?P<net>[A-Z0-9]{1,8})_    # network, 1-8 chars
            (?P<sta>[-A-Z0-9]{1,8})_   # station, 1-8 chars with dash
            (?P<loc>[-A-Z0-9]{0,8})_   # location, 0-8 chars with dash
            (?P<band>[A-Z0-9]*)_       # band, optional, usually single char
            (?P<source>[A-Z0-9]+)_     # source, one or more, usually single char
            (?P<subsource>[A-Z0-9]*)$  # subsource, optional, usually single char
"
    )
    .unwrap();
}

pub const PREFIX: &str = "FDSN:";

/// An FDSN Source Identifier string parsed into its component parts
/// See the specification at <http://docs.fdsn.org/projects/source-identifiers/en/v1.0/index.html>
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FdsnSourceIdentifier {
    pub network: String,
    pub station: String,
    pub location: String,
    pub band: String,
    pub source: String,
    pub subsource: String,
}

impl FdsnSourceIdentifier {
    /// Calculates the length when turned back into a string. This includes
    /// 5 bytes for the FDSN: prefix and the 5 underscore separators
    pub fn calc_len(&self) -> u8 {
        (10 + self.network.len()
            + self.station.len()
            + self.location.len()
            + self.band.len()
            + self.source.len()
            + self.subsource.len()) as u8
    }

    pub fn parse(id: &str) -> Result<FdsnSourceIdentifier, MSeedError> {
        let sid = match PARSE_FDSN_REGEX.captures(id) {
            Some(captures) => FdsnSourceIdentifier {
                network: capture_named(&captures, "net", id)?,
                station: capture_named(&captures, "sta", id)?,
                location: capture_named(&captures, "loc", id)?,
                band: capture_named(&captures, "band", id)?,
                source: capture_named(&captures, "source", id)?,
                subsource: capture_named(&captures, "subsource", id)?,
            },
            None => {
                return Err(MSeedError::IdentifierParse(
                    id.to_string(),
                    String::from("all"),
                ))
            }
        };
        Ok(sid)
    }

    /// The SEED network, station, location and channel codes used by
    /// miniSEED 2, verifying each fits its fixed header field: network up
    /// to 2, station up to 5, location up to 2 and channel exactly 3
    /// characters.
    pub fn seed_codes(&self) -> Result<(String, String, String, String), MSeedError> {
        let channel = format!("{}{}{}", self.band, self.source, self.subsource);
        if self.network.len() > 2
            || self.station.len() > 5
            || self.location.len() > 2
            || channel.len() != 3
        {
            return Err(MSeedError::SeedCodes(
                self.to_string(),
                self.network.clone(),
                self.station.clone(),
                self.location.clone(),
                channel,
            ));
        }
        Ok((
            self.network.clone(),
            self.station.clone(),
            self.location.clone(),
            channel,
        ))
    }
}

impl fmt::Display for FdsnSourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}_{}_{}_{}_{}_{}",
            PREFIX,
            self.network,
            self.station,
            self.location,
            self.band,
            self.source,
            self.subsource
        )
    }
}

fn capture_named(captures: &Captures, name: &str, id: &str) -> Result<String, MSeedError> {
    match captures.name(name) {
        Some(s) => Ok(s.as_str().to_string()),
        None => Err(MSeedError::IdentifierParse(
            id.to_string(),
            name.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_regex() -> Result<(), MSeedError> {
        let id = "FDSN:IU_ABCD_00_B_H_Z";
        assert!(PARSE_FDSN_REGEX.is_match(id));
        let sid = FdsnSourceIdentifier::parse(id)?;
        assert_eq!("IU", sid.network);
        assert_eq!("ABCD", sid.station);
        assert_eq!("00", sid.location);
        assert_eq!("B", sid.band);
        assert_eq!("H", sid.source);
        assert_eq!("Z", sid.subsource);
        assert_eq!(id, sid.to_string());
        Ok(())
    }

    #[test]
    fn calc_len() -> Result<(), MSeedError> {
        let id = String::from("FDSN:IU_COLA_00_B_H_Z");
        let sid = FdsnSourceIdentifier::parse(&id)?;
        assert_eq!(id.len() as u8, sid.calc_len());
        Ok(())
    }

    #[test]
    fn seed_codes_extracted() -> Result<(), MSeedError> {
        let sid = FdsnSourceIdentifier::parse("FDSN:XX_TEST__X_Y_Z")?;
        let (net, sta, loc, chan) = sid.seed_codes()?;
        assert_eq!(net, "XX");
        assert_eq!(sta, "TEST");
        assert_eq!(loc, "");
        assert_eq!(chan, "XYZ");
        Ok(())
    }

    #[test]
    fn seed_codes_length_violations() {
        // 3-char network cannot be expressed in miniSEED 2
        let sid = FdsnSourceIdentifier::parse("FDSN:XXX_TEST__B_H_Z").unwrap();
        assert!(sid.seed_codes().is_err());

        // channel codes must collapse to exactly 3 characters
        let sid = FdsnSourceIdentifier::parse("FDSN:XX_TEST__BB_HH_Z").unwrap();
        assert!(sid.seed_codes().is_err());

        let sid = FdsnSourceIdentifier::parse("FDSN:XX_TOOLONGSTA__B_H_Z");
        assert!(sid.is_err() || sid.unwrap().seed_codes().is_err());
    }

    #[test]
    fn unparseable_rejected() {
        assert!(FdsnSourceIdentifier::parse("XX_TEST__B_H_Z").is_err());
        assert!(FdsnSourceIdentifier::parse("FDSN:").is_err());
    }
}
