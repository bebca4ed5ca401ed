//! The NSID option for identifying a name server instance.

use super::super::iana::OptionCode;
use super::super::wire::ParseError;
use super::{ComposeOptData, LongOptData, OptData, ParseOptData};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The payload of an NSID option.
///
/// The content is opaque to the protocol; servers usually put a host
/// name or similar identifier in it.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsid {
    octets: Bytes,
}

impl Nsid {
    pub fn from_octets(octets: Bytes) -> Result<Self, LongOptData> {
        LongOptData::check_len(octets.len())?;
        Ok(Nsid { octets })
    }

    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Nsid {
            octets: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl OptData for Nsid {
    fn code(&self) -> OptionCode {
        OptionCode::NSID
    }
}

impl ComposeOptData for Nsid {
    fn compose_len(&self) -> u16 {
        self.octets.len() as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.octets.as_ref())
    }
}

impl<'a> ParseOptData<'a> for Nsid {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::NSID {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in self.octets.as_ref() {
            write!(f, "{:02X}", ch)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payload_length_checked() {
        assert!(
            Nsid::from_octets(Bytes::from(vec![0u8; 0xFFFF])).is_ok()
        );
        assert!(Nsid::from_octets(Bytes::from(vec![0u8; 0x1_0000]))
            .is_err());
    }
}
