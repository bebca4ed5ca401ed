//! Record data from RFC 1183: various experimental record types.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ Afsdb ---------------------------------------------------------

/// AFSDB record data: an AFS database server for a cell.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Afsdb {
    subtype: u16,
    hostname: Name,
}

impl Afsdb {
    pub fn new(subtype: u16, hostname: Name) -> Self {
        Afsdb { subtype, hostname }
    }

    pub fn subtype(&self) -> u16 {
        self.subtype
    }

    pub fn hostname(&self) -> &Name {
        &self.hostname
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Afsdb {
            subtype: u16::parse(parser)?,
            hostname: Name::parse(parser)?,
        })
    }
}

impl RecordData for Afsdb {
    fn rtype(&self) -> Rtype {
        Rtype::AFSDB
    }
}

impl ComposeRecordData for Afsdb {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.hostname.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.subtype.compose(target)?;
        self.hostname.compose(target)
    }
}

impl fmt::Display for Afsdb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.subtype, self.hostname)
    }
}

//------------ Gpos ----------------------------------------------------------

/// GPOS record data: a geographical position as three text floats.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Gpos {
    longitude: CharStr,
    latitude: CharStr,
    altitude: CharStr,
}

impl Gpos {
    pub fn new(
        longitude: CharStr,
        latitude: CharStr,
        altitude: CharStr,
    ) -> Self {
        Gpos {
            longitude,
            latitude,
            altitude,
        }
    }

    pub fn longitude(&self) -> &CharStr {
        &self.longitude
    }

    pub fn latitude(&self) -> &CharStr {
        &self.latitude
    }

    pub fn altitude(&self) -> &CharStr {
        &self.altitude
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Gpos {
            longitude: CharStr::parse(parser)?,
            latitude: CharStr::parse(parser)?,
            altitude: CharStr::parse(parser)?,
        })
    }
}

impl RecordData for Gpos {
    fn rtype(&self) -> Rtype {
        Rtype::GPOS
    }
}

impl ComposeRecordData for Gpos {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.longitude.encoded_len()
            + self.latitude.encoded_len()
            + self.altitude.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.longitude.compose(target)?;
        self.latitude.compose(target)?;
        self.altitude.compose(target)
    }
}

impl fmt::Display for Gpos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.longitude, self.latitude, self.altitude
        )
    }
}

//------------ Isdn ----------------------------------------------------------

/// ISDN record data: an ISDN address and optional subaddress.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Isdn {
    address: CharStr,
    subaddress: Option<CharStr>,
}

impl Isdn {
    pub fn new(address: CharStr, subaddress: Option<CharStr>) -> Self {
        Isdn {
            address,
            subaddress,
        }
    }

    pub fn address(&self) -> &CharStr {
        &self.address
    }

    pub fn subaddress(&self) -> Option<&CharStr> {
        self.subaddress.as_ref()
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let address = CharStr::parse(parser)?;
        let subaddress = if parser.remaining() > 0 {
            Some(CharStr::parse(parser)?)
        } else {
            None
        };
        Ok(Isdn {
            address,
            subaddress,
        })
    }
}

impl RecordData for Isdn {
    fn rtype(&self) -> Rtype {
        Rtype::ISDN
    }
}

impl ComposeRecordData for Isdn {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.address.encoded_len()
            + self
                .subaddress
                .as_ref()
                .map_or(0, CharStr::encoded_len)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.address.compose(target)?;
        if let Some(ref subaddress) = self.subaddress {
            subaddress.compose(target)?;
        }
        Ok(())
    }
}

impl fmt::Display for Isdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.subaddress {
            Some(ref subaddress) => {
                write!(f, "{} {}", self.address, subaddress)
            }
            None => self.address.fmt(f),
        }
    }
}

//------------ Rp ------------------------------------------------------------

/// RP record data: the person responsible for a domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rp {
    mbox: Name,
    txt: Name,
}

impl Rp {
    pub fn new(mbox: Name, txt: Name) -> Self {
        Rp { mbox, txt }
    }

    pub fn mbox(&self) -> &Name {
        &self.mbox
    }

    pub fn txt(&self) -> &Name {
        &self.txt
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Rp {
            mbox: Name::parse(parser)?,
            txt: Name::parse(parser)?,
        })
    }
}

impl RecordData for Rp {
    fn rtype(&self) -> Rtype {
        Rtype::RP
    }
}

impl ComposeRecordData for Rp {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.mbox.encoded_len() + self.txt.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.mbox.compose(target)?;
        self.txt.compose(target)
    }
}

impl fmt::Display for Rp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}.", self.mbox, self.txt)
    }
}

//------------ Rt ------------------------------------------------------------

/// RT record data: a route-through host.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rt {
    preference: u16,
    intermediate: Name,
}

impl Rt {
    pub fn new(preference: u16, intermediate: Name) -> Self {
        Rt {
            preference,
            intermediate,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn intermediate(&self) -> &Name {
        &self.intermediate
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Rt {
            preference: u16::parse(parser)?,
            intermediate: Name::parse(parser)?,
        })
    }
}

impl RecordData for Rt {
    fn rtype(&self) -> Rtype {
        Rtype::RT
    }
}

impl ComposeRecordData for Rt {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.intermediate.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.intermediate.compose(target)
    }
}

impl fmt::Display for Rt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.preference, self.intermediate)
    }
}

//------------ X25 -----------------------------------------------------------

/// X25 record data: a PSDN address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct X25 {
    address: CharStr,
}

impl X25 {
    pub fn new(address: CharStr) -> Self {
        X25 { address }
    }

    pub fn address(&self) -> &CharStr {
        &self.address
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        CharStr::parse(parser).map(Self::new)
    }
}

impl RecordData for X25 {
    fn rtype(&self) -> Rtype {
        Rtype::X25
    }
}

impl ComposeRecordData for X25 {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.address.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.address.compose(target)
    }
}

impl fmt::Display for X25 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.address.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    fn charstr(s: &[u8]) -> CharStr {
        CharStr::from_slice(s).unwrap()
    }

    #[test]
    fn afsdb_compose_parse() {
        let afsdb = Afsdb::new(1, name("afs.example.com"));
        test_rdlen(&afsdb);
        test_compose_parse(&afsdb, Afsdb::parse);
    }

    #[test]
    fn isdn_compose_parse() {
        let isdn = Isdn::new(charstr(b"150862028003217"), None);
        test_rdlen(&isdn);
        test_compose_parse(&isdn, Isdn::parse);
        let isdn = Isdn::new(
            charstr(b"150862028003217"),
            Some(charstr(b"004")),
        );
        test_rdlen(&isdn);
        test_compose_parse(&isdn, Isdn::parse);
    }

    #[test]
    fn rp_compose_parse() {
        let rp = Rp::new(
            name("hostmaster.example.com"),
            name("contact.example.com"),
        );
        test_rdlen(&rp);
        test_compose_parse(&rp, Rp::parse);
    }
}
