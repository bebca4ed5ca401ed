//! Record data for transaction authentication.
//!
//! TSIG and TKEY records only ever appear in the additional section of
//! a message and are never cached or written to zones. Their algorithm
//! names are written without compression like all post-1035 names.

use crate::base::iana::Rtype;
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError, U48};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Tsig ----------------------------------------------------------

/// TSIG record data: a transaction signature.
///
/// The time signed is a 48 bit count of seconds since the Unix epoch.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tsig {
    algorithm: Name,
    time_signed: U48,
    fudge: u16,
    mac: Bytes,
    original_id: u16,
    error: u16,
    other: Bytes,
}

impl Tsig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        algorithm: Name,
        time_signed: U48,
        fudge: u16,
        mac: Bytes,
        original_id: u16,
        error: u16,
        other: Bytes,
    ) -> Result<Self, ParseError> {
        if mac.len() > usize::from(u16::MAX)
            || other.len() > usize::from(u16::MAX)
        {
            return Err(ParseError::form_error("long TSIG field"));
        }
        Ok(Tsig {
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    pub fn algorithm(&self) -> &Name {
        &self.algorithm
    }

    pub fn time_signed(&self) -> U48 {
        self.time_signed
    }

    pub fn fudge(&self) -> u16 {
        self.fudge
    }

    pub fn mac(&self) -> &Bytes {
        &self.mac
    }

    pub fn original_id(&self) -> u16 {
        self.original_id
    }

    pub fn error(&self) -> u16 {
        self.error
    }

    pub fn other(&self) -> &Bytes {
        &self.other
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Tsig {
            algorithm: Name::parse(parser)?,
            time_signed: U48::parse(parser)?,
            fudge: u16::parse(parser)?,
            mac: parse_u16_octets(parser)?,
            original_id: u16::parse(parser)?,
            error: u16::parse(parser)?,
            other: parse_u16_octets(parser)?,
        })
    }
}

impl RecordData for Tsig {
    fn rtype(&self) -> Rtype {
        Rtype::TSIG
    }
}

impl ComposeRecordData for Tsig {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.algorithm.encoded_len()
            + 6
            + 2
            + 2
            + self.mac.len()
            + 2
            + 2
            + 2
            + self.other.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.algorithm.compose(target)?;
        self.time_signed.compose(target)?;
        self.fudge.compose(target)?;
        compose_u16_octets(target, &self.mac)?;
        self.original_id.compose(target)?;
        self.error.compose(target)?;
        compose_u16_octets(target, &self.other)
    }
}

impl fmt::Display for Tsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} {} [{} octets] {} {}",
            self.algorithm,
            self.time_signed,
            self.fudge,
            self.mac.len(),
            self.original_id,
            self.error
        )
    }
}

//------------ Tkey ----------------------------------------------------------

/// TKEY record data: keying material for TSIG.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tkey {
    algorithm: Name,
    inception: u32,
    expiration: u32,
    mode: u16,
    error: u16,
    key: Bytes,
    other: Bytes,
}

impl Tkey {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        algorithm: Name,
        inception: u32,
        expiration: u32,
        mode: u16,
        error: u16,
        key: Bytes,
        other: Bytes,
    ) -> Result<Self, ParseError> {
        if key.len() > usize::from(u16::MAX)
            || other.len() > usize::from(u16::MAX)
        {
            return Err(ParseError::form_error("long TKEY field"));
        }
        Ok(Tkey {
            algorithm,
            inception,
            expiration,
            mode,
            error,
            key,
            other,
        })
    }

    pub fn algorithm(&self) -> &Name {
        &self.algorithm
    }

    pub fn inception(&self) -> u32 {
        self.inception
    }

    pub fn expiration(&self) -> u32 {
        self.expiration
    }

    pub fn mode(&self) -> u16 {
        self.mode
    }

    pub fn error(&self) -> u16 {
        self.error
    }

    pub fn key(&self) -> &Bytes {
        &self.key
    }

    pub fn other(&self) -> &Bytes {
        &self.other
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Tkey {
            algorithm: Name::parse(parser)?,
            inception: u32::parse(parser)?,
            expiration: u32::parse(parser)?,
            mode: u16::parse(parser)?,
            error: u16::parse(parser)?,
            key: parse_u16_octets(parser)?,
            other: parse_u16_octets(parser)?,
        })
    }
}

impl RecordData for Tkey {
    fn rtype(&self) -> Rtype {
        Rtype::TKEY
    }
}

impl ComposeRecordData for Tkey {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.algorithm.encoded_len()
            + 12
            + 2
            + self.key.len()
            + 2
            + self.other.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.algorithm.compose(target)?;
        self.inception.compose(target)?;
        self.expiration.compose(target)?;
        self.mode.compose(target)?;
        self.error.compose(target)?;
        compose_u16_octets(target, &self.key)?;
        compose_u16_octets(target, &self.other)
    }
}

impl fmt::Display for Tkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} {} [{} octets]",
            self.algorithm,
            self.inception,
            self.expiration,
            self.mode,
            self.error,
            self.key.len()
        )
    }
}

//------------ Helpers -------------------------------------------------------

fn parse_u16_octets<'a>(
    parser: &mut Parser<'a, [u8]>,
) -> Result<Bytes, ParseError> {
    let len = usize::from(u16::parse(parser)?);
    Ok(Bytes::copy_from_slice(parser.parse_octets(len)?))
}

fn compose_u16_octets<Target: OctetsBuilder + ?Sized>(
    target: &mut Target,
    octets: &Bytes,
) -> Result<(), Target::AppendError> {
    (octets.len() as u16).compose(target)?;
    target.append_slice(octets.as_ref())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn tsig_compose_parse() {
        let tsig = Tsig::new(
            name("hmac-sha256.sig-alg.reg.int"),
            U48::new(1700000000).unwrap(),
            300,
            Bytes::from_static(&[0x5Au8; 32]),
            0x1234,
            0,
            Bytes::new(),
        )
        .unwrap();
        test_rdlen(&tsig);
        test_compose_parse(&tsig, Tsig::parse);
    }

    #[test]
    fn tkey_compose_parse() {
        let tkey = Tkey::new(
            name("gss-tsig"),
            1700000000,
            1700003600,
            3,
            0,
            Bytes::from_static(b"opaque key data"),
            Bytes::new(),
        )
        .unwrap();
        test_rdlen(&tkey);
        test_compose_parse(&tkey, Tkey::parse);
    }

    #[test]
    fn truncated_mac_rejected() {
        // A MAC length larger than the remaining data.
        let mut buf = Vec::new();
        octseq::builder::infallible(name("hmac-md5").compose(&mut buf));
        buf.extend_from_slice(&[0; 6]); // time signed
        buf.extend_from_slice(&300u16.to_be_bytes());
        buf.extend_from_slice(&16u16.to_be_bytes());
        buf.extend_from_slice(&[0; 4]); // only four MAC bytes
        let mut parser = Parser::from_ref(buf.as_slice());
        assert!(Tsig::parse(&mut parser).is_err());
    }
}
