//! Record data for hashed denial of existence.

use super::bitmap::RtypeBitmap;
use crate::base::iana::{Nsec3HashAlgorithm, Rtype};
use crate::base::name::Compressor;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Nsec3 ---------------------------------------------------------

/// NSEC3 record data.
///
/// The salt and the next hashed owner are both length-prefixed octet
/// sequences on the wire; they are stored without the prefix and
/// length-checked at construction.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec3 {
    hash_algorithm: Nsec3HashAlgorithm,
    flags: u8,
    iterations: u16,
    salt: Bytes,
    next_owner: Bytes,
    types: RtypeBitmap,
}

impl Nsec3 {
    pub fn new(
        hash_algorithm: Nsec3HashAlgorithm,
        flags: u8,
        iterations: u16,
        salt: Bytes,
        next_owner: Bytes,
        types: RtypeBitmap,
    ) -> Result<Self, ParseError> {
        if salt.len() > 255 || next_owner.len() > 255 {
            return Err(ParseError::form_error(
                "long NSEC3 octet field",
            ));
        }
        Ok(Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        })
    }

    pub fn hash_algorithm(&self) -> Nsec3HashAlgorithm {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the opt-out flag is set.
    pub fn opt_out(&self) -> bool {
        self.flags & 0x01 != 0
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Bytes {
        &self.salt
    }

    pub fn next_owner(&self) -> &Bytes {
        &self.next_owner
    }

    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let hash_algorithm = Nsec3HashAlgorithm::parse(parser)?;
        let flags = u8::parse(parser)?;
        let iterations = u16::parse(parser)?;
        let salt = parse_len_octets(parser)?;
        let next_owner = parse_len_octets(parser)?;
        let types = RtypeBitmap::parse(parser)?;
        Ok(Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        })
    }
}

impl RecordData for Nsec3 {
    fn rtype(&self) -> Rtype {
        Rtype::NSEC3
    }
}

impl ComposeRecordData for Nsec3 {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        6 + self.salt.len()
            + self.next_owner.len()
            + self.types.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.hash_algorithm.compose(target)?;
        self.flags.compose(target)?;
        self.iterations.compose(target)?;
        compose_len_octets(target, &self.salt)?;
        compose_len_octets(target, &self.next_owner)?;
        self.types.compose(target)
    }
}

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        fmt_octets_or_dash(f, &self.salt)?;
        f.write_str(" ")?;
        fmt_octets_or_dash(f, &self.next_owner)?;
        write!(f, " {}", self.types)
    }
}

//------------ Nsec3param ----------------------------------------------------

/// NSEC3PARAM record data: the NSEC3 parameters of a zone.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec3param {
    hash_algorithm: Nsec3HashAlgorithm,
    flags: u8,
    iterations: u16,
    salt: Bytes,
}

impl Nsec3param {
    pub fn new(
        hash_algorithm: Nsec3HashAlgorithm,
        flags: u8,
        iterations: u16,
        salt: Bytes,
    ) -> Result<Self, ParseError> {
        if salt.len() > 255 {
            return Err(ParseError::form_error("long NSEC3 salt"));
        }
        Ok(Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        })
    }

    pub fn hash_algorithm(&self) -> Nsec3HashAlgorithm {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Bytes {
        &self.salt
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Nsec3param {
            hash_algorithm: Nsec3HashAlgorithm::parse(parser)?,
            flags: u8::parse(parser)?,
            iterations: u16::parse(parser)?,
            salt: parse_len_octets(parser)?,
        })
    }
}

impl RecordData for Nsec3param {
    fn rtype(&self) -> Rtype {
        Rtype::NSEC3PARAM
    }
}

impl ComposeRecordData for Nsec3param {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        5 + self.salt.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.hash_algorithm.compose(target)?;
        self.flags.compose(target)?;
        self.iterations.compose(target)?;
        compose_len_octets(target, &self.salt)
    }
}

impl fmt::Display for Nsec3param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        fmt_octets_or_dash(f, &self.salt)
    }
}

//------------ Helpers -------------------------------------------------------

fn parse_len_octets<'a>(
    parser: &mut Parser<'a, [u8]>,
) -> Result<Bytes, ParseError> {
    let len = usize::from(u8::parse(parser)?);
    Ok(Bytes::copy_from_slice(parser.parse_octets(len)?))
}

fn compose_len_octets<Target: OctetsBuilder + ?Sized>(
    target: &mut Target,
    octets: &Bytes,
) -> Result<(), Target::AppendError> {
    (octets.len() as u8).compose(target)?;
    target.append_slice(octets.as_ref())
}

fn fmt_octets_or_dash(
    f: &mut fmt::Formatter,
    octets: &Bytes,
) -> fmt::Result {
    if octets.is_empty() {
        return f.write_str("-");
    }
    for ch in octets.as_ref() {
        write!(f, "{:02x}", ch)?;
    }
    Ok(())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    #[test]
    fn nsec3_compose_parse() {
        let mut types = RtypeBitmap::builder();
        types.add(Rtype::A).add(Rtype::RRSIG);
        let nsec3 = Nsec3::new(
            Nsec3HashAlgorithm::SHA1,
            1,
            10,
            Bytes::from_static(b"\xAA\xBB"),
            Bytes::from_static(&[0x11u8; 20]),
            types.finalize(),
        )
        .unwrap();
        assert!(nsec3.opt_out());
        test_rdlen(&nsec3);
        test_compose_parse(&nsec3, Nsec3::parse);
    }

    #[test]
    fn nsec3param_compose_parse() {
        let param = Nsec3param::new(
            Nsec3HashAlgorithm::SHA1,
            0,
            0,
            Bytes::new(),
        )
        .unwrap();
        test_rdlen(&param);
        test_compose_parse(&param, Nsec3param::parse);
    }
}
