//! Record data for DNSSEC.
//!
//! Several of these formats are shared between record types: the DS
//! format is also used by CDS, DLV and TA, the DNSKEY format by KEY and
//! RKEY, and the RRSIG format by the older SIG. The shared types carry
//! their record type as a field instead of existing once per type.

use super::bitmap::RtypeBitmap;
use crate::base::iana::{DigestAlgorithm, Rtype, SecurityAlgorithm};
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::serial::Serial;
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Ds ------------------------------------------------------------

/// DS record data: a digest of a delegated key.
///
/// Also used by the CDS, DLV and TA record types.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ds {
    rtype: Rtype,
    key_tag: u16,
    algorithm: SecurityAlgorithm,
    digest_type: DigestAlgorithm,
    digest: Bytes,
}

impl Ds {
    pub fn new(
        rtype: Rtype,
        key_tag: u16,
        algorithm: SecurityAlgorithm,
        digest_type: DigestAlgorithm,
        digest: Bytes,
    ) -> Self {
        Ds {
            rtype,
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn digest_type(&self) -> DigestAlgorithm {
        self.digest_type
    }

    pub fn digest(&self) -> &Bytes {
        &self.digest
    }

    pub fn parse<'a>(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Ds {
            rtype,
            key_tag: u16::parse(parser)?,
            algorithm: SecurityAlgorithm::parse(parser)?,
            digest_type: DigestAlgorithm::parse(parser)?,
            digest: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Ds {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for Ds {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4 + self.digest.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.key_tag.compose(target)?;
        self.algorithm.compose(target)?;
        self.digest_type.compose(target)?;
        target.append_slice(self.digest.as_ref())
    }
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        for ch in self.digest.as_ref() {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

//------------ Dnskey --------------------------------------------------------

/// DNSKEY record data: a public key.
///
/// Also used by the older KEY type and by RKEY.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Dnskey {
    rtype: Rtype,
    flags: u16,
    protocol: u8,
    algorithm: SecurityAlgorithm,
    public_key: Bytes,
}

impl Dnskey {
    pub fn new(
        rtype: Rtype,
        flags: u16,
        protocol: u8,
        algorithm: SecurityAlgorithm,
        public_key: Bytes,
    ) -> Self {
        Dnskey {
            rtype,
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn public_key(&self) -> &Bytes {
        &self.public_key
    }

    /// Returns whether the zone key flag is set.
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    /// Returns whether the secure entry point flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0x0001 != 0
    }

    pub fn parse<'a>(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Dnskey {
            rtype,
            flags: u16::parse(parser)?,
            protocol: u8::parse(parser)?,
            algorithm: SecurityAlgorithm::parse(parser)?,
            public_key: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Dnskey {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for Dnskey {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4 + self.public_key.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.flags.compose(target)?;
        self.protocol.compose(target)?;
        self.algorithm.compose(target)?;
        target.append_slice(self.public_key.as_ref())
    }
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{} octets]",
            self.flags,
            self.protocol,
            self.algorithm,
            self.public_key.len()
        )
    }
}

//------------ Rrsig ---------------------------------------------------------

/// RRSIG record data: a signature over a record set.
///
/// Also used by the older SIG type. The two time stamps are serial
/// numbers: they wrap around and only order within a window.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rrsig {
    rtype: Rtype,
    type_covered: Rtype,
    algorithm: SecurityAlgorithm,
    labels: u8,
    original_ttl: u32,
    expiration: Serial,
    inception: Serial,
    key_tag: u16,
    signer_name: Name,
    signature: Bytes,
}

impl Rrsig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rtype: Rtype,
        type_covered: Rtype,
        algorithm: SecurityAlgorithm,
        labels: u8,
        original_ttl: u32,
        expiration: Serial,
        inception: Serial,
        key_tag: u16,
        signer_name: Name,
        signature: Bytes,
    ) -> Self {
        Rrsig {
            rtype,
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn labels(&self) -> u8 {
        self.labels
    }

    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    pub fn expiration(&self) -> Serial {
        self.expiration
    }

    pub fn inception(&self) -> Serial {
        self.inception
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    pub fn signature(&self) -> &Bytes {
        &self.signature
    }

    pub fn parse<'a>(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Rrsig {
            rtype,
            type_covered: Rtype::parse(parser)?,
            algorithm: SecurityAlgorithm::parse(parser)?,
            labels: u8::parse(parser)?,
            original_ttl: u32::parse(parser)?,
            expiration: Serial::parse(parser)?,
            inception: Serial::parse(parser)?,
            key_tag: u16::parse(parser)?,
            signer_name: Name::parse(parser)?,
            signature: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Rrsig {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for Rrsig {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        18 + self.signer_name.encoded_len() + self.signature.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.type_covered.compose(target)?;
        self.algorithm.compose(target)?;
        self.labels.compose(target)?;
        self.original_ttl.compose(target)?;
        self.expiration.compose(target)?;
        self.inception.compose(target)?;
        self.key_tag.compose(target)?;
        self.signer_name.compose(target)?;
        target.append_slice(self.signature.as_ref())
    }
}

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}. [{} octets]",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name,
            self.signature.len()
        )
    }
}

//------------ Nsec ----------------------------------------------------------

/// NSEC record data: the next name in a zone and the types at this one.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec {
    next_name: Name,
    types: RtypeBitmap,
}

impl Nsec {
    pub fn new(next_name: Name, types: RtypeBitmap) -> Self {
        Nsec { next_name, types }
    }

    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Nsec {
            next_name: Name::parse(parser)?,
            types: RtypeBitmap::parse(parser)?,
        })
    }
}

impl RecordData for Nsec {
    fn rtype(&self) -> Rtype {
        Rtype::NSEC
    }
}

impl ComposeRecordData for Nsec {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.next_name.encoded_len() + self.types.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.next_name.compose(target)?;
        self.types.compose(target)
    }
}

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.next_name, self.types)
    }
}

//------------ Nxt -----------------------------------------------------------

/// NXT record data: the obsolete precursor of NSEC.
///
/// Its bitmap covers the types below 128 with one flat run of octets,
/// no windows.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nxt {
    next_name: Name,
    types: Bytes,
}

impl Nxt {
    pub fn new(next_name: Name, types: Bytes) -> Result<Self, ParseError> {
        if types.len() > 16 {
            return Err(ParseError::form_error("long NXT bitmap"));
        }
        Ok(Nxt { next_name, types })
    }

    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// Returns whether the bitmap contains the given record type.
    pub fn contains(&self, rtype: Rtype) -> bool {
        let value = rtype.to_int();
        let octet = usize::from(value >> 3);
        let mask = 0x80u8 >> (value & 7);
        self.types
            .get(octet)
            .map_or(false, |bits| bits & mask != 0)
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let next_name = Name::parse(parser)?;
        let types = Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        );
        Nxt::new(next_name, types)
    }
}

impl RecordData for Nxt {
    fn rtype(&self) -> Rtype {
        Rtype::NXT
    }
}

impl ComposeRecordData for Nxt {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.next_name.encoded_len() + self.types.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.next_name.compose(target)?;
        target.append_slice(self.types.as_ref())
    }
}

impl fmt::Display for Nxt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.", self.next_name)?;
        for value in 0..self.types.len() * 8 {
            if self.contains(Rtype::from_int(value as u16)) {
                write!(f, " {}", Rtype::from_int(value as u16))?;
            }
        }
        Ok(())
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

    #[test]
    fn ds_compose_parse() {
        let ds = Ds::new(
            Rtype::DS,
            20326,
            SecurityAlgorithm::RSASHA256,
            DigestAlgorithm::SHA256,
            Bytes::from_static(&[0xE0u8; 32]),
        );
        test_rdlen(&ds);
        test_compose_parse(&ds, |parser| Ds::parse(Rtype::DS, parser));
    }

    #[test]
    fn ds_family_keeps_rtype() {
        let dlv = Ds::new(
            Rtype::DLV,
            1,
            SecurityAlgorithm::RSASHA1,
            DigestAlgorithm::SHA1,
            Bytes::from_static(&[0u8; 20]),
        );
        assert_eq!(dlv.rtype(), Rtype::DLV);
    }

    #[test]
    fn dnskey_flags() {
        let dnskey = Dnskey::new(
            Rtype::DNSKEY,
            257,
            3,
            SecurityAlgorithm::RSASHA256,
            Bytes::from_static(b"key material"),
        );
        assert!(dnskey.is_zone_key());
        assert!(dnskey.is_secure_entry_point());
        test_rdlen(&dnskey);
        test_compose_parse(&dnskey, |parser| {
            Dnskey::parse(Rtype::DNSKEY, parser)
        });
    }

    #[test]
    fn rrsig_compose_parse() {
        let rrsig = Rrsig::new(
            Rtype::RRSIG,
            Rtype::A,
            SecurityAlgorithm::ECDSAP256SHA256,
            3,
            3600,
            Serial(1700003600),
            Serial(1700000000),
            12345,
            name("example.com"),
            Bytes::from_static(&[0xABu8; 64]),
        );
        test_rdlen(&rrsig);
        test_compose_parse(&rrsig, |parser| {
            Rrsig::parse(Rtype::RRSIG, parser)
        });
    }

    #[test]
    fn nsec_compose_parse() {
        let mut types = RtypeBitmap::builder();
        types.add(Rtype::A).add(Rtype::AAAA).add(Rtype::RRSIG);
        let nsec = Nsec::new(name("b.example.com"), types.finalize());
        test_rdlen(&nsec);
        test_compose_parse(&nsec, Nsec::parse);
        assert!(nsec.types().contains(Rtype::AAAA));
        assert!(!nsec.types().contains(Rtype::MX));
    }

    #[test]
    fn nxt_bitmap_limited() {
        assert!(Nxt::new(
            name("b.example.com"),
            Bytes::from_static(&[0u8; 17])
        )
        .is_err());
        let nxt = Nxt::new(
            name("b.example.com"),
            Bytes::from_static(b"\x40\x01"),
        )
        .unwrap();
        assert!(nxt.contains(Rtype::A));
        assert!(nxt.contains(Rtype::MX));
        assert!(!nxt.contains(Rtype::NS));
        test_rdlen(&nxt);
        test_compose_parse(&nxt, Nxt::parse);
    }
}
