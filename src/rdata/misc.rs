//! Record data of assorted smaller record types.

use crate::base::charstr::CharStr;
use crate::base::iana::{CertificateType, Rtype, SecurityAlgorithm};
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Dname, NsapPtr, Talink ----------------------------------------

dname_type! {
    /// DNAME record data: a delegation of an entire subtree.
    (Dname, DNAME, dname, uncompressed)
}

dname_type! {
    /// NSAP-PTR record data: reverse mapping for NSAP addresses.
    (NsapPtr, NSAPPTR, name, uncompressed)
}

//------------ Loc -----------------------------------------------------------

/// LOC record data: a geographical location.
///
/// Latitude and longitude are in thousandths of an arc second shifted
/// by 2^31, altitude in centimeters above a baseline 100000 meters
/// below the WGS 84 reference spheroid. Size and precision are base 10
/// floats packed into a nibble pair each. The values are carried as
/// they appear on the wire.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Loc {
    size: u8,
    horiz_pre: u8,
    vert_pre: u8,
    latitude: u32,
    longitude: u32,
    altitude: u32,
}

impl Loc {
    pub fn new(
        size: u8,
        horiz_pre: u8,
        vert_pre: u8,
        latitude: u32,
        longitude: u32,
        altitude: u32,
    ) -> Self {
        Loc {
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn horiz_pre(&self) -> u8 {
        self.horiz_pre
    }

    pub fn vert_pre(&self) -> u8 {
        self.vert_pre
    }

    pub fn latitude(&self) -> u32 {
        self.latitude
    }

    pub fn longitude(&self) -> u32 {
        self.longitude
    }

    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let version = u8::parse(parser)?;
        if version != 0 {
            return Err(ParseError::form_error(
                "unknown LOC version",
            ));
        }
        Ok(Loc {
            size: u8::parse(parser)?,
            horiz_pre: u8::parse(parser)?,
            vert_pre: u8::parse(parser)?,
            latitude: u32::parse(parser)?,
            longitude: u32::parse(parser)?,
            altitude: u32::parse(parser)?,
        })
    }
}

impl RecordData for Loc {
    fn rtype(&self) -> Rtype {
        Rtype::LOC
    }
}

impl ComposeRecordData for Loc {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        0u8.compose(target)?;
        self.size.compose(target)?;
        self.horiz_pre.compose(target)?;
        self.vert_pre.compose(target)?;
        self.latitude.compose(target)?;
        self.longitude.compose(target)?;
        self.altitude.compose(target)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "0 {} {} {} {} {} {}",
            self.size,
            self.horiz_pre,
            self.vert_pre,
            self.latitude,
            self.longitude,
            self.altitude
        )
    }
}

//------------ Nsap ----------------------------------------------------------

/// NSAP record data: a raw OSI network address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsap {
    address: Bytes,
}

impl Nsap {
    pub fn new(address: Bytes) -> Self {
        Nsap { address }
    }

    pub fn address(&self) -> &Bytes {
        &self.address
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Nsap {
            address: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Nsap {
    fn rtype(&self) -> Rtype {
        Rtype::NSAP
    }
}

impl ComposeRecordData for Nsap {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.address.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.address.as_ref())
    }
}

impl fmt::Display for Nsap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0x")?;
        for ch in self.address.as_ref() {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

//------------ Atma ----------------------------------------------------------

/// ATMA record data: an ATM address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Atma {
    format: u8,
    address: Bytes,
}

impl Atma {
    pub fn new(format: u8, address: Bytes) -> Self {
        Atma { format, address }
    }

    pub fn format(&self) -> u8 {
        self.format
    }

    pub fn address(&self) -> &Bytes {
        &self.address
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Atma {
            format: u8::parse(parser)?,
            address: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Atma {
    fn rtype(&self) -> Rtype {
        Rtype::ATMA
    }
}

impl ComposeRecordData for Atma {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        1 + self.address.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.format.compose(target)?;
        target.append_slice(self.address.as_ref())
    }
}

impl fmt::Display for Atma {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.format)?;
        for ch in self.address.as_ref() {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

//------------ Px ------------------------------------------------------------

/// PX record data: X.400 mail mapping information.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Px {
    preference: u16,
    map822: Name,
    mapx400: Name,
}

impl Px {
    pub fn new(preference: u16, map822: Name, mapx400: Name) -> Self {
        Px {
            preference,
            map822,
            mapx400,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn map822(&self) -> &Name {
        &self.map822
    }

    pub fn mapx400(&self) -> &Name {
        &self.mapx400
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Px {
            preference: u16::parse(parser)?,
            map822: Name::parse(parser)?,
            mapx400: Name::parse(parser)?,
        })
    }
}

impl RecordData for Px {
    fn rtype(&self) -> Rtype {
        Rtype::PX
    }
}

impl ComposeRecordData for Px {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.map822.encoded_len() + self.mapx400.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.map822.compose(target)?;
        self.mapx400.compose(target)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}. {}.",
            self.preference, self.map822, self.mapx400
        )
    }
}

//------------ Kx ------------------------------------------------------------

/// KX record data: a key exchanger for a domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Kx {
    preference: u16,
    exchanger: Name,
}

impl Kx {
    pub fn new(preference: u16, exchanger: Name) -> Self {
        Kx {
            preference,
            exchanger,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchanger(&self) -> &Name {
        &self.exchanger
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Kx {
            preference: u16::parse(parser)?,
            exchanger: Name::parse(parser)?,
        })
    }
}

impl RecordData for Kx {
    fn rtype(&self) -> Rtype {
        Rtype::KX
    }
}

impl ComposeRecordData for Kx {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.exchanger.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.exchanger.compose(target)
    }
}

impl fmt::Display for Kx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.preference, self.exchanger)
    }
}

//------------ Uri -----------------------------------------------------------

/// URI record data: a URI with server-selection fields.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Uri {
    priority: u16,
    weight: u16,
    target: Bytes,
}

impl Uri {
    pub fn new(priority: u16, weight: u16, target: Bytes) -> Self {
        Uri {
            priority,
            weight,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn target(&self) -> &Bytes {
        &self.target
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Uri {
            priority: u16::parse(parser)?,
            weight: u16::parse(parser)?,
            target: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Uri {
    fn rtype(&self) -> Rtype {
        Rtype::URI
    }
}

impl ComposeRecordData for Uri {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4 + self.target.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.priority.compose(target)?;
        self.weight.compose(target)?;
        target.append_slice(self.target.as_ref())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} \"", self.priority, self.weight)?;
        for &ch in self.target.as_ref() {
            if ch.is_ascii_graphic() || ch == b' ' {
                write!(f, "{}", ch as char)?;
            } else {
                write!(f, "\\{:03}", ch)?;
            }
        }
        f.write_str("\"")
    }
}

//------------ Caa -----------------------------------------------------------

/// CAA record data: a certification authority restriction.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Caa {
    flags: u8,
    tag: CharStr,
    value: Bytes,
}

impl Caa {
    pub fn new(
        flags: u8,
        tag: CharStr,
        value: Bytes,
    ) -> Result<Self, ParseError> {
        if tag.is_empty() || tag.len() > 15 {
            return Err(ParseError::form_error("bad CAA tag length"));
        }
        Ok(Caa { flags, tag, value })
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the issuer-critical flag is set.
    pub fn critical(&self) -> bool {
        self.flags & 0x80 != 0
    }

    pub fn tag(&self) -> &CharStr {
        &self.tag
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let flags = u8::parse(parser)?;
        let tag = CharStr::parse(parser)?;
        if tag.is_empty() || tag.len() > 15 {
            return Err(ParseError::form_error("bad CAA tag length"));
        }
        let value = Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        );
        Ok(Caa { flags, tag, value })
    }
}

impl RecordData for Caa {
    fn rtype(&self) -> Rtype {
        Rtype::CAA
    }
}

impl ComposeRecordData for Caa {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        1 + self.tag.encoded_len() + self.value.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.flags.compose(target)?;
        self.tag.compose(target)?;
        target.append_slice(self.value.as_ref())
    }
}

impl fmt::Display for Caa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} \"", self.flags, self.tag)?;
        for &ch in self.value.as_ref() {
            if ch.is_ascii_graphic() || ch == b' ' {
                write!(f, "{}", ch as char)?;
            } else {
                write!(f, "\\{:03}", ch)?;
            }
        }
        f.write_str("\"")
    }
}

//------------ Cert ----------------------------------------------------------

/// CERT record data: a certificate or certificate reference.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cert {
    cert_type: CertificateType,
    key_tag: u16,
    algorithm: SecurityAlgorithm,
    certificate: Bytes,
}

impl Cert {
    pub fn new(
        cert_type: CertificateType,
        key_tag: u16,
        algorithm: SecurityAlgorithm,
        certificate: Bytes,
    ) -> Self {
        Cert {
            cert_type,
            key_tag,
            algorithm,
            certificate,
        }
    }

    pub fn cert_type(&self) -> CertificateType {
        self.cert_type
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn certificate(&self) -> &Bytes {
        &self.certificate
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Cert {
            cert_type: CertificateType::parse(parser)?,
            key_tag: u16::parse(parser)?,
            algorithm: SecurityAlgorithm::parse(parser)?,
            certificate: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Cert {
    fn rtype(&self) -> Rtype {
        Rtype::CERT
    }
}

impl ComposeRecordData for Cert {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        5 + self.certificate.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.cert_type.compose(target)?;
        self.key_tag.compose(target)?;
        self.algorithm.compose(target)?;
        target.append_slice(self.certificate.as_ref())
    }
}

impl fmt::Display for Cert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{} octets]",
            self.cert_type,
            self.key_tag,
            self.algorithm,
            self.certificate.len()
        )
    }
}

//------------ Sink ----------------------------------------------------------

/// SINK record data: the kitchen sink.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Sink {
    coding: u8,
    subcoding: u8,
    data: Bytes,
}

impl Sink {
    pub fn new(coding: u8, subcoding: u8, data: Bytes) -> Self {
        Sink {
            coding,
            subcoding,
            data,
        }
    }

    pub fn coding(&self) -> u8 {
        self.coding
    }

    pub fn subcoding(&self) -> u8 {
        self.subcoding
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Sink {
            coding: u8::parse(parser)?,
            subcoding: u8::parse(parser)?,
            data: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Sink {
    fn rtype(&self) -> Rtype {
        Rtype::SINK
    }
}

impl ComposeRecordData for Sink {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.data.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.coding.compose(target)?;
        self.subcoding.compose(target)?;
        target.append_slice(self.data.as_ref())
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} [{} octets]",
            self.coding,
            self.subcoding,
            self.data.len()
        )
    }
}

//------------ A6 ------------------------------------------------------------

/// A6 record data: a partial IPv6 address plus a prefix name.
///
/// Only the low `128 - prefix_len` bits of the address suffix appear on
/// the wire; the prefix name is present unless the prefix length is
/// zero.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct A6 {
    prefix_len: u8,
    suffix: Ipv6Addr,
    prefix_name: Option<Name>,
}

impl A6 {
    pub fn new(
        prefix_len: u8,
        suffix: Ipv6Addr,
        prefix_name: Option<Name>,
    ) -> Result<Self, ParseError> {
        if prefix_len > 128 {
            return Err(ParseError::form_error("bad A6 prefix length"));
        }
        if (prefix_len == 0) != prefix_name.is_none() {
            return Err(ParseError::form_error(
                "A6 prefix name mismatch",
            ));
        }
        Ok(A6 {
            prefix_len,
            suffix,
            prefix_name,
        })
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn suffix(&self) -> Ipv6Addr {
        self.suffix
    }

    pub fn prefix_name(&self) -> Option<&Name> {
        self.prefix_name.as_ref()
    }

    fn suffix_len(&self) -> usize {
        (128 - usize::from(self.prefix_len) + 7) / 8
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let prefix_len = u8::parse(parser)?;
        if prefix_len > 128 {
            return Err(ParseError::form_error("bad A6 prefix length"));
        }
        let suffix_len = (128 - usize::from(prefix_len) + 7) / 8;
        let mut buf = [0u8; 16];
        parser.parse_buf(&mut buf[16 - suffix_len..])?;
        let prefix_name = if prefix_len == 0 {
            None
        } else {
            Some(Name::parse(parser)?)
        };
        Ok(A6 {
            prefix_len,
            suffix: buf.into(),
            prefix_name,
        })
    }
}

impl RecordData for A6 {
    fn rtype(&self) -> Rtype {
        Rtype::A6
    }
}

impl ComposeRecordData for A6 {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        1 + self.suffix_len()
            + self
                .prefix_name
                .as_ref()
                .map_or(0, Name::encoded_len)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.prefix_len.compose(target)?;
        let octets = self.suffix.octets();
        target.append_slice(&octets[16 - self.suffix_len()..])?;
        if let Some(ref prefix_name) = self.prefix_name {
            prefix_name.compose(target)?;
        }
        Ok(())
    }
}

impl fmt::Display for A6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.prefix_len, self.suffix)?;
        if let Some(ref prefix_name) = self.prefix_name {
            write!(f, " {}.", prefix_name)?;
        }
        Ok(())
    }
}

//------------ Ipseckey ------------------------------------------------------

/// The gateway of an IPSECKEY record.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Gateway {
    None,
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Name(Name),
}

impl Gateway {
    fn gateway_type(&self) -> u8 {
        match *self {
            Gateway::None => 0,
            Gateway::Ipv4(_) => 1,
            Gateway::Ipv6(_) => 2,
            Gateway::Name(_) => 3,
        }
    }

    fn encoded_len(&self) -> usize {
        match *self {
            Gateway::None => 0,
            Gateway::Ipv4(_) => 4,
            Gateway::Ipv6(_) => 16,
            Gateway::Name(ref name) => name.encoded_len(),
        }
    }
}

/// IPSECKEY record data: keying material for opportunistic IPsec.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ipseckey {
    precedence: u8,
    gateway: Gateway,
    algorithm: u8,
    public_key: Bytes,
}

impl Ipseckey {
    pub fn new(
        precedence: u8,
        gateway: Gateway,
        algorithm: u8,
        public_key: Bytes,
    ) -> Self {
        Ipseckey {
            precedence,
            gateway,
            algorithm,
            public_key,
        }
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn public_key(&self) -> &Bytes {
        &self.public_key
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let precedence = u8::parse(parser)?;
        let gateway_type = u8::parse(parser)?;
        let algorithm = u8::parse(parser)?;
        let gateway = match gateway_type {
            0 => Gateway::None,
            1 => Gateway::Ipv4(Ipv4Addr::parse(parser)?),
            2 => Gateway::Ipv6(Ipv6Addr::parse(parser)?),
            3 => Gateway::Name(Name::parse(parser)?),
            _ => {
                return Err(ParseError::form_error(
                    "unknown IPSECKEY gateway type",
                ))
            }
        };
        let public_key = Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        );
        Ok(Ipseckey {
            precedence,
            gateway,
            algorithm,
            public_key,
        })
    }
}

impl RecordData for Ipseckey {
    fn rtype(&self) -> Rtype {
        Rtype::IPSECKEY
    }
}

impl ComposeRecordData for Ipseckey {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        3 + self.gateway.encoded_len() + self.public_key.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.precedence.compose(target)?;
        self.gateway.gateway_type().compose(target)?;
        self.algorithm.compose(target)?;
        match self.gateway {
            Gateway::None => {}
            Gateway::Ipv4(addr) => addr.compose(target)?,
            Gateway::Ipv6(addr) => addr.compose(target)?,
            Gateway::Name(ref name) => name.compose(target)?,
        }
        target.append_slice(self.public_key.as_ref())
    }
}

impl fmt::Display for Ipseckey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.precedence,
            self.gateway.gateway_type(),
            self.algorithm
        )?;
        match self.gateway {
            Gateway::None => f.write_str(".")?,
            Gateway::Ipv4(addr) => addr.fmt(f)?,
            Gateway::Ipv6(addr) => addr.fmt(f)?,
            Gateway::Name(ref name) => write!(f, "{}.", name)?,
        }
        write!(f, " [{} octets]", self.public_key.len())
    }
}

//------------ Hip -----------------------------------------------------------

/// HIP record data: a host identity and its rendezvous servers.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hip {
    algorithm: u8,
    hit: Bytes,
    public_key: Bytes,
    servers: Vec<Name>,
}

impl Hip {
    pub fn new(
        algorithm: u8,
        hit: Bytes,
        public_key: Bytes,
        servers: Vec<Name>,
    ) -> Result<Self, ParseError> {
        if hit.len() > 255 || public_key.len() > usize::from(u16::MAX) {
            return Err(ParseError::form_error("long HIP field"));
        }
        Ok(Hip {
            algorithm,
            hit,
            public_key,
            servers,
        })
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn hit(&self) -> &Bytes {
        &self.hit
    }

    pub fn public_key(&self) -> &Bytes {
        &self.public_key
    }

    pub fn servers(&self) -> &[Name] {
        &self.servers
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let hit_len = usize::from(u8::parse(parser)?);
        let algorithm = u8::parse(parser)?;
        let key_len = usize::from(u16::parse(parser)?);
        let hit = Bytes::copy_from_slice(parser.parse_octets(hit_len)?);
        let public_key =
            Bytes::copy_from_slice(parser.parse_octets(key_len)?);
        let mut servers = Vec::new();
        while parser.remaining() > 0 {
            servers.push(Name::parse(parser)?);
        }
        Ok(Hip {
            algorithm,
            hit,
            public_key,
            servers,
        })
    }
}

impl RecordData for Hip {
    fn rtype(&self) -> Rtype {
        Rtype::HIP
    }
}

impl ComposeRecordData for Hip {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4 + self.hit.len()
            + self.public_key.len()
            + self
                .servers
                .iter()
                .map(Name::encoded_len)
                .sum::<usize>()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        (self.hit.len() as u8).compose(target)?;
        self.algorithm.compose(target)?;
        (self.public_key.len() as u16).compose(target)?;
        target.append_slice(self.hit.as_ref())?;
        target.append_slice(self.public_key.as_ref())?;
        for server in &self.servers {
            server.compose(target)?;
        }
        Ok(())
    }
}

impl fmt::Display for Hip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{} octet HIT] [{} octet key]",
            self.algorithm,
            self.hit.len(),
            self.public_key.len()
        )?;
        for server in &self.servers {
            write!(f, " {}.", server)?;
        }
        Ok(())
    }
}

//------------ Talink --------------------------------------------------------

/// TALINK record data: a doubly linked list of trust anchors.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Talink {
    prev: Name,
    next: Name,
}

impl Talink {
    pub fn new(prev: Name, next: Name) -> Self {
        Talink { prev, next }
    }

    pub fn prev(&self) -> &Name {
        &self.prev
    }

    pub fn next(&self) -> &Name {
        &self.next
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Talink {
            prev: Name::parse(parser)?,
            next: Name::parse(parser)?,
        })
    }
}

impl RecordData for Talink {
    fn rtype(&self) -> Rtype {
        Rtype::TALINK
    }
}

impl ComposeRecordData for Talink {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.prev.encoded_len() + self.next.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.prev.compose(target)?;
        self.next.compose(target)
    }
}

impl fmt::Display for Talink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}.", self.prev, self.next)
    }
}

//------------ Sshfp ---------------------------------------------------------

/// SSHFP record data: an SSH host key fingerprint.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Sshfp {
    algorithm: u8,
    fingerprint_type: u8,
    fingerprint: Bytes,
}

impl Sshfp {
    pub fn new(
        algorithm: u8,
        fingerprint_type: u8,
        fingerprint: Bytes,
    ) -> Self {
        Sshfp {
            algorithm,
            fingerprint_type,
            fingerprint,
        }
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    pub fn fingerprint(&self) -> &Bytes {
        &self.fingerprint
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Sshfp {
            algorithm: u8::parse(parser)?,
            fingerprint_type: u8::parse(parser)?,
            fingerprint: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Sshfp {
    fn rtype(&self) -> Rtype {
        Rtype::SSHFP
    }
}

impl ComposeRecordData for Sshfp {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        2 + self.fingerprint.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.algorithm.compose(target)?;
        self.fingerprint_type.compose(target)?;
        target.append_slice(self.fingerprint.as_ref())
    }
}

impl fmt::Display for Sshfp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.algorithm, self.fingerprint_type)?;
        for ch in self.fingerprint.as_ref() {
            write!(f, "{:02x}", ch)?;
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
    fn loc_version_checked() {
        let wire = [1u8; 16];
        let mut parser = Parser::from_ref(wire.as_slice());
        assert!(Loc::parse(&mut parser).is_err());
        let loc = Loc::new(0x12, 0x16, 0x13, 2332887285, 2146974024, 9997900);
        test_rdlen(&loc);
        test_compose_parse(&loc, Loc::parse);
    }

    #[test]
    fn caa_tag_length_checked() {
        assert!(Caa::new(
            0,
            CharStr::from_slice(b"").unwrap(),
            Bytes::new()
        )
        .is_err());
        let caa = Caa::new(
            0x80,
            CharStr::from_slice(b"issue").unwrap(),
            Bytes::from_static(b"ca.example.net"),
        )
        .unwrap();
        assert!(caa.critical());
        test_rdlen(&caa);
        test_compose_parse(&caa, Caa::parse);
    }

    #[test]
    fn a6_compose_parse() {
        let a6 = A6::new(
            64,
            "::1234:5678:9abc:def0".parse().unwrap(),
            Some(name("prefix.example.com")),
        )
        .unwrap();
        test_rdlen(&a6);
        test_compose_parse(&a6, A6::parse);

        let whole = A6::new(0, "2001:db8::1".parse().unwrap(), None)
            .unwrap();
        test_rdlen(&whole);
        test_compose_parse(&whole, A6::parse);

        assert!(A6::new(0, "::".parse().unwrap(), Some(name("x")))
            .is_err());
    }

    #[test]
    fn ipseckey_gateways() {
        for gateway in [
            Gateway::None,
            Gateway::Ipv4(Ipv4Addr::new(192, 0, 2, 3)),
            Gateway::Ipv6("2001:db8::1".parse().unwrap()),
            Gateway::Name(name("gateway.example.com")),
        ] {
            let key = Ipseckey::new(
                10,
                gateway,
                2,
                Bytes::from_static(b"public key"),
            );
            test_rdlen(&key);
            test_compose_parse(&key, Ipseckey::parse);
        }
    }

    #[test]
    fn hip_compose_parse() {
        let hip = Hip::new(
            2,
            Bytes::from_static(&[0x20u8; 16]),
            Bytes::from_static(b"host identity key"),
            vec![name("rvs1.example.com"), name("rvs2.example.com")],
        )
        .unwrap();
        test_rdlen(&hip);
        test_compose_parse(&hip, Hip::parse);
    }

    #[test]
    fn uri_compose_parse() {
        let uri = Uri::new(
            10,
            1,
            Bytes::from_static(b"https://example.com/"),
        );
        test_rdlen(&uri);
        test_compose_parse(&uri, Uri::parse);
    }
}
