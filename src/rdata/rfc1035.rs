//! Record data from RFC 1035.
//!
//! These are the record types of the original DNS specification. They
//! are also the only ones whose domain names take part in name
//! compression when composing a message.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::serial::Serial;
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// A record data: a single IPv4 host address.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ipv4Addr::parse(parser).map(Self::new)
    }
}

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl RecordData for A {
    fn rtype(&self) -> Rtype {
        Rtype::A
    }
}

impl ComposeRecordData for A {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.addr.compose(target)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Cname, Mb, Md, Mf, Mg, Mr, Ns, Ptr ----------------------------

dname_type! {
    /// CNAME record data: the canonical name of an alias.
    (Cname, CNAME, cname, compressed)
}

dname_type! {
    /// MB record data: the host of a mailbox.
    (Mb, MB, madname, compressed)
}

dname_type! {
    /// MD record data: a mail delivery host.
    (Md, MD, madname, compressed)
}

dname_type! {
    /// MF record data: a mail forwarding host.
    (Mf, MF, madname, compressed)
}

dname_type! {
    /// MG record data: a mailbox that is a member of a mail group.
    (Mg, MG, madname, compressed)
}

dname_type! {
    /// MR record data: a mailbox rename target.
    (Mr, MR, newname, compressed)
}

dname_type! {
    /// NS record data: an authoritative name server.
    (Ns, NS, nsdname, compressed)
}

dname_type! {
    /// PTR record data: a pointer to another part of the name space.
    (Ptr, PTR, ptrdname, compressed)
}

//------------ Hinfo ---------------------------------------------------------

/// HINFO record data: the CPU and OS of a host.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hinfo {
    cpu: CharStr,
    os: CharStr,
}

impl Hinfo {
    pub fn new(cpu: CharStr, os: CharStr) -> Self {
        Hinfo { cpu, os }
    }

    pub fn cpu(&self) -> &CharStr {
        &self.cpu
    }

    pub fn os(&self) -> &CharStr {
        &self.os
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Hinfo {
            cpu: CharStr::parse(parser)?,
            os: CharStr::parse(parser)?,
        })
    }
}

impl RecordData for Hinfo {
    fn rtype(&self) -> Rtype {
        Rtype::HINFO
    }
}

impl ComposeRecordData for Hinfo {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.cpu.encoded_len() + self.os.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.cpu.compose(target)?;
        self.os.compose(target)
    }
}

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.cpu, self.os)
    }
}

//------------ Minfo ---------------------------------------------------------

/// MINFO record data: the mailboxes responsible for a mailing list.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Minfo {
    rmailbx: Name,
    emailbx: Name,
}

impl Minfo {
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Minfo { rmailbx, emailbx }
    }

    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Minfo {
            rmailbx: Name::parse(parser)?,
            emailbx: Name::parse(parser)?,
        })
    }
}

impl RecordData for Minfo {
    fn rtype(&self) -> Rtype {
        Rtype::MINFO
    }
}

impl ComposeRecordData for Minfo {
    fn rdlen(&self, cx: &mut Compressor, offset: usize) -> usize {
        let len = self.rmailbx.compressed_len(cx, offset);
        len + self.emailbx.compressed_len(cx, offset + len)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.rmailbx.compose_compressed(target, cx)?;
        self.emailbx.compose_compressed(target, cx)
    }
}

impl fmt::Display for Minfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}.", self.rmailbx, self.emailbx)
    }
}

//------------ Mx ------------------------------------------------------------

/// MX record data: a mail exchange for a domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Mx {
            preference: u16::parse(parser)?,
            exchange: Name::parse(parser)?,
        })
    }
}

impl RecordData for Mx {
    fn rtype(&self) -> Rtype {
        Rtype::MX
    }
}

impl ComposeRecordData for Mx {
    fn rdlen(&self, cx: &mut Compressor, offset: usize) -> usize {
        2 + self.exchange.compressed_len(cx, offset + 2)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.exchange.compose_compressed(target, cx)
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.preference, self.exchange)
    }
}

//------------ Null ----------------------------------------------------------

/// NULL record data: anything at all.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Null {
    data: Bytes,
}

impl Null {
    pub fn new(data: Bytes) -> Self {
        Null { data }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Null {
            data: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Null {
    fn rtype(&self) -> Rtype {
        Rtype::NULL
    }
}

impl ComposeRecordData for Null {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.data.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in self.data.as_ref() {
            write!(f, " {:02X}", ch)?;
        }
        Ok(())
    }
}

//------------ Soa -----------------------------------------------------------

/// SOA record data: the start of a zone of authority.
///
/// No ordering is derived since the serial field only has the partial
/// order of RFC 1982.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: Serial,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: Name,
        rname: Name,
        serial: Serial,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    pub fn mname(&self) -> &Name {
        &self.mname
    }

    pub fn rname(&self) -> &Name {
        &self.rname
    }

    pub fn serial(&self) -> Serial {
        self.serial
    }

    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    pub fn retry(&self) -> u32 {
        self.retry
    }

    pub fn expire(&self) -> u32 {
        self.expire
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Soa {
            mname: Name::parse(parser)?,
            rname: Name::parse(parser)?,
            serial: Serial::parse(parser)?,
            refresh: u32::parse(parser)?,
            retry: u32::parse(parser)?,
            expire: u32::parse(parser)?,
            minimum: u32::parse(parser)?,
        })
    }
}

impl RecordData for Soa {
    fn rtype(&self) -> Rtype {
        Rtype::SOA
    }
}

impl ComposeRecordData for Soa {
    fn rdlen(&self, cx: &mut Compressor, offset: usize) -> usize {
        let mut len = self.mname.compressed_len(cx, offset);
        len += self.rname.compressed_len(cx, offset + len);
        len + 20
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.mname.compose_compressed(target, cx)?;
        self.rname.compose_compressed(target, cx)?;
        self.serial.compose(target)?;
        self.refresh.compose(target)?;
        self.retry.compose(target)?;
        self.expire.compose(target)?;
        self.minimum.compose(target)
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {}. {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//------------ Txt -----------------------------------------------------------

/// TXT record data: a sequence of character strings.
///
/// The obsolete SPF record type uses the identical format, so the value
/// carries its record type along.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Txt {
    rtype: Rtype,
    strings: Vec<CharStr>,
}

impl Txt {
    pub fn new(strings: Vec<CharStr>) -> Self {
        Txt {
            rtype: Rtype::TXT,
            strings,
        }
    }

    /// Creates TXT-shaped data for the given record type.
    pub fn with_rtype(rtype: Rtype, strings: Vec<CharStr>) -> Self {
        Txt { rtype, strings }
    }

    pub fn strings(&self) -> &[CharStr] {
        &self.strings
    }

    pub fn parse<'a>(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut strings = Vec::new();
        while parser.remaining() > 0 {
            strings.push(CharStr::parse(parser)?);
        }
        if strings.is_empty() {
            return Err(ParseError::form_error("empty TXT record"));
        }
        Ok(Txt { rtype, strings })
    }
}

impl RecordData for Txt {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for Txt {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.strings.iter().map(CharStr::encoded_len).sum()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        for string in &self.strings {
            string.compose(target)?;
        }
        Ok(())
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for string in &self.strings {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            string.fmt(f)?;
        }
        Ok(())
    }
}

//------------ Wks -----------------------------------------------------------

/// WKS record data: the well-known services of a host.
///
/// The bitmap has one bit per port number; it is kept raw since the
/// record type is long obsolete.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Wks {
    addr: Ipv4Addr,
    protocol: u8,
    bitmap: Bytes,
}

impl Wks {
    pub fn new(addr: Ipv4Addr, protocol: u8, bitmap: Bytes) -> Self {
        Wks {
            addr,
            protocol,
            bitmap,
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn bitmap(&self) -> &Bytes {
        &self.bitmap
    }

    /// Returns whether the service on `port` is marked as available.
    pub fn serves(&self, port: u16) -> bool {
        let octet = usize::from(port / 8);
        let mask = 0x80 >> (port % 8);
        self.bitmap
            .get(octet)
            .map_or(false, |bits| bits & mask != 0)
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Wks {
            addr: Ipv4Addr::parse(parser)?,
            protocol: u8::parse(parser)?,
            bitmap: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl RecordData for Wks {
    fn rtype(&self) -> Rtype {
        Rtype::WKS
    }
}

impl ComposeRecordData for Wks {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        5 + self.bitmap.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.addr.compose(target)?;
        self.protocol.compose(target)?;
        target.append_slice(self.bitmap.as_ref())
    }
}

impl fmt::Display for Wks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.addr, self.protocol)?;
        for port in 0..self.bitmap.len() * 8 {
            if self.serves(port as u16) {
                write!(f, " {}", port)?;
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

    fn charstr(s: &[u8]) -> CharStr {
        CharStr::from_slice(s).unwrap()
    }

    #[test]
    fn a_compose_parse() {
        let a = A::new(Ipv4Addr::new(192, 0, 2, 1));
        test_rdlen(&a);
        test_compose_parse(&a, A::parse);
    }

    #[test]
    fn cname_compose_parse() {
        let cname = Cname::new(name("www.example.com"));
        test_rdlen(&cname);
        test_compose_parse(&cname, Cname::parse);
    }

    #[test]
    fn hinfo_compose_parse() {
        let hinfo = Hinfo::new(charstr(b"PDP-11"), charstr(b"UNIX"));
        test_rdlen(&hinfo);
        test_compose_parse(&hinfo, Hinfo::parse);
    }

    #[test]
    fn mx_compose_parse() {
        let mx = Mx::new(10, name("mail.example.com"));
        test_rdlen(&mx);
        test_compose_parse(&mx, Mx::parse);
    }

    #[test]
    fn soa_compose_parse() {
        let soa = Soa::new(
            name("ns1.example.com"),
            name("hostmaster.example.com"),
            Serial(2023121101),
            7200,
            3600,
            1209600,
            300,
        );
        test_rdlen(&soa);
        test_compose_parse(&soa, Soa::parse);
    }

    #[test]
    fn txt_compose_parse() {
        let txt = Txt::new(vec![
            charstr(b"v=spf1"),
            charstr(b"-all"),
        ]);
        test_rdlen(&txt);
        test_compose_parse(&txt, |parser| {
            Txt::parse(Rtype::TXT, parser)
        });
    }

    #[test]
    fn txt_empty_rejected() {
        let mut parser = Parser::from_ref(b"".as_slice());
        assert!(Txt::parse(Rtype::TXT, &mut parser).is_err());
    }

    #[test]
    fn wks_serves() {
        let wks = Wks::new(
            Ipv4Addr::new(192, 0, 2, 1),
            6,
            Bytes::from_static(b"\x00\x00\x01"),
        );
        assert!(wks.serves(23));
        assert!(!wks.serves(22));
        assert!(!wks.serves(500));
        test_rdlen(&wks);
        test_compose_parse(&wks, Wks::parse);
    }
}
