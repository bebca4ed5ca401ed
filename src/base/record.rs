//! Resource records.
//!
//! A resource record ties record data to an owner name, class, and time
//! to live. [`Record`] is generic over the data so it can carry either a
//! concrete record data type or the catch-all
//! [`AnyRecordData`][crate::rdata::AnyRecordData].

use super::iana::{Class, Rtype};
use super::name::{Compressor, Name};
use super::rdata::{ComposeRecordData, ParseRecordData, RecordData};
use super::wire::{Compose, Composer, Parse, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record<D> {
    /// The owner of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// The time this record is valid for, in seconds.
    ttl: u32,

    /// The record data.
    data: D,
}

impl<D> Record<D> {
    /// Creates a new record from its parts.
    pub fn new(owner: Name, class: Class, ttl: u32, data: D) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    /// Returns a reference to the owner name.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Converts the record into its data.
    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D: RecordData> Record<D> {
    /// Returns the record type of the record data.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }
}

/// # Parsing and composing
///
impl<D: ComposeRecordData> Record<D> {
    /// Appends the wire format of the record to `target`.
    ///
    /// The owner name is compressed against `cx`, and everything the
    /// record data records in `cx` during composing stays recorded for
    /// records written after it.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.owner.compose_compressed(target, cx)?;
        self.data.rtype().compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)?;
        self.data.compose_len_rdata(target, cx)
    }

    /// Returns the length [`compose`][Self::compose] would append.
    ///
    /// `offset` is the message offset the record would be written at.
    /// The same pass discipline as for
    /// [`Name::compressed_len`] applies.
    pub fn compressed_len(
        &self,
        cx: &mut Compressor,
        offset: usize,
    ) -> usize {
        let mut len = self.owner.compressed_len(cx, offset);
        len += 2 + 2 + 4 + 2; // type, class, ttl, rdlength
        len + self.data.rdlen(cx, offset + len)
    }
}

impl<'a, D: ParseRecordData<'a>> Record<D> {
    /// Parses a record from a message.
    ///
    /// Returns `Ok(None)` if `D` does not want data of the record's
    /// type. The parser is positioned behind the record either way.
    pub fn parse(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = u32::parse(parser)?;
        let rdlen = usize::from(u16::parse(parser)?);
        let mut rdata = parser.parse_parser(rdlen)?;
        let data = match D::parse_rdata(rtype, &mut rdata)? {
            Some(data) => data,
            None => return Ok(None),
        };
        if rdata.remaining() > 0 {
            return Err(ParseError::form_error(
                "trailing data in record data",
            ));
        }
        Ok(Some(Record::new(owner, class, ttl, data)))
    }
}

//--- Display

impl<D: RecordData + fmt::Display> fmt::Display for Record<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} {}",
            self.owner,
            self.ttl,
            self.class,
            self.data.rtype(),
            self.data
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::rfc1035::{Cname, Ns};
    use crate::rdata::AnyRecordData;
    use octseq::builder::infallible;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn compose_parse_round_trip() {
        let record = Record::new(
            name("example.com"),
            Class::IN,
            3600,
            Cname::new(name("www.example.com")),
        );
        let mut cx = Compressor::new();
        let mut buf = Vec::new();
        infallible(record.compose(&mut buf, &mut cx));

        let mut parser = Parser::from_ref(buf.as_slice());
        let parsed =
            Record::<AnyRecordData>::parse(&mut parser).unwrap().unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parsed.owner(), record.owner());
        assert_eq!(parsed.class(), Class::IN);
        assert_eq!(parsed.ttl(), 3600);
        assert_eq!(parsed.rtype(), Rtype::CNAME);
    }

    #[test]
    fn compressed_len_predicts_compose() {
        let records = [
            Record::new(
                name("example.com"),
                Class::IN,
                3600,
                AnyRecordData::Ns(Ns::new(name("ns1.example.com"))),
            ),
            Record::new(
                name("example.com"),
                Class::IN,
                3600,
                AnyRecordData::Ns(Ns::new(name("ns2.example.com"))),
            ),
        ];
        let mut len_cx = Compressor::new();
        let mut write_cx = Compressor::new();
        let mut buf = Vec::new();
        for record in &records {
            let predicted =
                record.compressed_len(&mut len_cx, buf.len());
            let before = buf.len();
            infallible(record.compose(&mut buf, &mut write_cx));
            assert_eq!(predicted, buf.len() - before);
        }
        // The second record's owner is a bare pointer and its name
        // shares the "example.com" tail.
        assert!(buf.len() < 2 * 29);
    }

    #[test]
    fn rdata_residue_rejected() {
        // A CNAME record whose RDLENGTH claims one byte more than the
        // name inside uses.
        let mut buf = Vec::new();
        infallible(name("example.com").compose(&mut buf));
        infallible(Rtype::CNAME.compose(&mut buf));
        infallible(Class::IN.compose(&mut buf));
        infallible(3600u32.compose(&mut buf));
        infallible(4u16.compose(&mut buf));
        infallible(name("a").compose(&mut buf));
        buf.push(0xFF);
        let mut parser = Parser::from_ref(buf.as_slice());
        assert!(Record::<AnyRecordData>::parse(&mut parser).is_err());
    }
}
