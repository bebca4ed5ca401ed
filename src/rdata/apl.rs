//! Record data for address prefix lists.

use crate::base::iana::{AddressFamily, Rtype};
use crate::base::name::Compressor;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Apl -----------------------------------------------------------

/// APL record data: a list of address prefixes.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Apl {
    items: Vec<AplItem>,
}

impl Apl {
    pub fn new(items: Vec<AplItem>) -> Self {
        Apl { items }
    }

    pub fn items(&self) -> &[AplItem] {
        &self.items
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut items = Vec::new();
        while parser.remaining() > 0 {
            items.push(AplItem::parse(parser)?);
        }
        Ok(Apl { items })
    }
}

impl RecordData for Apl {
    fn rtype(&self) -> Rtype {
        Rtype::APL
    }
}

impl ComposeRecordData for Apl {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.items.iter().map(AplItem::encoded_len).sum()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        for item in &self.items {
            item.compose(target)?;
        }
        Ok(())
    }
}

impl fmt::Display for Apl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for item in &self.items {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            item.fmt(f)?;
        }
        Ok(())
    }
}

//------------ AplItem -------------------------------------------------------

/// A single prefix of an APL record.
///
/// The address data holds only as many octets as the prefix length
/// covers; trailing zero octets of the address are omitted.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AplItem {
    family: AddressFamily,
    prefix: u8,
    negation: bool,
    afd: Bytes,
}

impl AplItem {
    pub fn new(
        family: AddressFamily,
        prefix: u8,
        negation: bool,
        afd: Bytes,
    ) -> Result<Self, ParseError> {
        if afd.len() > (usize::from(prefix) + 7) / 8 {
            return Err(ParseError::form_error(
                "APL address data longer than prefix",
            ));
        }
        // RFC 3123 requires the shortest encoding.
        if afd.last() == Some(&0) {
            return Err(ParseError::form_error(
                "trailing zero in APL address data",
            ));
        }
        if let Some(bits) = family.address_bits() {
            if u16::from(prefix) > bits {
                return Err(ParseError::form_error(
                    "APL prefix too long for family",
                ));
            }
        }
        Ok(AplItem {
            family,
            prefix,
            negation,
            afd,
        })
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn negation(&self) -> bool {
        self.negation
    }

    pub fn afd(&self) -> &Bytes {
        &self.afd
    }

    fn encoded_len(&self) -> usize {
        4 + self.afd.len()
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let family = AddressFamily::parse(parser)?;
        let prefix = u8::parse(parser)?;
        let head = u8::parse(parser)?;
        let negation = head & 0x80 != 0;
        let afd_len = usize::from(head & 0x7F);
        let afd =
            Bytes::copy_from_slice(parser.parse_octets(afd_len)?);
        AplItem::new(family, prefix, negation, afd)
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.family.compose(target)?;
        self.prefix.compose(target)?;
        let head =
            (self.afd.len() as u8) | if self.negation { 0x80 } else { 0 };
        head.compose(target)?;
        target.append_slice(self.afd.as_ref())
    }
}

impl fmt::Display for AplItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negation {
            f.write_str("!")?;
        }
        write!(f, "{}:", self.family)?;
        for (index, ch) in self.afd.as_ref().iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", ch)?;
        }
        write!(f, "/{}", self.prefix)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    #[test]
    fn apl_compose_parse() {
        let apl = Apl::new(vec![
            AplItem::new(
                AddressFamily::IPV4,
                24,
                false,
                Bytes::from_static(&[192, 0, 2]),
            )
            .unwrap(),
            AplItem::new(
                AddressFamily::IPV4,
                8,
                true,
                Bytes::from_static(&[10]),
            )
            .unwrap(),
        ]);
        test_rdlen(&apl);
        test_compose_parse(&apl, Apl::parse);
    }

    #[test]
    fn afd_length_checked() {
        // More address octets than the prefix covers.
        assert!(AplItem::new(
            AddressFamily::IPV4,
            24,
            false,
            Bytes::from_static(&[192, 0, 2, 1, 1]),
        )
        .is_err());
        // A trailing zero octet must be left off.
        assert!(AplItem::new(
            AddressFamily::IPV4,
            24,
            false,
            Bytes::from_static(&[192, 0]),
        )
        .is_ok());
        assert!(AplItem::new(
            AddressFamily::IPV4,
            24,
            false,
            Bytes::from_static(&[192, 0, 0]),
        )
        .is_err());
        // A prefix wider than the family's addresses.
        assert!(AplItem::new(
            AddressFamily::IPV4,
            33,
            false,
            Bytes::from_static(&[192, 0, 2]),
        )
        .is_err());
    }
}
