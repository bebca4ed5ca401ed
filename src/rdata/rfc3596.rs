//! Record data from RFC 3596: IPv6 addresses.

use crate::base::iana::Rtype;
use crate::base::name::Compressor;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// AAAA record data: a single IPv6 host address.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ipv6Addr::parse(parser).map(Self::new)
    }
}

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl RecordData for Aaaa {
    fn rtype(&self) -> Rtype {
        Rtype::AAAA
    }
}

impl ComposeRecordData for Aaaa {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.addr.compose(target)
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    #[test]
    fn aaaa_compose_parse() {
        let aaaa = Aaaa::new("2001:db8::1".parse().unwrap());
        test_rdlen(&aaaa);
        test_compose_parse(&aaaa, Aaaa::parse);
    }
}
