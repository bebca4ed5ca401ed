//! The table of known record types.
//!
//! Parsing into [`AnyRecordData`] goes through a static table of
//! [`RecordDescriptor`]s, one per known record type, sorted by type
//! value for binary search. Types that share a wire format, such as
//! TXT and SPF, share a descriptor function that receives the record
//! type and keeps it around.

use super::AnyRecordData;
use crate::base::iana::Rtype;
use crate::base::rdata::UnknownRecordData;
use crate::base::wire::ParseError;
use octseq::parse::Parser;

//------------ RecordDescriptor ----------------------------------------------

/// Knows how to parse the record data of one record type.
#[derive(Clone, Copy, Debug)]
pub struct RecordDescriptor {
    rtype: Rtype,
    parse: for<'a> fn(
        Rtype,
        &mut Parser<'a, [u8]>,
    ) -> Result<AnyRecordData, ParseError>,
}

impl RecordDescriptor {
    /// Returns the record type this descriptor is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Parses record data from the remainder of `parser`.
    pub fn parse<'a>(
        &self,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<AnyRecordData, ParseError> {
        (self.parse)(self.rtype, parser)
    }
}

//------------ The table -----------------------------------------------------

macro_rules! descriptor {
    ( $rtype:ident, $rdtype:ty ) => {
        RecordDescriptor {
            rtype: Rtype::$rtype,
            parse: {
                fn parse<'a>(
                    _rtype: Rtype,
                    parser: &mut Parser<'a, [u8]>,
                ) -> Result<AnyRecordData, ParseError> {
                    <$rdtype>::parse(parser).map(AnyRecordData::from)
                }
                parse
            },
        }
    };
    ( $rtype:ident, $rdtype:ty, with_rtype ) => {
        RecordDescriptor {
            rtype: Rtype::$rtype,
            parse: {
                fn parse<'a>(
                    rtype: Rtype,
                    parser: &mut Parser<'a, [u8]>,
                ) -> Result<AnyRecordData, ParseError> {
                    <$rdtype>::parse(rtype, parser)
                        .map(AnyRecordData::from)
                }
                parse
            },
        }
    };
}

/// All the record types this crate can pick apart, sorted by value.
pub static REGISTRY: &[RecordDescriptor] = &[
    descriptor!(A, super::rfc1035::A),
    descriptor!(NS, super::rfc1035::Ns),
    descriptor!(MD, super::rfc1035::Md),
    descriptor!(MF, super::rfc1035::Mf),
    descriptor!(CNAME, super::rfc1035::Cname),
    descriptor!(SOA, super::rfc1035::Soa),
    descriptor!(MB, super::rfc1035::Mb),
    descriptor!(MG, super::rfc1035::Mg),
    descriptor!(MR, super::rfc1035::Mr),
    descriptor!(NULL, super::rfc1035::Null),
    descriptor!(WKS, super::rfc1035::Wks),
    descriptor!(PTR, super::rfc1035::Ptr),
    descriptor!(HINFO, super::rfc1035::Hinfo),
    descriptor!(MINFO, super::rfc1035::Minfo),
    descriptor!(MX, super::rfc1035::Mx),
    descriptor!(TXT, super::rfc1035::Txt, with_rtype),
    descriptor!(RP, super::rfc1183::Rp),
    descriptor!(AFSDB, super::rfc1183::Afsdb),
    descriptor!(X25, super::rfc1183::X25),
    descriptor!(ISDN, super::rfc1183::Isdn),
    descriptor!(RT, super::rfc1183::Rt),
    descriptor!(NSAP, super::misc::Nsap),
    descriptor!(NSAPPTR, super::misc::NsapPtr),
    descriptor!(SIG, super::dnssec::Rrsig, with_rtype),
    descriptor!(KEY, super::dnssec::Dnskey, with_rtype),
    descriptor!(PX, super::misc::Px),
    descriptor!(GPOS, super::rfc1183::Gpos),
    descriptor!(AAAA, super::rfc3596::Aaaa),
    descriptor!(LOC, super::misc::Loc),
    descriptor!(NXT, super::dnssec::Nxt),
    descriptor!(SRV, super::rfc2782::Srv),
    descriptor!(ATMA, super::misc::Atma),
    descriptor!(NAPTR, super::naptr::Naptr),
    descriptor!(KX, super::misc::Kx),
    descriptor!(CERT, super::misc::Cert),
    descriptor!(A6, super::misc::A6),
    descriptor!(DNAME, super::misc::Dname),
    descriptor!(SINK, super::misc::Sink),
    descriptor!(OPT, crate::base::opt::Opt),
    descriptor!(APL, super::apl::Apl),
    descriptor!(DS, super::dnssec::Ds, with_rtype),
    descriptor!(SSHFP, super::misc::Sshfp),
    descriptor!(IPSECKEY, super::misc::Ipseckey),
    descriptor!(RRSIG, super::dnssec::Rrsig, with_rtype),
    descriptor!(NSEC, super::dnssec::Nsec),
    descriptor!(DNSKEY, super::dnssec::Dnskey, with_rtype),
    descriptor!(NSEC3, super::nsec3::Nsec3),
    descriptor!(NSEC3PARAM, super::nsec3::Nsec3param),
    descriptor!(HIP, super::misc::Hip),
    descriptor!(RKEY, super::dnssec::Dnskey, with_rtype),
    descriptor!(TALINK, super::misc::Talink),
    descriptor!(CDS, super::dnssec::Ds, with_rtype),
    descriptor!(SPF, super::rfc1035::Txt, with_rtype),
    descriptor!(TKEY, super::tsig::Tkey),
    descriptor!(TSIG, super::tsig::Tsig),
    descriptor!(URI, super::misc::Uri),
    descriptor!(CAA, super::misc::Caa),
    descriptor!(TA, super::dnssec::Ds, with_rtype),
    descriptor!(DLV, super::dnssec::Ds, with_rtype),
];

//------------ Lookup and dispatch -------------------------------------------

/// Returns the descriptor for a record type if there is one.
pub fn lookup(rtype: Rtype) -> Option<&'static RecordDescriptor> {
    REGISTRY
        .binary_search_by_key(&rtype.to_int(), |desc| {
            desc.rtype.to_int()
        })
        .ok()
        .map(|idx| &REGISTRY[idx])
}

/// Parses the remainder of `parser` as record data of `rtype`.
///
/// Unregistered types come back as
/// [`AnyRecordData::Unknown`] carrying the raw octets.
pub fn parse_record_data<'a>(
    rtype: Rtype,
    parser: &mut Parser<'a, [u8]>,
) -> Result<AnyRecordData, ParseError> {
    match lookup(rtype) {
        Some(desc) => desc.parse(parser),
        None => UnknownRecordData::parse(rtype, parser)
            .map(AnyRecordData::Unknown),
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::RecordData;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in REGISTRY.windows(2) {
            assert!(
                pair[0].rtype().to_int() < pair[1].rtype().to_int(),
                "{} must come before {}",
                pair[0].rtype(),
                pair[1].rtype()
            );
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup(Rtype::MX).unwrap().rtype(), Rtype::MX);
        assert_eq!(lookup(Rtype::DLV).unwrap().rtype(), Rtype::DLV);
        assert!(lookup(Rtype::from_int(1000)).is_none());
        assert!(lookup(Rtype::AXFR).is_none());
    }

    #[test]
    fn dispatch_known_type() {
        let wire = b"\xC0\x00\x02\x01";
        let mut parser = Parser::from_ref(wire.as_slice());
        let data = parse_record_data(Rtype::A, &mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        match data {
            AnyRecordData::A(a) => {
                assert_eq!(a.addr().octets(), [192, 0, 2, 1]);
            }
            _ => panic!("expected A record data"),
        }
    }

    #[test]
    fn family_types_keep_their_rtype() {
        let wire = b"\x03spf";
        let mut parser = Parser::from_ref(wire.as_slice());
        let data = parse_record_data(Rtype::SPF, &mut parser).unwrap();
        assert_eq!(data.rtype(), Rtype::SPF);
        assert!(matches!(data, AnyRecordData::Txt(_)));
    }

    #[test]
    fn unknown_type_keeps_octets() {
        let wire = b"\x01\x02\x03";
        let mut parser = Parser::from_ref(wire.as_slice());
        let data =
            parse_record_data(Rtype::from_int(1000), &mut parser)
                .unwrap();
        match data {
            AnyRecordData::Unknown(data) => {
                assert_eq!(data.rtype(), Rtype::from_int(1000));
                assert_eq!(data.data().as_ref(), wire);
            }
            _ => panic!("expected unknown record data"),
        }
    }
}
