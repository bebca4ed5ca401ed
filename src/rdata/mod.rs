//! Record data for the record types known to this crate.
//!
//! Each type lives in a module loosely named after the RFC that
//! introduced it. The [`AnyRecordData`] enum collects them all and is
//! what you want when parsing records of unknown provenance: it picks
//! the concrete representation through the [`registry`] and falls back
//! to [`UnknownRecordData`][crate::base::rdata::UnknownRecordData] for
//! types nobody registered.

#[macro_use]
mod macros;

pub mod apl;
pub mod bitmap;
pub mod dnssec;
pub mod misc;
pub mod naptr;
pub mod nsec3;
pub mod registry;
pub mod rfc1035;
pub mod rfc1183;
pub mod rfc2782;
pub mod rfc3596;
pub mod tsig;

use crate::base::iana::Rtype;
use crate::base::name::Compressor;
use crate::base::opt::Opt;
use crate::base::rdata::{
    ComposeRecordData, ParseRecordData, RecordData, UnknownRecordData,
};
use crate::base::wire::{Composer, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ AnyRecordData -------------------------------------------------

macro_rules! any_record_data {
    ( $( $(#[$attr:meta])* $variant:ident($rdtype:ty), )+ ) => {
        /// Record data of any known record type.
        ///
        /// Data of a type without a registry entry ends up in the
        /// `Unknown` variant, which keeps the raw octets around.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum AnyRecordData {
            $( $(#[$attr])* $variant($rdtype), )+
            Unknown(UnknownRecordData),
        }

        impl RecordData for AnyRecordData {
            fn rtype(&self) -> Rtype {
                match *self {
                    $(
                        AnyRecordData::$variant(ref inner) => {
                            inner.rtype()
                        }
                    )+
                    AnyRecordData::Unknown(ref inner) => inner.rtype(),
                }
            }
        }

        impl ComposeRecordData for AnyRecordData {
            fn rdlen(&self, cx: &mut Compressor, offset: usize) -> usize {
                match *self {
                    $(
                        AnyRecordData::$variant(ref inner) => {
                            inner.rdlen(cx, offset)
                        }
                    )+
                    AnyRecordData::Unknown(ref inner) => {
                        inner.rdlen(cx, offset)
                    }
                }
            }

            fn compose_rdata<Target: Composer + ?Sized>(
                &self,
                target: &mut Target,
                cx: &mut Compressor,
            ) -> Result<(), Target::AppendError> {
                match *self {
                    $(
                        AnyRecordData::$variant(ref inner) => {
                            inner.compose_rdata(target, cx)
                        }
                    )+
                    AnyRecordData::Unknown(ref inner) => {
                        inner.compose_rdata(target, cx)
                    }
                }
            }
        }

        impl fmt::Display for AnyRecordData {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $(
                        AnyRecordData::$variant(ref inner) => {
                            inner.fmt(f)
                        }
                    )+
                    AnyRecordData::Unknown(ref inner) => inner.fmt(f),
                }
            }
        }

        $(
            impl From<$rdtype> for AnyRecordData {
                fn from(inner: $rdtype) -> Self {
                    AnyRecordData::$variant(inner)
                }
            }
        )+

        impl From<UnknownRecordData> for AnyRecordData {
            fn from(inner: UnknownRecordData) -> Self {
                AnyRecordData::Unknown(inner)
            }
        }
    }
}

any_record_data! {
    A(rfc1035::A),
    Aaaa(rfc3596::Aaaa),
    Afsdb(rfc1183::Afsdb),
    Apl(apl::Apl),
    Atma(misc::Atma),
    A6(misc::A6),
    Caa(misc::Caa),
    Cert(misc::Cert),
    Cname(rfc1035::Cname),
    Dname(misc::Dname),
    /// Carries DNSKEY, KEY and RKEY data.
    Dnskey(dnssec::Dnskey),
    /// Carries DS, CDS, DLV and TA data.
    Ds(dnssec::Ds),
    Gpos(rfc1183::Gpos),
    Hinfo(rfc1035::Hinfo),
    Hip(misc::Hip),
    Ipseckey(misc::Ipseckey),
    Isdn(rfc1183::Isdn),
    Kx(misc::Kx),
    Loc(misc::Loc),
    Mb(rfc1035::Mb),
    Md(rfc1035::Md),
    Mf(rfc1035::Mf),
    Mg(rfc1035::Mg),
    Minfo(rfc1035::Minfo),
    Mr(rfc1035::Mr),
    Mx(rfc1035::Mx),
    Naptr(naptr::Naptr),
    Ns(rfc1035::Ns),
    Nsap(misc::Nsap),
    NsapPtr(misc::NsapPtr),
    Nsec(dnssec::Nsec),
    Nsec3(nsec3::Nsec3),
    Nsec3param(nsec3::Nsec3param),
    Null(rfc1035::Null),
    Nxt(dnssec::Nxt),
    Opt(Opt),
    Ptr(rfc1035::Ptr),
    Px(misc::Px),
    Rp(rfc1183::Rp),
    /// Carries RRSIG and SIG data.
    Rrsig(dnssec::Rrsig),
    Rt(rfc1183::Rt),
    Sink(misc::Sink),
    Soa(rfc1035::Soa),
    Srv(rfc2782::Srv),
    Sshfp(misc::Sshfp),
    Talink(misc::Talink),
    Tkey(tsig::Tkey),
    Tsig(tsig::Tsig),
    /// Carries TXT and SPF data.
    Txt(rfc1035::Txt),
    Uri(misc::Uri),
    Wks(rfc1035::Wks),
    X25(rfc1183::X25),
}

impl<'a> ParseRecordData<'a> for AnyRecordData {
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        registry::parse_record_data(rtype, parser).map(Some)
    }
}
