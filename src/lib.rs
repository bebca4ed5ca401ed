//! A wire-format codec for DNS resource records and TCP header options.
//!
//! This crate turns the binary wire representation of DNS resource
//! records, EDNS options and TCP header options into typed values and
//! back. It is a codec only: there is no resolver, no sockets, no
//! framing. You hand it octets, it hands you values.
//!
//! The pieces:
//!
//! * [`base`] holds the shared machinery: wire primitives, domain
//!   names and their compression, character strings, serial numbers,
//!   the IANA parameter types, the record envelope and the EDNS OPT
//!   pseudo record.
//! * [`rdata`] holds the record data types, one per record type,
//!   grouped by the RFC that introduced them, plus the registry that
//!   maps record types to parsers and the [`AnyRecordData`] enum over
//!   all of them.
//! * [`tcp`] holds the TCP option list codec.
//!
//! Parsing is total: any input either produces a value or a
//! [`ParseError`][base::wire::ParseError], never a panic. Composing a
//! value that was validated at construction time only fails if the
//! target buffer runs out of space.
//!
//! Writing records with name compression goes through an explicit
//! [`Compressor`][base::name::Compressor] passed along the call chain.
//! The same walk drives [`compressed_len`][base::Record::compressed_len]
//! and [`compose`][base::Record::compose], so running both passes with
//! a fresh compressor each predicts lengths exactly.
//!
//! [`AnyRecordData`]: rdata::AnyRecordData

pub mod base;
pub mod rdata;
pub mod tcp;
