//! The basic building blocks of the wire format.
//!
//! This module declares the fundamental types and traits everything else
//! is built on: parsing and composing primitives in [`wire`], the number
//! registries in [`iana`], domain names and their compression in
//! [`name`], and the record and option machinery in [`record`],
//! [`rdata`], and [`opt`].

pub mod charstr;
pub mod iana;
pub mod name;
pub mod opt;
pub mod rdata;
pub mod record;
pub mod serial;
pub mod wire;

pub use self::charstr::CharStr;
pub use self::iana::{Class, Rtype};
pub use self::name::{Compressor, Name};
pub use self::record::Record;
pub use self::serial::Serial;
