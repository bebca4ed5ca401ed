//! Wire-format integer newtypes.
//!
//! Type codes, classes, option codes and algorithm numbers are all plain
//! integers on the wire. Representing them as newtypes keeps unknown
//! values representable (forward compatibility requires carrying codes the
//! crate has never heard of) while giving known values symbolic names.

#[macro_use]
mod macros;

pub mod cert;
pub mod class;
pub mod family;
pub mod opt;
pub mod rtype;
pub mod secalg;
pub mod tcpopt;

pub use self::cert::CertificateType;
pub use self::class::Class;
pub use self::family::AddressFamily;
pub use self::opt::OptionCode;
pub use self::rtype::Rtype;
pub use self::secalg::{
    DigestAlgorithm, Nsec3HashAlgorithm, SecurityAlgorithm,
};
pub use self::tcpopt::TcpOptionKind;
