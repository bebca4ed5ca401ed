//! Macros for the simple record data shapes.
//!
//! A surprising number of record types consist of nothing but a single
//! domain name. `dname_type!` stamps those out; the flag picks whether
//! the name takes part in compression when composing. Only the record
//! types from RFC 1035 may be compressed, everything defined later
//! writes its names verbatim.

macro_rules! dname_type {
    (
        $(#[$attr:meta])*
        ( $target:ident, $rtype:ident, $field:ident, compressed )
    ) => {
        dname_type! {
            @common $(#[$attr])* ($target, $rtype, $field)
        }

        impl $crate::base::rdata::ComposeRecordData for $target {
            fn rdlen(
                &self,
                cx: &mut $crate::base::name::Compressor,
                offset: usize,
            ) -> usize {
                self.$field.compressed_len(cx, offset)
            }

            fn compose_rdata<Target>(
                &self,
                target: &mut Target,
                cx: &mut $crate::base::name::Compressor,
            ) -> Result<(), Target::AppendError>
            where
                Target: $crate::base::wire::Composer + ?Sized,
            {
                self.$field.compose_compressed(target, cx)
            }
        }
    };

    (
        $(#[$attr:meta])*
        ( $target:ident, $rtype:ident, $field:ident, uncompressed )
    ) => {
        dname_type! {
            @common $(#[$attr])* ($target, $rtype, $field)
        }

        impl $crate::base::rdata::ComposeRecordData for $target {
            fn rdlen(
                &self,
                _cx: &mut $crate::base::name::Compressor,
                _offset: usize,
            ) -> usize {
                self.$field.encoded_len()
            }

            fn compose_rdata<Target>(
                &self,
                target: &mut Target,
                _cx: &mut $crate::base::name::Compressor,
            ) -> Result<(), Target::AppendError>
            where
                Target: $crate::base::wire::Composer + ?Sized,
            {
                self.$field.compose(target)
            }
        }
    };

    (
        @common $(#[$attr:meta])*
        ( $target:ident, $rtype:ident, $field:ident )
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            pub fn parse<'a>(
                parser: &mut octseq::parse::Parser<'a, [u8]>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }
        }

        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                $crate::base::iana::Rtype::$rtype
            }
        }

        impl core::fmt::Display for $target {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                write!(f, "{}.", self.$field)
            }
        }
    };
}
