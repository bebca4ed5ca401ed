//! DNS CLASSes.

int_enum! {
    /// DNS classes.
    ///
    /// In practice only the Internet class matters, but the mechanism
    /// carries the full registry. TSIG and OPT pseudo records reinterpret
    /// the class field, which is why the raw value is always preserved.
    =>
    Class, u16;

    /// The Internet.
    (IN => 1, "IN")

    /// The CSNET class.
    ///
    /// (Obsolete.)
    (CS => 2, "CS")

    /// The CHAOS class.
    (CH => 3, "CH")

    /// Hesiod.
    (HS => 4, "HS")

    /// Query class None.
    (NONE => 254, "NONE")

    /// Query class Any.
    (ANY => 255, "ANY")
}
