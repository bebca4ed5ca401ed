//! EDNS option codes.

int_enum! {
    /// EDNS option codes.
    ///
    /// Every option in the OPT pseudo record starts with a 16 bit code
    /// identifying how its payload is to be interpreted.
    =>
    OptionCode, u16;

    /// Long-lived queries.
    (LLQ => 1, "LLQ")

    /// Dynamic DNS update leases.
    (UPDATE_LEASE => 2, "UL")

    /// A name server identifier.
    (NSID => 3, "NSID")

    /// An EDNS expire timer.
    (EXPIRE => 9, "EXPIRE")

    /// A DNS cookie.
    (COOKIE => 10, "COOKIE")

    /// An edns-tcp-keepalive timeout.
    (TCP_KEEPALIVE => 11, "edns-tcp-keepalive")

    /// Message padding.
    (PADDING => 12, "Padding")

    /// An EDNS client subnet.
    (CLIENT_SUBNET => 8, "edns-client-subnet")

    /// A list of DS key tags.
    (KEY_TAG => 14, "edns-key-tag")
}
