//! `packet!` construction macro, shaped like `vec!`.

/// Build a [`Packet`](crate::core::packet::Packet).
///
/// ```rust
/// use packet_header::packet;
///
/// let empty = packet![];
/// let values = packet![1, 2, 3];
/// let repeated = packet![42; 5];
///
/// assert!(empty.is_empty());
/// assert_eq!(values.data(), &[1, 2, 3]);
/// assert_eq!(repeated.len(), 5);
/// ```
///
/// # Panics
///
/// The list form panics when given more than `u16::MAX` elements.
#[macro_export]
macro_rules! packet {
    () => {
        $crate::core::packet::Packet::default()
    };
    ($elem:expr; $n:expr) => {
        $crate::core::packet::Packet::filled($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        match <$crate::core::packet::Packet as ::std::convert::TryFrom<_>>::try_from(
            ::std::vec![$($x),+],
        ) {
            ::std::result::Result::Ok(packet) => packet,
            ::std::result::Result::Err(_) => ::std::panic!("packet payload exceeds u16 length"),
        }
    };
}
