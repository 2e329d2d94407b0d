use crate::fields::mask_to_width;

/// Width of an access lock or access key composite (ring + domain).
pub const ACCESS_COMPOSITE_BITS: u32 = 18;

const RING_BITS: u32 = 2;
const DOMAIN_BITS: u32 = 16;

/// Enter/read/write permission triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AccessPermissions {
    enter: bool,
    read: bool,
    write: bool,
}

impl AccessPermissions {
    /// No permissions granted.
    pub const NONE: Self = Self::new(false, false, false);

    /// Builds a permission triple.
    #[must_use]
    pub const fn new(enter: bool, read: bool, write: bool) -> Self {
        Self { enter, read, write }
    }

    /// Enter permission.
    #[must_use]
    pub const fn can_enter(self) -> bool {
        self.enter
    }

    /// Read permission.
    #[must_use]
    pub const fn can_read(self) -> bool {
        self.read
    }

    /// Write permission.
    #[must_use]
    pub const fn can_write(self) -> bool {
        self.write
    }
}

macro_rules! access_composite {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// The 18-bit composite holds a 2-bit ring in its upper bits and a
        /// 16-bit domain in its lower bits.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
        #[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
        pub struct $name {
            ring: u8,
            domain: u16,
        }

        impl $name {
            /// Builds a value from ring and domain; the ring is truncated to 2 bits.
            #[must_use]
            pub const fn new(ring: u8, domain: u16) -> Self {
                Self {
                    ring: ring & 0o3,
                    domain,
                }
            }

            /// Splits an 18-bit composite; bits above 18 are ignored.
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub const fn from_composite(composite: u64) -> Self {
                let composite = mask_to_width(composite, ACCESS_COMPOSITE_BITS);
                Self {
                    ring: mask_to_width(composite >> DOMAIN_BITS, RING_BITS) as u8,
                    domain: mask_to_width(composite, DOMAIN_BITS) as u16,
                }
            }

            /// Ring number (0 is most privileged).
            #[must_use]
            pub const fn ring(self) -> u8 {
                self.ring
            }

            /// Domain number.
            #[must_use]
            pub const fn domain(self) -> u16 {
                self.domain
            }

            /// Reassembles the 18-bit composite.
            #[must_use]
            pub const fn composite(self) -> u64 {
                ((self.ring as u64) << DOMAIN_BITS) | self.domain as u64
            }
        }

        impl From<u64> for $name {
            fn from(composite: u64) -> Self {
                Self::from_composite(composite)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.composite()
            }
        }
    };
}

access_composite! {
    /// Access lock held by a gate or bank descriptor.
    AccessLock
}

access_composite! {
    /// Access key installed in the caller's state.
    AccessKey
}
