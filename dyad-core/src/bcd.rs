//! Binary to BCD conversion (double-dabble).
//!
//! Shift-and-correct conversion of a 16-bit value into two decimal digits
//! without division: before each shift, any accumulator nibble >= 5 gets 3
//! added, then the next input bit is shifted into the chain with the
//! carry-out of each nibble feeding the next.

/// Two decimal digits produced by [`encode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BcdDigits {
    /// Tens digit, 0-9
    pub tens: u8,
    /// Units digit, 0-9
    pub units: u8,
}

/// Convert a 16-bit value to its two low-order decimal digits.
///
/// Total over the full u16 domain: digits beyond the two kept nibbles are
/// shifted out and discarded, so values above 99 lose their high digits
/// rather than failing. The practical input range is 0-99.
pub fn encode(value: u16) -> BcdDigits {
    let mut units: u8 = 0;
    let mut tens: u8 = 0;

    for bit in (0..16).rev() {
        let mut next = ((value >> bit) & 1) as u8;
        for nibble in [&mut units, &mut tens] {
            let mut n = *nibble;
            if n >= 5 {
                n += 3;
            }
            n = (n << 1) | next;
            next = (n >> 4) & 1;
            *nibble = n & 0xf;
        }
        // Carry out of the tens nibble is the discarded hundreds bit
    }

    BcdDigits { tens, units }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exhaustive_two_digit_range() {
        for n in 0u16..=99 {
            let d = encode(n);
            assert_eq!(
                u16::from(d.tens) * 10 + u16::from(d.units),
                n,
                "wrong digits for {}",
                n
            );
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0), BcdDigits { tens: 0, units: 0 });
        assert_eq!(encode(9), BcdDigits { tens: 0, units: 9 });
        assert_eq!(encode(10), BcdDigits { tens: 1, units: 0 });
        assert_eq!(encode(99), BcdDigits { tens: 9, units: 9 });
    }

    #[test]
    fn test_high_digits_discarded() {
        // Only the two low-order decimal digits survive
        assert_eq!(encode(100), BcdDigits { tens: 0, units: 0 });
        assert_eq!(encode(12345), BcdDigits { tens: 4, units: 5 });
    }

    proptest! {
        /// Total over u16: both digits always land in 0-9 and equal the
        /// low-order decimal digits of the input.
        #[test]
        fn prop_digits_in_range(n in any::<u16>()) {
            let d = encode(n);
            prop_assert!(d.tens <= 9);
            prop_assert!(d.units <= 9);
            prop_assert_eq!(u16::from(d.tens), n / 10 % 10);
            prop_assert_eq!(u16::from(d.units), n % 10);
        }
    }
}
