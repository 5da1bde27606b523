//! Property-based tests for the bit-set laws of whole numbers.

use proptest::prelude::*;

use crate::WholeNumber;
use crate::word::WORD_BITS;

const MAX_BIT: usize = 6 * WORD_BITS;

fn indices() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0..MAX_BIT, 0..48)
}

fn whole() -> impl Strategy<Value = WholeNumber> {
    indices().prop_map(|ids| WholeNumber::from_indices(&ids))
}

/// Values whose buffer carries zero high words, as left behind by resets.
fn whole_with_slack() -> impl Strategy<Value = WholeNumber> {
    (whole(), 0..MAX_BIT).prop_map(|(mut v, high)| {
        if !v.test(high) {
            v.set(high);
            v.reset_bit(high);
        }
        v
    })
}

fn bit_range() -> impl Strategy<Value = (usize, usize)> {
    (0..MAX_BIT + WORD_BITS, 0..MAX_BIT + WORD_BITS)
}

proptest! {
    #[test]
    fn indices_round_trip(v in whole_with_slack()) {
        let rebuilt = WholeNumber::from_indices(&v.to_bit_indices());
        prop_assert_eq!(&rebuilt, &v);
        prop_assert_eq!(rebuilt.to_uintmax(), v.to_uintmax());
        prop_assert_eq!(rebuilt.to_bit_vector(), v.to_bit_vector());
    }

    #[test]
    fn mask_round_trip(v in whole_with_slack()) {
        let rebuilt = WholeNumber::from_bits(&v.to_bit_vector());
        prop_assert_eq!(&rebuilt, &v);
        for i in 0..MAX_BIT + WORD_BITS {
            prop_assert_eq!(rebuilt.test(i), v.test(i));
        }
    }

    #[test]
    fn uintmax_round_trip(n in any::<u128>()) {
        let v = WholeNumber::from(n);
        prop_assert_eq!(v.to_uintmax(), n);
        prop_assert_eq!(v.length(), (u128::BITS - n.leading_zeros()) as usize);
        prop_assert_eq!(v.count(), n.count_ones() as usize);
    }

    #[test]
    fn length_is_canonical(v in whole_with_slack()) {
        let len = v.length();
        prop_assert_eq!(len == 0, !v.any());
        if len > 0 {
            prop_assert!(v.test(len - 1));
        }
        for i in len..len + 2 * WORD_BITS {
            prop_assert!(!v.test(i));
        }
    }

    #[test]
    fn count_bounded_by_length(v in whole_with_slack()) {
        let (count, len) = (v.count(), v.length());
        prop_assert!(count <= len);
        prop_assert_eq!(count == len, (0..len).all(|i| v.test(i)));
    }

    #[test]
    fn single_bit_consistency(v in whole(), i in 0..MAX_BIT + WORD_BITS) {
        let mut set = v.clone();
        set.set(i);
        prop_assert!(set.test(i));

        let mut reset = v.clone();
        reset.reset_bit(i);
        prop_assert!(!reset.test(i));

        let mut flipped = v.clone();
        flipped.flip(i);
        prop_assert_eq!(flipped.test(i), !v.test(i));
        flipped.flip(i);
        prop_assert_eq!(&flipped, &v);
    }

    #[test]
    fn set_range_equals_single_bits(v in whole(), (a, b) in bit_range()) {
        let mut range = v.clone();
        range.set_range(a, b);
        let mut single = v.clone();
        for i in a.min(b)..=a.max(b) {
            single.set(i);
        }
        prop_assert_eq!(range, single);
    }

    #[test]
    fn reset_range_equals_single_bits(v in whole(), (a, b) in bit_range()) {
        let mut range = v.clone();
        range.reset_range(a, b);
        let mut single = v.clone();
        for i in (a.min(b)..=a.max(b)).rev() {
            single.reset_bit(i);
        }
        prop_assert_eq!(range, single);
    }

    #[test]
    fn flip_range_equals_single_bits(v in whole(), (a, b) in bit_range()) {
        let mut range = v.clone();
        range.flip_range(a, b);
        let mut single = v.clone();
        for i in a.min(b)..=a.max(b) {
            single.flip(i);
        }
        prop_assert_eq!(range, single);
    }

    #[test]
    fn bit_assign_dispatches(v in whole(), (a, b) in bit_range(), value in any::<bool>()) {
        let mut assigned = v.clone();
        assigned.bit_assign_range(a, b, value);
        let mut direct = v.clone();
        if value {
            direct.set_range(a, b);
        } else {
            direct.reset_range(a, b);
        }
        prop_assert_eq!(assigned, direct);
    }

    #[test]
    fn reverse_is_an_involution_within_cap(v in whole(), cap in 0..MAX_BIT) {
        let twice = v.reverse_within(cap).reverse_within(cap);
        prop_assert_eq!(twice, v.test_range(0, cap));
    }

    #[test]
    fn not_self_flips_truthiness(v in whole_with_slack()) {
        let mut negated = v.clone();
        negated.not_self();
        prop_assert_eq!(negated.any(), !v.any());
        negated.not_self();
        prop_assert_eq!(negated.any(), v.any());
        prop_assert_eq!(bool::from(&!&v), v.none());
    }

    #[test]
    fn bits_assign_splices(
        v in whole(),
        source in whole(),
        (a, b) in bit_range(),
    ) {
        let (from, to) = (a.min(b), a.max(b));
        let mut target = v.clone();
        target.bits_assign(a, b, &source);
        for i in 0..MAX_BIT + 2 * WORD_BITS {
            let expected = if (from..=to).contains(&i) {
                source.test(i - from)
            } else {
                v.test(i)
            };
            prop_assert_eq!(target.test(i), expected, "bit {}", i);
        }
    }

    #[test]
    fn test_range_rebases(v in whole(), (a, b) in bit_range()) {
        let (from, to) = (a.min(b), a.max(b));
        let window = v.test_range(a, b);
        prop_assert!(window.length() <= to - from + 1);
        for k in 0..=to - from {
            prop_assert_eq!(window.test(k), v.test(from + k));
        }
    }
}
