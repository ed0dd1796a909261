use crate::{
    add, and, compare, multiply, not, or, shift_left, subtract, xor, BitWidth, Flags, Word,
};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = Word> {
    prop_oneof![
        Just(0),
        Just(-1),
        Just(1),
        Just(i32::MIN),
        Just(i32::MAX),
        Just(0x5555_5555),
        Just(0xAAAA_AAAAu32 as i32),
        any::<i32>(),
    ]
}

fn width_strategy() -> impl Strategy<Value = BitWidth> {
    prop_oneof![Just(BitWidth::W8), Just(BitWidth::W16), Just(BitWidth::W32)]
}

/// A width together with an operand pair that fits it as signed values.
fn fitted_operands() -> impl Strategy<Value = (BitWidth, Word, Word)> {
    width_strategy().prop_flat_map(|width| {
        let operand = match width {
            BitWidth::W8 => (i8::MIN as Word..=i8::MAX as Word).boxed(),
            BitWidth::W16 => (i16::MIN as Word..=i16::MAX as Word).boxed(),
            BitWidth::W32 => word_strategy().boxed(),
        };
        (Just(width), operand.clone(), operand)
    })
}

/// `cmp dest, src` computed natively, flag for flag as an x86 core would.
fn reference_cmp(dest: Word, src: Word, width: BitWidth) -> Flags {
    let mask = width.mask();
    let dest = (dest as u32) & mask;
    let src = (src as u32) & mask;
    let result = dest.wrapping_sub(src) & mask;
    let sb = width.sign_bit();
    Flags {
        cf: dest < src,
        pf: (result as u8).count_ones() % 2 == 0,
        zf: result == 0,
        sf: result & sb != 0,
        of: (dest ^ src) & (dest ^ result) & sb != 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn logic_matches_native(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(not(a), !a);
        prop_assert_eq!(or(a, b), a | b);
        prop_assert_eq!(and(a, b), a & b);
        prop_assert_eq!(xor(a, b), a ^ b);
    }

    #[test]
    fn add_and_subtract_match_modulo_width(
        width in width_strategy(),
        a in word_strategy(),
        b in word_strategy(),
    ) {
        prop_assert_eq!(width.truncate(add(a, b, width)), width.truncate(a.wrapping_add(b)));
        prop_assert_eq!(width.truncate(subtract(a, b, width)), width.truncate(a.wrapping_sub(b)));
    }

    #[test]
    fn shift_wraps_amount_and_matches_native(
        width in width_strategy(),
        a in word_strategy(),
        k in 0u8..64,
    ) {
        let k = k % (2 * width.bits());
        let effective = k % width.bits();
        let shifted = shift_left(a, k, width);
        prop_assert_eq!(shifted, shift_left(a, effective, width));
        prop_assert_eq!(
            shifted as u32,
            ((a as u32) << effective) & width.mask(),
            "a={:#x} k={} width={}", a, k, width
        );
    }

    #[test]
    fn compare_matches_native_cmp(
        width in width_strategy(),
        a in word_strategy(),
        b in word_strategy(),
    ) {
        prop_assert_eq!(compare(a, b, width), reference_cmp(a, b, width));
        prop_assert_eq!(compare(a, a, width), reference_cmp(a, a, width));
    }

    #[test]
    fn multiply_matches_native((width, a, b) in fitted_operands()) {
        prop_assert_eq!(
            width.truncate(multiply(a, b, width)),
            width.truncate(a.wrapping_mul(b)),
            "{} * {} at width {}", a, b, width
        );
    }

    #[test]
    fn multiply_accepts_full_words_at_any_width(
        width in width_strategy(),
        a in word_strategy(),
        b in word_strategy(),
    ) {
        prop_assert_eq!(
            width.truncate(multiply(a, b, width)),
            width.truncate(a.wrapping_mul(b)),
            "{} * {} at width {}", a, b, width
        );
    }
}
