use alloy_primitives::{I256, U256};
use proptest::prelude::*;
use solidity_pack::*;

fn width() -> impl Strategy<Value = usize> {
    (1usize..=32).prop_map(|bytes| bytes * 8)
}

proptest! {
    #[test]
    fn uint_round_trips_at_every_width(bits in width(), limbs in any::<[u64; 4]>()) {
        let mut value = U256::from_limbs(limbs);
        if bits < 256 {
            value &= U256::MAX >> (256 - bits);
        }

        let packed = encode_packed_bytes(&[PackArg::typed(format!("uint{bits}"), value)]).unwrap();

        prop_assert_eq!(packed.len(), bits / 8);
        prop_assert_eq!(U256::from_be_slice(&packed), value);
    }

    #[test]
    fn int_is_truncated_twos_complement(bytes in 1usize..=16, raw in any::<i128>()) {
        let bits = bytes * 8;
        let value = raw >> (128 - bits);

        let packed = encode_packed_bytes(&[PackArg::typed(format!("int{bits}"), value)]).unwrap();

        prop_assert_eq!(&packed[..], &value.to_be_bytes()[16 - bytes..]);
    }

    #[test]
    fn int_sign_extends_back_at_every_width(
        bits in width(),
        limbs in any::<[u64; 4]>(),
        negative in any::<bool>(),
    ) {
        let magnitude = U256::from_limbs(limbs) & (U256::MAX >> (257 - bits));
        let expected = if negative {
            -I256::from_raw(magnitude)
        } else {
            I256::from_raw(magnitude)
        };

        let arg = PackArg::typed(format!("int{bits}"), BigInt::new(magnitude, negative));
        let packed = encode_packed_bytes(&[arg]).unwrap();
        prop_assert_eq!(packed.len(), bits / 8);

        let mut word = U256::from_be_slice(&packed);
        if bits < 256 && word.bit(bits - 1) {
            word |= U256::MAX << bits;
        }
        prop_assert_eq!(I256::from_raw(word), expected);
    }

    #[test]
    fn decimal_strings_and_numbers_hash_alike(n in any::<i64>()) {
        let from_str = solidity_sha3_raw(&[PackArg::inferred(n.to_string())]).unwrap();
        let from_num = solidity_sha3_raw(&[PackArg::inferred(n)]).unwrap();
        prop_assert_eq!(from_str, from_num);
    }

    #[test]
    fn fixed_bytes_pack_to_declared_size(size in 1usize..=32, data in prop::collection::vec(any::<u8>(), 0..=32)) {
        let data = &data[..data.len().min(size)];
        let arg = PackArg::typed(format!("bytes{size}"), format!("0x{}", hex::encode(data)));

        let packed = encode_packed_bytes(&[arg]).unwrap();

        prop_assert_eq!(packed.len(), size);
        prop_assert_eq!(&packed[..data.len()], data);
        prop_assert!(packed[data.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn uint256_arrays_take_one_word_per_element(values in prop::collection::vec(any::<u64>(), 0..8)) {
        let count = values.len();
        let packed = encode_packed_bytes(&[PackArg::typed("uint256[]", values)]).unwrap();
        prop_assert_eq!(packed.len(), 32 * count);
    }

    #[test]
    fn strings_pack_as_utf8(text in "\\PC{0,40}") {
        let packed = encode_packed_bytes(&[PackArg::typed("string", text.as_str())]).unwrap();
        prop_assert_eq!(&packed[..], text.as_bytes());
    }
}
