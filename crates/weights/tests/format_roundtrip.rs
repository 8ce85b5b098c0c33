//! Round-trip and size laws for the weight file format.

use std::io::Cursor;

use proptest::prelude::*;

use mlpforge_weights::{load, read, save, write, WeightStoreError};

proptest! {
    // Arbitrary u32 bit patterns cover NaN payloads, infinities, subnormals
    // and negative zero; compare as bits because NaN != NaN.
    #[test]
    fn roundtrip_preserves_bit_patterns(bits in proptest::collection::vec(any::<u32>(), 0..256)) {
        let values: Vec<f32> = bits.iter().copied().map(f32::from_bits).collect();

        let mut buffer = Vec::new();
        write(&mut buffer, &values).unwrap();
        prop_assert_eq!(buffer.len(), 4 + 4 * values.len());

        let parsed = read(&mut Cursor::new(&buffer)).unwrap();
        let parsed_bits: Vec<u32> = parsed.iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(parsed_bits, bits);
    }

    #[test]
    fn any_truncation_of_nonempty_payload_is_reported(
        count in 1usize..64,
        keep_fraction in 0.0f64..1.0,
    ) {
        let values: Vec<f32> = (0..count).map(|i| i as f32).collect();

        let mut buffer = Vec::new();
        write(&mut buffer, &values).unwrap();

        // Cut somewhere strictly inside the payload.
        let payload_len = buffer.len() - 4;
        let cut = 4 + ((payload_len - 1) as f64 * keep_fraction) as usize;
        buffer.truncate(cut);

        let result = read(&mut Cursor::new(&buffer));
        prop_assert!(
            matches!(result, Err(WeightStoreError::Truncated { .. })),
            "expected Truncated error, got {:?}",
            result
        );
    }
}

#[test]
fn file_truncated_after_save_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("w.bin");

    save(&path, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();

    // Chop off the last value and a half.
    let file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
    file.set_len(22).unwrap();
    drop(file);

    let result = load(&path);
    assert!(matches!(
        result,
        Err(WeightStoreError::Truncated {
            declared: 6,
            read: 4
        })
    ));
}

#[test]
fn files_from_external_producers_load() {
    // A compatible producer writes the same layout by hand.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("external.bin");

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&3i32.to_ne_bytes());
    for value in [4.0f32, 5.0, 6.0] {
        bytes.extend_from_slice(&value.to_ne_bytes());
    }
    std::fs::write(&path, &bytes).unwrap();

    assert_eq!(load(&path).unwrap(), vec![4.0, 5.0, 6.0]);
}
