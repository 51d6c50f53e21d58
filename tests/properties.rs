//! Property tests for the winner relation, matchup table and commitments.

use std::collections::BTreeSet;

use proptest::prelude::*;

use hmac_rps::core::{beats_set, loses_set, resolve, MatchupTable, MoveCatalog, Outcome};
use hmac_rps::proof::{commit, verify_reveal, SecretKey, KEY_LEN};

/// Odd-sized catalogs of distinct names, 3 to 17 moves.
fn catalog_strategy() -> impl Strategy<Value = MoveCatalog> {
    (1usize..=8)
        .prop_flat_map(|k| prop::collection::hash_set("[A-Za-z]{1,10}", 2 * k + 1))
        .prop_map(|names| MoveCatalog::new(names).unwrap())
}

proptest! {
    #[test]
    fn prop_same_move_draws(catalog in catalog_strategy()) {
        for m in catalog.iter() {
            prop_assert_eq!(resolve(m, m, &catalog), Outcome::Draw);
        }
    }

    #[test]
    fn prop_antisymmetric(catalog in catalog_strategy()) {
        for a in catalog.iter() {
            for b in catalog.iter().filter(|b| *b != a) {
                let ab = resolve(a, b, &catalog);
                let ba = resolve(b, a, &catalog);
                prop_assert!(ab == Outcome::Win || ab == Outcome::Lose);
                prop_assert_eq!(ab.flip(), ba);
            }
        }
    }

    #[test]
    fn prop_beats_and_loses_partition(catalog in catalog_strategy()) {
        let n = catalog.len();
        for i in 0..n {
            let beats: BTreeSet<usize> = beats_set(i, n).into_iter().collect();
            let loses: BTreeSet<usize> = loses_set(i, n).into_iter().collect();

            prop_assert_eq!(beats.len(), n / 2);
            prop_assert_eq!(loses.len(), n / 2);
            prop_assert!(beats.is_disjoint(&loses));
            prop_assert!(!beats.contains(&i) && !loses.contains(&i));

            let union: BTreeSet<usize> = beats.union(&loses).copied().collect();
            let others: BTreeSet<usize> = (0..n).filter(|j| *j != i).collect();
            prop_assert_eq!(union, others);
        }
    }

    #[test]
    fn prop_first_move_offsets(catalog in catalog_strategy()) {
        let n = catalog.len();
        let first = &catalog[0];
        for offset in 1..n {
            let expected = if offset <= n / 2 { Outcome::Win } else { Outcome::Lose };
            prop_assert_eq!(resolve(first, &catalog[offset], &catalog), expected);
        }
    }

    #[test]
    fn prop_outsider_is_invalid(catalog in catalog_strategy()) {
        // Underscores never appear in generated names
        let outsider = "not_a_move";
        for m in catalog.iter() {
            prop_assert_eq!(resolve(outsider, m, &catalog), Outcome::Invalid);
            prop_assert_eq!(resolve(m, outsider, &catalog), Outcome::Invalid);
        }
    }

    #[test]
    fn prop_table_consistent(catalog in catalog_strategy()) {
        let table = MatchupTable::build(&catalog);
        let n = table.size();
        for i in 0..n {
            prop_assert_eq!(table.get(i, i), Some(Outcome::Draw));
            for j in 0..n {
                prop_assert_eq!(table.get(i, j).map(Outcome::flip), table.get(j, i));
                prop_assert_eq!(table.get(i, j), Some(resolve(&catalog[i], &catalog[j], &catalog)));
            }
        }
    }

    #[test]
    fn prop_even_catalogs_rejected(k in 2usize..=8) {
        let names: Vec<String> = (0..2 * k).map(|i| format!("m{}", i)).collect();
        prop_assert!(MoveCatalog::new(names).is_err());
    }

    #[test]
    fn prop_duplicate_rejected(k in 1usize..=8, dup in 0usize..17) {
        let mut names: Vec<String> = (0..2 * k + 1).map(|i| format!("m{}", i)).collect();
        let dup = dup % names.len();
        let last = names.len() - 1;
        names[last] = names[dup].clone();
        if dup != last {
            prop_assert!(MoveCatalog::new(names).is_err());
        }
    }

    #[test]
    fn prop_commitment_binding(
        key in prop::array::uniform32(any::<u8>()),
        other_key in prop::array::uniform32(any::<u8>()),
        message in "[A-Za-z]{1,12}",
        other_message in "[A-Za-z]{1,12}",
    ) {
        let key = SecretKey::from_bytes(key);
        let other_key = SecretKey::from_bytes(other_key);
        let c = commit(&key, &message).unwrap();

        prop_assert_eq!(&c, &commit(&key, &message).unwrap());
        prop_assert!(verify_reveal(&key.to_hex(), &message, &c).is_ok());

        if message != other_message {
            prop_assert_ne!(&c, &commit(&key, &other_message).unwrap());
        }
        if key != other_key {
            prop_assert_ne!(&c, &commit(&other_key, &message).unwrap());
        }
    }
}

#[test]
fn key_len_is_256_bits() {
    assert_eq!(KEY_LEN * 8, 256);
}
