use proptest::prelude::*;
use voxbrick_parts::{ConfigError, PartCatalog, PartSpec};

fn arb_lengths() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::hash_set(2usize..=12, 0..5).prop_map(|s| {
        let mut v: Vec<usize> = s.into_iter().collect();
        v.push(1);
        v
    })
}

proptest! {
    // Any set of distinct positive lengths that includes 1 validates, ordered longest first
    #[test]
    fn valid_sets_sort_descending(lens in arb_lengths()) {
        let specs = lens.iter().map(|l| PartSpec::new(*l, format!("p{}", l))).collect();
        let cat = PartCatalog::new(specs).unwrap();
        let got: Vec<usize> = cat.specs().iter().map(|s| s.length).collect();
        prop_assert!(got.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(cat.unit().length, 1);
        prop_assert_eq!(got.len(), lens.len());
    }

    // Removing the unit entry always fails validation
    #[test]
    fn missing_unit_rejected(lens in arb_lengths()) {
        let specs = lens
            .iter()
            .filter(|l| **l != 1)
            .map(|l| PartSpec::new(*l, format!("p{}", l)))
            .collect();
        prop_assert_eq!(PartCatalog::new(specs), Err(ConfigError::MissingUnitPart));
    }

    // largest_fit never exceeds the remaining length and no longer entry would fit
    #[test]
    fn largest_fit_is_maximal(lens in arb_lengths(), remaining in 1usize..64) {
        let specs = lens.iter().map(|l| PartSpec::new(*l, format!("p{}", l))).collect();
        let cat = PartCatalog::new(specs).unwrap();
        let pick = cat.largest_fit(remaining).length;
        prop_assert!(pick <= remaining);
        prop_assert!(cat.specs().iter().all(|s| s.length <= pick || s.length > remaining));
    }
}
