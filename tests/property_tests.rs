use mts_rs::prelude::*;
use proptest::prelude::*;

/// Reference spaces of 6..20 samples x 1..5 variables with distinct values.
fn reference_space() -> impl Strategy<Value = Space<f64>> {
    (6usize..20, 1usize..5).prop_flat_map(|(samples, variables)| {
        prop::collection::vec(-100.0f64..100.0, samples * variables).prop_map(move |values| {
            // Jitter by position so no variable is exactly constant.
            let values = values
                .into_iter()
                .enumerate()
                .map(|(i, v)| v + (i as f64) * 1e-3)
                .collect();
            Space::from_row_major(values, samples, variables).unwrap()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_orthogonal_array_shape_and_balance(variables in 1usize..64) {
        let mts = Mts::<f64>::builder().build().unwrap();
        let oa = mts.orthogonal_array(variables).unwrap();

        prop_assert!(oa.variables() >= variables);
        prop_assert!(oa.samples() > variables);
        prop_assert!(oa.as_slice().iter().all(|&l| l == 1.0 || l == 2.0));

        for column in 0..oa.variables() {
            let ones = oa.variable(column).unwrap().iter().filter(|&&l| l == 1.0).count();
            prop_assert_eq!(ones * 2, oa.samples());
        }
    }

    #[test]
    fn prop_own_sample_distances_non_negative(reference in reference_space()) {
        let mts = Mts::builder().build().unwrap();
        match mts.distances(&reference, &reference) {
            Ok(distances) => {
                for d in distances {
                    prop_assert!(d.is_finite());
                    prop_assert!(d >= -1e-6);
                }
            }
            // Random columns can be collinear when samples are few.
            Err(MtsError::SingularMatrix { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_distance_invariant_under_rescaling(
        reference in reference_space(),
        scale in 0.001f64..1000.0,
    ) {
        let mts = Mts::builder().build().unwrap();
        let variables = reference.variables();
        let sample = reference.sample(0).unwrap();

        let rescale = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .enumerate()
                .map(|(i, &x)| if i % variables == 0 { x * scale } else { x })
                .collect()
        };
        let scaled_reference = Space::from_row_major(
            rescale(reference.as_slice()),
            reference.samples(),
            variables,
        )
        .unwrap();
        let scaled_sample = Sample::new(rescale(sample.as_slice())).unwrap();

        if let (Ok(d), Ok(d_scaled)) = (
            mts.distance(&reference, &sample),
            mts.distance(&scaled_reference, &scaled_sample),
        ) {
            prop_assert!((d - d_scaled).abs() <= 1e-6 * d.abs().max(1.0));
        }
    }

    #[test]
    fn prop_selection_has_one_verdict_per_variable(reference in reference_space()) {
        let mts = Mts::builder().build().unwrap();
        let shifted: Vec<f64> = reference.row(0).iter().map(|x| x + 500.0).collect();
        let test = Space::from_rows(&[shifted]).unwrap();

        match mts.select_useful_variables(&reference, &test) {
            Ok(selection) => {
                prop_assert_eq!(selection.is_useful().len(), reference.variables());
                prop_assert_eq!(selection.runs, mts.orthogonal_array(reference.variables()).unwrap().samples());
            }
            Err(MtsError::SingularMatrix { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
