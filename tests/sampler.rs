use genpass::{OsRandom, PasswordGenerator, RandomBytes};

/// Chi-squared statistic for `samples` draws of `next_index(bound)`.
fn chi_squared(bound: usize, samples: usize) -> f64 {
    let mut rb = RandomBytes::new(OsRandom);
    let mut counts = vec![0u64; bound];
    for _ in 0..samples {
        counts[rb.next_index(bound).unwrap()] += 1;
    }

    let expected = samples as f64 / bound as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn bound_52_is_uniform() {
    // df = 51; 110 sits far beyond the 99.999th percentile (~106)
    let chi = chi_squared(52, 100_000);
    assert!(chi < 110.0, "chi-squared {chi:.2} too high for df 51");
}

#[test]
fn non_power_of_two_bounds_are_uniform() {
    // A plain `byte % 200` would put ~2x weight on 0..56 and blow far past this.
    let chi = chi_squared(200, 200_000);
    assert!(chi < 300.0, "chi-squared {chi:.2} too high for df 199");
}

#[test]
fn wide_bound_stays_in_range() {
    let mut generator = PasswordGenerator::new();
    for _ in 0..10_000 {
        assert!(generator.next_index(1000).unwrap() < 1000);
    }
}
