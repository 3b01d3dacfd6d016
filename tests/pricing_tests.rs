
use parity_lib::{
    bs_call_price, bs_greeks, bs_put_price, default_configs, norm_cdf, norm_pdf,
    price_with_parity, OptionType, PricingError, PricingInputs,
};
use rand::Rng;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use test_utils::{assert_close, atm_inputs, load_reference_prices, random_inputs, seeded_rng};

/// S=100, K=100, T=1, r=5%, sigma=20% call, the calculator's opening scenario.
#[test]
fn test_atm_call_scenario() {
    let g = bs_greeks(&atm_inputs(OptionType::Call)).expect("ATM call should price");

    assert_close(g.price, 10.4506, 1e-4, "price");
    assert_close(g.delta, 0.6368, 1e-4, "delta");
    assert_close(g.gamma, 0.0188, 1e-4, "gamma");
    assert_close(g.vega, 0.3752, 1e-4, "vega");
    assert_close(g.theta, -0.0176, 1e-4, "theta per day");
    assert_close(g.rho, 0.5323, 1e-4, "rho");
}

#[test]
fn test_atm_put_scenario() {
    let g = bs_greeks(&atm_inputs(OptionType::Put)).expect("ATM put should price");

    assert_close(g.price, 5.5735, 1e-4, "price");
    assert_close(g.delta, -0.3632, 1e-4, "delta");
    assert_close(g.theta, -0.004542, 1e-5, "theta per day");
    assert_close(g.rho, -0.4189, 1e-4, "rho");
}

/// Every row of the reference table, priced both sides.
/// Price and rho errors scale with the notional, so their tolerance does too.
#[test]
fn test_reference_table() {
    let rows = load_reference_prices().expect("Failed to load reference prices");
    assert_eq!(rows.len(), 16);

    for row in &rows {
        let g = bs_greeks(&row.inputs()).expect("reference inputs are valid");
        let expected = row.greeks();
        let scale = row.spot.max(row.strike);
        let ctx = format!("{} S={} K={}", row.option_type, row.spot, row.strike);

        assert_close(g.price, expected.price, 2e-7 * scale, &format!("{} price", ctx));
        assert_close(g.delta, expected.delta, 2e-7, &format!("{} delta", ctx));
        assert_close(g.gamma, expected.gamma, 1e-8, &format!("{} gamma", ctx));
        assert_close(g.vega, expected.vega, 1e-8, &format!("{} vega", ctx));
        assert_close(g.theta, expected.theta, 1e-8, &format!("{} theta", ctx));
        assert_close(g.rho, expected.rho, 1e-8 * scale, &format!("{} rho", ctx));
    }
}

/// The rational approximation stays within its published 1.5e-7 error bound.
#[test]
fn test_cdf_against_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();

    for i in -800..=800 {
        let x = i as f64 / 100.0;
        let err = (norm_cdf(x) - normal.cdf(x)).abs();
        assert!(err < 1.5e-7, "x={} err={:e}", x, err);
        assert!((norm_pdf(x) - normal.pdf(x)).abs() < 1e-14, "pdf at x={}", x);
    }
}

#[test]
fn test_cdf_symmetry_and_origin() {
    assert_eq!(norm_cdf(0.0), 0.5);

    let mut rng = seeded_rng();
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(-8.0..8.0);
        assert_close(norm_cdf(x) + norm_cdf(-x), 1.0, 1e-15, "symmetry");
    }
}

/// Randomised sweep over valid inputs: delta bounds and non-negative gamma/vega.
#[test]
fn test_greek_bounds_hold_for_random_inputs() {
    let mut rng = seeded_rng();

    for _ in 0..2000 {
        let inputs = random_inputs(&mut rng);
        let g = bs_greeks(&inputs).expect("random inputs are valid");

        match inputs.option_type {
            OptionType::Call => assert!((0.0..=1.0).contains(&g.delta), "{:?}", inputs),
            OptionType::Put => assert!((-1.0..=0.0).contains(&g.delta), "{:?}", inputs),
        }
        assert!(g.gamma >= 0.0, "gamma {:?}", inputs);
        assert!(g.vega >= 0.0, "vega {:?}", inputs);
        assert!(g.price >= -1e-6 * inputs.spot.max(inputs.strike), "price {:?}", inputs);
    }
}

/// As sigma goes to zero an in-the-money option is worth its discounted intrinsic value.
#[test]
fn test_vanishing_volatility_limit() {
    let call = PricingInputs::new(110.0, 100.0, 1.0, 0.05, 1e-6, OptionType::Call).unwrap();
    let g = bs_greeks(&call).unwrap();
    assert_close(g.price, 110.0 - call.discounted_strike(), 1e-9, "call intrinsic");
    assert_close(g.delta, 1.0, 1e-12, "call delta");

    let put = PricingInputs::new(90.0, 100.0, 1.0, 0.05, 1e-6, OptionType::Put).unwrap();
    let g = bs_greeks(&put).unwrap();
    assert_close(g.price, put.discounted_strike() - 90.0, 1e-9, "put intrinsic");
    assert_close(g.delta, -1.0, 1e-12, "put delta");
}

/// Unguarded, these inputs would produce NaN or Infinity. They must be errors instead.
#[test]
fn test_degenerate_inputs_are_domain_errors() {
    let base = atm_inputs(OptionType::Call);
    let cases = [
        ("T", PricingInputs { time_to_expiry: 0.0, ..base }),
        ("sigma", PricingInputs { volatility: 0.0, ..base }),
        ("S", PricingInputs { spot: -1.0, ..base }),
        ("K", PricingInputs { strike: 0.0, ..base }),
        ("T", PricingInputs { time_to_expiry: -0.5, ..base }),
    ];

    for (expected_field, inputs) in cases {
        match bs_greeks(&inputs) {
            Err(PricingError::InvalidDomain { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidDomain for {}, got {:?}", expected_field, other),
        }
    }
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    let base = atm_inputs(OptionType::Put);
    let cases = [
        ("S", PricingInputs { spot: f64::NAN, ..base }),
        ("r", PricingInputs { rate: f64::INFINITY, ..base }),
        ("sigma", PricingInputs { volatility: f64::NEG_INFINITY, ..base }),
        // finiteness is checked before the domain
        ("T", PricingInputs { time_to_expiry: f64::NAN, spot: -1.0, ..base }),
    ];

    for (expected_field, inputs) in cases {
        match bs_greeks(&inputs) {
            Err(PricingError::NonFiniteInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected NonFiniteInput for {}, got {:?}", expected_field, other),
        }
    }
}

#[test]
fn test_negative_rate_is_valid() {
    let inputs = PricingInputs::new(100.0, 120.0, 3.0, -0.005, 0.15, OptionType::Call).unwrap();
    assert!(bs_greeks(&inputs).is_ok());
}

#[test]
fn test_price_helpers_match_greeks() {
    let call = bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let put = bs_put_price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    assert_eq!(call, bs_greeks(&atm_inputs(OptionType::Call)).unwrap().price);
    assert_eq!(put, bs_greeks(&atm_inputs(OptionType::Put)).unwrap().price);
    assert!(bs_call_price(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
}

/// Valid inputs whose evaluation overflows or divides 0 by 0 yield an error, not a report.
#[test]
fn test_overflowing_evaluation_is_non_finite_output() {
    let cases = [
        // e^(-rT) = e^1000 overflows
        PricingInputs::new(100.0, 100.0, 1000.0, -1.0, 0.2, OptionType::Call).unwrap(),
        // sigma * sqrt(T) underflows to zero
        PricingInputs::new(100.0, 100.0, 1e-12, 0.0, 5e-324, OptionType::Call).unwrap(),
    ];

    for inputs in cases {
        assert_eq!(
            bs_greeks(&inputs),
            Err(PricingError::NonFiniteOutput { field: "price" })
        );
        match price_with_parity(&inputs, &default_configs::standard()) {
            Err(err) => {
                assert_eq!(err, PricingError::NonFiniteOutput { field: "price" });
                assert!(!err.is_input_error());
            }
            Ok(report) => panic!("{:?} produced a report: {}", inputs, report),
        }
    }
}
