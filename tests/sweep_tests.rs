
use pricer_lib::{
    default_configs, linspace, render_sweep_svg, run_sweep, run_sweep_with, sweep_iter,
    BlackScholes, OptionContract, OptionSide, PlotConfig, PricerError, PricerResult,
    PricingModel, SweepConfig, SweepParameter,
};
use test_utils::contract;

/// Running the volatility sweep twice yields bit-identical prices.
#[test]
fn test_volatility_sweep_deterministic() {
    let base = default_configs::base_contract();
    let config = default_configs::volatility_sweep();

    let first = run_sweep(&base, &config).expect("first sweep failed");
    let second = run_sweep(&base, &config).expect("second sweep failed");

    assert_eq!(first.len(), 100);
    let first_bits: Vec<u64> = first.prices().iter().map(|p| p.to_bits()).collect();
    let second_bits: Vec<u64> = second.prices().iter().map(|p| p.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

/// Call price is non-decreasing in volatility across the sweep range
#[test]
fn test_call_price_monotone_in_volatility() {
    for (spot, strike) in [(100.0, 100.0), (80.0, 100.0), (120.0, 100.0)] {
        let base = contract(spot, strike, 1.0, 0.05, 0.2, OptionSide::Call);
        let result = run_sweep(&base, &default_configs::volatility_sweep()).unwrap();
        let prices = result.prices();
        assert!(
            prices.windows(2).all(|w| w[1] >= w[0]),
            "S={} K={}: prices not monotone: {:?}",
            spot,
            strike,
            prices
        );
    }
}

#[test]
fn test_sweep_points_follow_grid() {
    let base = default_configs::base_contract();
    let config = default_configs::maturity_sweep();
    let result = run_sweep(&base, &config).unwrap();

    assert_eq!(result.parameter, SweepParameter::Maturity);
    assert_eq!(result.values(), linspace(0.1, 2.0, 100));
    assert_eq!(result.base, base);

    // Each point equals a direct pricing call with that maturity
    for point in &result.points {
        let direct = OptionContract {
            maturity: point.value,
            ..base
        }
        .price()
        .unwrap();
        assert_eq!(point.price, direct);
    }

    // ATM call value grows with maturity when r > 0
    assert!(result.prices().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_every_parameter_can_be_swept() {
    let base = default_configs::base_contract();
    let cases = [
        (SweepParameter::Spot, 50.0, 150.0),
        (SweepParameter::Strike, 50.0, 150.0),
        (SweepParameter::Maturity, 0.1, 2.0),
        (SweepParameter::Rate, -0.02, 0.1),
        (SweepParameter::Volatility, 0.1, 0.5),
    ];
    for (parameter, start, end) in cases {
        let config = SweepConfig::new(parameter, start, end, 11);
        let result = run_sweep(&base, &config).unwrap();
        assert_eq!(result.len(), 11, "{}", parameter);
        assert_eq!(result.points[0].value, start);
        assert_eq!(result.points[10].value, end);
        assert!(result.prices().iter().all(|p| p.is_finite()));
    }
}

#[test]
fn test_sweep_aborts_on_invalid_point() {
    let base = default_configs::base_contract();
    // Grid starts at zero maturity, which is outside the pricing domain
    let config = SweepConfig::new(SweepParameter::Maturity, 0.0, 1.0, 10);

    match run_sweep(&base, &config) {
        Err(PricerError::InvalidDomain { field, value }) => {
            assert_eq!(field, "maturity");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected InvalidDomain, got {:?}", other),
    }
}

#[test]
fn test_lazy_sweep_reports_each_point() {
    let base = default_configs::base_contract();
    let config = SweepConfig::new(SweepParameter::Volatility, 0.0, 0.4, 5);

    let points: Vec<_> = sweep_iter(&BlackScholes, &base, &config).collect();
    assert_eq!(points.len(), 5);
    assert!(points[0].is_err(), "zero volatility must fail");
    assert!(points[1..].iter().all(|p| p.is_ok()));

    // Lazy and eager agree on the valid part of the grid
    let eager = run_sweep(
        &base,
        &SweepConfig::new(SweepParameter::Volatility, 0.1, 0.4, 4),
    )
    .unwrap();
    let lazy: Vec<f64> = points[1..]
        .iter()
        .map(|p| p.as_ref().unwrap().price)
        .collect();
    for (l, e) in lazy.iter().zip(eager.prices()) {
        assert!((l - e).abs() < 1e-12, "lazy {} vs eager {}", l, e);
    }
}

#[test]
fn test_empty_and_single_point_sweeps() {
    let base = default_configs::base_contract();

    let empty = run_sweep(&base, &SweepConfig::new(SweepParameter::Spot, 90.0, 110.0, 0)).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.price_range(), None);

    let single = run_sweep(&base, &SweepConfig::new(SweepParameter::Spot, 90.0, 110.0, 1)).unwrap();
    assert_eq!(single.values(), vec![90.0]);
}

#[test]
fn test_non_finite_bounds_rejected() {
    let base = default_configs::base_contract();
    let config = SweepConfig::new(SweepParameter::Spot, 90.0, f64::INFINITY, 10);
    assert!(matches!(
        run_sweep(&base, &config),
        Err(PricerError::InvalidSweep(_))
    ));
}

/// Any model implementing the trait can drive a sweep
#[test]
fn test_custom_model_sweep() {
    struct Intrinsic;

    impl PricingModel for Intrinsic {
        fn name(&self) -> &str {
            "intrinsic"
        }

        fn price(&self, contract: &OptionContract) -> PricerResult<f64> {
            contract.validate()?;
            Ok(contract.intrinsic())
        }
    }

    let base = default_configs::base_contract();
    let config = SweepConfig::new(SweepParameter::Spot, 90.0, 110.0, 3);
    let result = run_sweep_with(&Intrinsic, &base, &config).unwrap();
    assert_eq!(result.prices(), vec![0.0, 0.0, 10.0]);
}

#[test]
fn test_render_sweep_svg() {
    let base = default_configs::base_contract();
    let result = run_sweep(&base, &default_configs::volatility_sweep()).unwrap();

    let path = std::env::temp_dir().join(format!("pricer_lib_sweep_{}.svg", std::process::id()));
    render_sweep_svg(&result, &path, &PlotConfig::default()).expect("render failed");

    let svg = std::fs::read_to_string(&path).expect("chart not written");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Call Price vs Volatility"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_render_empty_sweep_fails() {
    let base = default_configs::base_contract();
    let empty = run_sweep(&base, &SweepConfig::new(SweepParameter::Spot, 90.0, 110.0, 0)).unwrap();
    let path = std::env::temp_dir().join("pricer_lib_empty.svg");
    assert!(matches!(
        render_sweep_svg(&empty, &path, &PlotConfig::default()),
        Err(PricerError::Plot(_))
    ));
}
