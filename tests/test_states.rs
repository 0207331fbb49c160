use common::{
    assert_states_close, get_eos, random_conserved, random_primitive, rng, AIR_CONFIG,
    MONATOMIC_CONFIG,
};
use euler_flux::{
    equation_of_state::{DensityFrom, TemperatureFrom},
    state_transform::{conservative_to_primitive, primitive_to_conservative, to_conserved},
    AnyState, Conserved, FluxError, Primitive, State,
};
use float_cmp::assert_approx_eq;
use glam::DVec3;

mod common;

#[test]
fn test_arithmetic_laws() {
    let mut rng = rng();
    let eos = get_eos(MONATOMIC_CONFIG);
    for _ in 0..100 {
        let a = random_conserved(&mut rng, &eos);
        let b = random_conserved(&mut rng, &eos);

        assert_states_close!((a + b) - b, a, 1e-14);
        assert_eq!((a * 2.) / 2., a);
        assert_eq!(2. * a, a * 2.);
        assert_eq!(a - a, State::vacuum());
        assert_eq!(-(-a), a);

        let mut c = a;
        c += b;
        c -= b;
        assert_states_close!(c, a, 1e-14);
    }
}

#[test]
fn test_round_trip() {
    let mut rng = rng();
    for cfg in [AIR_CONFIG, MONATOMIC_CONFIG] {
        let eos = get_eos(cfg);
        for _ in 0..100 {
            let primitives = random_primitive(&mut rng);
            let conserved = primitive_to_conservative(&primitives, &eos);
            let back = conservative_to_primitive(&conserved, &eos).unwrap();
            assert_states_close!(back, primitives, 1e-12);

            let again = primitive_to_conservative(&back, &eos);
            assert_states_close!(again, conserved, 1e-12);
        }
    }
}

#[test]
fn test_any_state_conversion() {
    let eos = get_eos(AIR_CONFIG);
    let primitives = State::<Primitive>::new(1.2, DVec3::new(10., 0., -3.), 101325.);
    let conserved = State::<Conserved>::from_primitives(&primitives, &eos);

    assert_eq!(to_conserved(&primitives.into(), &eos), conserved);
    assert_eq!(to_conserved(&conserved.into(), &eos), conserved);
    assert_eq!(
        State::<Primitive>::try_from(AnyState::from(conserved)),
        Err(FluxError::VariantMismatch {
            expected: "primitive",
            found: "conserved",
            context: "conversion",
        })
    );

    let mut target = State::<Conserved>::new(1., DVec3::ONE, 1.);
    target.initialize(Some(&primitives.into()));
    assert_eq!(target, State::<Conserved>::new(1., DVec3::ONE, 1.));
    target.initialize(None);
    assert_eq!(target, State::vacuum());
}

#[test]
fn test_air_at_room_temperature() {
    let eos = get_eos(AIR_CONFIG);
    let temperature = 293.15;
    let pressure = 101325.;
    let density = eos.density(DensityFrom::PressureTemperature {
        pressure,
        temperature,
    });
    assert_approx_eq!(f64, density, 1.20433, epsilon = 1e-5);
    assert_approx_eq!(
        f64,
        eos.temperature(TemperatureFrom::DensityPressure { density, pressure }),
        temperature,
        epsilon = 1e-10
    );

    let a = eos.speed_of_sound(density, pressure);
    assert_approx_eq!(f64, a, (1.4 * 287. * temperature).sqrt(), epsilon = 1e-10);
    assert_approx_eq!(f64, a, 343.20, epsilon = 1e-2);
}
