//! Integration-level tests for the `dimscalar` facade crate.

use dimscalar::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn plus_keeps_the_left_display_unit() {
    let total = Length::new(100.0, length::METER).plus(Length::new(1.0, length::KILOMETER));
    assert_eq!(total.si(), 1100.0);
    assert_eq!(total.unit(), length::METER);
    assert_eq!(total.to_display_string(), "1100.000 m");
}

#[test]
fn speed_times_duration() {
    let d = Speed::new(20.0, speed::METER_PER_SECOND).multiply_by(Duration::new(5.0, duration::SECOND));
    assert_eq!(d.si(), 100.0);
    assert_eq!(d.unit(), length::METER);
}

#[test]
fn mass_divided_by_volume() {
    let rho = Mass::new(10.0, mass::KILOGRAM).divide_by(Volume::new(2.0, volume::CUBIC_METER));
    assert_eq!(rho.si(), 5.0);
    assert_eq!(rho.kind(), QuantityKind::Density);
}

#[test]
fn position_difference() {
    let d: Length = Position::new(10.0, position::METER) - Position::new(15.0, position::METER);
    assert_eq!(d.si(), -5.0);
}

#[test]
fn equality_ignores_display_unit() {
    assert_eq!(Length::new(1.0, length::KILOMETER), Length::new(1000.0, length::METER));
    assert_eq!(Length::NAN, Length::NAN);
    assert!(Length::new(1.0, length::KILOMETER) > Length::new(999.0, length::METER));
}

#[test]
fn parse_value_of() {
    let m = Mass::value_of("12.5 kg").unwrap();
    assert_eq!(m.si(), 12.5);
    assert_eq!(m.unit(), mass::KILOGRAM);
    let err = Mass::value_of("").unwrap_err();
    assert!(matches!(err, QuantityError::Parse { reason: ParseFailure::Empty, .. }));
    assert!(Mass::value_of("12.5").is_err());
    assert!(Mass::value_of("kg").is_err());
}

#[test]
fn factory_round_trip() {
    let any = instantiate(3.0, energy::KILOWATT_HOUR.erase()).unwrap();
    assert_eq!(any.kind(), QuantityKind::Energy);
    let e = Energy::try_from(any).unwrap();
    assert_relative_eq!(e.si(), 1.08e7, max_relative = 1e-6);
    assert_eq!(e.unit(), energy::KILOWATT_HOUR);

    let err = instantiate(1.0, AnyUnit::si(SiDimensions::NONE.with(SiBase::Candela, 1))).unwrap_err();
    assert!(matches!(err, QuantityError::UnrecognizedUnit { kind: QuantityKind::Si, .. }));
}

#[test]
fn money_per_area_from_si() {
    let unit = AnyUnit::money_per(money::USD.erase(), area::HECTARE.erase()).unwrap();
    let any = instantiate_si(0.05, unit).unwrap();
    assert_eq!(any.kind(), QuantityKind::MoneyPerArea);
    assert_relative_eq!(any.value(), 500.0, max_relative = 1e-6);
    assert_eq!(any.to_string(), "500.000 USD/ha");
}

#[test]
fn energy_bill() {
    let consumption = Power::new(2.0, power::KILOWATT) * Duration::new(3.0, duration::HOUR);
    let cost: Money = consumption * MoneyPerEnergy::new(0.3, money_per_energy::EUR_PER_KILOWATT_HOUR);
    assert_relative_eq!(cost.si(), 1.8, max_relative = 1e-5);
    assert_eq!(cost.format(None, true, true), "Rel 1.800 EUR");
}

#[test]
fn temperature_conversions() {
    let body = AbsoluteTemperature::new(98.6, absolute_temperature::DEGREE_FAHRENHEIT);
    assert_abs_diff_eq!(body.value_in(absolute_temperature::DEGREE_CELSIUS), 37.0, epsilon = 1e-3);
    let fever = body + Temperature::new(2.0, temperature::DEGREE_CELSIUS);
    assert_abs_diff_eq!(fever.value_in(absolute_temperature::DEGREE_CELSIUS), 39.0, epsilon = 1e-3);
    assert_eq!(fever.unit(), absolute_temperature::DEGREE_FAHRENHEIT);
}

#[test]
fn direction_turns() {
    let north = Direction::new(0.0, direction::DEGREE);
    let east = north + Angle::new(90.0, angle::DEGREE);
    assert_abs_diff_eq!(east.si(), core::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    let turn: Angle = east - north;
    assert_abs_diff_eq!(turn.value(), 90.0, epsilon = 1e-4);
}

#[test]
fn anonymous_products() {
    let odd = SiScalar::product(&Mass::new(2.0, mass::KILOGRAM), &Speed::new(3.0, speed::METER_PER_SECOND));
    assert_eq!(odd.si(), 6.0);
    assert!(odd.matching_kinds().is_empty());
    assert!(odd.as_rel::<speed::SpeedDim>().is_err());
    let thrust = odd / SiScalar::of(&Duration::new(2.0, duration::SECOND));
    assert_eq!(thrust.as_rel::<force::ForceDim>().unwrap().si(), 3.0);
}

#[test]
fn dynamic_checks() {
    let a = AnyScalar::from(Length::new(1.0, length::METER));
    let b = AnyScalar::from(Mass::new(1.0, mass::KILOGRAM));
    assert!(matches!(a.try_cmp(&b), Err(QuantityError::IncompatibleKind { .. })));
    assert!(a.try_plus(&b).is_err());
    assert!(Length::new(1.0, length::METER).value_in_any(mass::KILOGRAM.erase()).is_err());
}

#[test]
fn min_max_and_interpolation() {
    let values = [
        Duration::new(2.0, duration::MINUTE),
        Duration::new(90.0, duration::SECOND),
        Duration::new(120.0, duration::SECOND),
    ];
    let longest = Duration::max_of(values[0], values[1], &values[2..]);
    assert_eq!(longest.unit(), duration::MINUTE);
    let shortest = Duration::min_of(values[0], values[1], &values[2..]);
    assert_eq!(shortest.si(), 90.0);
    let mid = Duration::interpolate(values[1], values[0], 0.5);
    assert_relative_eq!(mid.si(), 105.0);
    assert_eq!(mid.unit(), duration::SECOND);
}

#[test]
fn kind_catalogue() {
    assert_eq!(QuantityKind::ALL.len(), 36);
    for &kind in QuantityKind::ALL {
        assert!(!kind.units().is_empty(), "{kind}");
        assert!(kind.si_dimensions().is_some(), "{kind}");
    }
}
