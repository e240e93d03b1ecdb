//! Minimal end-to-end example: typed arithmetic, parsing and runtime dispatch.

use dimscalar::{instantiate, AnyScalar, QuantityKind, Scalar};
use dimscalar::{duration, energy, length, money_per_energy, power, speed};
use dimscalar::{Duration, Energy, Length, Money, MoneyPerEnergy, Power, Speed};

fn main() {
    let d = Length::new(1.0, length::KILOMETER) + Length::new(250.0, length::METER);
    assert_eq!(d.to_display_string(), "1.250 km");

    let v: Speed = d / Duration::new(50.0, duration::SECOND);
    assert!((v.value_in(speed::KM_PER_HOUR) - 90.0).abs() < 1e-3);

    let used: Energy = Power::new(1.5, power::KILOWATT) * Duration::new(2.0, duration::HOUR);
    assert!((used.value_in(energy::KILOWATT_HOUR) - 3.0).abs() < 1e-5);
    let bill: Money = used * MoneyPerEnergy::new(0.25, money_per_energy::EUR_PER_KILOWATT_HOUR);
    println!("{} at {} costs {}", used.in_unit(energy::KILOWATT_HOUR), v, bill);

    let parsed = AnyScalar::parse(QuantityKind::Speed, "12 m/s").unwrap();
    let any = instantiate(12.0, speed::METER_PER_SECOND.erase()).unwrap();
    assert_eq!(parsed, any);
}
