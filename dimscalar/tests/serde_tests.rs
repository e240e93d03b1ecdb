//! Serialization of scalars embedded in user types.
#![cfg(feature = "serde")]

use dimscalar::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Shipment {
    id: String,
    weight: Mass,
    distance: Length,
    departure: Time,
    rate: MoneyPerMass,
}

#[test]
fn struct_with_scalar_fields() {
    let shipment = Shipment {
        id: "S-17".into(),
        weight: Mass::new(2.5, mass::TONNE),
        distance: Length::new(340.0, length::KILOMETER),
        departure: Time::new(8.0, time::BASE_HOUR),
        rate: MoneyPerMass::new(40.0, money_per_mass::EUR_PER_TONNE),
    };

    let json = serde_json::to_value(&shipment).unwrap();
    assert_eq!(json["weight"], serde_json::json!({"value": 2.5, "unit": "t"}));
    assert_eq!(json["distance"]["unit"], "km");
    assert_eq!(json["rate"]["unit"], "EUR/t");

    let restored: Shipment = serde_json::from_value(json).unwrap();
    assert_eq!(restored, shipment);
    assert_eq!(restored.weight.unit(), mass::TONNE);
    assert_eq!(restored.departure.unit(), time::BASE_HOUR);

    let cost: Money = restored.weight * restored.rate;
    assert!((cost.si() - 100.0).abs() < 1e-3);
}

#[test]
fn unit_aliases_are_accepted_on_input() {
    let d: Duration = serde_json::from_str(r#"{"value": 90, "unit": "minutes"}"#).unwrap();
    assert_eq!(d.unit(), duration::MINUTE);
    assert_eq!(d.si(), 5400.0);
}

#[test]
fn heterogeneous_readings() {
    let readings = vec![
        AnyScalar::from(Pressure::new(101.3, pressure::KILOPASCAL)),
        AnyScalar::from(AbsoluteTemperature::new(300.0, absolute_temperature::KELVIN)),
        AnyScalar::from(Speed::new(12.0, speed::METER_PER_SECOND)),
    ];
    let text = serde_json::to_string(&readings).unwrap();
    let back: Vec<AnyScalar> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, readings);
    assert_eq!(back[1].kind(), QuantityKind::AbsoluteTemperature);
}

#[test]
fn kinds_and_units_as_plain_values() {
    assert_eq!(serde_json::to_string(&QuantityKind::FlowVolume).unwrap(), r#""FlowVolume""#);
    let unit: energy::EnergyUnit = serde_json::from_str(r#""kWh""#).unwrap();
    assert_eq!(unit, energy::KILOWATT_HOUR);
    assert!(serde_json::from_str::<energy::EnergyUnit>(r#""m""#).is_err());
}

#[test]
fn display_settings_serialize() {
    let json = serde_json::to_value(DisplaySettings::default()).unwrap();
    assert_eq!(json["precision"], 3);
    let settings: DisplaySettings = serde_json::from_str(r#"{"precision": 1}"#).unwrap();
    assert_eq!(settings.precision, 1);
    assert_eq!(settings.fixed_min, DisplaySettings::default().fixed_min);
}
