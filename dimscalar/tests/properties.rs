//! Property tests over the whole kind catalogue.

use dimscalar::*;

use proptest::prelude::*;

fn kind_and_unit() -> impl Strategy<Value = (QuantityKind, AnyUnit)> {
    (0..QuantityKind::ALL.len(), any::<prop::sample::Index>()).prop_map(|(k, idx)| {
        let kind = QuantityKind::ALL[k];
        let units = kind.units();
        (kind, units[idx.index(units.len())])
    })
}

fn close(a: f32, b: f32, relative: f32) -> bool {
    (a - b).abs() <= relative * a.abs().max(b.abs()).max(1.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_round_trip_through_factory((kind, unit) in kind_and_unit(), v in -1e3f32..1e3) {
        let scalar = instantiate(v, unit).unwrap();
        prop_assert_eq!(scalar.kind(), kind);
        let back = scalar.value_in(unit).unwrap();
        prop_assert!(close(back, v, 1e-3), "{} {}: {} -> {}", kind, unit, v, back);
    }

    #[test]
    fn prop_si_invariance((kind, u1) in kind_and_unit(), idx in any::<prop::sample::Index>(), v in 1e-2f32..1e3) {
        let units = kind.units();
        let u2 = units[idx.index(units.len())];
        prop_assume!(u1.offset() == 0.0 && u2.offset() == 0.0);
        let scalar = instantiate(v, u1).unwrap();
        let si1 = scalar.value_in(u1).unwrap() as f64 * u1.scale();
        let si2 = scalar.value_in(u2).unwrap() as f64 * u2.scale();
        let tolerance = 1e-5 * si1.abs();
        prop_assert!((si1 - si2).abs() <= tolerance, "{}: {} vs {}", kind, si1, si2);
        prop_assert!((si1 - scalar.si() as f64).abs() <= tolerance);
    }

    #[test]
    fn prop_dispatch_is_complete((kind, _unit) in kind_and_unit(), si in -1e6f32..1e6) {
        let standard = kind.standard_unit().unwrap();
        let scalar = instantiate_si(si, standard).unwrap();
        prop_assert_eq!(scalar.kind(), kind);
        prop_assert_eq!(scalar.si(), si);
        prop_assert_eq!(scalar.display_unit(), standard);
    }

    #[test]
    fn prop_display_parse_round_trip(v in -100_000i32..100_000) {
        let m = Mass::new(v as f32, mass::GRAM);
        let parsed: Mass = m.to_display_string().parse().unwrap();
        prop_assert_eq!(parsed.unit(), mass::GRAM);
        prop_assert!(close(parsed.value(), m.value(), 1e-6));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Group laws
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_relative_group_laws(a in -1e4f32..1e4, b in -1e4f32..1e4) {
        let x = Length::new(a, length::KILOMETER);
        let y = Length::new(b, length::METER);
        prop_assert_eq!((x + y).si(), (y + x).si());
        prop_assert!(close((x + y - y).si(), x.si(), 1e-5));
        prop_assert_eq!((x + Length::ZERO).si(), x.si());
        prop_assert!((x - x).eq0());
        prop_assert_eq!(-(-x), x);
        prop_assert_eq!((x + y).unit(), length::KILOMETER);
    }

    #[test]
    fn prop_absolute_translation(p in -1e4f32..1e4, d in -1e4f32..1e4) {
        let origin = Time::new(p, time::BASE_SECOND);
        let delta = Duration::new(d, duration::SECOND);
        let moved = origin + delta;
        // the cancellation error of `(origin + delta) - origin` grows with |origin|
        let tolerance = 1e-6 * origin.si().abs().max(delta.si().abs()).max(1.0);
        prop_assert!(((moved - origin).si() - delta.si()).abs() <= tolerance);
        prop_assert_eq!(moved - delta, origin.plus(delta).minus_rel(delta));
        prop_assert_eq!(delta + origin, moved);
    }

    #[test]
    fn prop_ordering_follows_si(a in -1e6f32..1e6, b in -1e6f32..1e6) {
        let x = Pressure::new(a, pressure::KILOPASCAL);
        let y = Pressure::new(b, pressure::PASCAL);
        prop_assert_eq!(x.cmp(&y), x.si().partial_cmp(&y.si()).unwrap());
        prop_assert_eq!(x.gt0(), a > 0.0);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensional closure
// ─────────────────────────────────────────────────────────────────────────────

fn dims<S: Scalar>(scalar: &S) -> SiDimensions {
    scalar.kind().si_dimensions().unwrap()
}

proptest! {
    #[test]
    fn prop_edges_respect_exponents(a in 0.1f32..1e3, b in 0.1f32..1e3) {
        let speed = Speed::new(a, speed::METER_PER_SECOND);
        let duration = Duration::new(b, duration::SECOND);
        let force = Force::new(a, force::NEWTON);
        let len = Length::new(b, length::METER);
        let vol = Volume::new(b, volume::CUBIC_METER);
        let pressure = Pressure::new(a, pressure::PASCAL);
        let current = ElectricalCurrent::new(a, electrical_current::AMPERE);

        prop_assert_eq!(dims(&(speed * duration)), SiScalar::product(&speed, &duration).dimensions());
        prop_assert_eq!(dims(&(force * len)), SiScalar::product(&force, &len).dimensions());
        prop_assert_eq!(dims(&(pressure * vol)), SiScalar::product(&pressure, &vol).dimensions());
        prop_assert_eq!(dims(&(len / duration)), SiScalar::quotient(&len, &duration).dimensions());
        prop_assert_eq!(dims(&(vol / len)), SiScalar::quotient(&vol, &len).dimensions());
        prop_assert_eq!(dims(&(current * duration)), SiScalar::product(&current, &duration).dimensions());
    }

    #[test]
    fn prop_product_then_quotient(a in 0.1f32..1e3, b in 0.1f32..1e3) {
        let speed = Speed::new(a, speed::KM_PER_HOUR);
        let duration = Duration::new(b, duration::MINUTE);
        let distance = speed * duration;
        prop_assert!(close((distance / duration).si(), speed.si(), 1e-5));
        prop_assert!(close((distance / speed).si(), duration.si(), 1e-5));

        let mass = Mass::new(a, mass::TONNE);
        let volume = Volume::new(b, volume::LITER);
        let density = mass / volume;
        prop_assert!(close((density * volume).si(), mass.si(), 1e-5));
    }
}
