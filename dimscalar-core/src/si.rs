//! Anonymous SI scalars: products and quotients with no declared algebra edge.

use crate::dimension::{Dimension, SiDimensions};
use crate::error::{QuantityError, Result};
use crate::factory::{instantiate_si, AnyScalar};
use crate::format::{format_scalar, DisplaySettings};
use crate::kind::{Polarity, QuantityKind};
use crate::relative::Rel;
use crate::scalar::{canonical_bits, Scalar};
use crate::unit::AnyUnit;
use core::fmt;
use core::ops::{Div, Mul};

/// A magnitude in SI units together with its base exponents.
///
/// Any two scalars can be multiplied or divided into an `SiScalar`, even when no concrete type exists for the
/// result. The value converts back to a concrete type once its exponents match that type's kind.
///
/// ```rust
/// use dimscalar_core::length::{Length, METER};
/// use dimscalar_core::mass::{Mass, KILOGRAM};
/// use dimscalar_core::SiScalar;
///
/// let moment = SiScalar::product(&Mass::new(2.0, KILOGRAM), &Length::new(3.0, METER));
/// assert_eq!(moment.si(), 6.0);
/// assert_eq!(moment.to_string(), "6.000 kg·m");
/// assert!(moment.as_rel::<dimscalar_core::length::LengthDim>().is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SiScalar {
    si: f32,
    dimensions: SiDimensions,
}

impl SiScalar {
    /// Creates a value from its SI magnitude and base exponents.
    pub const fn new(si: f32, dimensions: SiDimensions) -> Self {
        Self { si, dimensions }
    }

    /// Forgets the concrete type of a scalar. Absolute values keep their offset-free SI magnitude.
    pub fn of<S: Scalar>(scalar: &S) -> Self {
        let dimensions = <S::Dim as Dimension>::KIND
            .si_dimensions()
            .unwrap_or_default();
        Self::new(scalar.si(), dimensions)
    }

    /// `a × b` with exponents added.
    pub fn product<A: Scalar, B: Scalar>(a: &A, b: &B) -> Self {
        Self::of(a) * Self::of(b)
    }

    /// `a ÷ b` with exponents subtracted.
    pub fn quotient<A: Scalar, B: Scalar>(a: &A, b: &B) -> Self {
        Self::of(a) / Self::of(b)
    }

    /// SI magnitude.
    pub const fn si(&self) -> f32 {
        self.si
    }

    /// Base exponents.
    pub const fn dimensions(&self) -> SiDimensions {
        self.dimensions
    }

    /// The anonymous unit with these exponents.
    pub const fn unit(&self) -> AnyUnit {
        AnyUnit::si(self.dimensions)
    }

    /// Relative kinds whose standard unit has these exponents (energy and torque share theirs).
    pub fn matching_kinds(&self) -> Vec<QuantityKind> {
        QuantityKind::ALL
            .iter()
            .copied()
            .filter(|k| k.polarity() == Polarity::Relative)
            .filter(|k| k.si_dimensions() == Some(self.dimensions))
            .collect()
    }

    /// Converts into the concrete relative type `D`, displayed in its standard unit.
    ///
    /// Fails with `IncompatibleKind` when the exponents differ from those of `D`.
    pub fn as_rel<D: Dimension>(&self) -> Result<Rel<D>> {
        if D::KIND.si_dimensions() != Some(self.dimensions) {
            return Err(QuantityError::incompatible(D::KIND, QuantityKind::Si));
        }
        Ok(Rel::from_si(self.si, D::STANDARD_UNIT))
    }

    /// Converts into the concrete scalar of `kind` through the dispatch factory, displayed in the standard unit.
    pub fn to_kind(&self, kind: QuantityKind) -> Result<AnyScalar> {
        match kind.standard_unit() {
            Some(unit) if kind.si_dimensions() == Some(self.dimensions) => instantiate_si(self.si, unit),
            _ => Err(QuantityError::incompatible(kind, QuantityKind::Si)),
        }
    }
}

impl PartialEq for SiScalar {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && canonical_bits(self.si) == canonical_bits(other.si)
    }
}

impl Mul for SiScalar {
    type Output = SiScalar;
    fn mul(self, rhs: SiScalar) -> SiScalar {
        SiScalar::new(self.si * rhs.si, self.dimensions * rhs.dimensions)
    }
}

impl Div for SiScalar {
    type Output = SiScalar;
    fn div(self, rhs: SiScalar) -> SiScalar {
        SiScalar::new(self.si / rhs.si, self.dimensions / rhs.dimensions)
    }
}

impl fmt::Display for SiScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviation = self.dimensions.to_string();
        f.write_str(&format_scalar(
            &DisplaySettings::default(),
            None,
            self.si,
            Some(&abbreviation),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyDim;
    use crate::force::{Force, NEWTON};
    use crate::length::{Length, METER};
    use crate::speed::SpeedDim;
    use crate::torque::TorqueDim;

    #[test]
    fn exponents_track_products_and_quotients() {
        let work = SiScalar::product(&Force::new(10.0, NEWTON), &Length::new(2.0, METER));
        assert_eq!(work.si(), 20.0);
        assert_eq!(work.matching_kinds(), vec![QuantityKind::Energy, QuantityKind::Torque]);
        assert_eq!(work.as_rel::<EnergyDim>().unwrap().si(), 20.0);
        assert_eq!(work.as_rel::<TorqueDim>().unwrap().si(), 20.0);
        assert_eq!(
            work.as_rel::<SpeedDim>(),
            Err(QuantityError::IncompatibleKind {
                expected: QuantityKind::Speed,
                found: QuantityKind::Si
            })
        );
        let back = work / SiScalar::of(&Length::new(2.0, METER));
        assert_eq!(back, SiScalar::of(&Force::new(10.0, NEWTON)));
    }

    #[test]
    fn anonymous_unit_is_rejected_by_the_factory() {
        let odd = SiScalar::quotient(&Length::new(1.0, METER), &Force::new(1.0, NEWTON));
        assert_eq!(odd.unit().kind(), QuantityKind::Si);
        assert!(odd.matching_kinds().is_empty());
        assert!(crate::instantiate(odd.si(), odd.unit()).is_err());
        assert!(odd.to_kind(QuantityKind::Length).is_err());
    }

    #[test]
    fn converts_through_the_factory() {
        let area = SiScalar::product(&Length::new(3.0, METER), &Length::new(4.0, METER));
        let any = area.to_kind(QuantityKind::Area).unwrap();
        assert_eq!(any.kind(), QuantityKind::Area);
        assert_eq!(any.si(), 12.0);
        assert_eq!(area.to_string(), "12.000 m^2");
    }
}
