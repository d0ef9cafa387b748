use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Mass, MassRate, MomentOfInertia},
    length::meter,
    mass::kilogram,
    mass_rate::kilogram_per_second,
    moment_of_inertia::kilogram_square_meter,
};

/// Physical constants of a cart-pole.
///
/// `friction` is the viscous damping coefficient acting on the cart
/// (force per unit velocity, N·s/m), which in SI base units is a mass rate.
///
/// Use [`PhysicalParameters::new`] for validated construction. A struct
/// literal is accepted as-is, so degenerate values (for example a zero
/// length) flow through the model as NaN or infinity rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PhysicalParameters {
    pub mass_cart: Mass,
    pub mass_pole: Mass,
    pub length: Length,
    pub moment_inertia: MomentOfInertia,
    pub friction: MassRate,
    pub gravity: Acceleration,
}

/// Errors returned when validating [`PhysicalParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParametersError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("friction must be finite and non-negative, got {0} kg/s")]
    Friction(f64),
}

/// The parameters as plain SI values, named after the usual symbols.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Si {
    pub m_c: f64,
    pub m_p: f64,
    pub l: f64,
    pub i: f64,
    pub b: f64,
    pub g: f64,
}

impl PhysicalParameters {
    /// Creates a validated set of parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametersError`] if a mass, the length, the moment of
    /// inertia, or gravity is not finite and positive, or if friction is
    /// negative or not finite.
    pub fn new(
        mass_cart: Mass,
        mass_pole: Mass,
        length: Length,
        moment_inertia: MomentOfInertia,
        friction: MassRate,
        gravity: Acceleration,
    ) -> Result<Self, ParametersError> {
        let params = Self {
            mass_cart,
            mass_pole,
            length,
            moment_inertia,
            friction,
            gravity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that the parameters describe a physically sensible cart-pole.
    ///
    /// # Errors
    ///
    /// See [`PhysicalParameters::new`].
    pub fn validate(&self) -> Result<(), ParametersError> {
        let si = self.si();
        for (name, value) in [
            ("mass_cart", si.m_c),
            ("mass_pole", si.m_p),
            ("length", si.l),
            ("moment_inertia", si.i),
            ("gravity", si.g),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParametersError::NotPositive { name, value });
            }
        }
        if !si.b.is_finite() || si.b < 0.0 {
            return Err(ParametersError::Friction(si.b));
        }
        Ok(())
    }

    /// Returns a copy with a different friction coefficient.
    #[must_use]
    pub fn with_friction(self, friction: MassRate) -> Self {
        Self { friction, ..self }
    }

    pub(crate) fn si(&self) -> Si {
        Si {
            m_c: self.mass_cart.get::<kilogram>(),
            m_p: self.mass_pole.get::<kilogram>(),
            l: self.length.get::<meter>(),
            i: self.moment_inertia.get::<kilogram_square_meter>(),
            b: self.friction.get::<kilogram_per_second>(),
            g: self.gravity.get::<meter_per_second_squared>(),
        }
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            mass_cart: Mass::new::<kilogram>(0.5),
            mass_pole: Mass::new::<kilogram>(0.2),
            length: Length::new::<meter>(0.3),
            moment_inertia: MomentOfInertia::new::<kilogram_square_meter>(0.006),
            friction: MassRate::new::<kilogram_per_second>(0.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
        }
    }
}
