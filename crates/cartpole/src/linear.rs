use ndarray::{Array1, Array2, ArrayView2, arr1};

use crate::{PhysicalParameters, State, StateDerivative};

/// State-space model of a cart-pole linearized about the upright equilibrium.
///
/// The model is
///
/// ```text
/// state_dot = A · state − B · u
/// y         = C · state + D · u
/// ```
///
/// where `u` is the force applied to the cart and `y = [x, theta]`. The minus
/// sign on the input term is part of the model's convention and matches the
/// sign of the tabulated LQR gains.
///
/// With `p = I·(m_c + m_p) + m_c·m_p·l²`, the populated entries are
///
/// ```text
/// A[0,1] = 1
/// A[1,1] = −(I + m_p·l²)·b / p
/// A[1,2] = m_p²·g·l² / p
/// A[2,3] = 1
/// A[3,1] = −m_p·l·b / p
/// A[3,2] = m_p·g·l·(m_c + m_p) / p
/// B[1,0] = (I + m_p·l²) / p
/// B[3,0] = m_p·l / p
/// C[0,0] = C[1,2] = 1
/// ```
///
/// and every other entry, including all of `D`, is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    a: Array2<f64>,
    b: Array2<f64>,
    c: Array2<f64>,
    d: Array2<f64>,
}

impl LinearModel {
    /// Builds the linearized model for `params`.
    ///
    /// No validation is performed: if `p` is zero the affected entries are
    /// NaN or infinite.
    #[must_use]
    pub fn new(params: &PhysicalParameters) -> Self {
        let si = params.si();
        let (m_c, m_p, l, i, b, g) = (si.m_c, si.m_p, si.l, si.i, si.b, si.g);

        let l_sq = l.powi(2);
        let p = i * (m_c + m_p) + m_c * m_p * l_sq;

        let mut a = Array2::<f64>::zeros((4, 4));
        a[[0, 1]] = 1.0;
        a[[1, 1]] = -((i + m_p * l_sq) * b) / p;
        a[[1, 2]] = m_p.powi(2) * g * l_sq / p;
        a[[2, 3]] = 1.0;
        a[[3, 1]] = -(m_p * l * b) / p;
        a[[3, 2]] = m_p * g * l * (m_c + m_p) / p;

        let mut b_mat = Array2::<f64>::zeros((4, 1));
        b_mat[[1, 0]] = (i + m_p * l_sq) / p;
        b_mat[[3, 0]] = (m_p * l) / p;

        let mut c = Array2::<f64>::zeros((2, 4));
        c[[0, 0]] = 1.0;
        c[[1, 2]] = 1.0;

        let d = Array2::<f64>::zeros((2, 1));

        Self {
            a,
            b: b_mat,
            c,
            d,
        }
    }

    /// The 4×4 state matrix.
    #[must_use]
    pub fn a(&self) -> ArrayView2<'_, f64> {
        self.a.view()
    }

    /// The 4×1 input matrix.
    #[must_use]
    pub fn b(&self) -> ArrayView2<'_, f64> {
        self.b.view()
    }

    /// The 2×4 output matrix.
    #[must_use]
    pub fn c(&self) -> ArrayView2<'_, f64> {
        self.c.view()
    }

    /// The 2×1 feedthrough matrix.
    #[must_use]
    pub fn d(&self) -> ArrayView2<'_, f64> {
        self.d.view()
    }

    /// Evaluates `A · state − B · control`.
    #[must_use]
    pub fn derivative(&self, state: &State, control: f64) -> StateDerivative {
        let x = arr1(&state.to_array());
        let state_dot: Array1<f64> = self.a.dot(&x) - &self.b.column(0) * control;
        StateDerivative::from_array([state_dot[0], state_dot[1], state_dot[2], state_dot[3]])
    }

    /// Evaluates the measured output `C · state + D · control`, i.e. `[x, theta]`.
    #[must_use]
    pub fn output(&self, state: &State, control: f64) -> [f64; 2] {
        let x = arr1(&state.to_array());
        let y: Array1<f64> = self.c.dot(&x) + &self.d.column(0) * control;
        [y[0], y[1]]
    }
}

impl From<&PhysicalParameters> for LinearModel {
    fn from(params: &PhysicalParameters) -> Self {
        Self::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassRate, MomentOfInertia},
        length::meter,
        mass_rate::kilogram_per_second,
        moment_of_inertia::kilogram_square_meter,
    };

    const TOL: f64 = 1e-9;

    /// Expected entries for the default parameters, written out long-hand.
    fn expected_defaults() -> ([[f64; 4]; 4], [f64; 4]) {
        let (m_c, m_p, l, i, b, g) = (0.5, 0.2, 0.3, 0.006, 0.0, 9.8);
        let p = i * (m_c + m_p) + m_c * m_p * l * l;

        let mut a = [[0.0; 4]; 4];
        a[0][1] = 1.0;
        a[1][1] = -(i + m_p * l * l) * b / p;
        a[1][2] = m_p * m_p * g * l * l / p;
        a[2][3] = 1.0;
        a[3][1] = -(m_p * l * b) / p;
        a[3][2] = m_p * g * l * (m_c + m_p) / p;

        let b_col = [0.0, (i + m_p * l * l) / p, 0.0, (m_p * l) / p];
        (a, b_col)
    }

    #[test]
    fn default_matrices_match_closed_form() {
        let model = LinearModel::new(&PhysicalParameters::default());
        let (a, b) = expected_defaults();

        assert_eq!(model.a().dim(), (4, 4));
        assert_eq!(model.b().dim(), (4, 1));
        assert_eq!(model.c().dim(), (2, 4));
        assert_eq!(model.d().dim(), (2, 1));

        for row in 0..4 {
            for col in 0..4 {
                let expected = a[row][col];
                if expected == 0.0 {
                    assert_eq!(model.a()[[row, col]], 0.0, "A[{row},{col}]");
                } else {
                    assert_relative_eq!(model.a()[[row, col]], expected, epsilon = TOL);
                }
            }
            if b[row] == 0.0 {
                assert_eq!(model.b()[[row, 0]], 0.0, "B[{row},0]");
            } else {
                assert_relative_eq!(model.b()[[row, 0]], b[row], epsilon = TOL);
            }
        }
    }

    #[test]
    fn default_matrices_have_known_values() {
        // p = 0.006 * 0.7 + 0.5 * 0.2 * 0.09 = 0.0132
        let model = LinearModel::new(&PhysicalParameters::default());
        assert_relative_eq!(model.a()[[1, 2]], 0.035_28 / 0.0132, epsilon = TOL);
        assert_relative_eq!(model.a()[[3, 2]], 0.4116 / 0.0132, epsilon = TOL);
        assert_relative_eq!(model.b()[[1, 0]], 0.024 / 0.0132, epsilon = TOL);
        assert_relative_eq!(model.b()[[3, 0]], 0.06 / 0.0132, epsilon = TOL);
    }

    #[test]
    fn output_selects_position_and_angle() {
        let model = LinearModel::new(&PhysicalParameters::default());

        for row in 0..2 {
            for col in 0..4 {
                let expected = if (row, col) == (0, 0) || (row, col) == (1, 2) {
                    1.0
                } else {
                    0.0
                };
                assert_eq!(model.c()[[row, col]], expected);
            }
            assert_eq!(model.d()[[row, 0]], 0.0);
        }

        let y = model.output(&State::new(0.4, -1.0, 0.05, 2.0), 3.0);
        assert_eq!(y, [0.4, 0.05]);
    }

    #[test]
    fn friction_populates_velocity_damping_terms() {
        let params = PhysicalParameters::default()
            .with_friction(MassRate::new::<kilogram_per_second>(0.1));
        let model = LinearModel::new(&params);

        let p = 0.0132;
        assert_relative_eq!(model.a()[[1, 1]], -(0.024 * 0.1) / p, epsilon = TOL);
        assert_relative_eq!(model.a()[[3, 1]], -(0.06 * 0.1) / p, epsilon = TOL);
    }

    #[test]
    fn derivative_subtracts_input_term() {
        let model = LinearModel::new(&PhysicalParameters::default());
        let state = State::new(0.0, 0.0, 0.0, 0.0);

        let derivative = model.derivative(&state, 1.0);

        assert_eq!(derivative.x_dot, 0.0);
        assert_relative_eq!(derivative.x_dot_dot, -model.b()[[1, 0]], epsilon = TOL);
        assert_eq!(derivative.theta_dot, 0.0);
        assert_relative_eq!(derivative.theta_dot_dot, -model.b()[[3, 0]], epsilon = TOL);
    }

    #[test]
    fn degenerate_parameters_propagate_non_finite_values() {
        let params = PhysicalParameters {
            length: Length::new::<meter>(0.0),
            moment_inertia: MomentOfInertia::new::<kilogram_square_meter>(0.0),
            ..PhysicalParameters::default()
        };

        let model = LinearModel::new(&params);

        // p = 0, so every p-scaled entry is 0/0.
        assert!(model.a()[[1, 2]].is_nan());
        assert!(model.b()[[1, 0]].is_nan());
        assert_eq!(model.a()[[0, 1]], 1.0);
    }
}
