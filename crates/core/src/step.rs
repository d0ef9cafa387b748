/// A state that can be advanced by one explicit step of its derivative.
///
/// Implementations compute `state + derivative * delta` using only the
/// pre-step derivative, which is what makes a stepper built on this trait an
/// explicit (forward) Euler scheme.
///
/// `Delta` is the independent-variable increment, usually a
/// [`TimeIncrement`](crate::TimeIncrement) or a plain `f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the [`StepIntegrable::Derivative`] of `T`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
