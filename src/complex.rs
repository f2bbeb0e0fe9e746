//! Complex amplitude arithmetic.
//!
//! Amplitudes are [`Complex64`] values: `Copy`, immutable, and combined with
//! the `+` and `*` operators, which always return a fresh value.

pub use num_complex::Complex64;

pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
/// The imaginary unit.
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Unit-magnitude complex exponential e^(iθ) = (cos θ, sin θ).
///
/// # Example
/// ```
/// use qce_rs::complex::from_phase;
/// let z = from_phase(std::f64::consts::FRAC_PI_2);
/// assert!(z.re.abs() < 1e-15);
/// assert!((z.im - 1.0).abs() < 1e-15);
/// ```
pub fn from_phase(theta: f64) -> Complex64 {
    Complex64::new(theta.cos(), theta.sin())
}
