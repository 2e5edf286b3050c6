//! Boundary-value derivation at the material interface
//!
//! Forms the two continuity conditions at `x = 0` from a pair of
//! [`HalfSpaceAnsatz`] values and solves them for the unknown amplitudes.
//!
//! ## Equations
//!
//! With unknowns `(B, C)` every condition reads
//!
//! ```text
//! a_B(k1, k2) B + a_C(k1, k2) C = r(k1, k2)
//! ```
//!
//! where all coefficients are [`LinearForm`]s. Left-side terms enter with a
//! `+` sign, right-side terms with a `-` sign and known amplitudes are moved
//! to the right-hand side. The common factors `cos(ω t)` (value) and
//! `sin(ω t)` (slope) are divided out, so the system is independent of `x`
//! and `t`.
//!
//! ## Solution
//!
//! Cramer's rule over polynomials in `(k1, k2)` yields each amplitude as a
//! [`RationalLaw`]. For the standard ansatz this reproduces
//!
//! ```text
//! B = 2 k1 / (k1 + k2)
//! C = (k1 - k2) / (k1 + k2)
//! ```

use crate::ansatz::{Amplitude, HalfSpaceAnsatz, LinearForm, Unknown};
use crate::error::{InterfaceWaveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Coefficients below this magnitude are treated as exact zeros
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Quadratic polynomial in `(k1, k2)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadratic {
    /// Coefficient of `k1²`
    pub k1k1: f64,
    /// Coefficient of `k1 k2`
    pub k1k2: f64,
    /// Coefficient of `k2²`
    pub k2k2: f64,
    /// Coefficient of `k1`
    pub k1: f64,
    /// Coefficient of `k2`
    pub k2: f64,
    /// Constant term
    pub constant: f64,
}

impl Quadratic {
    /// Product of two linear forms
    pub fn product(a: LinearForm, b: LinearForm) -> Self {
        Self {
            k1k1: a.k1 * b.k1,
            k1k2: a.k1 * b.k2 + a.k2 * b.k1,
            k2k2: a.k2 * b.k2,
            k1: a.k1 * b.constant + a.constant * b.k1,
            k2: a.k2 * b.constant + a.constant * b.k2,
            constant: a.constant * b.constant,
        }
    }

    /// Evaluate at a parameter pair
    #[inline]
    pub fn eval(&self, k1: f64, k2: f64) -> f64 {
        self.k1k1 * k1 * k1
            + self.k1k2 * k1 * k2
            + self.k2k2 * k2 * k2
            + self.k1 * k1
            + self.k2 * k2
            + self.constant
    }

    fn coefficients(&self) -> [f64; 6] {
        [
            self.k1k1,
            self.k1k2,
            self.k2k2,
            self.k1,
            self.k2,
            self.constant,
        ]
    }

    /// Whether the polynomial vanishes for every `(k1, k2)`
    pub fn is_identically_zero(&self) -> bool {
        self.coefficients()
            .iter()
            .all(|c| c.abs() <= DEGENERACY_TOLERANCE)
    }
}

impl Sub for Quadratic {
    type Output = Quadratic;

    fn sub(self, rhs: Quadratic) -> Quadratic {
        Quadratic {
            k1k1: self.k1k1 - rhs.k1k1,
            k1k2: self.k1k2 - rhs.k1k2,
            k2k2: self.k2k2 - rhs.k2k2,
            k1: self.k1 - rhs.k1,
            k2: self.k2 - rhs.k2,
            constant: self.constant - rhs.constant,
        }
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MONOMIALS: [&str; 6] = ["k1^2", "k1*k2", "k2^2", "k1", "k2", ""];

        let mut wrote = false;
        for (c, monomial) in self.coefficients().iter().zip(MONOMIALS) {
            if c.abs() <= DEGENERACY_TOLERANCE {
                continue;
            }
            let sign = if *c < 0.0 { "-" } else { "+" };
            if wrote {
                write!(f, " {} ", sign)?;
            } else if *c < 0.0 {
                write!(f, "-")?;
            }
            let magnitude = c.abs();
            match (monomial.is_empty(), magnitude == 1.0) {
                (true, _) => write!(f, "{}", magnitude)?,
                (false, true) => write!(f, "{}", monomial)?,
                (false, false) => write!(f, "{}*{}", magnitude, monomial)?,
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// Ratio of two quadratics, the solved form of one amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalLaw {
    /// Numerator polynomial
    pub numerator: Quadratic,
    /// Denominator polynomial (the system determinant)
    pub denominator: Quadratic,
}

impl RationalLaw {
    /// Evaluate at a parameter pair
    ///
    /// A vanishing denominator (e.g. `k1 = -k2` for the standard ansatz)
    /// yields a non-finite value rather than an error. Numerator and
    /// denominator are evaluated in plain `f64`, so wavenumbers near
    /// `f64::MAX` overflow them: at `k1 = k2 = 1e308` the transmission law
    /// gives `inf / inf = NaN` instead of `1`.
    #[inline]
    pub fn eval(&self, k1: f64, k2: f64) -> f64 {
        self.numerator.eval(k1, k2) / self.denominator.eval(k1, k2)
    }
}

impl fmt::Display for RationalLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) / ({})", self.numerator, self.denominator)
    }
}

/// One continuity condition `a_B B + a_C C = r`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryEquation {
    /// Coefficients of the unknowns, indexed by [`Unknown::index`]
    pub coefficients: [LinearForm; 2],
    /// Right-hand side
    pub rhs: LinearForm,
}

impl BoundaryEquation {
    fn accumulate(&mut self, amplitude: Amplitude, factor: LinearForm) {
        match amplitude {
            Amplitude::Known(a) => self.rhs = self.rhs - factor.scale(a),
            Amplitude::Unknown(unknown) => {
                let slot = &mut self.coefficients[unknown.index()];
                *slot = *slot + factor;
            }
        }
    }

    /// Residual `a_B B + a_C C - r` at a parameter pair
    pub fn residual(&self, k1: f64, k2: f64, b: f64, c: f64) -> f64 {
        self.coefficients[0].eval(k1, k2) * b + self.coefficients[1].eval(k1, k2) * c
            - self.rhs.eval(k1, k2)
    }
}

/// The 2x2 system formed by value and slope continuity at `x = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySystem {
    /// Displacement continuity
    pub value: BoundaryEquation,
    /// Slope continuity
    pub slope: BoundaryEquation,
}

impl BoundarySystem {
    /// Form the continuity conditions between two half-space ansätze
    ///
    /// Fails when an unknown amplitude appears in neither ansatz.
    pub fn at_interface(left: &HalfSpaceAnsatz, right: &HalfSpaceAnsatz) -> Result<Self> {
        for unknown in Unknown::ALL {
            if !left.contains(unknown) && !right.contains(unknown) {
                return Err(InterfaceWaveError::unsolvable(format!(
                    "amplitude {} appears in neither half-space",
                    unknown.symbol()
                )));
            }
        }

        let mut value = BoundaryEquation::default();
        let mut slope = BoundaryEquation::default();

        for (ansatz, side) in [(left, 1.0), (right, -1.0)] {
            for term in &ansatz.terms {
                value.accumulate(term.amplitude, term.value_factor().scale(side));
                slope.accumulate(
                    term.amplitude,
                    term.slope_factor(ansatz.medium).scale(side),
                );
            }
        }

        Ok(Self { value, slope })
    }

    /// Determinant of the coefficient matrix
    pub fn determinant(&self) -> Quadratic {
        Quadratic::product(self.value.coefficients[0], self.slope.coefficients[1])
            - Quadratic::product(self.value.coefficients[1], self.slope.coefficients[0])
    }

    /// Solve for both amplitudes by Cramer's rule
    pub fn solve(&self) -> Result<CoefficientLaws> {
        let determinant = self.determinant();
        if determinant.is_identically_zero() {
            return Err(InterfaceWaveError::unsolvable(
                "determinant of the continuity system vanishes for all k1, k2",
            ));
        }

        let [a00, a01] = self.value.coefficients;
        let [a10, a11] = self.slope.coefficients;
        let (r0, r1) = (self.value.rhs, self.slope.rhs);

        let transmission = RationalLaw {
            numerator: Quadratic::product(r0, a11) - Quadratic::product(a01, r1),
            denominator: determinant,
        };
        let reflection = RationalLaw {
            numerator: Quadratic::product(a00, r1) - Quadratic::product(r0, a10),
            denominator: determinant,
        };

        Ok(CoefficientLaws {
            transmission,
            reflection,
        })
    }
}

/// Solved closed forms of `B(k1, k2)` and `C(k1, k2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientLaws {
    /// `B`
    pub transmission: RationalLaw,
    /// `C`
    pub reflection: RationalLaw,
}

impl CoefficientLaws {
    /// Law for one unknown
    pub fn law(&self, unknown: Unknown) -> &RationalLaw {
        match unknown {
            Unknown::Transmission => &self.transmission,
            Unknown::Reflection => &self.reflection,
        }
    }

    /// Evaluate both amplitudes at a parameter pair
    #[inline]
    pub fn eval(&self, k1: f64, k2: f64) -> InterfaceCoefficients {
        InterfaceCoefficients {
            transmission: self.transmission.eval(k1, k2),
            reflection: self.reflection.eval(k1, k2),
        }
    }
}

/// Numeric values of the interface amplitudes for one `(k1, k2)` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterfaceCoefficients {
    /// `B`, transmitted amplitude
    pub transmission: f64,
    /// `C`, reflected amplitude
    pub reflection: f64,
}

impl InterfaceCoefficients {
    /// Amplitude bound to the unknown
    #[inline]
    pub fn get(&self, unknown: Unknown) -> f64 {
        match unknown {
            Unknown::Transmission => self.transmission,
            Unknown::Reflection => self.reflection,
        }
    }
}
