//! Interface wave solver
//!
//! [`WaveSolver`] derives the piecewise displacement field once and then
//! evaluates it for any number of `(x, t, k1, k2, ω)` tuples:
//!
//! ```text
//! y(x, t) = cos(k1 x - ω t) + C cos(k1 x + ω t)    x < 0
//! y(x, t) = B cos(k2 x - ω t)                       x >= 0
//! ```
//!
//! The interface point `x = 0` (and `-0.0`) belongs to the transmitted
//! branch.
//!
//! # Example
//!
//! ```rust
//! use math_audio_interface_wave::WaveSolver;
//!
//! let solver = WaveSolver::new().unwrap();
//!
//! // scalar in, scalar out
//! let y0 = solver.evaluate(0.0, 0.0, 1.0, 2.1, 4.0);
//! assert!((y0 - 2.0 / 3.1).abs() < 1e-12);
//!
//! // slice in, Vec out
//! let ys = solver.evaluate(&[-1.0, 0.0, 1.0][..], 0.5, 1.0, 2.1, 4.0);
//! assert_eq!(ys.len(), 3);
//! ```

use crate::ansatz::{Amplitude, HalfSpaceAnsatz, Medium};
use crate::derivation::{BoundarySystem, CoefficientLaws, InterfaceCoefficients};
use crate::error::Result;
use crate::parallel::parallel_map;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Physical parameters of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Wavenumber in medium 1 (`x < 0`)
    pub k1: f64,
    /// Wavenumber in medium 2 (`x >= 0`)
    pub k2: f64,
    /// Angular frequency ω
    pub omega: f64,
}

impl WaveParams {
    /// Create a parameter set
    pub fn new(k1: f64, k2: f64, omega: f64) -> Self {
        Self { k1, k2, omega }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            k1: 1.0,
            k2: 2.1,
            omega: 4.0,
        }
    }
}

/// Position input accepted by [`WaveSolver::evaluate`]
///
/// The output has the same shape as the input: a scalar for a scalar, a
/// sequence of the same length and order for a sequence.
pub trait FieldInput {
    /// Displacement container matching the input shape
    type Output;

    /// Apply `f` to every position
    fn map_field<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;
}

impl FieldInput for f64 {
    type Output = f64;

    fn map_field<F>(self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(self)
    }
}

impl FieldInput for &[f64] {
    type Output = Vec<f64>;

    fn map_field<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl FieldInput for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_field<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_field(f)
    }
}

impl<const N: usize> FieldInput for [f64; N] {
    type Output = [f64; N];

    fn map_field<F>(self, f: F) -> [f64; N]
    where
        F: Fn(f64) -> f64,
    {
        self.map(f)
    }
}

impl FieldInput for &Array1<f64> {
    type Output = Array1<f64>;

    fn map_field<F>(self, f: F) -> Array1<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.mapv(f)
    }
}

impl FieldInput for ArrayView1<'_, f64> {
    type Output = Array1<f64>;

    fn map_field<F>(self, f: F) -> Array1<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.mapv(f)
    }
}

/// One lowered wave term: amplitude source and direction sign
#[derive(Debug, Clone, Copy, PartialEq)]
struct CompiledTerm {
    amplitude: Amplitude,
    direction: f64,
}

/// Lowered half-space ansatz
#[derive(Debug, Clone, PartialEq)]
struct CompiledBranch {
    medium: Medium,
    terms: Vec<CompiledTerm>,
}

impl CompiledBranch {
    fn compile(ansatz: &HalfSpaceAnsatz) -> Self {
        Self {
            medium: ansatz.medium,
            terms: ansatz
                .terms
                .iter()
                .map(|term| CompiledTerm {
                    amplitude: term.amplitude,
                    direction: term.direction.sign(),
                })
                .collect(),
        }
    }

    #[inline]
    fn eval(&self, x: f64, k: f64, omega_t: f64, coefficients: &InterfaceCoefficients) -> f64 {
        self.terms
            .iter()
            .map(|term| {
                let amplitude = match term.amplitude {
                    Amplitude::Known(a) => a,
                    Amplitude::Unknown(unknown) => coefficients.get(unknown),
                };
                amplitude * (k * x - term.direction * omega_t).cos()
            })
            .sum()
    }
}

/// The field frozen at one `(t, k1, k2, ω)`; evaluates positions only
#[derive(Debug, Clone, Copy)]
struct FieldKernel<'a> {
    solver: &'a WaveSolver,
    k1: f64,
    k2: f64,
    omega_t: f64,
    coefficients: InterfaceCoefficients,
}

impl FieldKernel<'_> {
    #[inline]
    fn left(&self, x: f64) -> f64 {
        let branch = &self.solver.left;
        let k = branch.medium.wavenumber(self.k1, self.k2);
        branch.eval(x, k, self.omega_t, &self.coefficients)
    }

    #[inline]
    fn right(&self, x: f64) -> f64 {
        let branch = &self.solver.right;
        let k = branch.medium.wavenumber(self.k1, self.k2);
        branch.eval(x, k, self.omega_t, &self.coefficients)
    }

    #[inline]
    fn displacement(&self, x: f64) -> f64 {
        if x < 0.0 { self.left(x) } else { self.right(x) }
    }
}

/// Closed-form displacement field of a wave crossing a material interface
///
/// Construct once with [`WaveSolver::new`], then share by reference; the
/// solver holds only immutable derived data and is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct WaveSolver {
    laws: CoefficientLaws,
    left: CompiledBranch,
    right: CompiledBranch,
}

impl WaveSolver {
    /// Derive the standard incident/reflected/transmitted field
    ///
    /// Fails with
    /// [`UnsolvableBoundaryConditions`](crate::InterfaceWaveError::UnsolvableBoundaryConditions)
    /// if the continuity system has no unique solution.
    pub fn new() -> Result<Self> {
        Self::with_ansatz(
            &HalfSpaceAnsatz::incident_and_reflected(),
            &HalfSpaceAnsatz::transmitted(),
        )
    }

    /// Derive the field for a custom pair of half-space ansätze
    pub fn with_ansatz(left: &HalfSpaceAnsatz, right: &HalfSpaceAnsatz) -> Result<Self> {
        let system = BoundarySystem::at_interface(left, right)?;
        let laws = system.solve()?;

        log::debug!(
            "Derived interface amplitudes: B = {}, C = {}",
            laws.transmission,
            laws.reflection
        );

        Ok(Self {
            laws,
            left: CompiledBranch::compile(left),
            right: CompiledBranch::compile(right),
        })
    }

    /// Solved closed forms of `B(k1, k2)` and `C(k1, k2)`
    pub fn laws(&self) -> &CoefficientLaws {
        &self.laws
    }

    /// Numeric `B` and `C` for a wavenumber pair
    pub fn coefficients(&self, k1: f64, k2: f64) -> InterfaceCoefficients {
        self.laws.eval(k1, k2)
    }

    fn kernel(&self, t: f64, k1: f64, k2: f64, omega: f64) -> FieldKernel<'_> {
        FieldKernel {
            solver: self,
            k1,
            k2,
            omega_t: omega * t,
            coefficients: self.laws.eval(k1, k2),
        }
    }

    /// Displacement at `x` (scalar or sequence) and time `t`
    ///
    /// Never fails; non-finite inputs propagate as NaN or infinity.
    pub fn evaluate<X: FieldInput>(
        &self,
        x: X,
        t: f64,
        k1: f64,
        k2: f64,
        omega: f64,
    ) -> X::Output {
        let kernel = self.kernel(t, k1, k2, omega);
        x.map_field(|xi| kernel.displacement(xi))
    }

    /// [`evaluate`](Self::evaluate) with a parameter bundle
    pub fn evaluate_params<X: FieldInput>(&self, x: X, t: f64, params: &WaveParams) -> X::Output {
        self.evaluate(x, t, params.k1, params.k2, params.omega)
    }

    /// Evaluate a large position grid in parallel
    ///
    /// Produces exactly the values of [`evaluate`](Self::evaluate).
    pub fn evaluate_par(&self, x: &[f64], t: f64, k1: f64, k2: f64, omega: f64) -> Vec<f64> {
        let kernel = self.kernel(t, k1, k2, omega);
        parallel_map(x, |&xi| kernel.displacement(xi))
    }

    /// Left-branch formula at `x`, ignoring the branch selection
    pub fn left_branch(&self, x: f64, t: f64, params: &WaveParams) -> f64 {
        self.kernel(t, params.k1, params.k2, params.omega).left(x)
    }

    /// Right-branch formula at `x`, ignoring the branch selection
    pub fn right_branch(&self, x: f64, t: f64, params: &WaveParams) -> f64 {
        self.kernel(t, params.k1, params.k2, params.omega).right(x)
    }
}
