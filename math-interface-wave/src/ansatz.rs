//! Wave ansätze for the two half-spaces
//!
//! Each half-space carries a superposition of travelling cosine waves
//!
//! ```text
//! A cos(k x - d ω t)
//! ```
//!
//! where `k` is the wavenumber of the medium (`k1` for `x < 0`, `k2` for
//! `x >= 0`), `d = +1` for a wave travelling towards `+x` and `d = -1` for a
//! wave travelling towards `-x`. The amplitude `A` is either a known
//! constant or one of the two unknowns solved for at the interface.
//!
//! At `x = 0` every term reduces to a common time factor:
//!
//! - value: `A cos(ω t)`
//! - slope: `A d k sin(ω t)`
//!
//! so the continuity conditions become time-independent equations whose
//! coefficients are [`LinearForm`]s in `(k1, k2)`.

use std::ops::{Add, Neg, Sub};

/// Medium a half-space is filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    /// Medium 1, `x < 0`, wavenumber `k1`
    Left,
    /// Medium 2, `x >= 0`, wavenumber `k2`
    Right,
}

impl Medium {
    /// Wavenumber of this medium for the given parameter pair
    #[inline]
    pub fn wavenumber(self, k1: f64, k2: f64) -> f64 {
        match self {
            Medium::Left => k1,
            Medium::Right => k2,
        }
    }

    /// The wavenumber as a linear form over `(k1, k2)`
    pub fn wavenumber_form(self) -> LinearForm {
        match self {
            Medium::Left => LinearForm::K1,
            Medium::Right => LinearForm::K2,
        }
    }
}

/// Amplitudes solved for at the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    /// `B`, amplitude of the transmitted wave
    Transmission,
    /// `C`, amplitude of the reflected wave
    Reflection,
}

impl Unknown {
    /// Both unknowns, in column order of the boundary system
    pub const ALL: [Unknown; 2] = [Unknown::Transmission, Unknown::Reflection];

    /// Column of this unknown in the boundary system
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Unknown::Transmission => 0,
            Unknown::Reflection => 1,
        }
    }

    /// Conventional symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Unknown::Transmission => "B",
            Unknown::Reflection => "C",
        }
    }
}

/// Amplitude of a wave term
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amplitude {
    /// Fixed amplitude (the unit incident wave)
    Known(f64),
    /// Amplitude determined by the continuity conditions
    Unknown(Unknown),
}

/// Propagation direction of a wave term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `cos(k x - ω t)`, travelling towards `+x`
    Forward,
    /// `cos(k x + ω t)`, travelling towards `-x`
    Backward,
}

impl Direction {
    /// `d` in `cos(k x - d ω t)`
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// One travelling cosine wave `A cos(k x - d ω t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveTerm {
    /// Amplitude `A`
    pub amplitude: Amplitude,
    /// Direction `d`
    pub direction: Direction,
}

impl WaveTerm {
    /// Create a term
    pub fn new(amplitude: Amplitude, direction: Direction) -> Self {
        Self {
            amplitude,
            direction,
        }
    }

    /// Unit-amplitude wave travelling towards `+x`
    pub fn incident() -> Self {
        Self::new(Amplitude::Known(1.0), Direction::Forward)
    }

    /// Wave of unknown amplitude `C` travelling towards `-x`
    pub fn reflected() -> Self {
        Self::new(Amplitude::Unknown(Unknown::Reflection), Direction::Backward)
    }

    /// Wave of unknown amplitude `B` travelling towards `+x`
    pub fn transmitted() -> Self {
        Self::new(
            Amplitude::Unknown(Unknown::Transmission),
            Direction::Forward,
        )
    }

    /// Coefficient of `A cos(ω t)` in the value of this term at `x = 0`
    pub fn value_factor(&self) -> LinearForm {
        LinearForm::constant(1.0)
    }

    /// Coefficient of `A sin(ω t)` in the slope of this term at `x = 0`
    pub fn slope_factor(&self, medium: Medium) -> LinearForm {
        medium.wavenumber_form().scale(self.direction.sign())
    }
}

/// Superposition of wave terms filling one half-space
#[derive(Debug, Clone, PartialEq)]
pub struct HalfSpaceAnsatz {
    /// Medium of this half-space
    pub medium: Medium,
    /// Superposed terms
    pub terms: Vec<WaveTerm>,
}

impl HalfSpaceAnsatz {
    /// Create an ansatz from explicit terms
    pub fn new(medium: Medium, terms: Vec<WaveTerm>) -> Self {
        Self { medium, terms }
    }

    /// `cos(k1 x - ω t) + C cos(k1 x + ω t)` for `x < 0`
    pub fn incident_and_reflected() -> Self {
        Self::new(
            Medium::Left,
            vec![WaveTerm::incident(), WaveTerm::reflected()],
        )
    }

    /// `B cos(k2 x - ω t)` for `x >= 0`
    pub fn transmitted() -> Self {
        Self::new(Medium::Right, vec![WaveTerm::transmitted()])
    }

    /// Whether any term carries the given unknown amplitude
    pub fn contains(&self, unknown: Unknown) -> bool {
        self.terms
            .iter()
            .any(|term| term.amplitude == Amplitude::Unknown(unknown))
    }
}

/// Linear form `a1 k1 + a2 k2 + a0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearForm {
    /// Coefficient of `k1`
    pub k1: f64,
    /// Coefficient of `k2`
    pub k2: f64,
    /// Constant term
    pub constant: f64,
}

impl LinearForm {
    /// The form `k1`
    pub const K1: LinearForm = LinearForm {
        k1: 1.0,
        k2: 0.0,
        constant: 0.0,
    };

    /// The form `k2`
    pub const K2: LinearForm = LinearForm {
        k1: 0.0,
        k2: 1.0,
        constant: 0.0,
    };

    /// Constant form
    pub fn constant(value: f64) -> Self {
        Self {
            k1: 0.0,
            k2: 0.0,
            constant: value,
        }
    }

    /// Multiply every coefficient by a scalar
    pub fn scale(self, factor: f64) -> Self {
        Self {
            k1: self.k1 * factor,
            k2: self.k2 * factor,
            constant: self.constant * factor,
        }
    }

    /// Evaluate at a parameter pair
    #[inline]
    pub fn eval(&self, k1: f64, k2: f64) -> f64 {
        self.k1 * k1 + self.k2 * k2 + self.constant
    }

    /// Whether every coefficient vanishes
    pub fn is_zero(&self) -> bool {
        self.k1 == 0.0 && self.k2 == 0.0 && self.constant == 0.0
    }
}

impl Add for LinearForm {
    type Output = LinearForm;

    fn add(self, rhs: LinearForm) -> LinearForm {
        LinearForm {
            k1: self.k1 + rhs.k1,
            k2: self.k2 + rhs.k2,
            constant: self.constant + rhs.constant,
        }
    }
}

impl Sub for LinearForm {
    type Output = LinearForm;

    fn sub(self, rhs: LinearForm) -> LinearForm {
        self + (-rhs)
    }
}

impl Neg for LinearForm {
    type Output = LinearForm;

    fn neg(self) -> LinearForm {
        self.scale(-1.0)
    }
}
