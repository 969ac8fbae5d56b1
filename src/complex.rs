/// Simple complex number struct
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline(always)]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    /// Unit phasor `e^{i·angle}`.
    #[inline(always)]
    pub fn expi(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    #[inline(always)]
    pub const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    #[inline(always)]
    pub const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }

    #[inline(always)]
    pub const fn scale(&self, f: f64) -> Self {
        Self {
            re: self.re * f,
            im: self.im * f,
        }
    }

    /// Multiplies by `i`.
    #[inline(always)]
    pub const fn mul_i(&self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }

    #[inline(always)]
    pub const fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline(always)]
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Principal square root. The branch cut lies on the negative real axis and the
    /// sign of the imaginary part follows the sign of `self.im`.
    pub fn sqrt(&self) -> Self {
        let r = self.abs();
        Self {
            re: ((r + self.re) * 0.5).sqrt(),
            im: ((r - self.re) * 0.5).sqrt().copysign(self.im),
        }
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}
