/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Quarter-wave cosine and sine transforms (DCT-II/III and DST-II/III
//! pairs): sequences with a quarter-cycle symmetry, even or odd about the
//! half-sample past the last point.

use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};
use crate::rfft::RealPlan;
use crate::util::try_resize;

const SQRT2: f64 = std::f64::consts::SQRT_2;
const TSQRT2: f64 = 2.828_427_124_746_190_3;

/// Quarter-wave transforms of real sequences.
///
/// `cos_forward`/`cos_inverse` expand a sequence in cosines with odd
/// half-integer frequencies; `sin_forward`/`sin_inverse` do the same with
/// sines. Each pair is unscaled: an inverse after a forward multiplies the
/// signal by `4 n`.
#[derive(Debug, Clone)]
pub struct QuarterWaveFft<T> {
    n: usize,
    // 1-based, w[k] = cos(kπ / 2n) for k in 1..=n.
    w: Vec<T>,
    plan: RealPlan<T>,
    xh: Vec<T>,
    work: Vec<T>,
    scratch: Vec<T>,
}

fn quarter_weights<T: Float + 'static>(n: usize) -> Result<Vec<T>, ZpackError>
where
    f64: AsPrimitive<T>,
{
    let mut w = try_vec![T::zero(); n + 1];
    let dt = std::f64::consts::PI / (2 * n) as f64;
    for (k, slot) in w.iter_mut().enumerate().skip(1) {
        *slot = (k as f64 * dt).cos().as_();
    }
    Ok(w)
}

impl<T: Float + 'static> QuarterWaveFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<QuarterWaveFft<T>, ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let plan = RealPlan::new(n)?;
        let w = quarter_weights(n)?;
        let xh = try_vec![T::zero(); n + 1];
        let work = try_vec![T::zero(); n];
        let scratch = try_vec![T::zero(); n];
        Ok(QuarterWaveFft {
            n,
            w,
            plan,
            xh,
            work,
            scratch,
        })
    }

    /// Transform length in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Re-plans the handle for a new length, reusing buffer capacity where
    /// the new length fits.
    pub fn reset(&mut self, n: usize) -> Result<(), ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let plan = RealPlan::new(n)?;
        let w = quarter_weights(n)?;
        try_resize(&mut self.xh, n + 1, T::zero())?;
        try_resize(&mut self.work, n, T::zero())?;
        try_resize(&mut self.scratch, n, T::zero())?;
        self.n = n;
        self.w = w;
        self.plan = plan;
        Ok(())
    }

    pub fn cos_forward(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.n];
        self.cos_forward_into(src, &mut dst)?;
        Ok(dst)
    }

    pub fn cos_forward_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        self.check(src, dst)?;
        self.work.copy_from_slice(src);
        self.cosqf();
        dst.copy_from_slice(&self.work);
        Ok(())
    }

    /// Inverse of [`cos_forward`](Self::cos_forward) up to a factor of
    /// `4 n`.
    pub fn cos_inverse(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.n];
        self.cos_inverse_into(src, &mut dst)?;
        Ok(dst)
    }

    pub fn cos_inverse_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        self.check(src, dst)?;
        self.work.copy_from_slice(src);
        self.cosqb();
        dst.copy_from_slice(&self.work);
        Ok(())
    }

    pub fn sin_forward(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.n];
        self.sin_forward_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Sine counterpart of [`cos_forward`](Self::cos_forward): reverses the
    /// sequence, runs the cosine kernel, then alternates signs.
    pub fn sin_forward_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        self.check(src, dst)?;
        self.work.copy_from_slice(src);
        let n = self.n;
        if n > 1 {
            self.work[..n].reverse();
            self.cosqf();
            for k in (1..n).step_by(2) {
                self.work[k] = -self.work[k];
            }
        }
        dst.copy_from_slice(&self.work);
        Ok(())
    }

    /// Inverse of [`sin_forward`](Self::sin_forward) up to a factor of
    /// `4 n`.
    pub fn sin_inverse(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.n];
        self.sin_inverse_into(src, &mut dst)?;
        Ok(dst)
    }

    pub fn sin_inverse_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        self.check(src, dst)?;
        self.work.copy_from_slice(src);
        let n = self.n;
        if n == 1 {
            let four: T = 4.0f64.as_();
            self.work[0] = four * self.work[0];
        } else {
            for k in (1..n).step_by(2) {
                self.work[k] = -self.work[k];
            }
            self.cosqb();
            self.work[..n].reverse();
        }
        dst.copy_from_slice(&self.work);
        Ok(())
    }

    fn check(&self, src: &[T], dst: &[T]) -> Result<(), ZpackError> {
        if src.len() != self.n {
            return Err(ZpackError::InvalidSequenceLength(src.len(), self.n));
        }
        if dst.len() != self.n {
            return Err(ZpackError::InvalidDestinationLength(dst.len(), self.n));
        }
        Ok(())
    }

    fn cosqf(&mut self) {
        let n = self.n;
        match n {
            1 => {}
            2 => {
                let sqrt2: T = SQRT2.as_();
                let x = &mut self.work;
                let tsqx = sqrt2 * x[1];
                x[1] = x[0] - tsqx;
                x[0] = x[0] + tsqx;
            }
            _ => {
                let ns2 = (n + 1) / 2;
                let np2 = n + 2;
                let x = &mut self.work;
                let xh = &mut self.xh;
                for k in 2..=ns2 {
                    let kc = np2 - k;
                    xh[k] = x[k - 1] + x[kc - 1];
                    xh[kc] = x[k - 1] - x[kc - 1];
                }
                if n % 2 == 0 {
                    xh[ns2 + 1] = x[ns2] + x[ns2];
                }
                for k in 2..=ns2 {
                    let kc = np2 - k;
                    x[k - 1] = self.w[k - 1] * xh[kc] + self.w[kc - 1] * xh[k];
                    x[kc - 1] = self.w[k - 1] * xh[k] - self.w[kc - 1] * xh[kc];
                }
                if n % 2 == 0 {
                    x[ns2] = self.w[ns2] * xh[ns2 + 1];
                }
                self.plan.forward(x, &mut self.scratch);
                for i in (3..=n).step_by(2) {
                    let xim1 = x[i - 2] - x[i - 1];
                    x[i - 1] = x[i - 2] + x[i - 1];
                    x[i - 2] = xim1;
                }
            }
        }
    }

    fn cosqb(&mut self) {
        let n = self.n;
        let four: T = 4.0f64.as_();
        match n {
            1 => self.work[0] = four * self.work[0],
            2 => {
                let tsqrt2: T = TSQRT2.as_();
                let x = &mut self.work;
                let x1 = four * (x[0] + x[1]);
                x[1] = tsqrt2 * (x[0] - x[1]);
                x[0] = x1;
            }
            _ => {
                let ns2 = (n + 1) / 2;
                let np2 = n + 2;
                let x = &mut self.work;
                for i in (3..=n).step_by(2) {
                    let xim1 = x[i - 2] + x[i - 1];
                    x[i - 1] = x[i - 1] - x[i - 2];
                    x[i - 2] = xim1;
                }
                x[0] = x[0] + x[0];
                if n % 2 == 0 {
                    x[n - 1] = x[n - 1] + x[n - 1];
                }
                self.plan.backward(x, &mut self.scratch);
                let xh = &mut self.xh;
                for k in 2..=ns2 {
                    let kc = np2 - k;
                    xh[k] = self.w[k - 1] * x[kc - 1] + self.w[kc - 1] * x[k - 1];
                    xh[kc] = self.w[k - 1] * x[k - 1] - self.w[kc - 1] * x[kc - 1];
                }
                if n % 2 == 0 {
                    x[ns2] = self.w[ns2] * (x[ns2] + x[ns2]);
                }
                for k in 2..=ns2 {
                    let kc = np2 - k;
                    x[k - 1] = xh[k] + xh[kc];
                    x[kc - 1] = xh[k] - xh[kc];
                }
                x[0] = x[0] + x[0];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn cos_round_trip_sweep() {
        let mut rng = rand::rng();
        for n in [1usize, 2, 3, 4, 7, 8, 9, 16, 25, 48] {
            let mut qw = QuarterWaveFft::<f64>::new(n).unwrap();
            let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
            let spec = qw.cos_forward(&src).unwrap();
            let back = qw.cos_inverse(&spec).unwrap();
            let scale = 1.0 / (4.0 * n as f64);
            for (j, (&a, &b)) in src.iter().zip(back.iter()).enumerate() {
                assert!(
                    (a - b * scale).abs() < 1e-10,
                    "length {} sample {}",
                    n,
                    j
                );
            }
        }
    }

    #[test]
    fn sin_round_trip_sweep() {
        let mut rng = rand::rng();
        for n in [1usize, 2, 3, 4, 7, 8, 9, 16, 25, 48] {
            let mut qw = QuarterWaveFft::<f64>::new(n).unwrap();
            let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
            let spec = qw.sin_forward(&src).unwrap();
            let back = qw.sin_inverse(&spec).unwrap();
            let scale = 1.0 / (4.0 * n as f64);
            for (j, (&a, &b)) in src.iter().zip(back.iter()).enumerate() {
                assert!(
                    (a - b * scale).abs() < 1e-10,
                    "length {} sample {}",
                    n,
                    j
                );
            }
        }
    }

    #[test]
    fn cos_known_values_n2() {
        let mut qw = QuarterWaveFft::<f64>::new(2).unwrap();
        let spec = qw.cos_forward(&[1.0, 0.0]).unwrap();
        assert!((spec[0] - 1.0).abs() < 1e-15);
        assert!((spec[1] - 1.0).abs() < 1e-15);
        let back = qw.cos_inverse(&spec).unwrap();
        assert!((back[0] - 8.0).abs() < 1e-15);
        assert!(back[1].abs() < 1e-15);
    }

    #[test]
    fn cos_matches_direct_sum() {
        // X_i = x_0 + 2 Σ_{k≥1} x_k cos((2i + 1) k π / 2n)
        let n = 7usize;
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let mut qw = QuarterWaveFft::<f64>::new(n).unwrap();
        let spec = qw.cos_forward(&src).unwrap();
        for i in 0..n {
            let mut acc = src[0];
            for (k, &v) in src.iter().enumerate().skip(1) {
                let ang = std::f64::consts::PI * ((2 * i + 1) * k) as f64 / (2 * n) as f64;
                acc += 2.0 * v * ang.cos();
            }
            assert!((spec[i] - acc).abs() < 1e-10, "bin {}", i);
        }
    }

    #[test]
    fn sin_matches_direct_sum() {
        // X_i = (-1)^i x_{n-1} + 2 Σ_{k<n-1} x_k sin((2i + 1)(k + 1) π / 2n)
        let n = 6usize;
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let mut qw = QuarterWaveFft::<f64>::new(n).unwrap();
        let spec = qw.sin_forward(&src).unwrap();
        for i in 0..n {
            let mut acc = if i % 2 == 0 { src[n - 1] } else { -src[n - 1] };
            for (k, &v) in src.iter().enumerate().take(n - 1) {
                let ang = std::f64::consts::PI * ((2 * i + 1) * (k + 1)) as f64 / (2 * n) as f64;
                acc += 2.0 * v * ang.sin();
            }
            assert!((spec[i] - acc).abs() < 1e-10, "bin {}", i);
        }
    }

    #[test]
    fn length_contracts() {
        let mut qw = QuarterWaveFft::<f64>::new(4).unwrap();
        assert_eq!(
            qw.cos_forward(&[0.0; 3]),
            Err(ZpackError::InvalidSequenceLength(3, 4))
        );
        assert_eq!(
            qw.sin_forward(&[0.0; 5]),
            Err(ZpackError::InvalidSequenceLength(5, 4))
        );
        assert_eq!(
            QuarterWaveFft::<f64>::new(0).unwrap_err(),
            ZpackError::ZeroSizedTransform
        );
    }

    #[test]
    fn reset_matches_fresh_handle() {
        let mut rng = rand::rng();
        let mut qw = QuarterWaveFft::<f64>::new(12).unwrap();
        qw.reset(5).unwrap();
        let mut fresh = QuarterWaveFft::<f64>::new(5).unwrap();
        let src: Vec<f64> = (0..5).map(|_| rng.random_range(-1.0..1.0)).collect();
        let a = qw.cos_forward(&src).unwrap();
        let b = fresh.cos_forward(&src).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
