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
//! Cosine transform of real even sequences (DCT-I).

use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};
use crate::rfft::RealPlan;
use crate::util::try_resize;

/// DCT-I of real sequences, its own inverse up to a factor of `2 (n - 1)`.
///
/// The transform folds the sequence about its endpoints and runs a real FFT
/// of length `n - 1`, so lengths where `n - 1` is a product of small primes
/// run fastest. Applying the transform twice multiplies the input by
/// `2 (n - 1)`.
#[derive(Debug, Clone)]
pub struct Dct<T> {
    n: usize,
    // 1-based fold weights, slots 2..=n-1; empty role for n < 4.
    w: Vec<T>,
    plan: RealPlan<T>,
    work: Vec<T>,
    scratch: Vec<T>,
}

fn fold_weights<T: Float + 'static>(n: usize) -> Result<Vec<T>, ZpackError>
where
    f64: AsPrimitive<T>,
{
    let mut w = try_vec![T::zero(); n + 1];
    if n > 3 {
        let ns2 = n / 2;
        let np1 = n + 1;
        let dt = std::f64::consts::PI / (n - 1) as f64;
        for k in 2..=ns2 {
            let kc = np1 - k;
            let ang = (k - 1) as f64 * dt;
            w[k] = (2.0 * ang.sin()).as_();
            w[kc] = (2.0 * ang.cos()).as_();
        }
    }
    Ok(w)
}

impl<T: Float + 'static> Dct<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<Dct<T>, ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let plan = RealPlan::new((n - 1).max(1))?;
        let w = fold_weights(n)?;
        let work = try_vec![T::zero(); n];
        let scratch = try_vec![T::zero(); n];
        Ok(Dct {
            n,
            w,
            plan,
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
        let plan = RealPlan::new((n - 1).max(1))?;
        let w = fold_weights(n)?;
        try_resize(&mut self.work, n, T::zero())?;
        try_resize(&mut self.scratch, n, T::zero())?;
        self.n = n;
        self.w = w;
        self.plan = plan;
        Ok(())
    }

    pub fn forward(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.n];
        self.forward_into(src, &mut dst)?;
        Ok(dst)
    }

    pub fn forward_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        if src.len() != self.n {
            return Err(ZpackError::InvalidSequenceLength(src.len(), self.n));
        }
        if dst.len() != self.n {
            return Err(ZpackError::InvalidDestinationLength(dst.len(), self.n));
        }
        self.work.copy_from_slice(src);
        self.kernel();
        dst.copy_from_slice(&self.work);
        Ok(())
    }

    /// Same kernel as [`forward`](Self::forward); dividing the result by
    /// `2 (n - 1)` recovers the original sequence.
    pub fn inverse(&mut self, src: &[T]) -> Result<Vec<T>, ZpackError> {
        self.forward(src)
    }

    pub fn inverse_into(&mut self, src: &[T], dst: &mut [T]) -> Result<(), ZpackError> {
        self.forward_into(src, dst)
    }

    fn kernel(&mut self) {
        let n = self.n;
        let x = &mut self.work;
        match n {
            1 => {}
            2 => {
                let xh = x[0] + x[1];
                x[1] = x[0] - x[1];
                x[0] = xh;
            }
            3 => {
                let x1p3 = x[0] + x[2];
                let tx2 = x[1] + x[1];
                x[1] = x[0] - x[2];
                x[0] = x1p3 + tx2;
                x[2] = x1p3 - tx2;
            }
            _ => {
                let ns2 = n / 2;
                let np1 = n + 1;
                let mut c1 = x[0] - x[n - 1];
                x[0] = x[0] + x[n - 1];
                for k in 2..=ns2 {
                    let kc = np1 - k;
                    let t1 = x[k - 1] + x[kc - 1];
                    let t2 = x[k - 1] - x[kc - 1];
                    c1 = c1 + self.w[kc] * t2;
                    let t2 = self.w[k] * t2;
                    x[k - 1] = t1 - t2;
                    x[kc - 1] = t1 + t2;
                }
                if n % 2 == 1 {
                    x[ns2] = x[ns2] + x[ns2];
                }
                self.plan.forward(&mut x[..n - 1], &mut self.scratch[..n - 1]);
                // Unscramble the packed spectrum into DCT order; the fold
                // correction c1 carries the odd endpoint difference.
                let mut xim2 = x[1];
                x[1] = c1;
                for i in (4..=n).step_by(2) {
                    let xi = x[i - 1];
                    x[i - 1] = x[i - 3] - x[i - 2];
                    x[i - 2] = xim2;
                    xim2 = xi;
                }
                if n % 2 == 1 {
                    x[n - 1] = xim2;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn known_value_n4() {
        let mut dct = Dct::<f64>::new(4).unwrap();
        let out = dct.forward(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let expected = [15.0, -4.0, 0.0, -1.0];
        for (a, &e) in out.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{} vs {}", a, e);
        }
    }

    #[test]
    fn double_transform_scales_by_2n_minus_2() {
        let mut dct = Dct::<f64>::new(4).unwrap();
        let src = [1.0, 2.0, 3.0, 4.0];
        let once = dct.forward(&src).unwrap();
        let twice = dct.forward(&once).unwrap();
        let expected = [6.0, 12.0, 18.0, 24.0];
        for (a, &e) in twice.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{} vs {}", a, e);
        }
    }

    #[test]
    fn round_trip_sweep() {
        let mut rng = rand::rng();
        for n in [2usize, 3, 4, 5, 8, 9, 16, 17, 33, 65] {
            let mut dct = Dct::<f64>::new(n).unwrap();
            let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
            let once = dct.forward(&src).unwrap();
            let twice = dct.inverse(&once).unwrap();
            let scale = 1.0 / (2.0 * (n as f64 - 1.0));
            for (j, (&a, &b)) in src.iter().zip(twice.iter()).enumerate() {
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
    fn small_length_closed_forms() {
        let mut dct = Dct::<f64>::new(2).unwrap();
        assert_eq!(dct.forward(&[3.0, 1.0]).unwrap(), vec![4.0, 2.0]);

        let mut dct = Dct::<f64>::new(3).unwrap();
        // [x1+x3+2*x2, x1-x3, x1+x3-2*x2]
        assert_eq!(dct.forward(&[1.0, 2.0, 3.0]).unwrap(), vec![8.0, -2.0, 0.0]);
    }

    #[test]
    fn length_contracts() {
        let mut dct = Dct::<f64>::new(4).unwrap();
        assert_eq!(
            dct.forward(&[0.0; 3]),
            Err(ZpackError::InvalidSequenceLength(3, 4))
        );
        assert_eq!(Dct::<f64>::new(0).unwrap_err(), ZpackError::ZeroSizedTransform);
    }

    #[test]
    fn reset_matches_fresh_handle() {
        let mut rng = rand::rng();
        let mut dct = Dct::<f64>::new(16).unwrap();
        dct.reset(9).unwrap();
        let mut fresh = Dct::<f64>::new(9).unwrap();
        let src: Vec<f64> = (0..9).map(|_| rng.random_range(-1.0..1.0)).collect();
        let a = dct.forward(&src).unwrap();
        let b = fresh.forward(&src).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
