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
//! Sine transform of real odd sequences (DST-I).

use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};
use crate::rfft::RealPlan;
use crate::util::try_resize;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// DST-I of real sequences, its own inverse up to a factor of `2 (n + 1)`.
///
/// The transform extends the sequence to an odd sequence of length
/// `2 (n + 1)` and runs a real FFT of length `n + 1`, so lengths where
/// `n + 1` is a product of small primes run fastest. Applying the transform
/// twice multiplies the input by `2 (n + 1)`.
#[derive(Debug, Clone)]
pub struct Dst<T> {
    n: usize,
    // w[k-1] = 2 sin(kπ / (n + 1)), k in 1..=n/2.
    w: Vec<T>,
    plan: RealPlan<T>,
    aux: Vec<T>,
    work: Vec<T>,
    scratch: Vec<T>,
}

fn fold_weights<T: Float + 'static>(n: usize) -> Result<Vec<T>, ZpackError>
where
    f64: AsPrimitive<T>,
{
    let ns2 = n / 2;
    let mut w = try_vec![T::zero(); ns2];
    let dt = std::f64::consts::PI / (n + 1) as f64;
    for (k, slot) in w.iter_mut().enumerate() {
        *slot = (2.0 * ((k + 1) as f64 * dt).sin()).as_();
    }
    Ok(w)
}

impl<T: Float + 'static> Dst<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<Dst<T>, ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let plan = RealPlan::new(n + 1)?;
        let w = fold_weights(n)?;
        let aux = try_vec![T::zero(); n + 1];
        let work = try_vec![T::zero(); n];
        let scratch = try_vec![T::zero(); n + 1];
        Ok(Dst {
            n,
            w,
            plan,
            aux,
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
        let plan = RealPlan::new(n + 1)?;
        let w = fold_weights(n)?;
        try_resize(&mut self.aux, n + 1, T::zero())?;
        try_resize(&mut self.work, n, T::zero())?;
        try_resize(&mut self.scratch, n + 1, T::zero())?;
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
    /// `2 (n + 1)` recovers the original sequence.
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
            1 => x[0] = x[0] + x[0],
            2 => {
                let sqrt3: T = SQRT3.as_();
                let xh = sqrt3 * (x[0] + x[1]);
                x[1] = sqrt3 * (x[0] - x[1]);
                x[0] = xh;
            }
            _ => {
                let np1 = n + 1;
                let ns2 = n / 2;
                let aux = &mut self.aux;
                aux[0] = T::zero();
                for k in 1..=ns2 {
                    let kc = np1 - k;
                    let t1 = x[k - 1] - x[kc - 1];
                    let t2 = self.w[k - 1] * (x[k - 1] + x[kc - 1]);
                    aux[k] = t1 + t2;
                    aux[kc] = t2 - t1;
                }
                if n % 2 == 1 {
                    let four: T = 4.0f64.as_();
                    aux[ns2 + 1] = four * x[ns2];
                }
                self.plan.forward(aux, &mut self.scratch);
                let half: T = 0.5f64.as_();
                x[0] = half * aux[0];
                for i in (3..=n).step_by(2) {
                    x[i - 2] = -aux[i - 1];
                    x[i - 1] = x[i - 3] + aux[i - 2];
                }
                if n % 2 == 0 {
                    x[n - 1] = -aux[n];
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
    fn known_value_n3() {
        let mut dst = Dst::<f64>::new(3).unwrap();
        let out = dst.forward(&[1.0, 0.0, 0.0]).unwrap();
        let s = std::f64::consts::SQRT_2;
        let expected = [s, 2.0, s];
        for (a, &e) in out.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{} vs {}", a, e);
        }
    }

    #[test]
    fn round_trip_sweep() {
        let mut rng = rand::rng();
        for n in [1usize, 2, 3, 7, 8, 9, 15, 24, 63] {
            let mut dst = Dst::<f64>::new(n).unwrap();
            let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
            let once = dst.forward(&src).unwrap();
            let twice = dst.inverse(&once).unwrap();
            let scale = 1.0 / (2.0 * (n as f64 + 1.0));
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
    fn matches_direct_sine_sum() {
        // X_k = 2 Σ_j x_j sin(π (j+1)(k+1) / (n+1))
        let n = 8usize;
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let mut dst = Dst::<f64>::new(n).unwrap();
        let out = dst.forward(&src).unwrap();
        for k in 0..n {
            let mut acc = 0.0;
            for (j, &v) in src.iter().enumerate() {
                let ang = std::f64::consts::PI * ((j + 1) * (k + 1)) as f64 / (n + 1) as f64;
                acc += 2.0 * v * ang.sin();
            }
            assert!((out[k] - acc).abs() < 1e-10, "bin {}", k);
        }
    }

    #[test]
    fn length_contracts() {
        let mut dst = Dst::<f64>::new(5).unwrap();
        assert_eq!(
            dst.forward(&[0.0; 4]),
            Err(ZpackError::InvalidSequenceLength(4, 5))
        );
        assert_eq!(Dst::<f64>::new(0).unwrap_err(), ZpackError::ZeroSizedTransform);
    }

    #[test]
    fn reset_matches_fresh_handle() {
        let mut rng = rand::rng();
        let mut dst = Dst::<f64>::new(20).unwrap();
        dst.reset(11).unwrap();
        let mut fresh = Dst::<f64>::new(11).unwrap();
        let src: Vec<f64> = (0..11).map(|_| rng.random_range(-1.0..1.0)).collect();
        let a = dst.forward(&src).unwrap();
        let b = fresh.forward(&src).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
