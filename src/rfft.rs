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
//! Real-input FFT: the mixed-radix drivers and the public [`RealFft`] handle.

use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};
use crate::factor::{real_twiddles, Factors};
use crate::radix2::{radb2, radf2};
use crate::radix3::{radb3, radf3};
use crate::radix4::{radb4, radf4};
use crate::radix5::{radb5, radf5};
use crate::radixg::{radbg, radfg};
use crate::util::try_resize;

/// Forward pass over the factor list, back-to-front, ping-ponging between
/// `c` and `ch`. The result always ends in `c`.
///
/// `na` tracks which buffer currently holds the signal: it is toggled ahead
/// of each stage so the final stage writes `ch`, then a single copy puts the
/// spectrum back in `c` unless the stage count left it there already. The
/// generic stage breaks the pattern: its output always lands in its first
/// buffer argument, and for `ido == 1` it expects input in the second.
pub(crate) fn rfftf1<T: Float + 'static>(
    n: usize,
    c: &mut [T],
    ch: &mut [T],
    wa: &[T],
    fac: &Factors,
) where
    f64: AsPrimitive<T>,
{
    let nf = fac.count();
    let mut na = 1usize;
    let mut l2 = n;
    let mut iw = n;
    for k1 in 0..nf {
        let kh = nf - k1;
        let ip = fac.radix(kh - 1);
        let l1 = l2 / ip;
        let ido = n / l2;
        let idl1 = ido * l1;
        iw -= (ip - 1) * ido;
        na = 1 - na;
        match ip {
            4 => {
                let ix2 = iw + ido;
                let ix3 = ix2 + ido;
                if na == 0 {
                    radf4(
                        ido,
                        l1,
                        c,
                        ch,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                    );
                } else {
                    radf4(
                        ido,
                        l1,
                        ch,
                        c,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                    );
                }
            }
            2 => {
                if na == 0 {
                    radf2(ido, l1, c, ch, &wa[iw - 1..]);
                } else {
                    radf2(ido, l1, ch, c, &wa[iw - 1..]);
                }
            }
            3 => {
                let ix2 = iw + ido;
                if na == 0 {
                    radf3(ido, l1, c, ch, &wa[iw - 1..], &wa[ix2 - 1..]);
                } else {
                    radf3(ido, l1, ch, c, &wa[iw - 1..], &wa[ix2 - 1..]);
                }
            }
            5 => {
                let ix2 = iw + ido;
                let ix3 = ix2 + ido;
                let ix4 = ix3 + ido;
                if na == 0 {
                    radf5(
                        ido,
                        l1,
                        c,
                        ch,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                        &wa[ix4 - 1..],
                    );
                } else {
                    radf5(
                        ido,
                        l1,
                        ch,
                        c,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                        &wa[ix4 - 1..],
                    );
                }
            }
            _ => {
                if ido == 1 {
                    na = 1 - na;
                }
                if na == 0 {
                    radfg(ido, ip, l1, idl1, c, ch, &wa[iw - 1..]);
                    na = 1;
                } else {
                    radfg(ido, ip, l1, idl1, ch, c, &wa[iw - 1..]);
                    na = 0;
                }
            }
        }
        l2 = l1;
    }
    if na == 1 {
        return;
    }
    c[..n].copy_from_slice(&ch[..n]);
}

/// Backward pass over the factor list in storage order, inverse of
/// [`rfftf1`]. Unscaled: a forward/backward round trip multiplies by `n`.
pub(crate) fn rfftb1<T: Float + 'static>(
    n: usize,
    c: &mut [T],
    ch: &mut [T],
    wa: &[T],
    fac: &Factors,
) where
    f64: AsPrimitive<T>,
{
    let nf = fac.count();
    let mut na = 0usize;
    let mut l1 = 1usize;
    let mut iw = 1usize;
    for k1 in 0..nf {
        let ip = fac.radix(k1);
        let l2 = ip * l1;
        let ido = n / l2;
        let idl1 = ido * l1;
        match ip {
            4 => {
                let ix2 = iw + ido;
                let ix3 = ix2 + ido;
                if na == 0 {
                    radb4(
                        ido,
                        l1,
                        c,
                        ch,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                    );
                } else {
                    radb4(
                        ido,
                        l1,
                        ch,
                        c,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                    );
                }
                na = 1 - na;
            }
            2 => {
                if na == 0 {
                    radb2(ido, l1, c, ch, &wa[iw - 1..]);
                } else {
                    radb2(ido, l1, ch, c, &wa[iw - 1..]);
                }
                na = 1 - na;
            }
            3 => {
                let ix2 = iw + ido;
                if na == 0 {
                    radb3(ido, l1, c, ch, &wa[iw - 1..], &wa[ix2 - 1..]);
                } else {
                    radb3(ido, l1, ch, c, &wa[iw - 1..], &wa[ix2 - 1..]);
                }
                na = 1 - na;
            }
            5 => {
                let ix2 = iw + ido;
                let ix3 = ix2 + ido;
                let ix4 = ix3 + ido;
                if na == 0 {
                    radb5(
                        ido,
                        l1,
                        c,
                        ch,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                        &wa[ix4 - 1..],
                    );
                } else {
                    radb5(
                        ido,
                        l1,
                        ch,
                        c,
                        &wa[iw - 1..],
                        &wa[ix2 - 1..],
                        &wa[ix3 - 1..],
                        &wa[ix4 - 1..],
                    );
                }
                na = 1 - na;
            }
            _ => {
                if na == 0 {
                    radbg(ido, ip, l1, idl1, c, ch, &wa[iw - 1..]);
                } else {
                    radbg(ido, ip, l1, idl1, ch, c, &wa[iw - 1..]);
                }
                // The generic stage keeps its result in its first buffer
                // except for ido == 1, where it lands in the second.
                if ido == 1 {
                    na = 1 - na;
                }
            }
        }
        l1 = l2;
        iw += (ip - 1) * ido;
    }
    if na == 0 {
        return;
    }
    c[..n].copy_from_slice(&ch[..n]);
}

/// Precomputed factorization and twiddle table for one real transform
/// length, shared by the real FFT and the trigonometric transforms built
/// on top of it.
#[derive(Debug, Clone)]
pub(crate) struct RealPlan<T> {
    n: usize,
    fac: Factors,
    wa: Vec<T>,
}

impl<T: Float + 'static> RealPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(n: usize) -> Result<RealPlan<T>, ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let fac = Factors::decompose_real(n)?;
        let wa = real_twiddles(n, &fac)?;
        Ok(RealPlan { n, fac, wa })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// In-place forward transform of `c[..n]` into the packed half-complex
    /// layout, using `ch[..n]` as scratch.
    pub(crate) fn forward(&self, c: &mut [T], ch: &mut [T]) {
        if self.n == 1 {
            return;
        }
        rfftf1(self.n, c, ch, &self.wa, &self.fac);
    }

    /// In-place backward transform of the packed layout in `c[..n]`, using
    /// `ch[..n]` as scratch.
    pub(crate) fn backward(&self, c: &mut [T], ch: &mut [T]) {
        if self.n == 1 {
            return;
        }
        rfftb1(self.n, c, ch, &self.wa, &self.fac);
    }
}

/// FFT of real-valued sequences.
///
/// The forward transform of `n` reals yields `n / 2 + 1` complex bins, the
/// non-negative half of the conjugate-symmetric spectrum. No normalization
/// is applied in either direction: a forward/inverse round trip multiplies
/// the signal by `n`.
///
/// ```
/// use zpack::RealFft;
///
/// let mut fft = RealFft::<f64>::new(4).unwrap();
/// let spectrum = fft.forward(&[1.0, 1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(spectrum[0].re, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct RealFft<T> {
    plan: RealPlan<T>,
    work: Vec<T>,
    scratch: Vec<T>,
}

impl<T: Float + 'static> RealFft<T>
where
    f64: AsPrimitive<T>,
{
    /// Prepares a transform of length `n`. Any positive length is accepted;
    /// lengths that are products of small primes run fastest.
    pub fn new(n: usize) -> Result<RealFft<T>, ZpackError> {
        let plan = RealPlan::new(n)?;
        let work = try_vec![T::zero(); n];
        let scratch = try_vec![T::zero(); n];
        Ok(RealFft {
            plan,
            work,
            scratch,
        })
    }

    /// Transform length in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.plan.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of spectrum bins produced by [`forward`](Self::forward),
    /// `n / 2 + 1`.
    #[inline]
    pub fn bins(&self) -> usize {
        self.plan.len() / 2 + 1
    }

    /// Re-plans the handle for a new length, reusing buffer capacity where
    /// the new length fits. After this call the handle behaves exactly like
    /// a freshly created one.
    pub fn reset(&mut self, n: usize) -> Result<(), ZpackError> {
        let plan = RealPlan::new(n)?;
        try_resize(&mut self.work, n, T::zero())?;
        try_resize(&mut self.scratch, n, T::zero())?;
        self.plan = plan;
        Ok(())
    }

    /// Center frequency of bin `i` as a fraction of the sampling rate.
    #[inline]
    pub fn freq(&self, i: usize) -> T {
        let n = self.plan.len();
        assert!(i < n, "bin {} out of range for length {}", i, n);
        (i as f64 / n as f64).as_()
    }

    /// Forward transform into a freshly allocated spectrum.
    pub fn forward(&mut self, src: &[T]) -> Result<Vec<Complex<T>>, ZpackError> {
        let mut dst = try_vec![Complex::new(T::zero(), T::zero()); self.bins()];
        self.forward_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Forward transform into a caller-provided spectrum of length
    /// `n / 2 + 1`.
    pub fn forward_into(&mut self, src: &[T], dst: &mut [Complex<T>]) -> Result<(), ZpackError> {
        let n = self.plan.len();
        let m = self.bins();
        if src.len() != n {
            return Err(ZpackError::InvalidSequenceLength(src.len(), n));
        }
        if dst.len() != m {
            return Err(ZpackError::InvalidDestinationLength(dst.len(), m));
        }
        self.work.copy_from_slice(src);
        self.plan.forward(&mut self.work, &mut self.scratch);
        let w = &self.work;
        dst[0] = Complex::new(w[0], T::zero());
        if n == 1 {
            return Ok(());
        }
        for (k, d) in dst.iter_mut().enumerate().take(m - 1).skip(1) {
            *d = Complex::new(w[2 * k - 1], w[2 * k]);
        }
        dst[m - 1] = if n % 2 == 1 {
            Complex::new(w[n - 2], w[n - 1])
        } else {
            Complex::new(w[n - 1], T::zero())
        };
        Ok(())
    }

    /// Inverse transform into a freshly allocated signal. Unscaled; divide
    /// by `n` to invert [`forward`](Self::forward).
    pub fn inverse(&mut self, src: &[Complex<T>]) -> Result<Vec<T>, ZpackError> {
        let mut dst = try_vec![T::zero(); self.plan.len()];
        self.inverse_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Inverse transform of `n / 2 + 1` bins into a caller-provided signal
    /// of length `n`. Imaginary parts of the DC bin (and, for even `n`, the
    /// Nyquist bin) are ignored.
    pub fn inverse_into(&mut self, src: &[Complex<T>], dst: &mut [T]) -> Result<(), ZpackError> {
        let n = self.plan.len();
        let m = self.bins();
        if src.len() != m {
            return Err(ZpackError::InvalidCoefficientsLength(src.len(), m));
        }
        if dst.len() != n {
            return Err(ZpackError::InvalidDestinationLength(dst.len(), n));
        }
        let w = &mut self.work;
        w[0] = src[0].re;
        if n > 1 {
            for (k, s) in src.iter().enumerate().take(m - 1).skip(1) {
                w[2 * k - 1] = s.re;
                w[2 * k] = s.im;
            }
            if n % 2 == 1 {
                w[n - 2] = src[m - 1].re;
                w[n - 1] = src[m - 1].im;
            } else {
                w[n - 1] = src[m - 1].re;
            }
        }
        self.plan.backward(&mut self.work, &mut self.scratch);
        dst.copy_from_slice(&self.work);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_signal(n: usize) -> Vec<f64> {
        let mut rng = rand::rng();
        (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
    }

    #[test]
    fn round_trip_sweep() {
        let mut sizes: Vec<usize> = (1..=64).collect();
        sizes.extend_from_slice(&[49, 100, 121, 127, 343]);
        for n in sizes {
            let mut fft = RealFft::<f64>::new(n).unwrap();
            let src = random_signal(n);
            let spectrum = fft.forward(&src).unwrap();
            let back = fft.inverse(&spectrum).unwrap();
            let scale = 1.0 / n as f64;
            for (j, (&a, &b)) in src.iter().zip(back.iter()).enumerate() {
                assert!(
                    (a - b * scale).abs() < 1e-9,
                    "length {} sample {}: {} vs {}",
                    n,
                    j,
                    a,
                    b * scale
                );
            }
        }
    }

    #[test]
    fn round_trip_f32() {
        for n in [7usize, 16, 30, 125] {
            let mut fft = RealFft::<f32>::new(n).unwrap();
            let src: Vec<f32> = random_signal(n).iter().map(|&v| v as f32).collect();
            let spectrum = fft.forward(&src).unwrap();
            let back = fft.inverse(&spectrum).unwrap();
            let scale = 1.0 / n as f32;
            for (&a, &b) in src.iter().zip(back.iter()) {
                assert!((a - b * scale).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn pulse_train_spectra() {
        let mut fft = RealFft::<f64>::new(8).unwrap();

        let spectrum = fft
            .forward(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0])
            .unwrap();
        let expected = [4.0, 0.0, 0.0, 0.0, 4.0];
        for (s, &e) in spectrum.iter().zip(expected.iter()) {
            assert!((s.re - e).abs() < 1e-12, "{} vs {}", s.re, e);
            assert!(s.im.abs() < 1e-12);
        }

        let spectrum = fft
            .forward(&[1.0, 0.0, 2.0, 0.0, 4.0, 0.0, 2.0, 0.0])
            .unwrap();
        let expected = [9.0, -3.0, 1.0, -3.0, 9.0];
        for (s, &e) in spectrum.iter().zip(expected.iter()) {
            assert!((s.re - e).abs() < 1e-12, "{} vs {}", s.re, e);
            assert!(s.im.abs() < 1e-12);
        }
    }

    #[test]
    fn single_bin_spectrum() {
        // cos(2π·2j/12) concentrates in bin 2 with weight n/2 on each side.
        let n = 12usize;
        let src: Vec<f64> = (0..n)
            .map(|j| (2.0 * std::f64::consts::PI * 2.0 * j as f64 / n as f64).cos())
            .collect();
        let mut fft = RealFft::<f64>::new(n).unwrap();
        let spectrum = fft.forward(&src).unwrap();
        for (k, s) in spectrum.iter().enumerate() {
            let expected = if k == 2 { n as f64 / 2.0 } else { 0.0 };
            assert!((s.re - expected).abs() < 1e-10, "bin {}", k);
            assert!(s.im.abs() < 1e-10, "bin {}", k);
        }
    }

    #[test]
    fn freq_values() {
        let fft = RealFft::<f64>::new(4).unwrap();
        assert_eq!(fft.freq(0), 0.0);
        assert_eq!(fft.freq(1), 0.25);
        assert_eq!(fft.freq(2), 0.5);
    }

    #[test]
    fn length_contracts() {
        let mut fft = RealFft::<f64>::new(8).unwrap();
        assert_eq!(
            fft.forward(&[0.0; 7]),
            Err(ZpackError::InvalidSequenceLength(7, 8))
        );
        let mut dst = vec![Complex::new(0.0, 0.0); 4];
        assert_eq!(
            fft.forward_into(&[0.0; 8], &mut dst),
            Err(ZpackError::InvalidDestinationLength(4, 5))
        );
        assert_eq!(
            fft.inverse(&dst),
            Err(ZpackError::InvalidCoefficientsLength(4, 5))
        );
        assert_eq!(RealFft::<f64>::new(0).unwrap_err(), ZpackError::ZeroSizedTransform);
    }

    #[test]
    fn reset_matches_fresh_handle() {
        let mut fft = RealFft::<f64>::new(32).unwrap();
        fft.reset(8).unwrap();
        fft.reset(31).unwrap();
        let mut fresh = RealFft::<f64>::new(31).unwrap();
        let src = random_signal(31);
        let a = fft.forward(&src).unwrap();
        let b = fresh.forward(&src).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x.re - y.re).abs() < 1e-12);
            assert!((x.im - y.im).abs() < 1e-12);
        }
    }

    #[test]
    fn length_one_is_identity() {
        let mut fft = RealFft::<f64>::new(1).unwrap();
        let spectrum = fft.forward(&[3.5]).unwrap();
        assert_eq!(spectrum.len(), 1);
        assert_eq!(spectrum[0], Complex::new(3.5, 0.0));
        let back = fft.inverse(&spectrum).unwrap();
        assert_eq!(back, vec![3.5]);
    }
}
