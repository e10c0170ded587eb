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
//! Complex FFT: mixed-radix passes over `Complex<T>` and the public
//! [`CmplxFft`] handle.

use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};
use crate::factor::{complex_twiddles, Factors};
use crate::radix3::{TAUI, TAUR};
use crate::radix5::{TI11, TI12, TR11, TR12};
use crate::util::try_resize;
use crate::FftDirection;

/// Lane twiddle: the stored tables are positive-exponent roots; the forward
/// transform conjugates them on use.
#[inline]
fn tw<T: Float>(w: Complex<T>, direction: FftDirection) -> Complex<T> {
    match direction {
        FftDirection::Forward => w.conj(),
        FftDirection::Inverse => w,
    }
}

/// Multiplication by `+i`.
#[inline]
fn mul_j<T: Float>(z: Complex<T>) -> Complex<T> {
    Complex::new(-z.im, z.re)
}

#[inline]
fn rotation_sign(direction: FftDirection) -> f64 {
    match direction {
        FftDirection::Forward => -1.0,
        FftDirection::Inverse => 1.0,
    }
}

fn pass2<T: Float>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa1: &[Complex<T>],
    direction: FftDirection,
) {
    let cc_at = |i: usize, j: usize, k: usize| i + ido * (j + 2 * k);
    let ch_at = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    for k in 0..l1 {
        for i in 0..ido {
            let a = cc[cc_at(i, 0, k)];
            let b = cc[cc_at(i, 1, k)];
            ch[ch_at(i, k, 0)] = a + b;
            ch[ch_at(i, k, 1)] = tw(wa1[i], direction) * (a - b);
        }
    }
}

fn pass3<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa1: &[Complex<T>],
    wa2: &[Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let taur: T = TAUR.as_();
    let taui: T = (rotation_sign(direction) * TAUI).as_();
    let cc_at = |i: usize, j: usize, k: usize| i + ido * (j + 3 * k);
    let ch_at = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    for k in 0..l1 {
        for i in 0..ido {
            let c1 = cc[cc_at(i, 0, k)];
            let c2 = cc[cc_at(i, 1, k)];
            let c3 = cc[cc_at(i, 2, k)];
            let t = c2 + c3;
            ch[ch_at(i, k, 0)] = c1 + t;
            let u = c1 + t.scale(taur);
            let jv = mul_j((c2 - c3).scale(taui));
            ch[ch_at(i, k, 1)] = tw(wa1[i], direction) * (u + jv);
            ch[ch_at(i, k, 2)] = tw(wa2[i], direction) * (u - jv);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn pass4<T: Float>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa1: &[Complex<T>],
    wa2: &[Complex<T>],
    wa3: &[Complex<T>],
    direction: FftDirection,
) {
    let cc_at = |i: usize, j: usize, k: usize| i + ido * (j + 4 * k);
    let ch_at = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    for k in 0..l1 {
        for i in 0..ido {
            let c1 = cc[cc_at(i, 0, k)];
            let c2 = cc[cc_at(i, 1, k)];
            let c3 = cc[cc_at(i, 2, k)];
            let c4 = cc[cc_at(i, 3, k)];
            let s = c1 + c3;
            let d = c1 - c3;
            let s2 = c2 + c4;
            let jd2 = mul_j(c2 - c4);
            ch[ch_at(i, k, 0)] = s + s2;
            ch[ch_at(i, k, 2)] = tw(wa2[i], direction) * (s - s2);
            let (e1, e3) = match direction {
                FftDirection::Forward => (d - jd2, d + jd2),
                FftDirection::Inverse => (d + jd2, d - jd2),
            };
            ch[ch_at(i, k, 1)] = tw(wa1[i], direction) * e1;
            ch[ch_at(i, k, 3)] = tw(wa3[i], direction) * e3;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn pass5<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa1: &[Complex<T>],
    wa2: &[Complex<T>],
    wa3: &[Complex<T>],
    wa4: &[Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let sign = rotation_sign(direction);
    let tr11: T = TR11.as_();
    let tr12: T = TR12.as_();
    let ti11: T = (sign * TI11).as_();
    let ti12: T = (sign * TI12).as_();
    let cc_at = |i: usize, j: usize, k: usize| i + ido * (j + 5 * k);
    let ch_at = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    for k in 0..l1 {
        for i in 0..ido {
            let c1 = cc[cc_at(i, 0, k)];
            let c2 = cc[cc_at(i, 1, k)];
            let c3 = cc[cc_at(i, 2, k)];
            let c4 = cc[cc_at(i, 3, k)];
            let c5 = cc[cc_at(i, 4, k)];
            let t2 = c2 + c5;
            let t5 = c2 - c5;
            let t3 = c3 + c4;
            let t4 = c3 - c4;
            ch[ch_at(i, k, 0)] = c1 + t2 + t3;
            let u2 = c1 + t2.scale(tr11) + t3.scale(tr12);
            let u3 = c1 + t2.scale(tr12) + t3.scale(tr11);
            let jv5 = mul_j(t5.scale(ti11) + t4.scale(ti12));
            let jv4 = mul_j(t5.scale(ti12) - t4.scale(ti11));
            ch[ch_at(i, k, 1)] = tw(wa1[i], direction) * (u2 + jv5);
            ch[ch_at(i, k, 2)] = tw(wa2[i], direction) * (u3 + jv4);
            ch[ch_at(i, k, 3)] = tw(wa3[i], direction) * (u3 - jv4);
            ch[ch_at(i, k, 4)] = tw(wa4[i], direction) * (u2 - jv5);
        }
    }
}

/// Direct O(ip²) pass for factors outside {2, 3, 4, 5}. Lane roots are
/// evaluated in `f64` per (lane, input) pair, so no per-pass scratch is
/// needed and rounding does not accumulate over the lane recurrence.
fn passg<T: Float + 'static>(
    ido: usize,
    ip: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let step = rotation_sign(direction) * 2.0 * std::f64::consts::PI / ip as f64;
    let cc_at = |i: usize, j: usize, k: usize| i + ido * (j + ip * k);
    let ch_at = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    for l in 0..ip {
        for k in 0..l1 {
            for i in 0..ido {
                ch[ch_at(i, k, l)] = cc[cc_at(i, 0, k)];
            }
        }
        for j in 1..ip {
            let ang = ((j * l) % ip) as f64 * step;
            let w: Complex<T> = Complex::new(ang.cos().as_(), ang.sin().as_());
            for k in 0..l1 {
                for i in 0..ido {
                    let t = cc[cc_at(i, j, k)] * w;
                    ch[ch_at(i, k, l)] = ch[ch_at(i, k, l)] + t;
                }
            }
        }
    }
    for l in 1..ip {
        for k in 0..l1 {
            for i in 0..ido {
                let w = tw(wa[(l - 1) * ido + i], direction);
                ch[ch_at(i, k, l)] = ch[ch_at(i, k, l)] * w;
            }
        }
    }
}

/// One full mixed-radix sweep over the factor list, ping-ponging between
/// `c` and `ch`. The result ends in `c`. Unscaled in both directions.
pub(crate) fn cfft1<T: Float + 'static>(
    n: usize,
    c: &mut [Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
    fac: &Factors,
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let nf = fac.count();
    let mut na = 0usize;
    let mut l1 = 1usize;
    let mut iw = 0usize;
    for k1 in 0..nf {
        let ip = fac.radix(k1);
        let l2 = ip * l1;
        let ido = n / l2;
        match ip {
            2 => {
                if na == 0 {
                    pass2(ido, l1, c, ch, &wa[iw..], direction);
                } else {
                    pass2(ido, l1, ch, c, &wa[iw..], direction);
                }
            }
            3 => {
                let iw2 = iw + ido;
                if na == 0 {
                    pass3(ido, l1, c, ch, &wa[iw..], &wa[iw2..], direction);
                } else {
                    pass3(ido, l1, ch, c, &wa[iw..], &wa[iw2..], direction);
                }
            }
            4 => {
                let iw2 = iw + ido;
                let iw3 = iw2 + ido;
                if na == 0 {
                    pass4(ido, l1, c, ch, &wa[iw..], &wa[iw2..], &wa[iw3..], direction);
                } else {
                    pass4(ido, l1, ch, c, &wa[iw..], &wa[iw2..], &wa[iw3..], direction);
                }
            }
            5 => {
                let iw2 = iw + ido;
                let iw3 = iw2 + ido;
                let iw4 = iw3 + ido;
                if na == 0 {
                    pass5(
                        ido,
                        l1,
                        c,
                        ch,
                        &wa[iw..],
                        &wa[iw2..],
                        &wa[iw3..],
                        &wa[iw4..],
                        direction,
                    );
                } else {
                    pass5(
                        ido,
                        l1,
                        ch,
                        c,
                        &wa[iw..],
                        &wa[iw2..],
                        &wa[iw3..],
                        &wa[iw4..],
                        direction,
                    );
                }
            }
            _ => {
                if na == 0 {
                    passg(ido, ip, l1, c, ch, &wa[iw..], direction);
                } else {
                    passg(ido, ip, l1, ch, c, &wa[iw..], direction);
                }
            }
        }
        na = 1 - na;
        l1 = l2;
        iw += (ip - 1) * ido;
    }
    if na == 1 {
        c[..n].copy_from_slice(&ch[..n]);
    }
}

/// FFT of complex-valued sequences.
///
/// Unscaled in both directions: a forward/inverse round trip multiplies the
/// signal by `n`.
#[derive(Debug, Clone)]
pub struct CmplxFft<T> {
    n: usize,
    fac: Factors,
    wa: Vec<Complex<T>>,
    work: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float + 'static> CmplxFft<T>
where
    f64: AsPrimitive<T>,
{
    /// Prepares a transform of length `n`. Any positive length is accepted;
    /// lengths that are products of small primes run fastest.
    pub fn new(n: usize) -> Result<CmplxFft<T>, ZpackError> {
        if n == 0 {
            return Err(ZpackError::ZeroSizedTransform);
        }
        let fac = Factors::decompose_complex(n)?;
        let wa = complex_twiddles(n, &fac)?;
        let work = try_vec![Complex::new(T::zero(), T::zero()); n];
        let scratch = try_vec![Complex::new(T::zero(), T::zero()); n];
        Ok(CmplxFft {
            n,
            fac,
            wa,
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
        let fac = Factors::decompose_complex(n)?;
        let wa = complex_twiddles(n, &fac)?;
        try_resize(&mut self.work, n, Complex::new(T::zero(), T::zero()))?;
        try_resize(&mut self.scratch, n, Complex::new(T::zero(), T::zero()))?;
        self.n = n;
        self.fac = fac;
        self.wa = wa;
        Ok(())
    }

    /// Center frequency of bin `i` as a signed fraction of the sampling
    /// rate, negative for the upper half of the spectrum.
    #[inline]
    pub fn freq(&self, i: usize) -> T {
        let n = self.n;
        assert!(i < n, "bin {} out of range for length {}", i, n);
        if i < n.div_ceil(2) {
            (i as f64 / n as f64).as_()
        } else {
            ((i as f64 - n as f64) / n as f64).as_()
        }
    }

    /// Position of bin `i` after rotating the spectrum so the DC bin sits
    /// at the center, `n / 2`.
    #[inline]
    pub fn shift_idx(&self, i: usize) -> usize {
        assert!(i < self.n, "bin {} out of range for length {}", i, self.n);
        (i + self.n / 2) % self.n
    }

    /// Inverse of [`shift_idx`](Self::shift_idx).
    #[inline]
    pub fn unshift_idx(&self, i: usize) -> usize {
        assert!(i < self.n, "bin {} out of range for length {}", i, self.n);
        (i + self.n - self.n / 2) % self.n
    }

    /// Forward transform into a freshly allocated spectrum.
    pub fn forward(&mut self, src: &[Complex<T>]) -> Result<Vec<Complex<T>>, ZpackError> {
        let mut dst = try_vec![Complex::new(T::zero(), T::zero()); self.n];
        self.forward_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Forward transform into a caller-provided buffer of length `n`.
    pub fn forward_into(
        &mut self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), ZpackError> {
        self.run(src, dst, FftDirection::Forward)
    }

    /// Inverse transform into a freshly allocated signal. Unscaled; divide
    /// by `n` to invert [`forward`](Self::forward).
    pub fn inverse(&mut self, src: &[Complex<T>]) -> Result<Vec<Complex<T>>, ZpackError> {
        let mut dst = try_vec![Complex::new(T::zero(), T::zero()); self.n];
        self.inverse_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Inverse transform into a caller-provided buffer of length `n`.
    pub fn inverse_into(
        &mut self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), ZpackError> {
        self.run(src, dst, FftDirection::Inverse)
    }

    fn run(
        &mut self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), ZpackError> {
        if src.len() != self.n {
            return Err(ZpackError::InvalidSequenceLength(src.len(), self.n));
        }
        if dst.len() != self.n {
            return Err(ZpackError::InvalidDestinationLength(dst.len(), self.n));
        }
        self.work.copy_from_slice(src);
        if self.n > 1 {
            cfft1(
                self.n,
                &mut self.work,
                &mut self.scratch,
                &self.wa,
                &self.fac,
                direction,
            );
        }
        dst.copy_from_slice(&self.work);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_signal(n: usize) -> Vec<Complex<f64>> {
        let mut rng = rand::rng();
        (0..n)
            .map(|_| Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect()
    }

    #[test]
    fn round_trip_sweep() {
        let mut sizes: Vec<usize> = (1..=40).collect();
        sizes.extend_from_slice(&[53, 101, 120, 127, 243]);
        for n in sizes {
            let mut fft = CmplxFft::<f64>::new(n).unwrap();
            let src = random_signal(n);
            let spectrum = fft.forward(&src).unwrap();
            let back = fft.inverse(&spectrum).unwrap();
            let scale = 1.0 / n as f64;
            for (j, (a, b)) in src.iter().zip(back.iter()).enumerate() {
                assert!(
                    (a - b.scale(scale)).norm() < 1e-9,
                    "length {} sample {}",
                    n,
                    j
                );
            }
        }
    }

    #[test]
    fn single_tone_lands_in_one_bin() {
        let n = 16usize;
        let src: Vec<Complex<f64>> = (0..n)
            .map(|j| {
                let ang = 2.0 * std::f64::consts::PI * 3.0 * j as f64 / n as f64;
                Complex::new(ang.cos(), ang.sin())
            })
            .collect();
        let mut fft = CmplxFft::<f64>::new(n).unwrap();
        let spectrum = fft.forward(&src).unwrap();
        for (k, s) in spectrum.iter().enumerate() {
            let expected = if k == 3 { n as f64 } else { 0.0 };
            assert!((s.re - expected).abs() < 1e-10, "bin {}", k);
            assert!(s.im.abs() < 1e-10, "bin {}", k);
        }
    }

    #[test]
    fn freq_sign_split() {
        let fft = CmplxFft::<f64>::new(4).unwrap();
        assert_eq!(fft.freq(0), 0.0);
        assert_eq!(fft.freq(1), 0.25);
        assert_eq!(fft.freq(2), -0.5);
        assert_eq!(fft.freq(3), -0.25);

        let fft = CmplxFft::<f64>::new(5).unwrap();
        assert_eq!(fft.freq(0), 0.0);
        assert_eq!(fft.freq(1), 0.2);
        assert_eq!(fft.freq(2), 0.4);
        assert_eq!(fft.freq(3), -0.4);
        assert_eq!(fft.freq(4), -0.2);
    }

    #[test]
    fn shift_is_a_bijection() {
        for n in [4usize, 5, 9, 16] {
            let fft = CmplxFft::<f64>::new(n).unwrap();
            assert_eq!(fft.shift_idx(0), n / 2);
            let mut seen = vec![false; n];
            for i in 0..n {
                let s = fft.shift_idx(i);
                assert!(!seen[s]);
                seen[s] = true;
                assert_eq!(fft.unshift_idx(s), i);
            }
        }
    }

    #[test]
    fn length_contracts() {
        let mut fft = CmplxFft::<f64>::new(8).unwrap();
        let short = vec![Complex::new(0.0, 0.0); 7];
        assert_eq!(
            fft.forward(&short),
            Err(ZpackError::InvalidSequenceLength(7, 8))
        );
        let src = vec![Complex::new(0.0, 0.0); 8];
        let mut dst = vec![Complex::new(0.0, 0.0); 7];
        assert_eq!(
            fft.forward_into(&src, &mut dst),
            Err(ZpackError::InvalidDestinationLength(7, 8))
        );
        assert_eq!(
            CmplxFft::<f64>::new(0).unwrap_err(),
            ZpackError::ZeroSizedTransform
        );
    }

    #[test]
    fn reset_matches_fresh_handle() {
        let mut fft = CmplxFft::<f64>::new(24).unwrap();
        fft.reset(6).unwrap();
        fft.reset(17).unwrap();
        let mut fresh = CmplxFft::<f64>::new(17).unwrap();
        let src = random_signal(17);
        let a = fft.forward(&src).unwrap();
        let b = fresh.forward(&src).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() < 1e-12);
        }
    }

    #[test]
    fn round_trip_f32() {
        for n in [11usize, 32, 60] {
            let mut fft = CmplxFft::<f32>::new(n).unwrap();
            let src: Vec<Complex<f32>> = random_signal(n)
                .iter()
                .map(|c| Complex::new(c.re as f32, c.im as f32))
                .collect();
            let spectrum = fft.forward(&src).unwrap();
            let back = fft.inverse(&spectrum).unwrap();
            let scale = 1.0 / n as f32;
            for (a, b) in src.iter().zip(back.iter()) {
                assert!((a - b.scale(scale)).norm() < 1e-4);
            }
        }
    }
}
