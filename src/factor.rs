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
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

use crate::err::{try_vec, ZpackError};

/// Prime factorization of a transform length, in butterfly application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Factors {
    fac: Vec<usize>,
}

/// Trial factors for the real transform. An extracted 2 that is not the
/// first factor gets moved to the front of storage; the forward driver walks
/// the factor list back-to-front, so the even factor is applied last. The
/// packed-spectrum layout depends on this ordering.
const REAL_TRIALS: [usize; 4] = [4, 2, 3, 5];

/// Trial factors for the complex transform, no reordering.
const COMPLEX_TRIALS: [usize; 4] = [3, 4, 2, 5];

impl Factors {
    pub(crate) fn decompose_real(n: usize) -> Result<Factors, ZpackError> {
        Factors::decompose(n, &REAL_TRIALS, true)
    }

    pub(crate) fn decompose_complex(n: usize) -> Result<Factors, ZpackError> {
        Factors::decompose(n, &COMPLEX_TRIALS, false)
    }

    fn decompose(n: usize, trials: &[usize], move_two_front: bool) -> Result<Factors, ZpackError> {
        assert_ne!(n, 0, "transform length must be positive");
        let bound = usize::BITS as usize - n.leading_zeros() as usize;
        let mut fac: Vec<usize> = Vec::new();
        fac.try_reserve_exact(bound.max(1))
            .map_err(|_| ZpackError::OutOfMemory(bound))?;
        let mut nl = n;
        let mut trial_idx = 0usize;
        while nl != 1 {
            let ntry = if trial_idx < trials.len() {
                trials[trial_idx]
            } else {
                // 7, 9, 11, ... after the explicit table, as the classic
                // factorization does.
                7 + 2 * (trial_idx - trials.len())
            };
            trial_idx += 1;
            while nl % ntry == 0 {
                nl /= ntry;
                fac.push(ntry);
                if move_two_front && ntry == 2 && fac.len() != 1 {
                    let last = fac.len() - 1;
                    fac.copy_within(0..last, 1);
                    fac[0] = 2;
                }
            }
        }
        Ok(Factors { fac })
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.fac.len()
    }

    /// Factor at storage slot `k`, `k < count()`.
    #[inline]
    pub(crate) fn radix(&self, k: usize) -> usize {
        self.fac[k]
    }
}

/// Fills the real-transform twiddle table for length `n`.
///
/// The table holds interleaved `cos`/`sin` pairs grouped per factor, laid
/// out so that a butterfly pass over factor slot `k` reads its lane tables
/// at consecutive `ido`-strided offsets. Angles are evaluated in `f64` and
/// narrowed on store. The last factor contributes no entries.
pub(crate) fn real_twiddles<T: Float + 'static>(
    n: usize,
    factors: &Factors,
) -> Result<Vec<T>, ZpackError>
where
    f64: AsPrimitive<T>,
{
    let mut wa = try_vec![T::zero(); n];
    let nf = factors.count();
    if nf < 2 {
        return Ok(wa);
    }
    let argh = 2.0 * std::f64::consts::PI / n as f64;
    let mut is = 0usize;
    let mut l1 = 1usize;
    for k1 in 0..nf - 1 {
        let ip = factors.radix(k1);
        let l2 = l1 * ip;
        let ido = n / l2;
        let mut ld = 0usize;
        for _j in 1..ip {
            ld += l1;
            let argld = ld as f64 * argh;
            let mut fi = 0usize;
            let mut i = is;
            for _ii in (3..=ido).step_by(2) {
                i += 2;
                fi += 1;
                let arg = fi as f64 * argld;
                wa[i - 2] = arg.cos().as_();
                wa[i - 1] = arg.sin().as_();
            }
            is += ido;
        }
        l1 = l2;
    }
    Ok(wa)
}

/// Fills the complex-transform twiddle table for length `n`.
///
/// Per factor, per output lane `j` in `1..ip`, the table holds `ido` roots
/// `exp(2πi * j * l1 * m / n)` for `m` in `0..ido`; entry `m = 0` is the
/// unit so passes can multiply uniformly. Forward passes conjugate on use.
pub(crate) fn complex_twiddles<T: Float + 'static>(
    n: usize,
    factors: &Factors,
) -> Result<Vec<Complex<T>>, ZpackError>
where
    f64: AsPrimitive<T>,
{
    let nf = factors.count();
    let mut total = 0usize;
    {
        let mut l1 = 1usize;
        for k1 in 0..nf {
            let ip = factors.radix(k1);
            let l2 = l1 * ip;
            total += (ip - 1) * (n / l2);
            l1 = l2;
        }
    }
    let mut wa = Vec::new();
    wa.try_reserve_exact(total)
        .map_err(|_| ZpackError::OutOfMemory(total))?;
    let argh = 2.0 * std::f64::consts::PI / n as f64;
    let mut l1 = 1usize;
    for k1 in 0..nf {
        let ip = factors.radix(k1);
        let l2 = l1 * ip;
        let ido = n / l2;
        for j in 1..ip {
            let argld = (j * l1) as f64 * argh;
            for m in 0..ido {
                let arg = m as f64 * argld;
                wa.push(Complex::new(arg.cos().as_(), arg.sin().as_()));
            }
        }
        l1 = l2;
    }
    Ok(wa)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_factors(n: usize) -> Vec<usize> {
        let f = Factors::decompose_real(n).unwrap();
        (0..f.count()).map(|k| f.radix(k)).collect()
    }

    #[test]
    fn factor_order_regression() {
        // The even factor must sit at the front of storage so the forward
        // driver, walking back-to-front, applies it last.
        assert_eq!(real_factors(12), vec![4, 3]);
        assert_eq!(real_factors(8), vec![2, 4]);
        assert_eq!(real_factors(16), vec![4, 4]);
        assert_eq!(real_factors(2), vec![2]);
        assert_eq!(real_factors(6), vec![2, 3]);
        assert_eq!(real_factors(7), vec![7]);
        assert_eq!(real_factors(90), vec![2, 3, 3, 5]);
        assert_eq!(real_factors(1), Vec::<usize>::new());
    }

    #[test]
    fn complex_factor_order() {
        let f = Factors::decompose_complex(8).unwrap();
        let fac: Vec<usize> = (0..f.count()).map(|k| f.radix(k)).collect();
        assert_eq!(fac, vec![4, 2]);
        let f = Factors::decompose_complex(12).unwrap();
        let fac: Vec<usize> = (0..f.count()).map(|k| f.radix(k)).collect();
        assert_eq!(fac, vec![3, 4]);
    }

    #[test]
    fn large_prime_factors() {
        assert_eq!(real_factors(49), vec![7, 7]);
        assert_eq!(real_factors(11), vec![11]);
        assert_eq!(real_factors(13), vec![13]);
    }

    #[test]
    fn real_twiddle_table_small() {
        // n = 4 factors as [4]; a single factor leaves the table untouched.
        let f = Factors::decompose_real(4).unwrap();
        let wa: Vec<f64> = real_twiddles(4, &f).unwrap();
        assert!(wa.iter().all(|&v| v == 0.0));

        // n = 8 factors as [2, 4]; the first group fills cos/sin of 2π/8.
        let f = Factors::decompose_real(8).unwrap();
        let wa: Vec<f64> = real_twiddles(8, &f).unwrap();
        let arg = 2.0 * std::f64::consts::PI / 8.0;
        assert!((wa[0] - arg.cos()).abs() < 1e-15);
        assert!((wa[1] - arg.sin()).abs() < 1e-15);
    }
}
