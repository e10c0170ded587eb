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
//! Generic-radix real butterfly stages, for any factor outside {2, 3, 4, 5}.
//!
//! The classic routines take five aliased array arguments (`CC`, `C1`, `C2`
//! over one buffer; `CH`, `CH2` over the other); every caller passes the
//! same buffer for each group, so the signatures here collapse to two
//! slices. The different Fortran shapes survive as index closures.
//!
//! Buffer contract of [`radfg`]: the result always lands in `c`. When
//! `ido == 1` the input is staged in `ch` instead of `c`; the driver
//! compensates by flipping ownership before the call. [`radbg`] takes its
//! input in `c` and leaves the result in `c`, except for `ido == 1` where
//! it lands in `ch` and the driver flips ownership after the call.

use num_traits::{AsPrimitive, Float};

use crate::util::{cmul, cmul_conj};

/// One forward decimation stage for an arbitrary odd factor `ip`,
/// direct O(ip²) DFT with accumulated rotation of `exp(2πi/ip)`.
pub(crate) fn radfg<T: Float + 'static>(
    ido: usize,
    ip: usize,
    l1: usize,
    idl1: usize,
    c: &mut [T],
    ch: &mut [T],
    wa: &[T],
) where
    f64: AsPrimitive<T>,
{
    let arg = 2.0 * std::f64::consts::PI / ip as f64;
    let dcp: T = arg.cos().as_();
    let dsp: T = arg.sin().as_();
    let ipph = (ip + 1) / 2;
    let ipp2 = ip + 2;
    let idp2 = ido + 2;
    let nbd = (ido - 1) / 2;

    // 1-based views: cc has shape (ido, ip, l1), c1 (ido, l1, ip),
    // c2 (idl1, ip); the ch shapes mirror c1/c2.
    let cc = |i: usize, j: usize, k: usize| (i - 1) + ido * ((j - 1) + ip * (k - 1));
    let c1 = |i: usize, k: usize, j: usize| (i - 1) + ido * ((k - 1) + l1 * (j - 1));
    let c2 = |ik: usize, j: usize| (ik - 1) + idl1 * (j - 1);

    if ido != 1 {
        for ik in 1..=idl1 {
            ch[c2(ik, 1)] = c[c2(ik, 1)];
        }
        for j in 2..=ip {
            for k in 1..=l1 {
                ch[c1(1, k, j)] = c[c1(1, k, j)];
            }
        }
        if nbd <= l1 {
            let mut is = 0usize;
            for j in 2..=ip {
                let mut idij = is;
                for i in (3..=ido).step_by(2) {
                    idij += 2;
                    for k in 1..=l1 {
                        let (re, im) = cmul_conj(
                            c[c1(i - 1, k, j)],
                            c[c1(i, k, j)],
                            wa[idij - 2],
                            wa[idij - 1],
                        );
                        ch[c1(i - 1, k, j)] = re;
                        ch[c1(i, k, j)] = im;
                    }
                }
                is += ido;
            }
        } else {
            let mut is = 0usize;
            for j in 2..=ip {
                for k in 1..=l1 {
                    let mut idij = is;
                    for i in (3..=ido).step_by(2) {
                        idij += 2;
                        let (re, im) = cmul_conj(
                            c[c1(i - 1, k, j)],
                            c[c1(i, k, j)],
                            wa[idij - 2],
                            wa[idij - 1],
                        );
                        ch[c1(i - 1, k, j)] = re;
                        ch[c1(i, k, j)] = im;
                    }
                }
                is += ido;
            }
        }
        if nbd >= l1 {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                for k in 1..=l1 {
                    for i in (3..=ido).step_by(2) {
                        c[c1(i - 1, k, j)] = ch[c1(i - 1, k, j)] + ch[c1(i - 1, k, jc)];
                        c[c1(i - 1, k, jc)] = ch[c1(i, k, j)] - ch[c1(i, k, jc)];
                        c[c1(i, k, j)] = ch[c1(i, k, j)] + ch[c1(i, k, jc)];
                        c[c1(i, k, jc)] = ch[c1(i - 1, k, jc)] - ch[c1(i - 1, k, j)];
                    }
                }
            }
        } else {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                for i in (3..=ido).step_by(2) {
                    for k in 1..=l1 {
                        c[c1(i - 1, k, j)] = ch[c1(i - 1, k, j)] + ch[c1(i - 1, k, jc)];
                        c[c1(i - 1, k, jc)] = ch[c1(i, k, j)] - ch[c1(i, k, jc)];
                        c[c1(i, k, j)] = ch[c1(i, k, j)] + ch[c1(i, k, jc)];
                        c[c1(i, k, jc)] = ch[c1(i - 1, k, jc)] - ch[c1(i - 1, k, j)];
                    }
                }
            }
        }
    } else {
        // ido == 1: the driver staged the input in `ch`.
        for ik in 1..=idl1 {
            c[c2(ik, 1)] = ch[c2(ik, 1)];
        }
    }

    for j in 2..=ipph {
        let jc = ipp2 - j;
        for k in 1..=l1 {
            c[c1(1, k, j)] = ch[c1(1, k, j)] + ch[c1(1, k, jc)];
            c[c1(1, k, jc)] = ch[c1(1, k, jc)] - ch[c1(1, k, j)];
        }
    }

    let mut ar1 = T::one();
    let mut ai1 = T::zero();
    for l in 2..=ipph {
        let lc = ipp2 - l;
        let ar1h = dcp * ar1 - dsp * ai1;
        ai1 = dcp * ai1 + dsp * ar1;
        ar1 = ar1h;
        for ik in 1..=idl1 {
            ch[c2(ik, l)] = c[c2(ik, 1)] + ar1 * c[c2(ik, 2)];
            ch[c2(ik, lc)] = ai1 * c[c2(ik, ip)];
        }
        let dc2 = ar1;
        let ds2 = ai1;
        let mut ar2 = ar1;
        let mut ai2 = ai1;
        for j in 3..=ipph {
            let jc = ipp2 - j;
            let ar2h = dc2 * ar2 - ds2 * ai2;
            ai2 = dc2 * ai2 + ds2 * ar2;
            ar2 = ar2h;
            for ik in 1..=idl1 {
                ch[c2(ik, l)] = ch[c2(ik, l)] + ar2 * c[c2(ik, j)];
                ch[c2(ik, lc)] = ch[c2(ik, lc)] + ai2 * c[c2(ik, jc)];
            }
        }
    }
    for j in 2..=ipph {
        for ik in 1..=idl1 {
            ch[c2(ik, 1)] = ch[c2(ik, 1)] + c[c2(ik, j)];
        }
    }

    // Repack the half-complex lanes into the forward output layout.
    if ido >= l1 {
        for k in 1..=l1 {
            for i in 1..=ido {
                c[cc(i, 1, k)] = ch[c1(i, k, 1)];
            }
        }
    } else {
        for i in 1..=ido {
            for k in 1..=l1 {
                c[cc(i, 1, k)] = ch[c1(i, k, 1)];
            }
        }
    }
    for j in 2..=ipph {
        let jc = ipp2 - j;
        let j2 = 2 * j;
        for k in 1..=l1 {
            c[cc(ido, j2 - 2, k)] = ch[c1(1, k, j)];
            c[cc(1, j2 - 1, k)] = ch[c1(1, k, jc)];
        }
    }
    if ido == 1 {
        return;
    }
    if nbd >= l1 {
        for j in 2..=ipph {
            let jc = ipp2 - j;
            let j2 = 2 * j;
            for k in 1..=l1 {
                for i in (3..=ido).step_by(2) {
                    let ic = idp2 - i;
                    c[cc(i - 1, j2 - 1, k)] = ch[c1(i - 1, k, j)] + ch[c1(i - 1, k, jc)];
                    c[cc(ic - 1, j2 - 2, k)] = ch[c1(i - 1, k, j)] - ch[c1(i - 1, k, jc)];
                    c[cc(i, j2 - 1, k)] = ch[c1(i, k, j)] + ch[c1(i, k, jc)];
                    c[cc(ic, j2 - 2, k)] = ch[c1(i, k, jc)] - ch[c1(i, k, j)];
                }
            }
        }
    } else {
        for j in 2..=ipph {
            let jc = ipp2 - j;
            let j2 = 2 * j;
            for i in (3..=ido).step_by(2) {
                let ic = idp2 - i;
                for k in 1..=l1 {
                    c[cc(i - 1, j2 - 1, k)] = ch[c1(i - 1, k, j)] + ch[c1(i - 1, k, jc)];
                    c[cc(ic - 1, j2 - 2, k)] = ch[c1(i - 1, k, j)] - ch[c1(i - 1, k, jc)];
                    c[cc(i, j2 - 1, k)] = ch[c1(i, k, j)] + ch[c1(i, k, jc)];
                    c[cc(ic, j2 - 2, k)] = ch[c1(i, k, jc)] - ch[c1(i, k, j)];
                }
            }
        }
    }
}

/// One backward decimation stage for an arbitrary odd factor `ip`,
/// inverse of [`radfg`].
pub(crate) fn radbg<T: Float + 'static>(
    ido: usize,
    ip: usize,
    l1: usize,
    idl1: usize,
    c: &mut [T],
    ch: &mut [T],
    wa: &[T],
) where
    f64: AsPrimitive<T>,
{
    let arg = 2.0 * std::f64::consts::PI / ip as f64;
    let dcp: T = arg.cos().as_();
    let dsp: T = arg.sin().as_();
    let ipph = (ip + 1) / 2;
    let ipp2 = ip + 2;
    let idp2 = ido + 2;
    let nbd = (ido - 1) / 2;

    let cc = |i: usize, j: usize, k: usize| (i - 1) + ido * ((j - 1) + ip * (k - 1));
    let c1 = |i: usize, k: usize, j: usize| (i - 1) + ido * ((k - 1) + l1 * (j - 1));
    let c2 = |ik: usize, j: usize| (ik - 1) + idl1 * (j - 1);

    if ido >= l1 {
        for k in 1..=l1 {
            for i in 1..=ido {
                ch[c1(i, k, 1)] = c[cc(i, 1, k)];
            }
        }
    } else {
        for i in 1..=ido {
            for k in 1..=l1 {
                ch[c1(i, k, 1)] = c[cc(i, 1, k)];
            }
        }
    }
    for j in 2..=ipph {
        let jc = ipp2 - j;
        let j2 = 2 * j;
        for k in 1..=l1 {
            ch[c1(1, k, j)] = c[cc(ido, j2 - 2, k)] + c[cc(ido, j2 - 2, k)];
            ch[c1(1, k, jc)] = c[cc(1, j2 - 1, k)] + c[cc(1, j2 - 1, k)];
        }
    }
    if ido != 1 {
        if nbd >= l1 {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                let j2 = 2 * j;
                for k in 1..=l1 {
                    for i in (3..=ido).step_by(2) {
                        let ic = idp2 - i;
                        ch[c1(i - 1, k, j)] = c[cc(i - 1, j2 - 1, k)] + c[cc(ic - 1, j2 - 2, k)];
                        ch[c1(i - 1, k, jc)] = c[cc(i - 1, j2 - 1, k)] - c[cc(ic - 1, j2 - 2, k)];
                        ch[c1(i, k, j)] = c[cc(i, j2 - 1, k)] - c[cc(ic, j2 - 2, k)];
                        ch[c1(i, k, jc)] = c[cc(i, j2 - 1, k)] + c[cc(ic, j2 - 2, k)];
                    }
                }
            }
        } else {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                let j2 = 2 * j;
                for i in (3..=ido).step_by(2) {
                    let ic = idp2 - i;
                    for k in 1..=l1 {
                        ch[c1(i - 1, k, j)] = c[cc(i - 1, j2 - 1, k)] + c[cc(ic - 1, j2 - 2, k)];
                        ch[c1(i - 1, k, jc)] = c[cc(i - 1, j2 - 1, k)] - c[cc(ic - 1, j2 - 2, k)];
                        ch[c1(i, k, j)] = c[cc(i, j2 - 1, k)] - c[cc(ic, j2 - 2, k)];
                        ch[c1(i, k, jc)] = c[cc(i, j2 - 1, k)] + c[cc(ic, j2 - 2, k)];
                    }
                }
            }
        }
    }

    let mut ar1 = T::one();
    let mut ai1 = T::zero();
    for l in 2..=ipph {
        let lc = ipp2 - l;
        let ar1h = dcp * ar1 - dsp * ai1;
        ai1 = dcp * ai1 + dsp * ar1;
        ar1 = ar1h;
        for ik in 1..=idl1 {
            c[c2(ik, l)] = ch[c2(ik, 1)] + ar1 * ch[c2(ik, 2)];
            c[c2(ik, lc)] = ai1 * ch[c2(ik, ip)];
        }
        let dc2 = ar1;
        let ds2 = ai1;
        let mut ar2 = ar1;
        let mut ai2 = ai1;
        for j in 3..=ipph {
            let jc = ipp2 - j;
            let ar2h = dc2 * ar2 - ds2 * ai2;
            ai2 = dc2 * ai2 + ds2 * ar2;
            ar2 = ar2h;
            for ik in 1..=idl1 {
                c[c2(ik, l)] = c[c2(ik, l)] + ar2 * ch[c2(ik, j)];
                c[c2(ik, lc)] = c[c2(ik, lc)] + ai2 * ch[c2(ik, jc)];
            }
        }
    }
    for j in 2..=ipph {
        for ik in 1..=idl1 {
            ch[c2(ik, 1)] = ch[c2(ik, 1)] + ch[c2(ik, j)];
        }
    }

    for j in 2..=ipph {
        let jc = ipp2 - j;
        for k in 1..=l1 {
            ch[c1(1, k, j)] = c[c1(1, k, j)] - c[c1(1, k, jc)];
            ch[c1(1, k, jc)] = c[c1(1, k, j)] + c[c1(1, k, jc)];
        }
    }
    if ido != 1 {
        if nbd >= l1 {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                for k in 1..=l1 {
                    for i in (3..=ido).step_by(2) {
                        ch[c1(i - 1, k, j)] = c[c1(i - 1, k, j)] - c[c1(i, k, jc)];
                        ch[c1(i - 1, k, jc)] = c[c1(i - 1, k, j)] + c[c1(i, k, jc)];
                        ch[c1(i, k, j)] = c[c1(i, k, j)] + c[c1(i - 1, k, jc)];
                        ch[c1(i, k, jc)] = c[c1(i, k, j)] - c[c1(i - 1, k, jc)];
                    }
                }
            }
        } else {
            for j in 2..=ipph {
                let jc = ipp2 - j;
                for i in (3..=ido).step_by(2) {
                    for k in 1..=l1 {
                        ch[c1(i - 1, k, j)] = c[c1(i - 1, k, j)] - c[c1(i, k, jc)];
                        ch[c1(i - 1, k, jc)] = c[c1(i - 1, k, j)] + c[c1(i, k, jc)];
                        ch[c1(i, k, j)] = c[c1(i, k, j)] + c[c1(i - 1, k, jc)];
                        ch[c1(i, k, jc)] = c[c1(i, k, j)] - c[c1(i - 1, k, jc)];
                    }
                }
            }
        }
    }
    if ido == 1 {
        // Result stays in `ch`; the driver flips buffer ownership.
        return;
    }
    for ik in 1..=idl1 {
        c[c2(ik, 1)] = ch[c2(ik, 1)];
    }
    for j in 2..=ip {
        for k in 1..=l1 {
            c[c1(1, k, j)] = ch[c1(1, k, j)];
        }
    }
    if nbd <= l1 {
        let mut is = 0usize;
        for j in 2..=ip {
            let mut idij = is;
            for i in (3..=ido).step_by(2) {
                idij += 2;
                for k in 1..=l1 {
                    let (re, im) = cmul(
                        ch[c1(i - 1, k, j)],
                        ch[c1(i, k, j)],
                        wa[idij - 2],
                        wa[idij - 1],
                    );
                    c[c1(i - 1, k, j)] = re;
                    c[c1(i, k, j)] = im;
                }
            }
            is += ido;
        }
    } else {
        let mut is = 0usize;
        for j in 2..=ip {
            for k in 1..=l1 {
                let mut idij = is;
                for i in (3..=ido).step_by(2) {
                    idij += 2;
                    let (re, im) = cmul(
                        ch[c1(i - 1, k, j)],
                        ch[c1(i, k, j)],
                        wa[idij - 2],
                        wa[idij - 1],
                    );
                    c[c1(i - 1, k, j)] = re;
                    c[c1(i, k, j)] = im;
                }
            }
            is += ido;
        }
    }
}
