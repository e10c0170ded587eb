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
use num_traits::{AsPrimitive, Float};

use crate::util::{cmul, cmul_conj};

// cos/sin of 2π/5 and 4π/5.
pub(crate) const TR11: f64 = 0.309_016_994_374_947_4;
pub(crate) const TI11: f64 = 0.951_056_516_295_153_5;
pub(crate) const TR12: f64 = -0.809_016_994_374_947_5;
pub(crate) const TI12: f64 = 0.587_785_252_292_473_1;

/// One forward radix-5 decimation stage on the packed real layout.
///
/// Index arithmetic is written through 1-based stride closures mirroring
/// the Fortran array shapes `CC(IDO,L1,5)` and `CH(IDO,5,L1)`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn radf5<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[T],
    ch: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
    wa4: &[T],
) where
    f64: AsPrimitive<T>,
{
    let tr11: T = TR11.as_();
    let ti11: T = TI11.as_();
    let tr12: T = TR12.as_();
    let ti12: T = TI12.as_();

    let cc_ref =
        |a1: usize, a2: usize, a3: usize| -> usize { ((a3 - 1) * l1 + (a2 - 1)) * ido + (a1 - 1) };
    let ch_ref =
        |a1: usize, a2: usize, a3: usize| -> usize { ((a3 - 1) * 5 + (a2 - 1)) * ido + (a1 - 1) };

    for k in 1..=l1 {
        let cr2 = cc[cc_ref(1, k, 5)] + cc[cc_ref(1, k, 2)];
        let ci5 = cc[cc_ref(1, k, 5)] - cc[cc_ref(1, k, 2)];
        let cr3 = cc[cc_ref(1, k, 4)] + cc[cc_ref(1, k, 3)];
        let ci4 = cc[cc_ref(1, k, 4)] - cc[cc_ref(1, k, 3)];
        ch[ch_ref(1, 1, k)] = cc[cc_ref(1, k, 1)] + cr2 + cr3;
        ch[ch_ref(ido, 2, k)] = cc[cc_ref(1, k, 1)] + tr11 * cr2 + tr12 * cr3;
        ch[ch_ref(1, 3, k)] = ti11 * ci5 + ti12 * ci4;
        ch[ch_ref(ido, 4, k)] = cc[cc_ref(1, k, 1)] + tr12 * cr2 + tr11 * cr3;
        ch[ch_ref(1, 5, k)] = ti12 * ci5 - ti11 * ci4;
    }
    if ido == 1 {
        return;
    }
    let idp2 = ido + 2;
    for k in 1..=l1 {
        for i in (3..=ido).step_by(2) {
            let ic = idp2 - i;
            let (dr2, di2) = cmul_conj(
                cc[cc_ref(i - 1, k, 2)],
                cc[cc_ref(i, k, 2)],
                wa1[i - 3],
                wa1[i - 2],
            );
            let (dr3, di3) = cmul_conj(
                cc[cc_ref(i - 1, k, 3)],
                cc[cc_ref(i, k, 3)],
                wa2[i - 3],
                wa2[i - 2],
            );
            let (dr4, di4) = cmul_conj(
                cc[cc_ref(i - 1, k, 4)],
                cc[cc_ref(i, k, 4)],
                wa3[i - 3],
                wa3[i - 2],
            );
            let (dr5, di5) = cmul_conj(
                cc[cc_ref(i - 1, k, 5)],
                cc[cc_ref(i, k, 5)],
                wa4[i - 3],
                wa4[i - 2],
            );
            let cr2 = dr2 + dr5;
            let ci5 = dr5 - dr2;
            let cr5 = di2 - di5;
            let ci2 = di2 + di5;
            let cr3 = dr3 + dr4;
            let ci4 = dr4 - dr3;
            let cr4 = di3 - di4;
            let ci3 = di3 + di4;
            ch[ch_ref(i - 1, 1, k)] = cc[cc_ref(i - 1, k, 1)] + cr2 + cr3;
            ch[ch_ref(i, 1, k)] = cc[cc_ref(i, k, 1)] + ci2 + ci3;
            let tr2 = cc[cc_ref(i - 1, k, 1)] + tr11 * cr2 + tr12 * cr3;
            let ti2 = cc[cc_ref(i, k, 1)] + tr11 * ci2 + tr12 * ci3;
            let tr3 = cc[cc_ref(i - 1, k, 1)] + tr12 * cr2 + tr11 * cr3;
            let ti3 = cc[cc_ref(i, k, 1)] + tr12 * ci2 + tr11 * ci3;
            let tr5 = ti11 * cr5 + ti12 * cr4;
            let ti5 = ti11 * ci5 + ti12 * ci4;
            let tr4 = ti12 * cr5 - ti11 * cr4;
            let ti4 = ti12 * ci5 - ti11 * ci4;
            ch[ch_ref(i - 1, 3, k)] = tr2 + tr5;
            ch[ch_ref(ic - 1, 2, k)] = tr2 - tr5;
            ch[ch_ref(i, 3, k)] = ti2 + ti5;
            ch[ch_ref(ic, 2, k)] = ti5 - ti2;
            ch[ch_ref(i - 1, 5, k)] = tr3 + tr4;
            ch[ch_ref(ic - 1, 4, k)] = tr3 - tr4;
            ch[ch_ref(i, 5, k)] = ti3 + ti4;
            ch[ch_ref(ic, 4, k)] = ti4 - ti3;
        }
    }
}

/// One backward radix-5 stage, inverse of [`radf5`].
#[allow(clippy::too_many_arguments)]
pub(crate) fn radb5<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[T],
    ch: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
    wa4: &[T],
) where
    f64: AsPrimitive<T>,
{
    let tr11: T = TR11.as_();
    let ti11: T = TI11.as_();
    let tr12: T = TR12.as_();
    let ti12: T = TI12.as_();

    let cc_ref =
        |a1: usize, a2: usize, a3: usize| -> usize { ((a3 - 1) * 5 + (a2 - 1)) * ido + (a1 - 1) };
    let ch_ref =
        |a1: usize, a2: usize, a3: usize| -> usize { ((a3 - 1) * l1 + (a2 - 1)) * ido + (a1 - 1) };

    for k in 1..=l1 {
        let ti5 = cc[cc_ref(1, 3, k)] + cc[cc_ref(1, 3, k)];
        let ti4 = cc[cc_ref(1, 5, k)] + cc[cc_ref(1, 5, k)];
        let tr2 = cc[cc_ref(ido, 2, k)] + cc[cc_ref(ido, 2, k)];
        let tr3 = cc[cc_ref(ido, 4, k)] + cc[cc_ref(ido, 4, k)];
        ch[ch_ref(1, k, 1)] = cc[cc_ref(1, 1, k)] + tr2 + tr3;
        let cr2 = cc[cc_ref(1, 1, k)] + tr11 * tr2 + tr12 * tr3;
        let cr3 = cc[cc_ref(1, 1, k)] + tr12 * tr2 + tr11 * tr3;
        let ci5 = ti11 * ti5 + ti12 * ti4;
        let ci4 = ti12 * ti5 - ti11 * ti4;
        ch[ch_ref(1, k, 2)] = cr2 - ci5;
        ch[ch_ref(1, k, 3)] = cr3 - ci4;
        ch[ch_ref(1, k, 4)] = cr3 + ci4;
        ch[ch_ref(1, k, 5)] = cr2 + ci5;
    }
    if ido == 1 {
        return;
    }
    let idp2 = ido + 2;
    for k in 1..=l1 {
        for i in (3..=ido).step_by(2) {
            let ic = idp2 - i;
            let ti5 = cc[cc_ref(i, 3, k)] + cc[cc_ref(ic, 2, k)];
            let ti2 = cc[cc_ref(i, 3, k)] - cc[cc_ref(ic, 2, k)];
            let ti4 = cc[cc_ref(i, 5, k)] + cc[cc_ref(ic, 4, k)];
            let ti3 = cc[cc_ref(i, 5, k)] - cc[cc_ref(ic, 4, k)];
            let tr5 = cc[cc_ref(i - 1, 3, k)] - cc[cc_ref(ic - 1, 2, k)];
            let tr2 = cc[cc_ref(i - 1, 3, k)] + cc[cc_ref(ic - 1, 2, k)];
            let tr4 = cc[cc_ref(i - 1, 5, k)] - cc[cc_ref(ic - 1, 4, k)];
            let tr3 = cc[cc_ref(i - 1, 5, k)] + cc[cc_ref(ic - 1, 4, k)];
            ch[ch_ref(i - 1, k, 1)] = cc[cc_ref(i - 1, 1, k)] + tr2 + tr3;
            ch[ch_ref(i, k, 1)] = cc[cc_ref(i, 1, k)] + ti2 + ti3;
            let cr2 = cc[cc_ref(i - 1, 1, k)] + tr11 * tr2 + tr12 * tr3;
            let ci2 = cc[cc_ref(i, 1, k)] + tr11 * ti2 + tr12 * ti3;
            let cr3 = cc[cc_ref(i - 1, 1, k)] + tr12 * tr2 + tr11 * tr3;
            let ci3 = cc[cc_ref(i, 1, k)] + tr12 * ti2 + tr11 * ti3;
            let cr5 = ti11 * tr5 + ti12 * tr4;
            let ci5 = ti11 * ti5 + ti12 * ti4;
            let cr4 = ti12 * tr5 - ti11 * tr4;
            let ci4 = ti12 * ti5 - ti11 * ti4;
            let (dr3, di3) = cmul(cr3 - ci4, ci3 + cr4, wa2[i - 3], wa2[i - 2]);
            let (dr4, di4) = cmul(cr3 + ci4, ci3 - cr4, wa3[i - 3], wa3[i - 2]);
            let (dr5, di5) = cmul(cr2 + ci5, ci2 - cr5, wa4[i - 3], wa4[i - 2]);
            let (dr2, di2) = cmul(cr2 - ci5, ci2 + cr5, wa1[i - 3], wa1[i - 2]);
            ch[ch_ref(i - 1, k, 2)] = dr2;
            ch[ch_ref(i, k, 2)] = di2;
            ch[ch_ref(i - 1, k, 3)] = dr3;
            ch[ch_ref(i, k, 3)] = di3;
            ch[ch_ref(i - 1, k, 4)] = dr4;
            ch[ch_ref(i, k, 4)] = di4;
            ch[ch_ref(i - 1, k, 5)] = dr5;
            ch[ch_ref(i, k, 5)] = di5;
        }
    }
}
