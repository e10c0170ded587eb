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

// sqrt(2)/2, for the Nyquist column of the forward pass.
const HSQT2: f64 = 0.707_106_781_186_547_5;
const SQRT2: f64 = 1.414_213_562_373_095_1;

/// One forward radix-4 decimation stage on the packed real layout.
pub(crate) fn radf4<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[T],
    ch: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
) where
    f64: AsPrimitive<T>,
{
    let minus_hsqt2: T = (-HSQT2).as_();
    let l1ido = l1 * ido;
    {
        let mut cc_off = 0;
        let mut ch_off = 0;
        for _k in (0..l1ido).step_by(ido) {
            let a0 = cc[cc_off];
            let a1 = cc[cc_off + l1ido];
            let a2 = cc[cc_off + 2 * l1ido];
            let a3 = cc[cc_off + 3 * l1ido];
            let tr1 = a1 + a3;
            let tr2 = a0 + a2;
            ch[ch_off + 2 * ido - 1] = a0 - a2;
            ch[ch_off + 2 * ido] = a3 - a1;
            ch[ch_off] = tr1 + tr2;
            ch[ch_off + 4 * ido - 1] = tr2 - tr1;
            cc_off += ido;
            ch_off += 4 * ido;
        }
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in (0..l1ido).step_by(ido) {
            for i in (2..ido).step_by(2) {
                let ic = ido - i;
                let (cr2, ci2) = cmul_conj(
                    cc[i - 1 + k + l1ido],
                    cc[i + k + l1ido],
                    wa1[i - 2],
                    wa1[i - 1],
                );
                let (cr3, ci3) = cmul_conj(
                    cc[i - 1 + k + 2 * l1ido],
                    cc[i + k + 2 * l1ido],
                    wa2[i - 2],
                    wa2[i - 1],
                );
                let (cr4, ci4) = cmul_conj(
                    cc[i - 1 + k + 3 * l1ido],
                    cc[i + k + 3 * l1ido],
                    wa3[i - 2],
                    wa3[i - 1],
                );
                let tr1 = cr2 + cr4;
                let tr4 = cr4 - cr2;
                let tr2 = cc[i - 1 + k] + cr3;
                let tr3 = cc[i - 1 + k] - cr3;
                ch[i - 1 + 4 * k] = tr1 + tr2;
                ch[ic - 1 + 4 * k + 3 * ido] = tr2 - tr1;
                let ti1 = ci2 + ci4;
                let ti4 = ci2 - ci4;
                ch[i - 1 + 4 * k + 2 * ido] = ti4 + tr3;
                ch[ic - 1 + 4 * k + ido] = tr3 - ti4;
                let ti2 = cc[i + k] + ci3;
                let ti3 = cc[i + k] - ci3;
                ch[i + 4 * k] = ti1 + ti2;
                ch[ic + 4 * k + 3 * ido] = ti1 - ti2;
                ch[i + 4 * k + 2 * ido] = tr4 + ti3;
                ch[ic + 4 * k + ido] = tr4 - ti3;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in (0..l1ido).step_by(ido) {
        let a = cc[ido - 1 + k + l1ido];
        let b = cc[ido - 1 + k + 3 * l1ido];
        let c = cc[ido - 1 + k];
        let d = cc[ido - 1 + k + 2 * l1ido];
        let ti1 = minus_hsqt2 * (a + b);
        let tr1 = minus_hsqt2 * (b - a);
        ch[ido - 1 + 4 * k] = tr1 + c;
        ch[ido - 1 + 4 * k + 2 * ido] = c - tr1;
        ch[4 * k + ido] = ti1 - d;
        ch[4 * k + 3 * ido] = ti1 + d;
    }
}

/// One backward radix-4 stage, inverse of [`radf4`].
pub(crate) fn radb4<T: Float + 'static>(
    ido: usize,
    l1: usize,
    cc: &[T],
    ch: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
) where
    f64: AsPrimitive<T>,
{
    let minus_sqrt2: T = (-SQRT2).as_();
    let two: T = 2.0f64.as_();
    let l1ido = l1 * ido;
    {
        let mut cc_off = 0;
        let mut ch_off = 0;
        for _k in (0..l1ido).step_by(ido) {
            let a = cc[cc_off];
            let b = cc[cc_off + 4 * ido - 1];
            let c = cc[cc_off + 2 * ido];
            let d = cc[cc_off + 2 * ido - 1];
            let tr3 = two * d;
            let tr2 = a + b;
            let tr1 = a - b;
            let tr4 = two * c;
            ch[ch_off] = tr2 + tr3;
            ch[ch_off + 2 * l1ido] = tr2 - tr3;
            ch[ch_off + l1ido] = tr1 - tr4;
            ch[ch_off + 3 * l1ido] = tr1 + tr4;
            cc_off += 4 * ido;
            ch_off += ido;
        }
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in (0..l1ido).step_by(ido) {
            let pc = 4 * k;
            for i in (2..ido).step_by(2) {
                let tr1 = cc[pc + i - 1] - cc[pc + 4 * ido - i - 1];
                let tr2 = cc[pc + i - 1] + cc[pc + 4 * ido - i - 1];
                let ti4 = cc[pc + 2 * ido + i - 1] - cc[pc + 2 * ido - i - 1];
                let tr3 = cc[pc + 2 * ido + i - 1] + cc[pc + 2 * ido - i - 1];
                ch[i - 1 + k] = tr2 + tr3;
                let cr3 = tr2 - tr3;

                let ti3 = cc[pc + 2 * ido + i] - cc[pc + 2 * ido - i];
                let tr4 = cc[pc + 2 * ido + i] + cc[pc + 2 * ido - i];
                let cr2 = tr1 - tr4;
                let cr4 = tr1 + tr4;

                let ti1 = cc[pc + i] + cc[pc + 4 * ido - i];
                let ti2 = cc[pc + i] - cc[pc + 4 * ido - i];

                ch[i + k] = ti2 + ti3;
                let ci3 = ti2 - ti3;
                let ci2 = ti1 + ti4;
                let ci4 = ti1 - ti4;

                let (cr2, ci2) = cmul(cr2, ci2, wa1[i - 2], wa1[i - 1]);
                ch[i - 1 + k + l1ido] = cr2;
                ch[i + k + l1ido] = ci2;
                let (cr3, ci3) = cmul(cr3, ci3, wa2[i - 2], wa2[i - 1]);
                ch[i - 1 + k + 2 * l1ido] = cr3;
                ch[i + k + 2 * l1ido] = ci3;
                let (cr4, ci4) = cmul(cr4, ci4, wa3[i - 2], wa3[i - 1]);
                ch[i - 1 + k + 3 * l1ido] = cr4;
                ch[i + k + 3 * l1ido] = ci4;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in (0..l1ido).step_by(ido) {
        let i0 = 4 * k + ido;
        let c = cc[i0 - 1];
        let d = cc[i0 + 2 * ido - 1];
        let a = cc[i0];
        let b = cc[i0 + 2 * ido];
        let tr1 = c - d;
        let tr2 = c + d;
        let ti1 = b + a;
        let ti2 = b - a;
        ch[ido - 1 + k] = tr2 + tr2;
        ch[ido - 1 + k + l1ido] = minus_sqrt2 * (ti1 - tr1);
        ch[ido - 1 + k + 2 * l1ido] = ti2 + ti2;
        ch[ido - 1 + k + 3 * l1ido] = minus_sqrt2 * (ti1 + tr1);
    }
}
