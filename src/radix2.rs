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
use num_traits::Float;

use crate::util::{cmul, cmul_conj};

/// One forward radix-2 decimation stage on the packed real layout.
pub(crate) fn radf2<T: Float>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa1: &[T]) {
    let l1ido = l1 * ido;
    for k in (0..l1ido).step_by(ido) {
        let a = cc[k];
        let b = cc[k + l1ido];
        ch[2 * k] = a + b;
        ch[2 * (k + ido) - 1] = a - b;
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in (0..l1ido).step_by(ido) {
            for i in (2..ido).step_by(2) {
                let (tr2, ti2) = cmul_conj(
                    cc[i - 1 + k + l1ido],
                    cc[i + k + l1ido],
                    wa1[i - 2],
                    wa1[i - 1],
                );
                let br = cc[i - 1 + k];
                let bi = cc[i + k];
                ch[i + 2 * k] = bi + ti2;
                ch[2 * (k + ido) - i] = ti2 - bi;
                ch[i - 1 + 2 * k] = br + tr2;
                ch[2 * (k + ido) - i - 1] = br - tr2;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in (0..l1ido).step_by(ido) {
        ch[2 * k + ido] = -cc[ido - 1 + k + l1ido];
        ch[2 * k + ido - 1] = cc[k + ido - 1];
    }
}

/// One backward radix-2 stage, inverse of [`radf2`].
pub(crate) fn radb2<T: Float>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa1: &[T]) {
    let l1ido = l1 * ido;
    for k in (0..l1ido).step_by(ido) {
        let a = cc[2 * k];
        let b = cc[2 * (k + ido) - 1];
        ch[k] = a + b;
        ch[k + l1ido] = a - b;
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in (0..l1ido).step_by(ido) {
            for i in (2..ido).step_by(2) {
                let a = cc[i - 1 + 2 * k];
                let b = cc[2 * (k + ido) - i - 1];
                let c = cc[i + 2 * k];
                let d = cc[2 * (k + ido) - i];
                ch[i - 1 + k] = a + b;
                ch[i + k] = c - d;
                let (tr2, ti2) = cmul(a - b, c + d, wa1[i - 2], wa1[i - 1]);
                ch[i - 1 + k + l1ido] = tr2;
                ch[i + k + l1ido] = ti2;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in (0..l1ido).step_by(ido) {
        let a = cc[2 * k + ido - 1];
        let b = cc[2 * k + ido];
        ch[k + ido - 1] = a + a;
        ch[k + ido - 1 + l1ido] = -(b + b);
    }
}
