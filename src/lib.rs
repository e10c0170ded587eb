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
//! Mixed-radix FFTs and fast trigonometric transforms for real and complex
//! sequences of arbitrary length.
//!
//! Every transform is exposed as a reusable handle that owns its twiddle
//! tables and working buffers, so repeated transforms of the same length
//! allocate nothing:
//!
//! - [`RealFft`]: FFT of real sequences, packed half spectrum.
//! - [`CmplxFft`]: FFT of complex sequences.
//! - [`Dct`]: cosine transform of even sequences (DCT-I).
//! - [`Dst`]: sine transform of odd sequences (DST-I).
//! - [`QuarterWaveFft`]: cosine and sine transforms with quarter-wave
//!   symmetry.
//!
//! All transforms are unscaled; the documentation of each handle states the
//! round-trip factor. Lengths factor into arbitrary primes; products of
//! 2, 3, 4 and 5 take the specialized butterflies, everything else falls
//! back to a direct pass.
//!
//! ```
//! use zpack::RealFft;
//!
//! let mut fft = RealFft::<f64>::new(8)?;
//! let spectrum = fft.forward(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0])?;
//! assert_eq!(spectrum.len(), 5);
//! assert_eq!(spectrum[0].re, 4.0);
//! # Ok::<(), zpack::ZpackError>(())
//! ```

mod cfft;
mod dct;
mod dst;
mod err;
mod factor;
mod quarterwave;
mod radix2;
mod radix3;
mod radix4;
mod radix5;
mod radixg;
mod rfft;
mod util;

pub use cfft::CmplxFft;
pub use dct::Dct;
pub use dst::Dst;
pub use err::ZpackError;
pub use quarterwave::QuarterWaveFft;
pub use rfft::RealFft;

/// Transform direction for the complex passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FftDirection {
    Forward,
    Inverse,
}
