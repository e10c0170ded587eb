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
use std::error::Error;
use std::fmt::Display;

/// Errors reported by the public transform handles.
///
/// All variants describe precondition violations on the caller's side or
/// an allocation failure; the transforms themselves never fail once their
/// length contracts are satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZpackError {
    /// Allocation of a buffer with the given length failed.
    OutOfMemory(usize),
    /// A transform of length zero was requested.
    ZeroSizedTransform,
    /// Input sequence length does not match the configured transform length.
    InvalidSequenceLength(usize, usize),
    /// Coefficients array length does not match what the configured length implies.
    InvalidCoefficientsLength(usize, usize),
    /// Destination buffer length does not match what the configured length implies.
    InvalidDestinationLength(usize, usize),
}

impl Display for ZpackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZpackError::OutOfMemory(size) => f.write_fmt(format_args!(
                "Memory allocation of {size} elements has failed"
            )),
            ZpackError::ZeroSizedTransform => {
                f.write_str("Transform length must be at least 1")
            }
            ZpackError::InvalidSequenceLength(got, expected) => f.write_fmt(format_args!(
                "Sequence of length {expected} was expected, but received {got}"
            )),
            ZpackError::InvalidCoefficientsLength(got, expected) => f.write_fmt(format_args!(
                "Coefficients of length {expected} were expected, but received {got}"
            )),
            ZpackError::InvalidDestinationLength(got, expected) => f.write_fmt(format_args!(
                "Destination of length {expected} was expected, but received {got}"
            )),
        }
    }
}

impl Error for ZpackError {}

macro_rules! try_vec {
    ($elem:expr; $n:expr) => {{
        let mut new_vec = Vec::new();
        new_vec
            .try_reserve_exact($n)
            .map_err(|_| crate::err::ZpackError::OutOfMemory($n))?;
        new_vec.resize($n, $elem);
        new_vec
    }};
}

pub(crate) use try_vec;
