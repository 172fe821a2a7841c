//! Text shaping around the cipher: newline stripping, zero padding and
//! fixed-width output lines.

use log::debug;
use zeroize::Zeroizing;

use crate::ff1::Ff1;
use crate::types::{Direction, FpeError};

/// Options for [`transform_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub direction: Direction,
    /// Right-pad the input with `'0'` up to this many bytes (0 = off).
    pub padding: usize,
    /// Split output into lines of this many characters (0 = off).
    pub width: usize,
}

impl TextOptions {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Shape raw input for the cipher.
///
/// Decryption input has every `\n` removed; encryption input is left as is.
/// Padding appends `'0'` only when the input is shorter than `padding` bytes.
pub fn prepare_input(input: &str, opts: &TextOptions) -> String {
    let mut data = match opts.direction {
        Direction::Decrypt => input.replace('\n', ""),
        Direction::Encrypt => input.to_owned(),
    };
    if opts.padding > 0 && data.len() < opts.padding {
        let fill = opts.padding - data.len();
        data.extend(std::iter::repeat_n('0', fill));
    }
    data
}

/// Split `output` into `width`-character lines, each ending in `\n`.
///
/// A zero width returns the text unchanged.
pub fn wrap_lines(output: &str, width: usize) -> String {
    if width == 0 {
        return output.to_owned();
    }
    let chars: Vec<char> = output.chars().collect();
    let mut wrapped = String::with_capacity(chars.len() + chars.len() / width + 1);
    for line in chars.chunks(width) {
        wrapped.extend(line);
        wrapped.push('\n');
    }
    wrapped
}

/// Prepare `input`, run it through `cipher` and wrap the result.
///
/// # Errors
///
/// Any cipher error; nothing is returned on failure.
pub fn transform_text(cipher: &Ff1, input: &str, opts: &TextOptions) -> Result<String, FpeError> {
    let data = Zeroizing::new(prepare_input(input, opts));
    debug!(
        "{:?}: {} characters (padding {}, width {})",
        opts.direction,
        data.len(),
        opts.padding,
        opts.width
    );
    let out = Zeroizing::new(match opts.direction {
        Direction::Encrypt => cipher.encrypt(&data)?,
        Direction::Decrypt => cipher.decrypt(&data)?,
    });
    Ok(wrap_lines(&out, opts.width))
}
