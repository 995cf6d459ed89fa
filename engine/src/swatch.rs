//! Terminal swatch of a wal palette.
//!
//! Each palette color is printed as a block with a 24-bit background
//! (`ESC[48;2;R;G;Bm`) showing the color's own hex string, eight swatches
//! per line.

use crate::common::errors::{SchemeError, SwatchError};
use crate::model::{Rgb, WalScheme};
use std::io::Write;

/// SGR sequence that resets every terminal style attribute
pub const TERM_STY_RESET: &str = "\x1b[0m";

/// Swatches per printed row
pub const SWATCHES_PER_LINE: usize = 8;

/// Foreground for the first swatch (terminal default)
const FIRST_SWATCH_FG: &str = "39";
/// Foreground for every other swatch (black)
const SWATCH_FG: &str = "30";

/// Render the palette swatch, including the trailing reset and newline.
pub fn render_palette(scheme: &WalScheme) -> Result<String, SchemeError> {
    let mut out = String::new();

    for (index, color) in scheme.colors.values().enumerate() {
        let rgb = Rgb::from_hex(color)?;
        if index % SWATCHES_PER_LINE == 0 && index != 0 {
            out.push('\n');
        }
        let fg = if index == 0 { FIRST_SWATCH_FG } else { SWATCH_FG };
        out.push_str(&format!("\x1b[48;2;{rgb};{fg}m {color} {TERM_STY_RESET}"));
    }

    out.push_str(TERM_STY_RESET);
    out.push('\n');
    Ok(out)
}

/// Write the palette swatch to `writer`.
///
/// The whole swatch is rendered before anything is written so a bad color
/// never leaves a half-drawn row on the terminal.
pub fn print_palette<W: Write>(scheme: &WalScheme, writer: &mut W) -> Result<(), SwatchError> {
    let rendered = render_palette(scheme)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
