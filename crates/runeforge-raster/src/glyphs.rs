//! Elder Futhark bitmap glyphs
//!
//! 5×7 bitmaps for the runes the effects draw. `Canvas::fill_glyph` scales
//! them into a box `size` units tall.

/// Glyph width in cells
pub const GLYPH_W: usize = 5;
/// Glyph height in cells
pub const GLYPH_H: usize = 7;

type Bitmap = [&'static str; GLYPH_H];

const FEHU: Bitmap = ["#..#.", "#.#..", "##..#", "#..#.", "#.#..", "#....", "#...."];
const URUZ: Bitmap = ["##...", "#.#..", "#..#.", "#..#.", "#..#.", "#..#.", "#..#."];
const THURISAZ: Bitmap = ["#....", "##...", "#.#..", "#..#.", "#.#..", "##...", "#...."];
const ANSUZ: Bitmap = ["##...", "#.#..", "##.#.", "#.#..", "#..#.", "#....", "#...."];
const RAIDHO: Bitmap = ["##...", "#.#..", "#..#.", "#.#..", "##...", "#.#..", "#..#."];
const KAUNAN: Bitmap = ["...#.", "..#..", ".#...", "#....", ".#...", "..#..", "...#."];
const GEBO: Bitmap = ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"];
const WUNJO: Bitmap = ["#....", "##...", "#.#..", "##...", "#....", "#....", "#...."];
const ISAZ: Bitmap = ["..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."];
const EIHWAZ: Bitmap = ["..##.", "..#.#", "..#..", "..#..", "..#..", "#.#..", ".##.."];

/// Bitmap for a rune, `None` for characters without one
pub fn glyph(ch: char) -> Option<&'static Bitmap> {
    Some(match ch {
        'ᚠ' => &FEHU,
        'ᚢ' => &URUZ,
        'ᚦ' => &THURISAZ,
        'ᚨ' => &ANSUZ,
        'ᚱ' => &RAIDHO,
        'ᚲ' => &KAUNAN,
        'ᚷ' => &GEBO,
        'ᚹ' => &WUNJO,
        'ᛁ' => &ISAZ,
        'ᛇ' => &EIHWAZ,
        _ => return None,
    })
}

/// Whether cell `(gx, gy)` of a bitmap is ink
pub fn is_ink(bitmap: &Bitmap, gx: usize, gy: usize) -> bool {
    bitmap
        .get(gy)
        .and_then(|row| row.as_bytes().get(gx))
        .is_some_and(|b| *b == b'#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_effect_runes_have_bitmaps() {
        for ch in "ᚱᚠᚦᚷᛁᛇᚢᚨᚲᚹ".chars() {
            let bitmap = glyph(ch).unwrap_or_else(|| panic!("missing {ch}"));
            assert!(bitmap.iter().all(|row| row.len() == GLYPH_W));
            assert!(bitmap.iter().any(|row| row.contains('#')));
        }
        assert!(glyph('A').is_none());
    }

    #[test]
    fn test_is_ink_bounds() {
        assert!(is_ink(&ISAZ, 2, 0));
        assert!(!is_ink(&ISAZ, 0, 0));
        assert!(!is_ink(&ISAZ, 9, 9));
    }
}
