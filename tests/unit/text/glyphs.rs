use super::*;

#[test]
fn punctuation_and_digits_map_to_fixed_cells() {
    let table = [
        (b' ', 0),
        (b'!', 1),
        (b'\'', 7),
        (b'(', 8),
        (b')', 9),
        (b',', 12),
        (b'-', 13),
        (b'.', 14),
        (b'0', 16),
        (b'9', 25),
        (b':', 26),
        (b';', 27),
        (b'?', 31),
    ];
    for (code, index) in table {
        assert_eq!(glyph_index(code), index, "code {:?}", code as char);
    }
}

#[test]
fn letters_are_case_insensitive() {
    assert_eq!(glyph_index(b'A'), 33);
    assert_eq!(glyph_index(b'Z'), 58);
    for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
        assert_eq!(glyph_index(upper), glyph_index(lower));
    }
}

#[test]
fn unmapped_codes_are_blank() {
    for code in [b'\\', b'"', b'#', b'/', b'@', b'~', 0u8, 200u8] {
        assert_eq!(glyph_index(code), 0, "code {code}");
    }
}

#[test]
fn cells_are_laid_out_in_rows_of_ten() {
    assert_eq!(glyph_cell(0), Rect::new(0.0, 0.0, 62.0, 50.0));
    assert_eq!(glyph_cell(9), Rect::new(558.0, 0.0, 620.0, 50.0));
    assert_eq!(glyph_cell(33), Rect::new(186.0, 150.0, 248.0, 200.0));
}
