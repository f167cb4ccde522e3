/// Keep only ASCII characters, then trim surrounding whitespace.
/// Non-ASCII characters are dropped, not transliterated.
pub fn ascii_title(raw: &str) -> String {
    let ascii: String = raw.chars().filter(char::is_ascii).collect();
    ascii.trim().to_string()
}

/// Gamertags are searched as query words, so spaces become `+`.
pub fn xbl_gamertag(gamertag: &str) -> String {
    gamertag.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_ascii_without_placeholders() {
        assert_eq!(ascii_title("  Pokémon™ Snap\n"), "Pokmon Snap");
        assert_eq!(ascii_title("ÅÄÖ"), "");
    }

    #[test]
    fn trims_after_filtering() {
        // the leading char is non-ASCII, so the space it exposes must go too
        assert_eq!(ascii_title("® Halo 3 "), "Halo 3");
    }

    #[test]
    fn gamertag_spaces_become_plus() {
        assert_eq!(xbl_gamertag("Major Nelson"), "Major+Nelson");
        assert_eq!(xbl_gamertag("a  b%c"), "a++b%c");
        assert_eq!(xbl_gamertag("single"), "single");
    }
}
