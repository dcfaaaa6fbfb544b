//! Case detection and re-application for single words.

use smol_str::SmolStr;

/// Lowercases every character of `s`.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Uppercases every character of `s`.
#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Uppercases only the first character of `s`.
#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// Whether the word is entirely uppercase.
pub fn is_all_caps(word: &str) -> bool {
    upper_case(word) == word
}

/// Whether the word starts with an uppercase character.
pub fn is_first_caps(word: &str) -> bool {
    upper_first(word) == word
}

/// The casing pattern of an input word, reapplied to a mapped spelling
/// so that the rewritten word keeps the shape the writer gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// Entirely uppercase, more than one character (`COLOR`).
    AllCaps,
    /// Uppercase first character (`Color`, and single letters like `A`).
    FirstCaps,
    /// Anything else; the mapped spelling is used as stored.
    Plain,
}

impl CaseClass {
    /// Derives the case class of `word`.
    pub fn of(word: &str) -> CaseClass {
        let mut chars = word.chars();
        if chars.next().is_none() {
            return CaseClass::Plain;
        }
        // single-letter words are first-caps, not all-caps
        if chars.next().is_some() && is_all_caps(word) {
            CaseClass::AllCaps
        } else if is_first_caps(word) {
            CaseClass::FirstCaps
        } else {
            CaseClass::Plain
        }
    }

    /// Applies this case class to a dictionary spelling.
    ///
    /// Dictionary spellings are stored lowercase, so first-caps only has
    /// to uppercase the leading character.
    pub fn apply(self, spelling: &str) -> SmolStr {
        match self {
            CaseClass::AllCaps => upper_case(spelling),
            CaseClass::FirstCaps => upper_first(spelling),
            CaseClass::Plain => SmolStr::new(spelling),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_predicates() {
        assert!(is_all_caps("OPTIMIZE"));
        assert!(!is_all_caps("Optimize"));
        assert!(!is_all_caps("optimize"));

        assert!(is_first_caps("Optimize"));
        assert!(is_first_caps("OPTIMIZE"));
        assert!(!is_first_caps("optimize"));
    }

    #[test]
    fn case_class_detection() {
        assert_eq!(CaseClass::of("OPTIMIZE"), CaseClass::AllCaps);
        assert_eq!(CaseClass::of("Optimize"), CaseClass::FirstCaps);
        assert_eq!(CaseClass::of("optimize"), CaseClass::Plain);
        assert_eq!(CaseClass::of("oPtimize"), CaseClass::Plain);
        assert_eq!(CaseClass::of("OPtimize"), CaseClass::FirstCaps);

        assert_eq!(CaseClass::of("A"), CaseClass::FirstCaps);
        assert_eq!(CaseClass::of("a"), CaseClass::Plain);
        assert_eq!(CaseClass::of(""), CaseClass::Plain);
    }

    #[test]
    fn case_class_application() {
        assert_eq!(CaseClass::AllCaps.apply("optimise"), "OPTIMISE");
        assert_eq!(CaseClass::FirstCaps.apply("optimise"), "Optimise");
        assert_eq!(CaseClass::Plain.apply("optimise"), "optimise");
        assert_eq!(CaseClass::AllCaps.apply(""), "");
    }
}
