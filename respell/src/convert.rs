//! Word resolution and whole-text rewriting between spelling variants.

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::case_handling::{self, CaseClass};
use crate::dictionary::SpellingDictionary;
use crate::Variant;

/// Respells a single word into the given variant using the built-in
/// dictionary.
///
/// The word is matched case-insensitively against the canonical keys;
/// a word not in the dictionary is returned unchanged. On a hit, the
/// case class of the input (all-caps, first-caps, plain) is reapplied
/// to the mapped spelling. Resolution never fails.
pub fn spell(word: &str, variant: Variant) -> SmolStr {
    spell_with(SpellingDictionary::builtin(), word, variant)
}

/// Respells a single word against a caller-provided dictionary.
pub fn spell_with(dictionary: &SpellingDictionary, word: &str, variant: Variant) -> SmolStr {
    let entry = match dictionary.lookup(&case_handling::lower_case(word)) {
        Some(entry) => entry,
        None => return SmolStr::new(word),
    };
    CaseClass::of(word).apply(entry.spelling(variant))
}

// the three literal case forms matched per key, in application order
const CASE_FORMS: [CaseClass; 3] = [CaseClass::Plain, CaseClass::FirstCaps, CaseClass::AllCaps];

struct KeyPatterns {
    key: SmolStr,
    // one whole-word pattern per literal case form, in CASE_FORMS order
    forms: [Regex; 3],
}

/// Rewrites free text between spelling variants, whole word by whole
/// word.
///
/// Matching is against the dictionary's canonical key spellings only,
/// in three literal casings per key (lowercase, first-capitalized,
/// all-uppercase), with keys applied longest first. Text already
/// written in the target variant's spellings is therefore not
/// recognized: conversion is not idempotent across variants, and this
/// asymmetry is part of the contract rather than something the rewriter
/// tries to correct.
pub struct TextRewriter<'a> {
    dictionary: &'a SpellingDictionary,
    patterns: Vec<KeyPatterns>,
}

impl<'a> TextRewriter<'a> {
    /// Precompiles whole-word patterns for every key in `dictionary`.
    pub fn new(dictionary: &'a SpellingDictionary) -> TextRewriter<'a> {
        let patterns = dictionary
            .keys_longest_first()
            .iter()
            .filter_map(|key| {
                let forms = [
                    whole_word_pattern(key)?,
                    whole_word_pattern(&case_handling::upper_first(key))?,
                    whole_word_pattern(&case_handling::upper_case(key))?,
                ];
                Some(KeyPatterns {
                    key: key.clone(),
                    forms,
                })
            })
            .collect();

        TextRewriter {
            dictionary,
            patterns,
        }
    }

    /// Rewrites every dictionary-recognized whole word in `text` to the
    /// given variant's spelling, preserving all other characters.
    ///
    /// Never fails; text without any dictionary word is returned
    /// unchanged.
    pub fn rewrite(&self, text: &str, variant: Variant) -> String {
        let mut result = text.to_string();

        for patterns in &self.patterns {
            let entry = match self.dictionary.lookup(&patterns.key) {
                Some(entry) => entry,
                None => continue,
            };
            let spelling = entry.spelling(variant);

            for (case, regex) in CASE_FORMS.iter().zip(&patterns.forms) {
                if !regex.is_match(&result) {
                    continue;
                }
                let replacement = case.apply(spelling);
                result = regex
                    .replace_all(&result, regex::NoExpand(&replacement))
                    .into_owned();
            }
        }

        result
    }
}

fn whole_word_pattern(form: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(form));
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("skipping unmatchable dictionary form {:?}: {}", form, e);
            None
        }
    }
}

lazy_static! {
    // process-wide rewriter over the built-in dictionary
    static ref BUILTIN_REWRITER: TextRewriter<'static> =
        TextRewriter::new(SpellingDictionary::builtin());
}

/// Rewrites `text` into the given variant using the built-in
/// dictionary. See [`TextRewriter`] for the matching discipline.
pub fn convert_text(text: &str, variant: Variant) -> String {
    BUILTIN_REWRITER.rewrite(text, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_maps_builtin_keys() {
        assert_eq!(spell("optimize", Variant::British), "optimise");
        assert_eq!(spell("optimize", Variant::American), "optimize");
        assert_eq!(spell("color", Variant::British), "colour");
    }

    #[test]
    fn spell_preserves_case_class() {
        assert_eq!(spell("OPTIMIZE", Variant::British), "OPTIMISE");
        assert_eq!(spell("Optimize", Variant::British), "Optimise");
        assert_eq!(spell("optimize", Variant::British), "optimise");
        // case-insensitive on input
        assert_eq!(spell("oPTIMIZE", Variant::British), "optimise");
    }

    #[test]
    fn spell_unknown_word_passes_through() {
        assert_eq!(spell("banana", Variant::British), "banana");
        assert_eq!(spell("Banana", Variant::American), "Banana");
        assert_eq!(spell("", Variant::British), "");
    }

    #[test]
    fn spell_recognizes_canonical_keys_only() {
        // "colour" is the mapped spelling, not a key; it does not map back
        assert_eq!(spell("colour", Variant::American), "colour");
    }

    #[test]
    fn rewrites_whole_words_and_preserves_the_rest() {
        assert_eq!(
            convert_text("The color, size, and check.", Variant::British),
            "The colour, size, and check."
        );
    }

    #[test]
    fn does_not_match_keys_inside_longer_words() {
        assert_eq!(
            convert_text("coloring the decolorized fabric", Variant::British),
            "coloring the decolorized fabric"
        );
    }

    #[test]
    fn matches_three_literal_case_forms_only() {
        assert_eq!(
            convert_text("color Color COLOR cOLOR", Variant::British),
            "colour Colour COLOUR cOLOR"
        );
    }

    #[test]
    fn longest_keys_apply_first() {
        // overlapping vocabulary: the plural key wins its own match and
        // the rewrite stays deterministic
        assert_eq!(
            convert_text("colors and color", Variant::British),
            "colours and colour"
        );
        assert_eq!(
            convert_text("Organizations organize organization-wide", Variant::British),
            "Organisations organise organisation-wide"
        );
    }

    #[test]
    fn converted_text_does_not_round_trip() {
        let british = convert_text("Our favorite colors show true humor.", Variant::British);
        assert_eq!(british, "Our favourite colours show true humour.");
        // already-British spellings are not canonical keys, so the
        // reverse conversion leaves them untouched
        assert_eq!(convert_text(&british, Variant::American), british);
    }

    #[test]
    fn rewrite_with_custom_dictionary() {
        let dictionary = SpellingDictionary::from_entries([
            ("tire", "tyre", "tire"),
            ("tires", "tyres", "tires"),
        ]);
        let rewriter = TextRewriter::new(&dictionary);
        assert_eq!(
            rewriter.rewrite("TIRES, Tires and one tire", Variant::British),
            "TYRES, Tyres and one tyre"
        );
        assert_eq!(
            rewriter.rewrite("nothing to do here", Variant::British),
            "nothing to do here"
        );
    }

    #[test]
    fn empty_and_matchless_text() {
        assert_eq!(convert_text("", Variant::British), "");
        let text = "nothing of note";
        assert_eq!(convert_text(text, Variant::American), text);
    }
}
