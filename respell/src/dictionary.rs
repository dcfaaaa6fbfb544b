//! Static lexeme dictionary mapping canonical keys to regional spellings.
//!
//! Canonical keys are lowercase single-word base forms, predominantly
//! the American spellings. Each key maps to exactly one spelling per
//! variant; a key may map to the same string for both variants (no-op
//! entries such as `check` are valid). The table is read-only: the
//! built-in dictionary is built once per process and never mutated.

use hashbrown::HashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::case_handling;
use crate::Variant;

/// A single lexeme: one canonical key's spelling in each variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeEntry {
    /// British spelling of the lexeme.
    pub british: SmolStr,
    /// American spelling of the lexeme.
    pub american: SmolStr,
}

impl LexemeEntry {
    /// The spelling of this lexeme in the given variant.
    pub fn spelling(&self, variant: Variant) -> &SmolStr {
        match variant {
            Variant::British => &self.british,
            Variant::American => &self.american,
        }
    }
}

// canonical key, british spelling, american spelling
static BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    ("airplane", "aeroplane", "airplane"),
    ("aluminum", "aluminium", "aluminum"),
    ("analog", "analogue", "analog"),
    ("analyze", "analyse", "analyze"),
    ("apologize", "apologise", "apologize"),
    ("authorization", "authorisation", "authorization"),
    ("authorize", "authorise", "authorize"),
    ("behavior", "behaviour", "behavior"),
    ("behaviors", "behaviours", "behaviors"),
    ("caliber", "calibre", "caliber"),
    ("canceled", "cancelled", "canceled"),
    ("canceling", "cancelling", "canceling"),
    ("capitalize", "capitalise", "capitalize"),
    ("catalog", "catalogue", "catalog"),
    ("categorize", "categorise", "categorize"),
    ("center", "centre", "center"),
    ("centers", "centres", "centers"),
    ("check", "check", "check"),
    ("color", "colour", "color"),
    ("colors", "colours", "colors"),
    ("cozy", "cosy", "cozy"),
    ("criticize", "criticise", "criticize"),
    ("customization", "customisation", "customization"),
    ("customize", "customise", "customize"),
    ("defense", "defence", "defense"),
    ("dialog", "dialogue", "dialog"),
    ("emphasize", "emphasise", "emphasize"),
    ("endeavor", "endeavour", "endeavor"),
    ("favor", "favour", "favor"),
    ("favorite", "favourite", "favorite"),
    ("favorites", "favourites", "favorites"),
    ("fiber", "fibre", "fiber"),
    ("finalize", "finalise", "finalize"),
    ("flavor", "flavour", "flavor"),
    ("flavors", "flavours", "flavors"),
    ("fulfill", "fulfil", "fulfill"),
    ("generalize", "generalise", "generalize"),
    ("gray", "grey", "gray"),
    ("harbor", "harbour", "harbor"),
    ("honor", "honour", "honor"),
    ("humor", "humour", "humor"),
    ("initialize", "initialise", "initialize"),
    ("jewelry", "jewellery", "jewelry"),
    ("labeled", "labelled", "labeled"),
    ("labor", "labour", "labor"),
    ("license", "licence", "license"),
    ("liter", "litre", "liter"),
    ("localization", "localisation", "localization"),
    ("localize", "localise", "localize"),
    ("maximize", "maximise", "maximize"),
    ("meter", "metre", "meter"),
    ("minimize", "minimise", "minimize"),
    ("mold", "mould", "mold"),
    ("mustache", "moustache", "mustache"),
    ("neighbor", "neighbour", "neighbor"),
    ("neighbors", "neighbours", "neighbors"),
    ("offense", "offence", "offense"),
    ("optimization", "optimisation", "optimization"),
    ("optimize", "optimise", "optimize"),
    ("organization", "organisation", "organization"),
    ("organizations", "organisations", "organizations"),
    ("organize", "organise", "organize"),
    ("pajamas", "pyjamas", "pajamas"),
    ("personalization", "personalisation", "personalization"),
    ("personalize", "personalise", "personalize"),
    ("plow", "plough", "plow"),
    ("realize", "realise", "realize"),
    ("recognize", "recognise", "recognize"),
    ("rumor", "rumour", "rumor"),
    ("savor", "savour", "savor"),
    ("skeptical", "sceptical", "skeptical"),
    ("specialize", "specialise", "specialize"),
    ("standardize", "standardise", "standardize"),
    ("summarize", "summarise", "summarize"),
    ("synchronize", "synchronise", "synchronize"),
    ("theater", "theatre", "theater"),
    ("traveled", "travelled", "traveled"),
    ("traveler", "traveller", "traveler"),
    ("traveling", "travelling", "traveling"),
    ("utilize", "utilise", "utilize"),
    ("vapor", "vapour", "vapor"),
    ("visualization", "visualisation", "visualization"),
    ("visualize", "visualise", "visualize"),
];

lazy_static! {
    static ref BUILTIN: SpellingDictionary =
        SpellingDictionary::from_entries(BUILTIN_ENTRIES.iter().copied());
}

/// Immutable lookup table from canonical lexeme keys to their regional
/// spellings, with a precomputed longest-key-first ordering.
#[derive(Debug, Clone)]
pub struct SpellingDictionary {
    entries: HashMap<SmolStr, LexemeEntry>,
    keys_longest_first: Vec<SmolStr>,
}

impl SpellingDictionary {
    /// The built-in dictionary, built once per process.
    pub fn builtin() -> &'static SpellingDictionary {
        &BUILTIN
    }

    /// Builds a dictionary from `(key, british, american)` triples.
    ///
    /// Keys must be lowercase single words and both spellings must be
    /// non-empty. A later duplicate of a key replaces the earlier one.
    pub fn from_entries<'a, I>(entries: I) -> SpellingDictionary
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut table = HashMap::new();
        for (key, british, american) in entries {
            debug_assert!(
                !key.is_empty() && case_handling::lower_case(key) == key,
                "dictionary keys must be lowercase: {:?}",
                key
            );
            debug_assert!(
                !british.is_empty() && !american.is_empty(),
                "both spellings must be non-empty for key {:?}",
                key
            );
            table.insert(
                SmolStr::new(key),
                LexemeEntry {
                    british: SmolStr::new(british),
                    american: SmolStr::new(american),
                },
            );
        }

        let mut keys: Vec<SmolStr> = table.keys().cloned().collect();
        // longest first; ties lexicographic so the order is total
        keys.sort_unstable_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        SpellingDictionary {
            entries: table,
            keys_longest_first: keys,
        }
    }

    /// Looks up a canonical key. Exact match only; `None` means the word
    /// is not in the dictionary and callers must leave it unchanged.
    pub fn lookup(&self, key: &str) -> Option<&LexemeEntry> {
        self.entries.get(key)
    }

    /// All keys, longest first (by character count, ties lexicographic).
    pub fn keys_longest_first(&self) -> &[SmolStr] {
        &self.keys_longest_first
    }

    /// Number of lexemes in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let dictionary = SpellingDictionary::builtin();

        let entry = dictionary.lookup("color").expect("color is built in");
        assert_eq!(entry.british, "colour");
        assert_eq!(entry.american, "color");
        assert_eq!(entry.spelling(Variant::British), "colour");
        assert_eq!(entry.spelling(Variant::American), "color");

        assert!(dictionary.lookup("banana").is_none());
        // exact match only: variant spellings are not keys
        assert!(dictionary.lookup("colour").is_none());
        // exact match only: no casefolding at the table level
        assert!(dictionary.lookup("Color").is_none());
    }

    #[test]
    fn builtin_no_op_entries() {
        let entry = SpellingDictionary::builtin()
            .lookup("check")
            .expect("check is built in");
        assert_eq!(entry.british, entry.american);
    }

    #[test]
    fn builtin_invariants() {
        let dictionary = SpellingDictionary::builtin();
        assert_eq!(dictionary.len(), BUILTIN_ENTRIES.len());
        assert!(!dictionary.is_empty());

        for key in dictionary.keys_longest_first() {
            assert_eq!(case_handling::lower_case(key), *key);
            let entry = dictionary.lookup(key).unwrap();
            assert!(!entry.british.is_empty());
            assert!(!entry.american.is_empty());
        }
    }

    #[test]
    fn key_order_is_longest_first() {
        let keys = SpellingDictionary::builtin().keys_longest_first();
        assert_eq!(keys.len(), SpellingDictionary::builtin().len());
        for pair in keys.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (la, lb) = (a.chars().count(), b.chars().count());
            assert!(
                la > lb || (la == lb && a < b),
                "keys out of order: {:?} before {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn custom_dictionary() {
        let dictionary = SpellingDictionary::from_entries([
            ("tire", "tyre", "tire"),
            ("curb", "kerb", "curb"),
        ]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("tire").unwrap().british, "tyre");
        assert!(dictionary.lookup("color").is_none());
    }
}
