/*! Regional English spelling conversion.

Converts words and free text between British and American English
spellings using a fixed lexeme dictionary, with case handling and
whole-word matching, and resolves which spelling variant applies for
the current visitor or account.

# Usage examples

```
use respell::{convert_text, spell, Variant};

assert_eq!(spell("Optimize", Variant::British), "Optimise");
assert_eq!(
    convert_text("Optimize for color and flavor.", Variant::British),
    "Optimise for colour and flavour."
);
```

Preference resolution for the active visitor or account lives in
[`preference`]; the lexeme table itself in [`dictionary`].

*/

#![warn(missing_docs)]

pub mod case_handling;
pub mod convert;
pub mod dictionary;
pub mod preference;

pub(crate) mod constants;
mod variant;

pub use convert::{convert_text, spell, TextRewriter};
pub use dictionary::{LexemeEntry, SpellingDictionary};
pub use variant::{ParseVariantError, Variant};
