#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod format;
mod language_tag;
mod lexicon;
mod negotiation;
mod world;

pub use error::{CoreError, CoreResult};
pub use format::{Arg, sprintf};
pub use language_tag::LanguageTag;
pub use lexicon::Lexicon;
pub use negotiation::{
    NegotiationResult, NegotiationTrace, match_locale_strings, negotiate_lookup,
    negotiate_lookup_with_trace,
};
pub use world::World;
