//! Changes the formality of the main verb in a Japanese sentence which has
//! been tagged as `surface/tag/reading` triples.

pub mod classify;

mod config;
pub use self::config::Config;

pub mod conjugation;
pub use self::conjugation::{ConjugationError, Conjugations, Pattern};

pub mod convert;
pub use self::convert::Converter;

pub mod dictionary;
pub use self::dictionary::{DictionaryError, PatternDictionary, DEFAULT_DICTIONARY};

mod format;
pub use self::format::{Direction, Format, UnknownFormat};

mod group;
pub use self::group::Group;

mod process;
pub use self::process::Processor;

pub mod sentence;
pub use self::sentence::{Sentence, TaggedToken};

pub mod span;
pub use self::span::VerbSpan;
