//! ID3v2 metadata extraction.
//!
//! id3read decodes the ID3v2.3/ID3v2.4 tag at the start of an audio stream and exposes
//! the common metadata fields (title, artist, album, composer) and the embedded cover
//! art. Tags are only ever read, never written.
//!
//! ```no_run
//! use id3read::id3v2::Tag;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut reader = BufReader::new(File::open("music.mp3").unwrap());
//! let tag = Tag::read(&mut reader).unwrap();
//!
//! println!("{}", tag.title().unwrap_or_default());
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod core;

pub mod err;
pub mod id3v2;
pub mod string;

pub use err::{DecodeProblem, HeaderProblem, ParseError, ParseResult};
