#![allow(missing_docs)]

mod strip;
mod tagger;
pub(crate) mod util;
