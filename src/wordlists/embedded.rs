//! Embedded dictionary
//!
//! Word list compiled into the binary at build time, uppercase and sorted by
//! length then alphabetically.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
