//! Embedded word banks
//!
//! Tier lists compiled into the binary at build time from `data/`.

include!(concat!(env!("OUT_DIR"), "/easy.rs"));
include!(concat!(env!("OUT_DIR"), "/medium.rs"));
include!(concat!(env!("OUT_DIR"), "/hard.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
