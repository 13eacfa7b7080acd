// src/core/mod.rs

pub mod html;
pub mod locale;
pub mod net;
pub mod sanitize;

pub use locale::NumberFormat;
pub use net::{HttpSource, Source};
