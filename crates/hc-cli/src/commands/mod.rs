pub mod codes;
pub mod format;
pub mod locales;
pub mod simulate;
