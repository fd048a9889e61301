pub mod art;
pub mod artist;
pub mod critic;
pub mod favorite;
pub mod image;
pub mod tag;
