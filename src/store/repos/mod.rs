//! Repository methods, one file per entity, all implemented on [`Store`].
//!
//! [`Store`]: super::Store

mod article;
mod hypothesis;
mod research;
mod result;
mod taxonomy;
