pub mod docs;
pub mod movies;
