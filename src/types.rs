/// The [`Image`] type
pub mod image;
/// The [`SearchResults`] type
pub mod search_results;

pub use self::{
    image::{
        Image,
        Representations,
    },
    search_results::SearchResults,
};
