mod linkedin;
mod pinterest;

pub use linkedin::LinkedInAdapter;
pub use pinterest::PinterestAdapter;
