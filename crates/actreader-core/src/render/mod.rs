pub mod catalogue_listing;

pub use catalogue_listing::render_catalogue_listing;
