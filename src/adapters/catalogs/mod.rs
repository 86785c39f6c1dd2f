mod variable_catalog_embedded;

pub use variable_catalog_embedded::load_catalog;
