mod name;
pub use name::Name;
