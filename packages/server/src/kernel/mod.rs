pub mod deps;
pub mod test_dependencies;

pub use deps::ServerDeps;
