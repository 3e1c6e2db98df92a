pub mod fixer;

pub use fixer::FixerProvider;
