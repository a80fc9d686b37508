pub mod identifier;

pub use identifier::Identifier;
