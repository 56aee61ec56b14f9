pub mod factory;
pub mod resolver;

#[cfg(test)]
pub mod testing;

pub use factory::build_identity_resolver;
pub use resolver::IdentityResolver;
