pub mod favorites;
pub mod seed_loader;
