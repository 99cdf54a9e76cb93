pub mod mappers;
pub mod repositories;

pub use repositories::block_repository::SqlBlockRepository;
