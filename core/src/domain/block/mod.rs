pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::{BLOCK_COLUMNS, BLOCKS_TABLE, Block, LastForgedBlock};
pub use ports::BlockRepository;
pub use value_objects::ResultPage;
