pub mod count_blocks;
pub mod get_block;
pub mod get_blocks;
pub mod search_blocks;
