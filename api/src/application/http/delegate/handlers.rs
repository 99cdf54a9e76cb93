pub mod get_delegate_blocks;
pub mod get_last_block;
