pub mod block_repository;
