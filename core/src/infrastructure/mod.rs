pub mod block;
pub mod db;
pub mod repository;
