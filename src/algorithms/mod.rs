pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dijkstra;
