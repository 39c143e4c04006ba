pub mod mini_graph;
