pub mod graph;
pub mod synthesizer;
pub mod demo;

pub use graph::{Graph, GraphStatistics, Link, LinkType, Node, NodeType};
pub use synthesizer::{GraphSynthesizer, display_name, shared_tech_count, PROJECT_CATEGORY, RELATED_THRESHOLD};
pub use demo::demo_graph;
