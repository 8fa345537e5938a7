use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Platform,
    Language,
    Framework,
    Api,
    Database,
    Engine,
    Opportunity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Uses,       // Project -> Language / Framework
    Integrates, // Project -> API
    Stores,     // Project -> Database
    Depends,    // Project -> Project
    Monetizes,  // Opportunity -> Project
    Related,    // Project -> Project, shared technology
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            node_type,
            category: None,
            description: None,
            revenue: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_revenue(mut self, revenue: impl Into<String>) -> Self {
        self.revenue = Some(revenue.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>, link_type: LinkType) -> Self {
        Link {
            source: source.into(),
            target: target.into(),
            link_type,
        }
    }
}

/// Nodes in first-seen order, links in generation order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn links_of_type(&self, link_type: LinkType) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.link_type == link_type)
    }

    /// Links whose source or target is not a node of this graph
    pub fn dangling_links(&self) -> Vec<&Link> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.links
            .iter()
            .filter(|l| !ids.contains(l.source.as_str()) || !ids.contains(l.target.as_str()))
            .collect()
    }

    pub fn get_statistics(&self) -> GraphStatistics {
        let mut nodes_by_type: HashMap<NodeType, usize> = HashMap::new();
        for node in &self.nodes {
            *nodes_by_type.entry(node.node_type).or_insert(0) += 1;
        }

        let mut links_by_type: HashMap<LinkType, usize> = HashMap::new();
        for link in &self.links {
            *links_by_type.entry(link.link_type).or_insert(0) += 1;
        }

        GraphStatistics {
            total_nodes: self.nodes.len(),
            total_links: self.links.len(),
            nodes_by_type,
            links_by_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub total_nodes: usize,
    pub total_links: usize,
    pub nodes_by_type: HashMap<NodeType, usize>,
    pub links_by_type: HashMap<LinkType, usize>,
}
