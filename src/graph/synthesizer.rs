use std::collections::HashSet;
use crate::analysis::ProjectSignals;
use crate::graph::graph::{Graph, Link, LinkType, Node, NodeType};

/// Category label carried by every scanned repository node
pub const PROJECT_CATEGORY: &str = "GitHub Project";

/// Minimum shared-tech count for two projects to be `related`
pub const RELATED_THRESHOLD: usize = 2;

/// "stripe-api" -> "Stripe Api"
pub fn display_name(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Frameworks of `a` found in `b` plus languages of `a` found in `b`.
///
/// A key shared both as framework and as language counts twice.
pub fn shared_tech_count(a: &ProjectSignals, b: &ProjectSignals) -> usize {
    let frameworks = a.frameworks.iter().filter(|f| b.frameworks.contains(f)).count();
    let languages = a.languages.iter().filter(|l| b.languages.contains(l)).count();
    frameworks + languages
}

/// Builds the map graph from per-repository signals.
///
/// Node creation is first-seen-wins: once an id exists, later nodes with the
/// same id are dropped without touching the stored metadata. Links are never
/// deduplicated.
pub struct GraphSynthesizer {
    nodes: Vec<Node>,
    seen: HashSet<String>,
    links: Vec<Link>,
}

impl GraphSynthesizer {
    pub fn new() -> Self {
        GraphSynthesizer {
            nodes: Vec::new(),
            seen: HashSet::new(),
            links: Vec::new(),
        }
    }

    pub fn synthesize(projects: &[ProjectSignals]) -> Graph {
        let mut synthesizer = GraphSynthesizer::new();
        for project in projects {
            synthesizer.add_project(project);
        }
        synthesizer.link_related(projects);
        synthesizer.finish()
    }

    fn add_project(&mut self, project: &ProjectSignals) {
        self.add_node(
            Node::new(&project.id, &project.name, NodeType::Platform)
                .with_category(PROJECT_CATEGORY)
                .with_description(&project.description),
        );

        let categories: [(&[String], NodeType, LinkType); 4] = [
            (project.languages.as_slice(), NodeType::Language, LinkType::Uses),
            (project.frameworks.as_slice(), NodeType::Framework, LinkType::Uses),
            (project.apis.as_slice(), NodeType::Api, LinkType::Integrates),
            (project.databases.as_slice(), NodeType::Database, LinkType::Stores),
        ];

        for (keys, node_type, link_type) in categories {
            for key in keys {
                if !self.seen.contains(key) {
                    self.add_node(Node::new(key, display_name(key), node_type));
                }
                self.links.push(Link::new(&project.id, key, link_type));
            }
        }
    }

    fn link_related(&mut self, projects: &[ProjectSignals]) {
        for (i, a) in projects.iter().enumerate() {
            for b in &projects[i + 1..] {
                if shared_tech_count(a, b) >= RELATED_THRESHOLD {
                    self.links.push(Link::new(&a.id, &b.id, LinkType::Related));
                }
            }
        }
    }

    fn add_node(&mut self, node: Node) {
        if self.seen.insert(node.id.clone()) {
            self.nodes.push(node);
        }
    }

    fn finish(self) -> Graph {
        Graph {
            nodes: self.nodes,
            links: self.links,
        }
    }
}

impl Default for GraphSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, frameworks: &[&str], languages: &[&str]) -> ProjectSignals {
        ProjectSignals {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: format!("{} service", id),
            url: format!("https://github.com/acme/{}", id),
            languages: languages.iter().map(|s| s.to_string()).collect(),
            frameworks: frameworks.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn related_pairs(graph: &Graph) -> HashSet<(String, String)> {
        graph
            .links_of_type(LinkType::Related)
            .map(|l| {
                let mut pair = [l.source.clone(), l.target.clone()];
                pair.sort();
                (pair[0].clone(), pair[1].clone())
            })
            .collect()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("stripe-api"), "Stripe Api");
        assert_eq!(display_name("typescript"), "Typescript");
        assert_eq!(display_name("objective-c"), "Objective C");
        assert_eq!(display_name("d3js"), "D3js");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_empty_input_yields_empty_graph() {
        let graph = GraphSynthesizer::synthesize(&[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.links.is_empty());
        assert_eq!(serde_json::to_string(&graph).unwrap(), r#"{"nodes":[],"links":[]}"#);
    }

    #[test]
    fn test_two_shared_technologies_link_projects() {
        let a = project("a", &["react"], &["typescript"]);
        let b = project("b", &["react"], &["typescript"]);

        let graph = GraphSynthesizer::synthesize(&[a, b]);

        let related: Vec<_> = graph.links_of_type(LinkType::Related).collect();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].source, "a");
        assert_eq!(related[0].target, "b");
    }

    #[test]
    fn test_single_shared_technology_is_not_enough() {
        let a = project("a", &["react"], &["typescript"]);
        let b = project("b", &["react"], &["python"]);

        let graph = GraphSynthesizer::synthesize(&[a, b]);
        assert_eq!(graph.links_of_type(LinkType::Related).count(), 0);
    }

    #[test]
    fn test_disjoint_frameworks_create_each_node_once() {
        let a = project("a", &["react"], &[]);
        let b = project("b", &["vue"], &[]);

        let graph = GraphSynthesizer::synthesize(&[a, b]);

        assert_eq!(graph.links_of_type(LinkType::Related).count(), 0);
        assert_eq!(graph.nodes.iter().filter(|n| n.id == "react").count(), 1);
        assert_eq!(graph.nodes.iter().filter(|n| n.id == "vue").count(), 1);
        assert!(graph.links.contains(&Link::new("a", "react", LinkType::Uses)));
        assert!(graph.links.contains(&Link::new("b", "vue", LinkType::Uses)));
    }

    #[test]
    fn test_emission_order() {
        let mut a = project("shop", &["nextjs"], &["typescript"]);
        a.apis = vec!["stripe-api".to_string()];
        a.databases = vec!["postgresql".to_string()];
        let b = project("admin", &["nextjs"], &["typescript"]);

        let graph = GraphSynthesizer::synthesize(&[a, b]);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["shop", "typescript", "nextjs", "stripe-api", "postgresql", "admin"]);

        assert_eq!(
            graph.links,
            vec![
                Link::new("shop", "typescript", LinkType::Uses),
                Link::new("shop", "nextjs", LinkType::Uses),
                Link::new("shop", "stripe-api", LinkType::Integrates),
                Link::new("shop", "postgresql", LinkType::Stores),
                Link::new("admin", "typescript", LinkType::Uses),
                Link::new("admin", "nextjs", LinkType::Uses),
                Link::new("shop", "admin", LinkType::Related),
            ]
        );

        let shop = graph.node("shop").unwrap();
        assert_eq!(shop.node_type, NodeType::Platform);
        assert_eq!(shop.category.as_deref(), Some(PROJECT_CATEGORY));
        assert_eq!(shop.description.as_deref(), Some("shop service"));

        let stripe = graph.node("stripe-api").unwrap();
        assert_eq!(stripe.name, "Stripe Api");
        assert_eq!(stripe.node_type, NodeType::Api);
        assert_eq!(stripe.category, None);
    }

    #[test]
    fn test_duplicate_project_ids_keep_first_metadata() {
        let mut first = project("web", &["react"], &[]);
        first.name = "Web".to_string();
        let mut second = project("web", &["vue"], &[]);
        second.name = "WEB".to_string();
        second.description = "later".to_string();

        let graph = GraphSynthesizer::synthesize(&[first, second]);

        let web: Vec<_> = graph.nodes.iter().filter(|n| n.id == "web").collect();
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].name, "Web");
        assert_eq!(web[0].description.as_deref(), Some("web service"));
        // Both projects still emit their usage links
        assert!(graph.links.contains(&Link::new("web", "react", LinkType::Uses)));
        assert!(graph.links.contains(&Link::new("web", "vue", LinkType::Uses)));
    }

    #[test]
    fn test_project_named_like_a_technology_keeps_platform_metadata() {
        let a = project("redis", &[], &["c"]);
        let mut b = project("cache", &[], &[]);
        b.databases = vec!["redis".to_string()];

        let graph = GraphSynthesizer::synthesize(&[a, b]);

        let redis = graph.node("redis").unwrap();
        assert_eq!(redis.node_type, NodeType::Platform);
        assert_eq!(graph.nodes.iter().filter(|n| n.id == "redis").count(), 1);
        assert!(graph.links.contains(&Link::new("cache", "redis", LinkType::Stores)));
    }

    #[test]
    fn test_key_shared_in_two_categories_counts_twice() {
        let a = project("a", &["swift"], &["swift"]);
        let b = project("b", &["swift"], &["swift"]);

        assert_eq!(shared_tech_count(&a, &b), 2);
        let graph = GraphSynthesizer::synthesize(&[a, b]);
        assert_eq!(graph.links_of_type(LinkType::Related).count(), 1);
    }

    #[test]
    fn test_apis_and_databases_do_not_count_towards_similarity() {
        let mut a = project("a", &[], &[]);
        a.apis = vec!["stripe-api".to_string(), "openai-api".to_string()];
        a.databases = vec!["redis".to_string()];
        let b = a.clone();
        let b = ProjectSignals { id: "b".to_string(), ..b };

        let graph = GraphSynthesizer::synthesize(&[a, b]);
        assert_eq!(graph.links_of_type(LinkType::Related).count(), 0);
    }

    #[test]
    fn test_graph_invariants_hold() {
        let projects = vec![
            project("web", &["nextjs", "react", "tailwind"], &["typescript", "css"]),
            project("docs", &["nextjs"], &["typescript", "mdx"]),
            project("ml", &["fastapi"], &["python"]),
            project("etl", &["flask"], &["python", "shell"]),
            project("web", &["vue"], &["typescript"]),
        ];

        let graph = GraphSynthesizer::synthesize(&projects);

        assert!(graph.dangling_links().is_empty());
        let unique: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(unique.len(), graph.nodes.len());
    }

    #[test]
    fn test_synthesis_is_reproducible() {
        let projects = vec![
            project("web", &["nextjs", "react"], &["typescript"]),
            project("app", &["react"], &["typescript", "javascript"]),
            project("ml", &["fastapi"], &["python"]),
        ];

        let first = serde_json::to_string(&GraphSynthesizer::synthesize(&projects)).unwrap();
        let second = serde_json::to_string(&GraphSynthesizer::synthesize(&projects)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_input_keeps_related_pairs() {
        let projects = vec![
            project("web", &["nextjs", "react"], &["typescript"]),
            project("app", &["react"], &["typescript", "javascript"]),
            project("ml", &["fastapi"], &["python"]),
            project("etl", &["fastapi"], &["python"]),
            project("site", &["react"], &["javascript"]),
        ];
        let mut reversed = projects.clone();
        reversed.reverse();

        let forward = GraphSynthesizer::synthesize(&projects);
        let backward = GraphSynthesizer::synthesize(&reversed);

        assert_eq!(related_pairs(&forward), related_pairs(&backward));
        assert!(!related_pairs(&forward).is_empty());

        let position = |id: &str| reversed.iter().position(|p| p.id == id).unwrap();
        for link in backward.links_of_type(LinkType::Related) {
            assert!(position(&link.source) < position(&link.target));
        }
    }
}
