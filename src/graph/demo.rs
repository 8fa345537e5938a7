use once_cell::sync::Lazy;
use crate::graph::graph::{Graph, Link, LinkType, Node, NodeType};

static DEMO_GRAPH: Lazy<Graph> = Lazy::new(build_demo_graph);

/// Fixed example map covering every node and link type
pub fn demo_graph() -> &'static Graph {
    &DEMO_GRAPH
}

// (id, name, category, description)
const PLATFORMS: &[(&str, &str, &str, &str)] = &[
    ("ecommerce-platform", "E-Commerce Platform", "Production", "Main retail platform"),
    ("mobile-app", "Mobile App", "Production", "iOS and Android app"),
    ("admin-dashboard", "Admin Dashboard", "Internal", "Internal management tool"),
    ("analytics-engine", "Analytics Engine", "Production", "Real-time analytics"),
    ("payment-service", "Payment Service", "Production", "Payment processing"),
    ("user-portal", "User Portal", "Production", "Customer account management"),
    ("api-gateway", "API Gateway", "Infrastructure", "Central API gateway"),
    ("notification-service", "Notification Service", "Production", "Email and push notifications"),
    ("search-engine", "Search Engine", "Production", "Product search"),
    ("inventory-system", "Inventory System", "Production", "Stock management"),
];

const ENGINES: &[(&str, &str, &str)] = &[
    ("recommendation-engine", "Recommendation Engine", "ML-powered recommendations"),
    ("fraud-detection", "Fraud Detection", "Real-time fraud prevention"),
    ("image-processor", "Image Processor", "Product image optimization"),
];

const TECHNOLOGIES: &[(&str, &str, NodeType)] = &[
    ("javascript", "JavaScript", NodeType::Language),
    ("typescript", "TypeScript", NodeType::Language),
    ("python", "Python", NodeType::Language),
    ("go", "Go", NodeType::Language),
    ("java", "Java", NodeType::Language),
    ("react", "React", NodeType::Framework),
    ("nextjs", "Next.js", NodeType::Framework),
    ("fastapi", "FastAPI", NodeType::Framework),
    ("django", "Django", NodeType::Framework),
    ("express", "Express", NodeType::Framework),
    ("tailwind", "Tailwind CSS", NodeType::Framework),
];

const APIS: &[(&str, &str, &str)] = &[
    ("stripe-api", "Stripe API", "Payment processing"),
    ("sendgrid-api", "SendGrid API", "Email delivery"),
    ("aws-s3", "AWS S3", "File storage"),
    ("google-maps", "Google Maps API", "Location services"),
    ("openai-api", "OpenAI API", "AI features"),
    ("twilio", "Twilio API", "SMS notifications"),
];

const DATABASES: &[(&str, &str)] = &[
    ("postgresql", "PostgreSQL"),
    ("redis", "Redis"),
    ("mongodb", "MongoDB"),
    ("elasticsearch", "Elasticsearch"),
];

// (id, name, revenue, description)
const OPPORTUNITIES: &[(&str, &str, &str, &str)] = &[
    ("enterprise-tier", "Enterprise Tier", "$500k ARR", "B2B enterprise package"),
    ("api-marketplace", "API Marketplace", "$200k ARR", "Developer API access"),
    ("white-label", "White Label Solution", "$300k ARR", "Customizable platform"),
];

const LINKS: &[(&str, &str, LinkType)] = &[
    ("ecommerce-platform", "react", LinkType::Uses),
    ("ecommerce-platform", "nextjs", LinkType::Uses),
    ("ecommerce-platform", "typescript", LinkType::Uses),
    ("ecommerce-platform", "tailwind", LinkType::Uses),
    ("ecommerce-platform", "postgresql", LinkType::Uses),
    ("ecommerce-platform", "redis", LinkType::Uses),
    ("ecommerce-platform", "stripe-api", LinkType::Integrates),
    ("ecommerce-platform", "recommendation-engine", LinkType::Uses),
    ("mobile-app", "react", LinkType::Uses),
    ("mobile-app", "typescript", LinkType::Uses),
    ("admin-dashboard", "react", LinkType::Uses),
    ("admin-dashboard", "typescript", LinkType::Uses),
    ("admin-dashboard", "postgresql", LinkType::Uses),
    ("analytics-engine", "python", LinkType::Uses),
    ("analytics-engine", "fastapi", LinkType::Uses),
    ("analytics-engine", "mongodb", LinkType::Uses),
    ("analytics-engine", "elasticsearch", LinkType::Uses),
    ("payment-service", "go", LinkType::Uses),
    ("payment-service", "postgresql", LinkType::Uses),
    ("payment-service", "stripe-api", LinkType::Integrates),
    ("payment-service", "fraud-detection", LinkType::Uses),
    ("user-portal", "nextjs", LinkType::Uses),
    ("user-portal", "typescript", LinkType::Uses),
    ("user-portal", "postgresql", LinkType::Uses),
    ("api-gateway", "go", LinkType::Uses),
    ("api-gateway", "redis", LinkType::Uses),
    ("notification-service", "python", LinkType::Uses),
    ("notification-service", "django", LinkType::Uses),
    ("notification-service", "sendgrid-api", LinkType::Integrates),
    ("notification-service", "twilio", LinkType::Integrates),
    ("notification-service", "redis", LinkType::Uses),
    ("search-engine", "python", LinkType::Uses),
    ("search-engine", "elasticsearch", LinkType::Uses),
    ("inventory-system", "java", LinkType::Uses),
    ("inventory-system", "postgresql", LinkType::Uses),
    ("recommendation-engine", "python", LinkType::Uses),
    ("recommendation-engine", "fastapi", LinkType::Uses),
    ("recommendation-engine", "openai-api", LinkType::Integrates),
    ("recommendation-engine", "postgresql", LinkType::Uses),
    ("fraud-detection", "python", LinkType::Uses),
    ("fraud-detection", "redis", LinkType::Uses),
    ("image-processor", "python", LinkType::Uses),
    ("image-processor", "aws-s3", LinkType::Integrates),
    ("ecommerce-platform", "payment-service", LinkType::Depends),
    ("ecommerce-platform", "search-engine", LinkType::Depends),
    ("ecommerce-platform", "notification-service", LinkType::Depends),
    ("mobile-app", "api-gateway", LinkType::Depends),
    ("admin-dashboard", "inventory-system", LinkType::Depends),
    ("user-portal", "payment-service", LinkType::Depends),
    ("enterprise-tier", "ecommerce-platform", LinkType::Monetizes),
    ("api-marketplace", "api-gateway", LinkType::Monetizes),
    ("white-label", "ecommerce-platform", LinkType::Monetizes),
];

fn build_demo_graph() -> Graph {
    let mut nodes = Vec::new();

    for (id, name, category, description) in PLATFORMS {
        nodes.push(
            Node::new(*id, *name, NodeType::Platform)
                .with_category(*category)
                .with_description(*description),
        );
    }
    for (id, name, description) in ENGINES {
        nodes.push(Node::new(*id, *name, NodeType::Engine).with_description(*description));
    }
    for (id, name, node_type) in TECHNOLOGIES {
        nodes.push(Node::new(*id, *name, *node_type));
    }
    for (id, name, description) in APIS {
        nodes.push(Node::new(*id, *name, NodeType::Api).with_description(*description));
    }
    for (id, name) in DATABASES {
        nodes.push(Node::new(*id, *name, NodeType::Database));
    }
    for (id, name, revenue, description) in OPPORTUNITIES {
        nodes.push(
            Node::new(*id, *name, NodeType::Opportunity)
                .with_revenue(*revenue)
                .with_description(*description),
        );
    }

    let links = LINKS
        .iter()
        .map(|(source, target, link_type)| Link::new(*source, *target, *link_type))
        .collect();

    Graph { nodes, links }
}
