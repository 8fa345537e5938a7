use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use crate::analysis::{ProjectSignals, SignalExtractor};
use crate::graph::{Graph, GraphSynthesizer, LinkType};
use crate::ingestion::github::{GitHubClient, GitHubRepository};

/// Fetches and extracts repositories concurrently, at most `concurrency` at
/// a time. Results come back in listing order regardless of completion order.
#[derive(Clone)]
pub struct RepositoryScanner {
    client: GitHubClient,
    extractor: Arc<SignalExtractor>,
    concurrency: usize,
}

impl RepositoryScanner {
    pub fn new(client: GitHubClient, concurrency: usize) -> Self {
        RepositoryScanner {
            client,
            extractor: Arc::new(SignalExtractor::new()),
            concurrency: concurrency.max(1),
        }
    }

    /// Scan every repository visible to the token holder
    pub async fn scan(&self, token: &str) -> Result<Vec<ProjectSignals>> {
        let repos = self.client.list_repositories(token).await?;
        info!("Scanning {} repositories", repos.len());
        Ok(self.scan_repositories(token, repos).await)
    }

    pub async fn scan_repositories(&self, token: &str, repos: Vec<GitHubRepository>) -> Vec<ProjectSignals> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for (index, repo) in repos.into_iter().enumerate() {
            let client = self.client.clone();
            let extractor = self.extractor.clone();
            let semaphore = semaphore.clone();
            let token = token.to_string();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let snapshot = client.fetch_snapshot(&token, &repo).await;
                let signals = extractor.extract(&snapshot.metadata, &snapshot.languages, &snapshot.files);
                debug!(
                    "Scanned {}: {} languages, {} frameworks, {} apis, {} databases",
                    repo.full_name,
                    signals.languages.len(),
                    signals.frameworks.len(),
                    signals.apis.len(),
                    signals.databases.len()
                );
                (index, signals)
            });
        }

        let mut scanned = Vec::new();
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(entry) => scanned.push(entry),
                Err(e) => warn!("Skipping repository, scan task failed: {}", e),
            }
        }

        scanned.sort_by_key(|(index, _)| *index);
        scanned.into_iter().map(|(_, signals)| signals).collect()
    }

    /// Scan and synthesize the map in one go
    pub async fn build_map(&self, token: &str) -> Result<Graph> {
        let signals = self.scan(token).await?;
        let graph = GraphSynthesizer::synthesize(&signals);

        let dangling = graph.dangling_links();
        if !dangling.is_empty() {
            warn!("Map has {} links to unknown nodes", dangling.len());
        }

        let stats = graph.get_statistics();
        info!(
            "Built map from {} repositories: {} nodes, {} links ({} related)",
            signals.len(),
            stats.total_nodes,
            stats.total_links,
            graph.links_of_type(LinkType::Related).count()
        );
        Ok(graph)
    }
}
