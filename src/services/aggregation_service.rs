use tracing::{debug, info};

use crate::domain::{Digest, NewsEntry, RawEntry, Source};
use crate::services::scoring_service::score;
use crate::services::summary_service::{SummaryOrigin, SummaryService};
use crate::sources::{fetch_or_empty, FeedSource};

pub struct AggregationService<S: FeedSource> {
    source: S,
    summarizer: SummaryService,
}

impl<S: FeedSource> AggregationService<S> {
    pub fn new(source: S, summarizer: SummaryService) -> Self {
        Self { source, summarizer }
    }

    /// Fetch, summarize and score up to `per_source` entries from each source,
    /// in source-then-feed order. Unreachable sources contribute nothing.
    pub fn collect(&self, sources: &[Source], per_source: usize) -> Vec<NewsEntry> {
        let mut all_news = Vec::new();
        let mut from_model = 0;

        for source in sources {
            let raw_entries = fetch_or_empty(&self.source, &source.url);
            debug!(source = %source.name, available = raw_entries.len(), "source fetched");

            for raw in raw_entries.into_iter().take(per_source) {
                let (entry, origin) = self.build_entry(&source.name, raw);
                if origin == SummaryOrigin::Model {
                    from_model += 1;
                }
                all_news.push(entry);
            }
        }

        info!(
            entries = all_news.len(),
            model_summaries = from_model,
            "news collected"
        );
        all_news
    }

    /// Run one full pass and rank the result
    pub fn aggregate(&self, sources: &[Source], per_source: usize, top_n: usize) -> Digest {
        rank(self.collect(sources, per_source), top_n)
    }

    fn build_entry(&self, source_name: &str, raw: RawEntry) -> (NewsEntry, SummaryOrigin) {
        let raw_text = raw.body();
        let (summary, origin) = self.summarizer.summarize_with_origin(raw_text);
        let score = score(&raw.title, raw_text, &summary);

        let entry = NewsEntry {
            source: source_name.to_string(),
            title: raw.title,
            link: raw.link,
            summary,
            score,
        };
        (entry, origin)
    }
}

/// Split `entries` into the `top_n` best scored (ties keep collection order)
/// and the remainder in collection order.
pub fn rank(entries: Vec<NewsEntry>, top_n: usize) -> Digest {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| entries[b].score.cmp(&entries[a].score));

    let mut highlighted = vec![false; entries.len()];
    let mut highlights = Vec::with_capacity(top_n.min(entries.len()));
    for &index in order.iter().take(top_n) {
        highlighted[index] = true;
        highlights.push(entries[index].clone());
    }

    let rest = entries
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !highlighted[*index])
        .map(|(_, entry)| entry)
        .collect();

    Digest { highlights, rest }
}
