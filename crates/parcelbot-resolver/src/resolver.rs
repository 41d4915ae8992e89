//! Core Resolver implementation

use crate::preamble::build_prompt;
use crate::reply::Reply;
use parcelbot_domain::TextGenerator;
use parcelbot_tracking::{CodeExtractor, TrackingDataset};
use tracing::{debug, info, warn};

/// Routes one user utterance to either the tracking-lookup path or the
/// generative-answer path.
///
/// Construct once and call repeatedly; `respond` is a pure function of the
/// utterance over the immutable dataset, plus at most one outbound provider
/// call on the non-tracking path.
pub struct Resolver<P>
where
    P: TextGenerator,
{
    extractor: CodeExtractor,
    dataset: TrackingDataset,
    provider: P,
}

impl<P> Resolver<P>
where
    P: TextGenerator,
{
    /// Create a new Resolver over a loaded dataset and a configured provider.
    pub fn new(dataset: TrackingDataset, provider: P) -> Self {
        Self {
            extractor: CodeExtractor::new(),
            dataset,
            provider,
        }
    }

    /// Answer one utterance.
    ///
    /// Always returns displayable text; tracking misses, a missing dataset
    /// and provider faults all surface as user-facing messages, never as
    /// errors.
    pub fn respond(&self, utterance: &str) -> String {
        self.resolve(utterance).render()
    }

    /// The dataset this resolver answers from. The harness reads it for its
    /// sample-rows view.
    pub fn dataset(&self) -> &TrackingDataset {
        &self.dataset
    }

    /// The decision procedure behind [`respond`](Self::respond), returning
    /// the named branch for callers that want to inspect it.
    pub fn resolve(&self, utterance: &str) -> Reply {
        if let Some(code) = self.extractor.extract(utterance) {
            return match self.dataset.lookup(&code) {
                Some(record) => {
                    info!(code = %code, carrier = %record.carrier, "tracking lookup hit");
                    Reply::TrackingFound(record.clone())
                }
                None => {
                    info!(code = %code, "tracking lookup miss");
                    Reply::TrackingMiss { code }
                }
            };
        }

        debug!("no tracking code, taking generative path");
        let prompt = build_prompt(utterance);

        match self.provider.generate(&prompt) {
            Ok(text) => {
                info!(chars = text.len(), "provider answered");
                Reply::Generated(text)
            }
            Err(e) => {
                warn!(error = %e, "provider call failed");
                Reply::ProviderFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
