//! Corpus model: the capped text handed to the report synthesizer.

use std::fmt;

use super::{item::truncate_chars, CapturedItem};
use crate::config::DigestConfig;

/// Ordered, size-capped sequence of serialized items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    blocks: Vec<String>,
}

impl Corpus {
    /// Separator placed between serialized items.
    pub const DELIMITER: &'static str = "\n---\n";

    /// Serializes at most `cap` items, in the given order.
    pub fn from_items(items: &[CapturedItem], cap: usize) -> Self {
        Self {
            blocks: items.iter().take(cap).map(research_block).collect(),
        }
    }

    /// Builds the daily digest input from items already ordered by heat:
    /// every item at or above the heat floor, then a bounded number of the
    /// rest.
    pub fn digest(items: &[CapturedItem], config: &DigestConfig) -> Self {
        let hot = items
            .iter()
            .filter(|item| item.heat_score >= config.min_heat_score);
        let cold = items
            .iter()
            .filter(|item| item.heat_score < config.min_heat_score)
            .take(config.low_heat_allowance);
        Self {
            blocks: hot
                .chain(cold)
                .map(|item| digest_block(item, config.context_chars))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// The concatenated model input.
    pub fn text(&self) -> String {
        self.blocks.join(Self::DELIMITER)
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

fn research_block(item: &CapturedItem) -> String {
    format!(
        "Source: r/{}\nTitle: {}\nHeat: {}\nBody: {}\nUrl: {}",
        item.source, item.title, item.heat_score, item.body, item.url
    )
}

fn digest_block(item: &CapturedItem, context_chars: usize) -> String {
    format!(
        "[{} pts] r/{}: {}\nContext: {}...",
        item.heat_score,
        item.source,
        item.title,
        truncate_chars(&item.body, context_chars)
    )
}
