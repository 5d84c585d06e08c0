//! The merge pipeline.
//!
//! ```text
//! inputs ─ flatten ─ parse_token ─ classify ─ resolve ─ assemble ─ String
//! ```
//!
//! A `Pipeline` only borrows the compiled rule table and scope settings, so it
//! is cheap to create per call; all per-call state is local to `run`.

use std::time::Instant;

use super::classify::classify;
use super::flatten::{assemble, flatten};
use super::metrics::MergeMetrics;
use super::modifiers::ModifierSorter;
use super::resolve::{Outcome, resolve};
use super::rule_table::RuleTable;
use super::token::parse_token;
use crate::{Classification, ParsedToken};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Pipeline<'m> {
    pub table: &'m RuleTable,
    pub sorter: &'m ModifierSorter,
    pub prefix: Option<&'m str>,
}

/// Everything a verbose merge observed, index-aligned per token.
#[derive(Debug)]
pub(crate) struct PipelineRun<'a> {
    pub tokens: Vec<ParsedToken<'a>>,
    pub classes: Vec<Option<Classification<'a>>>,
    pub outcomes: Vec<Outcome>,
    pub output: String,
    pub metrics: MergeMetrics,
}

impl<'m> Pipeline<'m> {
    fn parse<'a>(&self, inputs: &[&'a str]) -> Vec<ParsedToken<'a>> {
        flatten(inputs).into_iter().map(|raw| parse_token(raw, self.prefix)).collect()
    }

    fn classify_all<'a>(&self, tokens: &[ParsedToken<'a>]) -> Vec<Option<Classification<'a>>> {
        tokens.iter().map(|token| classify(self.table, token)).collect()
    }

    fn finish(tokens: &[ParsedToken<'_>], outcomes: &[Outcome]) -> String {
        let originals: Vec<&str> = tokens.iter().map(|token| token.original).collect();
        assemble(&originals, outcomes)
    }

    /// Merge `inputs`.
    pub fn run(&self, inputs: &[&str]) -> String {
        let tokens = self.parse(inputs);
        let classes = self.classify_all(&tokens);
        let outcomes = resolve(self.table, self.sorter, &tokens, &classes);
        Self::finish(&tokens, &outcomes)
    }

    /// Merge `inputs`, keeping per-token results and stage timings.
    pub fn run_with_metrics<'a>(&self, inputs: &[&'a str]) -> PipelineRun<'a> {
        let total_start = Instant::now();

        let parse_start = Instant::now();
        let tokens = self.parse(inputs);
        let parse = parse_start.elapsed();

        let classify_start = Instant::now();
        let classes = self.classify_all(&tokens);
        let classify = classify_start.elapsed();

        let resolve_start = Instant::now();
        let outcomes = resolve(self.table, self.sorter, &tokens, &classes);
        let output = Self::finish(&tokens, &outcomes);
        let resolve = resolve_start.elapsed();

        let metrics = MergeMetrics { total: total_start.elapsed(), parse, classify, resolve };
        PipelineRun { tokens, classes, outcomes, output, metrics }
    }
}
