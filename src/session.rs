//! Live resegmentation of an editable input.
//!
//! A [`ResegmentSession`] keeps the current input and its resegmented output,
//! recomputing the output every time the input changes and handing it to each
//! subscriber. Updates take `&mut self`, so they run one after another and
//! the output seen last always belongs to the input set last.

use crate::pipeline::{Outcome, SentenceResegmenter};

type Subscriber = Box<dyn FnMut(&str) + Send>;

/// Holds an input string and keeps its resegmented form up to date
pub struct ResegmentSession {
    pipeline: SentenceResegmenter,
    input: String,
    outcome: Outcome,
    generation: u64,
    subscribers: Vec<Subscriber>,
}

impl ResegmentSession {
    /// Create a session with an empty input
    pub fn new(pipeline: SentenceResegmenter) -> Self {
        ResegmentSession {
            pipeline,
            input: String::new(),
            outcome: Outcome::default(),
            generation: 0,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback that receives every new output
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Set a new input (`None` clears it), recompute and notify subscribers
    pub fn update(&mut self, input: Option<&str>) -> &str {
        let input = input.unwrap_or_default();

        self.input.clear();
        self.input.push_str(input);
        self.outcome = self.pipeline.process_lenient(input);
        self.generation += 1;

        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.outcome.output);
        }

        &self.outcome.output
    }

    /// The current input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output for the current input
    pub fn output(&self) -> &str {
        &self.outcome.output
    }

    /// Language and break count along with the output
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Number of updates so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get a reference to the pipeline
    pub fn pipeline(&self) -> &SentenceResegmenter {
        &self.pipeline
    }
}

impl Default for ResegmentSession {
    fn default() -> Self {
        Self::new(SentenceResegmenter::new())
    }
}
