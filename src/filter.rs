//! Document filters and the pipeline running them.

use std::fmt::{self, Debug, Formatter};

use crate::document::Document;
use crate::lists::{Bulleted, ListFlavor, Lists, Numbered};
use crate::options::Options;

/// A pass over a whole document.
pub trait Filter {
    /// Transforms `document`, returning the result.
    fn filter(&self, document: Document) -> Document;
}

impl<F: ListFlavor> Filter for Lists<F> {
    fn filter(&self, document: Document) -> Document {
        self.scan(document)
    }
}

/// Filters run one after another, each seeing the previous one's output.
#[derive(Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Debug for Pipeline {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Pipeline({} filters)", self.filters.len())
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list filters selected by `options`, in their configured order.
    pub fn from_options(options: &Options) -> Self {
        let lists = &options.lists;
        let mut pipeline = Pipeline::new();

        if lists.numbered_first && lists.numbered {
            pipeline.push(Lists::new(Numbered));
        }
        if lists.bulleted {
            pipeline.push(Lists::new(Bulleted));
        }
        if !lists.numbered_first && lists.numbered {
            pipeline.push(Lists::new(Numbered));
        }

        pipeline
    }

    pub fn push<F: Filter + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn run(&self, document: Document) -> Document {
        self.filters
            .iter()
            .fold(document, |document, filter| filter.filter(document))
    }
}
