//! Typed placeholder substitution for embedded files.

use std::marker::PhantomData;

/// A set of values a template knows how to fill in.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Embedded text whose placeholders are described by `V`.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}
