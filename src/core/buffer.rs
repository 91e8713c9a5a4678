//! Buffer stack for capturing modes
//!
//! One accumulator per open capturing mode. The automaton pushes and pops
//! buffers in lock-step with the mode stack; an access to an empty stack
//! means that invariant was broken and is reported as an internal error.

use crate::utils::error::{StripError, StripResult};

#[derive(Debug, Default, Clone)]
pub struct BufferStack {
    buffers: Vec<String>,
}

impl BufferStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.buffers.push(String::new());
    }

    pub fn append(&mut self, text: &str) -> StripResult<()> {
        match self.buffers.last_mut() {
            Some(top) => {
                top.push_str(text);
                Ok(())
            }
            None => Err(StripError::internal("append to an empty buffer stack")),
        }
    }

    pub fn pop(&mut self) -> StripResult<String> {
        self.buffers
            .pop()
            .ok_or_else(|| StripError::internal("pop from an empty buffer stack"))
    }

    pub fn depth(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
