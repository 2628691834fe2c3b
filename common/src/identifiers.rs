use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackId(String);

impl StackId {
    pub fn for_index(stack_index: usize) -> Self {
        Self(format!("stack-{}", stack_index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<StackId> for String {
    fn from(id: StackId) -> Self {
        id.0
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn for_slot(stack_index: usize, slot_index: usize) -> Self {
        Self(format!("stack-{}-block-{}", stack_index, slot_index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<BlockId> for String {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
