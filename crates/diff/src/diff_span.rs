use derive_more::Display;
use similar::ChangeTag;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation a span of text represents when going from the old text to the new one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffOp {
    /// Text present in both versions
    #[display(fmt = "equal")]
    Equal,

    /// Text only present in the new version
    #[display(fmt = "insert")]
    Insert,

    /// Text only present in the old version
    #[display(fmt = "delete")]
    Delete,
}

impl DiffOp {
    /// Whether text carrying this operation belongs to the old version
    pub fn in_old(self) -> bool {
        matches!(self, DiffOp::Equal | DiffOp::Delete)
    }

    /// Whether text carrying this operation belongs to the new version
    pub fn in_new(self) -> bool {
        matches!(self, DiffOp::Equal | DiffOp::Insert)
    }
}

impl From<ChangeTag> for DiffOp {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => DiffOp::Equal,
            ChangeTag::Insert => DiffOp::Insert,
            ChangeTag::Delete => DiffOp::Delete,
        }
    }
}

/// A contiguous run of text sharing one operation
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{}({:?})", op, text)]
pub struct DiffSpan {
    /// What happened to the text
    pub op: DiffOp,

    /// The text itself
    pub text: String,
}

impl DiffSpan {
    /// Create a new span
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffOp::Delete, text)
    }

    /// Number of characters in the span
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if this span changes anything
    pub fn is_change(&self) -> bool {
        self.op != DiffOp::Equal
    }
}
