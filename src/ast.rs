//! Typed nodes consumed by the fragment renderer.
//!
//! Nodes are created by an external parser and are immutable inputs here.

/// Whether math appears in running text or as a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    /// Math inside a line of text, aligned to the surrounding baseline.
    Inline,
    /// A display equation in its own block.
    Equation,
}

/// Number and label assigned to a display equation.
///
/// Numbers are assigned in document order before rendering; an equation
/// carries a number exactly when it carries a label, which this struct
/// encodes by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqLabel {
    pub label: String,
    pub number: u32,
}

/// A math node: TeX source plus positioning information.
#[derive(Debug, Clone, PartialEq)]
pub struct MathContent {
    pub kind: MathKind,
    /// TeX source, exactly as written.
    pub source: String,
    /// Present only for numbered display equations.
    pub label: Option<EqLabel>,
}

impl MathContent {
    /// Inline math with no label.
    pub fn inline(source: impl Into<String>) -> Self {
        Self {
            kind: MathKind::Inline,
            source: source.into(),
            label: None,
        }
    }

    /// An unnumbered display equation.
    pub fn equation(source: impl Into<String>) -> Self {
        Self {
            kind: MathKind::Equation,
            source: source.into(),
            label: None,
        }
    }

    /// A numbered display equation with a label.
    pub fn labelled_equation(
        source: impl Into<String>,
        label: impl Into<String>,
        number: u32,
    ) -> Self {
        Self {
            kind: MathKind::Equation,
            source: source.into(),
            label: Some(EqLabel {
                label: label.into(),
                number,
            }),
        }
    }
}

/// A citation node: an ordered list of raw citation keys.
///
/// Keys keep their document order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub keys: Vec<String>,
}

impl Citation {
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_equation_carries_number() {
        let node = MathContent::labelled_equation("E = mc^2", "mass", 4);
        assert_eq!(node.kind, MathKind::Equation);
        let eq = node.label.unwrap();
        assert_eq!(eq.label, "mass");
        assert_eq!(eq.number, 4);
    }

    #[test]
    fn test_inline_has_no_label() {
        assert!(MathContent::inline("x").label.is_none());
    }
}
