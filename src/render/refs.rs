//! Cross-reference resolution to numbered anchors.

use super::{escape_html, FragmentRenderer};

impl<'a> FragmentRenderer<'a> {
    /// Link to a numbered equation: `(N)` targeting `#eq:<id>`.
    ///
    /// Unknown ids are recoverable: one diagnostic is recorded and the
    /// literal `(eq:<id>)` is emitted so the document stays renderable.
    pub fn eqref(&mut self, id: &str) -> String {
        match self.labels.equation(id) {
            Some(eq) => format!(
                r##"<a class="eq-ref" href="#eq:{}">({})</a>"##,
                escape_html(id),
                eq.number
            ),
            None => {
                self.diagnose(format!("cannot find equation `{}`", id));
                format!("(eq:{})", escape_html(id))
            }
        }
    }

    /// Link to a numbered labelled block: the container's number targeting
    /// `#<id>` directly.
    ///
    /// Unknown ids fall back to the literal `\ref{<id>}` plus a diagnostic.
    pub fn block_ref(&mut self, id: &str) -> String {
        match self.labels.container_number(id) {
            Some(number) => format!(
                r##"<a class="ref" href="#{}">{}</a>"##,
                escape_html(id),
                number
            ),
            None => {
                self.diagnose(format!("cannot find reference `{}`", id));
                format!("\\ref{{{}}}", escape_html(id))
            }
        }
    }
}
