use std::collections::HashMap;

/// A parsed XML document.
///
/// Only the root element is kept; the prolog, comments and processing
/// instructions carry nothing the converter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

/// Represents an XML element
///
/// `tag` is the qualified name exactly as written (`OMA`, `om:OMA`).
/// `text` is the concatenation of the character data and CDATA sections
/// directly inside the element, with entities decoded. It is `None` when the
/// element holds no text at all.
///
/// For example:
///
/// ```text
/// <OMA><OMS cd="arith1" name="plus"/><OMI>2</OMI></OMA>
/// ```
///
/// is an `OMA` element with two children, the second of which has the text `2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            text: None,
            children: vec![],
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The tag without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.tag.rsplit(':').next().unwrap_or(&self.tag)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl Drop for Element {
    // Flattens the subtree first so dropping a deep tree does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}
