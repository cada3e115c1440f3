pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A node in an owned SVG tree
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

impl From<SvgElement> for SvgNode {
    fn from(element: SvgElement) -> Self {
        SvgNode::Element(element)
    }
}

/// An owned SVG element.
///
/// Elements own their children outright, so `clone()` is a deep copy and a
/// subtree can be placed into any number of output documents independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    /// Qualified name as it will be written (`rect`, `svg:rect`)
    pub name: String,
    /// Resolved namespace URI, `None` for unqualified elements
    pub namespace: Option<String>,
    /// Attributes in document order, namespace declarations included
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    /// Create an element in the SVG namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(SVG_NAMESPACE.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn push_child(&mut self, child: impl Into<SvgNode>) {
        self.children.push(child.into());
    }

    /// Element name without its prefix
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|child| match child {
            SvgNode::Element(element) => Some(element),
            SvgNode::Text(_) => None,
        })
    }

    /// True for `<svg>` elements, either unqualified or in the SVG namespace
    pub fn is_document_root(&self) -> bool {
        self.local_name() == "svg"
            && self
                .namespace
                .as_deref()
                .is_none_or(|ns| ns == SVG_NAMESPACE)
    }
}
