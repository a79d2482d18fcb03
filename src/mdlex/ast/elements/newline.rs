//! Newline element: a line ending that starts a block, i.e. a blank line

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn from_value(value: &str) -> Option<LineEnding> {
        match value {
            "\n" => Some(LineEnding::Lf),
            "\r\n" => Some(LineEnding::CrLf),
            "\r" => Some(LineEnding::Cr),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Newline {
    pub indent: String,
    pub ending: LineEnding,
    pub location: Location,
}

impl Newline {
    pub fn new(indent: String, ending: LineEnding, location: Location) -> Self {
        Self {
            indent,
            ending,
            location,
        }
    }
}

impl AstNode for Newline {
    fn node_type(&self) -> NodeType {
        NodeType::Newline
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.ending)
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_newline(self);
    }
}

impl ToText for Newline {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        out.push_str(self.ending.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings() {
        for ending in [LineEnding::Lf, LineEnding::CrLf, LineEnding::Cr] {
            assert_eq!(LineEnding::from_value(ending.as_str()), Some(ending));
        }
        assert_eq!(LineEnding::from_value("x"), None);
    }

    #[test]
    fn test_newline_to_text() {
        let newline = Newline::new("  ".to_string(), LineEnding::CrLf, Location::default());
        assert_eq!(newline.to_text(), "  \r\n");
    }
}
