//! Eligibility classification.
//!
//! A file is only a candidate for stripping when it declares a public class
//! and carries at least one Lombok annotation that generates the members we
//! are about to delete. Without the annotation, removing hand-written
//! constructors and getters would leave the class with neither.

use crate::scan::Cursor;
use serde::Serialize;
use std::fmt;

/// Lombok annotations whose presence makes explicit constructors and
/// getters redundant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoilerplateMarker {
    RequiredArgsConstructor,
    AllArgsConstructor,
    NoArgsConstructor,
    Data,
}

impl BoilerplateMarker {
    pub const ALL: [BoilerplateMarker; 4] = [
        BoilerplateMarker::RequiredArgsConstructor,
        BoilerplateMarker::AllArgsConstructor,
        BoilerplateMarker::NoArgsConstructor,
        BoilerplateMarker::Data,
    ];

    /// The annotation text as it appears in source.
    pub fn annotation(self) -> &'static str {
        match self {
            BoilerplateMarker::RequiredArgsConstructor => "@RequiredArgsConstructor",
            BoilerplateMarker::AllArgsConstructor => "@AllArgsConstructor",
            BoilerplateMarker::NoArgsConstructor => "@NoArgsConstructor",
            BoilerplateMarker::Data => "@Data",
        }
    }
}

impl fmt::Display for BoilerplateMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation())
    }
}

/// Name captured from the first `public class <Name>` in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeclaredType(String);

impl DeclaredType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// No `public class <Name>` declaration was found.
    NoDeclaredType,
    /// A class was found but no marker annotation.
    NoMarker { declared: DeclaredType },
    Eligible {
        declared: DeclaredType,
        markers: Vec<BoilerplateMarker>,
    },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }

    pub fn declared(&self) -> Option<&DeclaredType> {
        match self {
            Eligibility::NoDeclaredType => None,
            Eligibility::NoMarker { declared } | Eligibility::Eligible { declared, .. } => {
                Some(declared)
            }
        }
    }
}

/// Find the first `public <ws>+ class <ws>+ <word>` in the text.
///
/// Modifiers between `public` and `class` (`final`, `abstract`) are not
/// accepted.
pub fn declared_type(text: &str) -> Option<DeclaredType> {
    text.match_indices("public").find_map(|(idx, keyword)| {
        let mut cur = Cursor::at(text, idx + keyword.len());
        cur.require_ws()?;
        cur.eat_str("class").then_some(())?;
        cur.require_ws()?;
        cur.eat_word().map(|name| DeclaredType(name.to_string()))
    })
}

/// Markers present anywhere in the text, in [`BoilerplateMarker::ALL`] order.
///
/// Matching is textual: `@Data` also matches inside `@DataJpaTest`.
pub fn markers_present(text: &str) -> Vec<BoilerplateMarker> {
    BoilerplateMarker::ALL
        .into_iter()
        .filter(|marker| text.contains(marker.annotation()))
        .collect()
}

pub fn classify(text: &str) -> Eligibility {
    let Some(declared) = declared_type(text) else {
        return Eligibility::NoDeclaredType;
    };

    let markers = markers_present(text);
    if markers.is_empty() {
        Eligibility::NoMarker { declared }
    } else {
        Eligibility::Eligible { declared, markers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_basic() {
        let text = "package a;\n\npublic class Foo {\n}\n";
        assert_eq!(declared_type(text).unwrap().as_str(), "Foo");
    }

    #[test]
    fn test_declared_type_multiline_whitespace() {
        let text = "public\n  class\tBar implements Baz {}";
        assert_eq!(declared_type(text).unwrap().as_str(), "Bar");
    }

    #[test]
    fn test_declared_type_skips_non_class_public() {
        let text = "public interface A {}\npublic class B {}";
        assert_eq!(declared_type(text).unwrap().as_str(), "B");
    }

    #[test]
    fn test_declared_type_rejects_modifiers() {
        assert_eq!(declared_type("public final class Foo {}"), None);
        assert_eq!(declared_type("public abstract class Foo {}"), None);
    }

    #[test]
    fn test_declared_type_requires_whitespace() {
        assert_eq!(declared_type("public classic Foo {}"), None);
        assert_eq!(declared_type("public class{}"), None);
    }

    #[test]
    fn test_markers_present_any_order() {
        let text = "@Data\n@NoArgsConstructor\npublic class Foo {}";
        assert_eq!(
            markers_present(text),
            vec![BoilerplateMarker::NoArgsConstructor, BoilerplateMarker::Data]
        );
    }

    #[test]
    fn test_markers_other_lombok_annotations_ignored() {
        let text = "@Getter\n@Setter\n@Builder\npublic class Foo {}";
        assert!(markers_present(text).is_empty());
    }

    #[test]
    fn test_classify_no_declared_type() {
        assert_eq!(classify("@Data\nclass Foo {}"), Eligibility::NoDeclaredType);
    }

    #[test]
    fn test_classify_no_marker() {
        let result = classify("public class Foo {}");
        assert!(!result.is_eligible());
        assert_eq!(result.declared().unwrap().as_str(), "Foo");
    }

    #[test]
    fn test_classify_eligible() {
        let result = classify("@AllArgsConstructor\npublic class Foo {}");
        assert!(result.is_eligible());
        match result {
            Eligibility::Eligible { declared, markers } => {
                assert_eq!(declared.as_str(), "Foo");
                assert_eq!(markers, vec![BoilerplateMarker::AllArgsConstructor]);
            }
            other => panic!("expected eligible, got {other:?}"),
        }
    }
}
