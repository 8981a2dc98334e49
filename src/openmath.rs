//! OpenMath constructs
//!
//! The closed set of element kinds the converter understands. Classifying an
//! [`Element`] is shallow: an application keeps borrowing its children, which
//! are classified one at a time as the translator reaches them.

use crate::Error;
use crate::parser::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Variable,
    Symbol,
    Integer,
    Decimal,
    Application,
}

impl Tag {
    /// The one place the raw tag string is compared.
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "OMV" => Some(Tag::Variable),
            "OMS" => Some(Tag::Symbol),
            "OMI" => Some(Tag::Integer),
            "OMF" => Some(Tag::Decimal),
            "OMA" => Some(Tag::Application),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Variable => "OMV",
            Tag::Symbol => "OMS",
            Tag::Integer => "OMI",
            Tag::Decimal => "OMF",
            Tag::Application => "OMA",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Construct<'a> {
    Variable {
        name: &'a str,
    },
    Symbol {
        cd: &'a str,
        name: &'a str,
    },
    /// Canonical decimal digits of an arbitrary-precision integer.
    Integer(String),
    Decimal(f64),
    /// The operator is the first child, every following child is an argument.
    Application {
        operator: &'a Element,
        arguments: &'a [Element],
    },
}

impl<'a> Construct<'a> {
    pub fn classify(element: &'a Element) -> Result<Self, Error> {
        let tag = Tag::from_local_name(element.local_name())
            .ok_or_else(|| Error::UnrecognizedConstruct(element.tag.clone()))?;

        let construct = match tag {
            Tag::Variable => Construct::Variable {
                name: required(element, tag, "name")?,
            },
            Tag::Symbol => Construct::Symbol {
                cd: required(element, tag, "cd")?,
                name: required(element, tag, "name")?,
            },
            Tag::Integer => {
                let text = element.text.as_deref().unwrap_or_default();
                let value = canonical_integer(text.trim()).ok_or_else(|| {
                    Error::MalformedInteger {
                        text: text.to_string(),
                    }
                })?;
                Construct::Integer(value)
            }
            Tag::Decimal => {
                let dec = required(element, tag, "dec")?;
                let value = dec
                    .trim()
                    .parse()
                    .map_err(|source| Error::MalformedDecimal {
                        text: dec.to_string(),
                        source,
                    })?;
                Construct::Decimal(value)
            }
            Tag::Application => match element.children.split_first() {
                Some((operator, arguments)) => Construct::Application {
                    operator,
                    arguments,
                },
                None => {
                    return Err(Error::StructuralViolation(format!(
                        "{} without an operator",
                        element.tag
                    )));
                }
            },
        };

        Ok(construct)
    }
}

/// `[+-]?[0-9]+` without the plus sign and leading zeros.
fn canonical_integer(text: &str) -> Option<String> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.trim_start_matches('0');
    Some(match (negative, magnitude) {
        (_, "") => "0".to_string(),
        (true, magnitude) => format!("-{magnitude}"),
        (false, magnitude) => magnitude.to_string(),
    })
}

fn required<'a>(
    element: &'a Element,
    tag: Tag,
    attribute: &'static str,
) -> Result<&'a str, Error> {
    element
        .attribute(attribute)
        .ok_or(Error::MissingAttribute {
            tag: tag.as_str(),
            attribute,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_leaves() {
        let v = Element::new("OMV").with_attribute("name", "x");
        assert_eq!(
            Construct::classify(&v).unwrap(),
            Construct::Variable { name: "x" }
        );

        let s = Element::new("om:OMS")
            .with_attribute("cd", "arith1")
            .with_attribute("name", "plus");
        assert_eq!(
            Construct::classify(&s).unwrap(),
            Construct::Symbol {
                cd: "arith1",
                name: "plus"
            }
        );

        let i = Element::new("OMI").with_text("\n  -17 ");
        assert_eq!(
            Construct::classify(&i).unwrap(),
            Construct::Integer("-17".to_string())
        );

        let f = Element::new("OMF").with_attribute("dec", "2.5e3");
        assert_eq!(Construct::classify(&f).unwrap(), Construct::Decimal(2500.0));
    }

    #[test]
    fn test_integers_are_unbounded() {
        for (text, expected) in [
            ("123456789012345678901234567890", "123456789012345678901234567890"),
            ("-98765432109876543210", "-98765432109876543210"),
            ("+0042", "42"),
            ("-000", "0"),
            ("0", "0"),
        ] {
            let i = Element::new("OMI").with_text(text);
            assert_eq!(
                Construct::classify(&i).unwrap(),
                Construct::Integer(expected.to_string()),
                "{text}"
            );
        }

        for text in ["", "-", "+", "1 000", "x1F", "1.0", "٣"] {
            let i = Element::new("OMI").with_text(text);
            assert!(
                matches!(Construct::classify(&i), Err(Error::MalformedInteger { .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_classify_application() {
        let app = Element::new("OMA")
            .with_child(Element::new("OMS"))
            .with_child(Element::new("OMI").with_text("1"))
            .with_child(Element::new("OMI").with_text("2"));

        match Construct::classify(&app).unwrap() {
            Construct::Application {
                operator,
                arguments,
            } => {
                assert_eq!(operator.tag, "OMS");
                assert_eq!(arguments.len(), 2);
            }
            other => panic!("expected an application, got {other:?}"),
        }

        let empty = Element::new("OMA");
        assert!(matches!(
            Construct::classify(&empty),
            Err(Error::StructuralViolation(_))
        ));
    }

    #[test]
    fn test_unrecognized_construct() {
        let err = Construct::classify(&Element::new("OMBIND")).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedConstruct(ref tag) if tag == "OMBIND"));
        assert_eq!(err.to_string(), "Unrecognized construct: OMBIND");
    }

    #[test]
    fn test_malformed_attributes() {
        let missing = Element::new("OMS").with_attribute("name", "plus");
        assert!(matches!(
            Construct::classify(&missing),
            Err(Error::MissingAttribute {
                tag: "OMS",
                attribute: "cd"
            })
        ));

        let not_a_number = Element::new("OMI").with_text("two");
        assert!(matches!(
            Construct::classify(&not_a_number),
            Err(Error::MalformedInteger { .. })
        ));

        let no_text = Element::new("OMI");
        assert!(matches!(
            Construct::classify(&no_text),
            Err(Error::MalformedInteger { .. })
        ));

        let bad_dec = Element::new("OMF").with_attribute("dec", "1,5");
        assert!(matches!(
            Construct::classify(&bad_dec),
            Err(Error::MalformedDecimal { .. })
        ));

        assert!(matches!(
            Construct::classify(&Element::new("OMF")),
            Err(Error::MissingAttribute {
                attribute: "dec",
                ..
            })
        ));
    }
}
