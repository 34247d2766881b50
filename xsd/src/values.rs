use crate::{error::XsdError, xstypes::QName};
use roxmltree::Node;

pub trait ActualValue<'a>: Sized {
    fn convert(src: &'a str) -> Result<Self, XsdError>;
}

impl<'a> ActualValue<'a> for &'a str {
    fn convert(src: &'a str) -> Result<Self, XsdError> {
        Ok(src)
    }
}

impl ActualValue<'_> for String {
    fn convert(src: &'_ str) -> Result<Self, XsdError> {
        Ok(src.to_string())
    }
}

impl ActualValue<'_> for QName {
    fn convert(src: &'_ str) -> Result<Self, XsdError> {
        Ok(QName::parse(src.trim()))
    }
}

impl ActualValue<'_> for bool {
    fn convert(src: &str) -> Result<Self, XsdError> {
        match src.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(XsdError::InvalidBoolean(src.to_string())),
        }
    }
}

pub fn actual_value<'a, T: ActualValue<'a>>(x: &'a str) -> Result<T, XsdError> {
    T::convert(x)
}

/// The actual value of an optional attribute.
pub fn optional_attribute<'a, T: ActualValue<'a>>(
    node: Node<'a, '_>,
    attribute: &str,
) -> Result<Option<T>, XsdError> {
    node.attribute(attribute).map(actual_value::<T>).transpose()
}

/// The actual value of an attribute the element cannot do without.
pub fn required_attribute<'a, T: ActualValue<'a>>(
    node: Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<T, XsdError> {
    optional_attribute(node, attribute)?
        .ok_or(XsdError::MissingAttribute { element, attribute })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_follow_xsd_lexical_space() {
        assert!(actual_value::<bool>("true").unwrap());
        assert!(actual_value::<bool>("1").unwrap());
        assert!(!actual_value::<bool>("false").unwrap());
        assert!(!actual_value::<bool>("0").unwrap());
        assert!(matches!(
            actual_value::<bool>("yes"),
            Err(XsdError::InvalidBoolean(v)) if v == "yes"
        ));
    }

    #[test]
    fn missing_required_attribute_is_reported() {
        let doc = roxmltree::Document::parse(r#"<complexType abstract="true"/>"#).unwrap();
        let node = doc.root_element();
        let err = required_attribute::<String>(node, "complexType", "name").unwrap_err();
        assert!(matches!(
            err,
            XsdError::MissingAttribute {
                element: "complexType",
                attribute: "name"
            }
        ));
        assert_eq!(optional_attribute::<bool>(node, "abstract").unwrap(), Some(true));
    }
}
