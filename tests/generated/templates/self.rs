// This file is auto generated. Do not edit.
use iconforge::Props;

/// Renders the `self` icon.
#[allow(non_snake_case)]
pub fn SelfIcon(props: &Props) -> String {
    props.wrap(r#"<circle cx="12" cy="8" r="5" />"#)
}
