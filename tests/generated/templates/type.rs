// This file is auto generated. Do not edit.
use iconforge::Props;

/// Renders the `type` icon.
#[allow(non_snake_case)]
pub fn Type(props: &Props) -> String {
    props.wrap(r#"<polyline points="4 7 4 4 20 4 20 7" />"#)
}
