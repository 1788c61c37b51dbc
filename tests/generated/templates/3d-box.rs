// This file is auto generated. Do not edit.
use iconforge::Props;

/// Renders the `3d-box` icon.
#[allow(non_snake_case)]
pub fn Icon3dBox(props: &Props) -> String {
    props.wrap(r#"<path d="M21 8v8l-9 5-9-5V8l9-5z" />"#)
}
