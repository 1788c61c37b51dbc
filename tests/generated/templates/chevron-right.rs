// This file is auto generated. Do not edit.
use iconforge::Props;

/// Renders the `chevron-right` icon.
#[allow(non_snake_case)]
pub fn ChevronRight(props: &Props) -> String {
    props.wrap(r#"<path d="m9 18 6-6-6-6" />"#)
}
