use std::fs;
use std::path::Path;

/// Wraps `body` the way upstream icon files are laid out.
pub fn lucide_svg(body: &str) -> String {
    format!(
        "<svg\n  xmlns=\"http://www.w3.org/2000/svg\"\n  width=\"24\"\n  height=\"24\"\n  viewBox=\"0 0 24 24\"\n  fill=\"none\"\n  stroke=\"currentColor\"\n  stroke-width=\"2\"\n  stroke-linecap=\"round\"\n  stroke-linejoin=\"round\"\n>\n  {}\n</svg>\n",
        body
    )
}

/// Writes a small icon directory plus a stray non-icon file.
pub fn write_icon_dir(dir: &Path) {
    fs::write(dir.join("chevron-right.svg"), lucide_svg(r#"<path d="m9 18 6-6-6-6" />"#)).unwrap();
    fs::write(dir.join("circle.svg"), lucide_svg(r#"<circle cx="12" cy="12" r="10" />"#)).unwrap();
    fs::write(dir.join("arrow-up-right.svg"), lucide_svg(r#"<path d="M7 7h10v10" />"#)).unwrap();
    fs::write(dir.join("LICENSE"), "ISC").unwrap();
}
