// This file is auto generated. Do not edit.

#[path = "../templates/3d-box.rs"]
mod icon_3d_box;
pub use icon_3d_box::Icon3dBox;

#[path = "../templates/chevron-right.rs"]
mod chevron_right;
pub use chevron_right::ChevronRight;

#[path = "../templates/self.rs"]
mod self_icon;
pub use self_icon::SelfIcon;

#[path = "../templates/type.rs"]
mod r#type;
pub use r#type::Type;
