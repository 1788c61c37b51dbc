// This file is auto generated. Do not edit.
#![allow(non_upper_case_globals)]

use iconforge::Icon;

pub const Icon3dBox: Icon = Icon::new("3d-box");
pub const ChevronRight: Icon = Icon::new("chevron-right");
pub const SelfIcon: Icon = Icon::new("self");
pub const Type: Icon = Icon::new("type");

/// Every icon in this set, in lookup-name order.
pub const ALL: &[Icon] = &[
    Icon3dBox,
    ChevronRight,
    SelfIcon,
    Type,
];
