// This file is auto generated. Do not edit.
#![allow(non_upper_case_globals)]

use crate::Icon;

/// Version of the icon set these definitions were generated from.
pub const ICON_SET_VERSION: &str = "0.462.0";

pub const ArrowRight: Icon = Icon::new("arrow-right");
pub const Check: Icon = Icon::new("check");
pub const ChevronLeft: Icon = Icon::new("chevron-left");
pub const ChevronRight: Icon = Icon::new("chevron-right");
pub const Circle: Icon = Icon::new("circle");
pub const House: Icon = Icon::new("house");
pub const Menu: Icon = Icon::new("menu");
pub const Minus: Icon = Icon::new("minus");
pub const Plus: Icon = Icon::new("plus");
pub const Search: Icon = Icon::new("search");
pub const Type: Icon = Icon::new("type");
pub const X: Icon = Icon::new("x");

/// Every icon in this set, in lookup-name order.
pub const ALL: &[Icon] = &[
    ArrowRight,
    Check,
    ChevronLeft,
    ChevronRight,
    Circle,
    House,
    Menu,
    Minus,
    Plus,
    Search,
    Type,
    X,
];
