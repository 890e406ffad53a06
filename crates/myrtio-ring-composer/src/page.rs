/// Control page served on every route, independent of the light state
pub const CONTROL_PAGE_HTML: &str = include_str!("../assets/control_page.html");
