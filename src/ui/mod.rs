pub mod motion;
pub mod pages;
pub mod site;
pub mod staggered_list;

pub use motion::{Motion, MotionStyles};
pub use site::{provide_site_content, use_site_content};
pub use staggered_list::StaggeredList;
