mod health_check;
mod home;
mod not_found;

pub use health_check::health_check;
pub use home::{home, home_context, render_home, HomeContext, HOME_TEMPLATE};
pub use not_found::not_found;
