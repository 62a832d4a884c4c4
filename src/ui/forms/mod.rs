//! Form rendering module
//!
//! - `field_renderer`: text, checkbox, radio and error-line widgets
//! - `signup_form`: the sign-up form layout

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
