pub mod use_draw_session;

pub use use_draw_session::*;
