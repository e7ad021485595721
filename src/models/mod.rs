pub mod presence;
pub mod view;
