mod make;

pub use make::cmd_make;
