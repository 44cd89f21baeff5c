pub mod lucky_wheel;
