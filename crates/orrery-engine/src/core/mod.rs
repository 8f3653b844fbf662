pub mod frame;
pub mod kinematics;
pub mod time;
