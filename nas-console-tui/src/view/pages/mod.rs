//! 页面渲染

pub mod entity;
pub mod home;
